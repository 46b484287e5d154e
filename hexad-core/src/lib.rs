//! Hexad Core - Fundamental types
//!
//! This crate provides the core types used throughout Hexad:
//! - `Number`: Arbitrary precision decimal numbers
//! - `HexadError`: Structured errors with machine-readable codes
//! - `Timestamp`: UTC timestamps for report generation

mod error;
mod number;
mod timestamp;

pub use error::{codes, ErrorContext, HexadError, Severity};
pub use number::{Number, NumberError, WORK_PRECISION};
pub use timestamp::{days_in_month, is_leap_year, Timestamp};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::codes;
    pub use crate::{HexadError, Number, Severity, Timestamp};
}
