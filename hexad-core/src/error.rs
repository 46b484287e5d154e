//! Structured errors for the hexad utilities
//!
//! Errors are values that propagate through computations and carry
//! machine-readable codes. The two fatal kinds the calculators can hit
//! are root-finding non-convergence and the Collatz safety cap; both
//! abort the run rather than degrade the result.

use crate::NumberError;
use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const DIV_ZERO: &str = "DIV_ZERO";
    pub const DOMAIN_ERROR: &str = "DOMAIN_ERROR";
    pub const OVERFLOW: &str = "OVERFLOW";
    pub const NO_CONVERGE: &str = "NO_CONVERGE";
    pub const STEP_CAP: &str = "STEP_CAP";
    pub const IO_ERROR: &str = "IO_ERROR";
    pub const INTERNAL: &str = "INTERNAL";
}

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Computation continued with degraded result
    Warning,
    /// Computation failed for this value
    Error,
    /// Run cannot produce a meaningful result
    Fatal,
}

/// Context about where an error occurred
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Constant symbol involved (e.g. "Ω")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constant: Option<String>,

    /// Input value the failure applies to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,

    /// Propagation notes
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub notes: Vec<String>,
}

/// Structured error with machine-readable code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HexadError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Where the error occurred
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ErrorContext>,

    /// Severity level
    pub severity: Severity,
}

impl HexadError {
    /// Create a new error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            context: None,
            severity: Severity::Error,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: set constant context
    pub fn for_constant(mut self, symbol: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.constant = Some(symbol.into());
        self
    }

    /// Builder: set input context
    pub fn for_input(mut self, input: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.input = Some(input.into());
        self
    }

    /// Builder: add propagation note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.notes.push(note.into());
        self
    }

    /// Builder: set severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    // ========== Common Error Constructors ==========

    pub fn parse_error(details: impl Into<String>) -> Self {
        Self::new(codes::PARSE_ERROR, format!("Parse error: {}", details.into()))
            .with_suggestion("Check the input format")
    }

    pub fn div_zero() -> Self {
        Self::new(codes::DIV_ZERO, "Division by zero")
            .with_suggestion("Ensure divisor is not zero")
    }

    pub fn domain_error(details: impl Into<String>) -> Self {
        Self::new(codes::DOMAIN_ERROR, format!("Domain error: {}", details.into()))
    }

    pub fn overflow(details: impl Into<String>) -> Self {
        Self::new(codes::OVERFLOW, format!("Numeric overflow: {}", details.into()))
    }

    /// Root finding failed to reach the requested tolerance
    pub fn no_convergence(symbol: &str, iterations: u32) -> Self {
        Self::new(
            codes::NO_CONVERGE,
            format!(
                "{} did not converge within {} iterations",
                symbol, iterations
            ),
        )
        .for_constant(symbol)
        .with_severity(Severity::Fatal)
    }

    /// Collatz iteration exceeded the safety cap for an input
    pub fn step_cap(input: u64, cap: u64) -> Self {
        Self::new(
            codes::STEP_CAP,
            format!("Collatz iteration for {} exceeded the {} step safety cap", input, cap),
        )
        .for_input(input.to_string())
        .with_suggestion("This indicates an implementation bug, please report it")
        .with_severity(Severity::Fatal)
    }

    pub fn io_error(details: impl Into<String>) -> Self {
        Self::new(codes::IO_ERROR, format!("I/O error: {}", details.into()))
            .with_severity(Severity::Fatal)
    }

    pub fn internal(details: impl Into<String>) -> Self {
        Self::new(codes::INTERNAL, format!("Internal error: {}", details.into()))
            .with_suggestion("This is a bug, please report it")
            .with_severity(Severity::Fatal)
    }
}

impl std::fmt::Display for HexadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for HexadError {}

impl From<NumberError> for HexadError {
    fn from(err: NumberError) -> Self {
        match err {
            NumberError::ParseError(s) => Self::parse_error(s),
            NumberError::DivisionByZero => Self::div_zero(),
            NumberError::DomainError(s) => Self::domain_error(s),
            NumberError::Overflow => Self::new(codes::OVERFLOW, "Numeric overflow"),
        }
    }
}

impl From<std::io::Error> for HexadError {
    fn from(err: std::io::Error) -> Self {
        Self::io_error(err.to_string())
    }
}
