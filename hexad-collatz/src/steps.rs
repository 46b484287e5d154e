//! Classical Collatz iteration and perfect-square enumeration

use hexad_core::HexadError;

/// Safety cap on Collatz iterations per input. No tested input comes
/// close; hitting the cap means the iteration itself is broken and the
/// whole batch must abort rather than skew the aggregates.
pub const DEFAULT_STEP_CAP: u64 = 100_000;

/// Count classical Collatz steps from n down to 1
/// (n → n/2 if even, n → 3n+1 if odd)
pub fn collatz_steps(n: u64, cap: u64) -> Result<u64, HexadError> {
    if n == 0 {
        return Err(HexadError::domain_error("Collatz sequence undefined for 0"));
    }

    let mut current = n;
    let mut steps: u64 = 0;

    while current != 1 {
        if steps >= cap {
            return Err(HexadError::step_cap(n, cap));
        }
        current = if current % 2 == 0 {
            current / 2
        } else {
            current
                .checked_mul(3)
                .and_then(|v| v.checked_add(1))
                .ok_or_else(|| {
                    HexadError::overflow(format!("3n+1 exceeded u64 while iterating {}", n))
                        .for_input(n.to_string())
                })?
        };
        steps += 1;
    }

    Ok(steps)
}

/// All perfect squares k² ≤ bound, ascending
pub fn perfect_squares(bound: u64) -> Vec<u64> {
    let mut squares = Vec::new();
    let mut k: u64 = 1;
    while let Some(square) = k.checked_mul(k) {
        if square > bound {
            break;
        }
        squares.push(square);
        k += 1;
    }
    squares
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_for_one_is_zero() {
        assert_eq!(collatz_steps(1, DEFAULT_STEP_CAP).unwrap(), 0);
    }

    #[test]
    fn test_known_step_counts() {
        // 2 → 1
        assert_eq!(collatz_steps(2, DEFAULT_STEP_CAP).unwrap(), 1);
        // 4 → 2 → 1
        assert_eq!(collatz_steps(4, DEFAULT_STEP_CAP).unwrap(), 2);
        // 16 → 8 → 4 → 2 → 1
        assert_eq!(collatz_steps(16, DEFAULT_STEP_CAP).unwrap(), 4);
        // 9 takes 19 steps, 25 takes 23
        assert_eq!(collatz_steps(9, DEFAULT_STEP_CAP).unwrap(), 19);
        assert_eq!(collatz_steps(25, DEFAULT_STEP_CAP).unwrap(), 23);
    }

    #[test]
    fn test_zero_rejected() {
        assert!(collatz_steps(0, DEFAULT_STEP_CAP).is_err());
    }

    #[test]
    fn test_cap_aborts() {
        // 27 famously takes 111 steps; a cap of 10 must trip
        let err = collatz_steps(27, 10).unwrap_err();
        assert_eq!(err.code, hexad_core::codes::STEP_CAP);
        let ctx = err.context.unwrap();
        assert_eq!(ctx.input, Some("27".to_string()));
    }

    #[test]
    fn test_perfect_squares_up_to_1000() {
        let squares = perfect_squares(1000);
        assert_eq!(squares.len(), 31);
        assert_eq!(squares.first(), Some(&1));
        assert_eq!(squares.last(), Some(&961));
    }

    #[test]
    fn test_perfect_squares_boundary() {
        // An exact square bound is included
        let squares = perfect_squares(1024);
        assert_eq!(squares.len(), 32);
        assert_eq!(squares.last(), Some(&1024));
    }

    #[test]
    fn test_perfect_squares_tiny_bound() {
        assert!(perfect_squares(0).is_empty());
        assert_eq!(perfect_squares(1), vec![1]);
    }
}
