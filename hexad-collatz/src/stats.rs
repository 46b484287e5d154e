//! Aggregate helpers over Number slices

use hexad_core::{HexadError, Number};

/// Calculate sum of numbers
pub fn sum(numbers: &[Number]) -> Number {
    numbers
        .iter()
        .fold(Number::from_i64(0), |acc, n| acc.add(n))
}

/// Calculate mean of numbers
pub fn mean(numbers: &[Number]) -> Result<Number, HexadError> {
    if numbers.is_empty() {
        return Err(HexadError::domain_error("cannot average an empty list"));
    }
    let s = sum(numbers);
    let count = Number::from_i64(numbers.len() as i64);
    s.checked_div(&count).map_err(HexadError::from)
}

/// Smallest value in a non-empty slice
pub fn min(numbers: &[Number]) -> Result<Number, HexadError> {
    numbers
        .iter()
        .min()
        .cloned()
        .ok_or_else(|| HexadError::domain_error("cannot take min of an empty list"))
}

/// Largest value in a non-empty slice
pub fn max(numbers: &[Number]) -> Result<Number, HexadError> {
    numbers
        .iter()
        .max()
        .cloned()
        .ok_or_else(|| HexadError::domain_error("cannot take max of an empty list"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nums(values: &[i64]) -> Vec<Number> {
        values.iter().map(|&v| Number::from_i64(v)).collect()
    }

    #[test]
    fn test_sum() {
        assert_eq!(sum(&nums(&[1, 2, 3])).to_i64(), Some(6));
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&nums(&[2, 4, 6])).unwrap().to_i64(), Some(4));
    }

    #[test]
    fn test_mean_empty() {
        assert!(mean(&[]).is_err());
    }

    #[test]
    fn test_min_max() {
        let values = nums(&[3, 1, 2]);
        assert_eq!(min(&values).unwrap().to_i64(), Some(1));
        assert_eq!(max(&values).unwrap().to_i64(), Some(3));
    }
}
