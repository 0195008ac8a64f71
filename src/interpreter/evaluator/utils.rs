use crate::{
    error::{EvalError, EvalResult},
    util::num::u64_to_f64,
};

/// Computes `n!` iteratively in floating point.
///
/// Every factorial up to `170!` is finite; the loop stops as soon as the
/// product becomes infinite, so a huge `n` costs at most 170 steps.
///
/// # Example
/// ```
/// use bantam::{error::EvalError, interpreter::evaluator::utils::factorial};
///
/// assert_eq!(factorial(0), Ok(1.0));
/// assert_eq!(factorial(5), Ok(120.0));
/// assert_eq!(factorial(20), Ok(2_432_902_008_176_640_000.0));
/// assert!(factorial(170).is_ok_and(f64::is_finite));
/// assert_eq!(factorial(171), Err(EvalError::Overflow { operand: 171 }));
/// assert_eq!(factorial(u64::MAX), Err(EvalError::Overflow { operand: u64::MAX }));
/// ```
///
/// # Errors
/// [`EvalError::Overflow`] once the product exceeds the `f64` range, which
/// happens for every `n > 170`.
pub fn factorial(n: u64) -> EvalResult<f64> {
    let mut result = 1.0;
    for i in 2..=n {
        result *= u64_to_f64(i);
        if result.is_infinite() {
            return Err(EvalError::Overflow { operand: n });
        }
    }
    Ok(result)
}
