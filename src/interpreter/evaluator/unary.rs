use crate::{
    ast::{PostfixOperator, PrefixOperator},
    error::EvalResult,
    interpreter::evaluator::{core::Evaluator, utils::factorial},
    util::num::{i64_to_f64, truncate_to_i64, truncate_to_u64},
};

impl Evaluator {
    /// Applies a prefix operator to a number.
    ///
    /// - `Plus`: identity.
    /// - `Minus`: negation.
    /// - `Tilde`: bitwise complement of the value truncated to an `i64`.
    /// - `Bang`: logical NOT; `1` if the value truncates to zero, else `0`.
    ///
    /// # Example
    /// ```
    /// use bantam::{ast::PrefixOperator, interpreter::evaluator::core::Evaluator};
    ///
    /// assert_eq!(Evaluator::eval_prefix(PrefixOperator::Minus, 3.0), -3.0);
    /// assert_eq!(Evaluator::eval_prefix(PrefixOperator::Tilde, 5.7), -6.0);
    /// assert_eq!(Evaluator::eval_prefix(PrefixOperator::Bang, 0.5), 1.0);
    /// assert_eq!(Evaluator::eval_prefix(PrefixOperator::Bang, 2.0), 0.0);
    /// ```
    #[must_use]
    pub fn eval_prefix(op: PrefixOperator, value: f64) -> f64 {
        match op {
            PrefixOperator::Plus => value,
            PrefixOperator::Minus => -value,
            PrefixOperator::Tilde => i64_to_f64(!truncate_to_i64(value)),
            PrefixOperator::Bang => {
                if truncate_to_i64(value) == 0 {
                    1.0
                } else {
                    0.0
                }
            },
        }
    }

    /// Applies a postfix operator to a number.
    ///
    /// `Bang` is the factorial of the value truncated to a `u64`; negative
    /// values truncate to zero.
    ///
    /// # Example
    /// ```
    /// use bantam::{ast::PostfixOperator, interpreter::evaluator::core::Evaluator};
    ///
    /// assert_eq!(Evaluator::eval_postfix(PostfixOperator::Bang, 4.0), Ok(24.0));
    /// assert_eq!(Evaluator::eval_postfix(PostfixOperator::Bang, 4.9), Ok(24.0));
    /// assert!(Evaluator::eval_postfix(PostfixOperator::Bang, 21.0).is_ok_and(f64::is_finite));
    /// assert!(Evaluator::eval_postfix(PostfixOperator::Bang, 171.0).is_err());
    /// ```
    ///
    /// # Errors
    /// [`EvalError::Overflow`](crate::error::EvalError::Overflow) if the
    /// factorial exceeds the `f64` range.
    pub fn eval_postfix(op: PostfixOperator, value: f64) -> EvalResult<f64> {
        match op {
            PostfixOperator::Bang => factorial(truncate_to_u64(value)),
        }
    }
}
