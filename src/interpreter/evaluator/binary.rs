use crate::{ast::BinaryOperator, interpreter::evaluator::core::Evaluator};

impl Evaluator {
    /// Applies a binary operator to two numbers.
    ///
    /// Standard IEEE semantics apply: division by zero yields an infinity or
    /// NaN, never an error.
    ///
    /// # Example
    /// ```
    /// use bantam::{ast::BinaryOperator, interpreter::evaluator::core::Evaluator};
    ///
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Sub, 7.0, 2.0), 5.0);
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Pow, 2.0, 10.0), 1024.0);
    /// assert!(Evaluator::eval_binary(BinaryOperator::Div, 1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
        match op {
            BinaryOperator::Add => left + right,
            BinaryOperator::Sub => left - right,
            BinaryOperator::Mul => left * right,
            BinaryOperator::Div => left / right,
            BinaryOperator::Pow => left.powf(right),
        }
    }
}
