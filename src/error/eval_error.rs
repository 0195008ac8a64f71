use thiserror::Error;

/// Result type used inside the evaluator.
pub type EvalResult<T> = Result<T, EvalError>;

/// Represents the problems the evaluator can run into.
///
/// By default these are warnings: the evaluator substitutes a default value,
/// logs the problem and keeps going. A strict evaluator reports the first one
/// as the outcome of the evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A value was popped from an empty operand stack.
    #[error("Stack underflow.")]
    StackUnderflow,
    /// A name was used without being bound.
    #[error("Undefined name '{name}'.")]
    UndefinedName {
        /// The unbound name.
        name: String,
    },
    /// A number was expected, something else was found.
    #[error("Expected a number but found {found}.")]
    ExpectedNumber {
        /// Description of the symbol found.
        found: String,
    },
    /// A function was expected, something else was found.
    #[error("Expected a function but found {found}.")]
    ExpectedFunction {
        /// Description of the symbol found.
        found: String,
    },
    /// A function was called with the wrong number of arguments.
    #[error("Function '{name}' expects {expected} arguments but received {found}.")]
    ArgumentCountMismatch {
        /// The function name.
        name:     String,
        /// The declared arity.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// A factorial exceeded the `f64` range.
    #[error("Factorial of {operand} overflows.")]
    Overflow {
        /// The factorial operand.
        operand: u64,
    },
}
