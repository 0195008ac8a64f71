/// A native function: takes its arguments in order, returns a number.
pub type NativeFn = fn(&[f64]) -> f64;

/// A value on the operand stack or in the environment.
#[derive(Debug, Clone)]
pub enum Symbol {
    /// A number.
    Number(f64),
    /// A native function.
    Function {
        /// The name the function was bound under.
        name:  String,
        /// The number of arguments it expects.
        arity: usize,
        /// The implementation.
        func:  NativeFn,
    },
    /// A name that was looked up without being bound.
    ///
    /// Pushed instead of failing immediately, so the problem is reported
    /// where the value is consumed.
    Undefined(String),
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "number {value}"),
            Self::Function { name, .. } => write!(f, "function '{name}'"),
            Self::Undefined(name) => write!(f, "undefined name '{name}'"),
        }
    }
}
