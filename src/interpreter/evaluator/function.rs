use crate::interpreter::evaluator::{core::Evaluator, symbol::NativeFn};

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the number of arguments it takes,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for seeding),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: usize,
            func:  NativeFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of the functions every evaluator starts with.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "pow" => { arity: 2, func: pow },
}

/// Raises the first argument to the power of the second.
///
/// Returns `0` unless called with exactly two arguments.
///
/// # Example
/// ```
/// use bantam::interpreter::evaluator::function::pow;
///
/// assert_eq!(pow(&[2.0, 3.0]), 8.0);
/// assert_eq!(pow(&[2.0]), 0.0);
/// ```
#[must_use]
pub fn pow(args: &[f64]) -> f64 {
    match args {
        [base, exponent] => base.powf(*exponent),
        _ => 0.0,
    }
}

impl Evaluator {
    /// Binds every builtin in the environment.
    pub(in crate::interpreter::evaluator) fn define_builtins(&mut self) {
        for builtin in BUILTIN_TABLE {
            self.define_function(builtin.name, builtin.arity, builtin.func);
        }
    }
}
