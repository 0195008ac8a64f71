/// Core evaluation logic and configuration.
///
/// Contains the `Evaluator` visitor, its operand stack and environment, and
/// the soft-recovery policy for evaluation problems.
pub mod core;

/// Runtime symbols.
///
/// The tagged values living on the operand stack and in the environment.
pub mod symbol;

/// Prefix and postfix operator evaluation.
///
/// Implements identity, negation, bitwise complement, logical NOT and
/// factorial.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements `+ - * / ^` with IEEE floating-point semantics.
pub mod binary;

/// Built-in functions.
///
/// The table of native functions every evaluator starts with.
pub mod function;

/// Utility functions for evaluation.
pub mod utils;
