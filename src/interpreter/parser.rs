/// The Pratt engine.
///
/// Contains the `Parser` itself: token lookahead, the precedence-climbing
/// loop, and the expression and block entry points.
pub mod core;

/// Precedence levels and associativity.
///
/// Defines the ordered scale the engine compares against and the
/// associativity of binary operators.
pub mod precedence;

/// The parselet contracts.
///
/// Declares the prefix and infix/postfix parselet traits every parsing
/// behavior implements.
pub mod parselet;

/// The parselet registry.
///
/// Maps token kinds to parselets. Built once, immutable afterwards, and
/// shareable between parsers.
pub mod registry;

/// Prefix parselets.
///
/// Names, number literals, grouping and the unary operators `+ - ~ !`.
pub mod unary;

/// Infix and postfix parselets.
///
/// Binary operators, assignment, the conditional operator, calls and postfix
/// factorial.
pub mod binary;

/// Block parsing.
///
/// Parses a sequence of expressions separated by optional semicolons.
pub mod block;

/// Utility functions for the parser.
///
/// Token-to-operator mappings and comma-separated list parsing.
pub mod utils;
