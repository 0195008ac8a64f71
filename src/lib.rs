//! # bantam
//!
//! bantam is a Pratt-parsing expression interpreter written in Rust.
//! It tokenizes, parses, prints, and evaluates arithmetic-like expressions
//! with names, assignment, conditionals, calls, and prefix/postfix/infix
//! operators. Parsing is driven by a table of parselets keyed by token kind
//! instead of one function per grammar rule.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::{BlockVisitor, Visitable},
    error::{EvalError, ParseError},
    interpreter::{
        evaluator::core::{EvalConfig, Evaluator},
        lexer::Tokenizer,
        parser::core::Parser,
    },
    printer::{pretty::Printer, sexpr::SExprPrinter, tree::TreePrinter},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum, the top-level `Block`, the typed
/// operators, and the visitor traits every consumer of the tree implements.
/// The AST is built by the parser and never mutated afterwards.
///
/// # Responsibilities
/// - Defines one variant per expression form.
/// - Dispatches each node to the matching visitor method.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Carries the offending token text or symbol for user feedback.
pub mod error;
/// Orchestrates tokenizing, parsing and evaluation.
///
/// # Responsibilities
/// - Converts source text into tokens.
/// - Builds the AST through the parselet registry.
/// - Evaluates the AST on an operand stack.
pub mod interpreter;
/// Text renderings of the AST.
///
/// Each printer is an independent visitor: a fully parenthesized
/// re-rendering, an S-expression form, and an indented tree.
pub mod printer;
/// General utilities for numeric conversion.
pub mod util;

/// Creates a lenient tokenizer over a complete in-memory input.
///
/// # Example
/// ```
/// use bantam::{interpreter::lexer::TokenKind, tokenize};
///
/// let kinds: Vec<TokenKind> = tokenize("a + 1").map(|token| token.kind).collect();
/// assert_eq!(kinds, [TokenKind::Name, TokenKind::Plus, TokenKind::Number]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Tokenizer<'_> {
    Tokenizer::new(source)
}

/// Parses exactly one expression, requiring the input to end after it.
///
/// # Example
/// ```
/// let expr = bantam::parse(bantam::tokenize("a + b * c")).unwrap();
/// assert_eq!(bantam::print(&expr), "(a + (b * c))");
///
/// assert!(bantam::parse(bantam::tokenize("a +")).is_err());
/// ```
pub fn parse(tokens: Tokenizer<'_>) -> Result<ast::Expr, ParseError> {
    Parser::new(tokens).parse()
}

/// Parses zero or more expressions separated by optional `;` until the end
/// of input.
///
/// # Example
/// ```
/// let block = bantam::parse_block(bantam::tokenize("a; b c;")).unwrap();
/// assert_eq!(block.expressions.len(), 3);
/// assert_eq!(bantam::print(&block), "a; b; c");
/// ```
pub fn parse_block(tokens: Tokenizer<'_>) -> Result<ast::Block, ParseError> {
    Parser::new(tokens).parse_block()
}

/// Applies a visitor to an expression or a block.
///
/// The output, if any, is accumulated inside the visitor.
pub fn visit<N, V>(node: &N, visitor: &mut V)
    where N: Visitable + ?Sized,
          V: BlockVisitor
{
    node.visit(visitor);
}

/// Renders a node fully parenthesized, e.g. `(a + (b * c))`.
#[must_use]
pub fn print<N: Visitable + ?Sized>(node: &N) -> String {
    let mut printer = Printer::new();
    node.visit(&mut printer);
    printer.finish()
}

/// Renders a node as an S-expression, e.g. `(+ (read a) (number 1))`.
#[must_use]
pub fn to_sexpr<N: Visitable + ?Sized>(node: &N) -> String {
    let mut printer = SExprPrinter::new();
    node.visit(&mut printer);
    printer.finish()
}

/// Renders a node as an indented tree, one line per node.
#[must_use]
pub fn to_tree<N: Visitable + ?Sized>(node: &N) -> String {
    let mut printer = TreePrinter::new();
    node.visit(&mut printer);
    printer.finish()
}

/// Evaluates a node with a fresh lenient evaluator and returns the top of its
/// stack.
///
/// Evaluation never fails: undefined names, type mismatches and stack
/// underflow are replaced by `0` and reported through `tracing`.
///
/// # Example
/// ```
/// let block = bantam::parse_block(bantam::tokenize("a = 3; a * a")).unwrap();
/// assert_eq!(bantam::evaluate(&block), 9.0);
/// ```
#[must_use]
pub fn evaluate<N: Visitable + ?Sized>(node: &N) -> f64 {
    let mut evaluator = Evaluator::new();
    node.visit(&mut evaluator);
    evaluator.answer()
}

/// Evaluates a node with the given configuration.
///
/// In strict mode the first evaluation warning is returned as an error.
///
/// # Example
/// ```
/// use bantam::{error::EvalError, interpreter::evaluator::core::EvalConfig};
///
/// let block = bantam::parse_block(bantam::tokenize("x + 1")).unwrap();
/// assert_eq!(bantam::evaluate_with(&block, EvalConfig::default()), Ok(1.0));
///
/// let strict = bantam::evaluate_with(&block, EvalConfig { strict: true });
/// assert_eq!(strict, Err(EvalError::UndefinedName { name: "x".to_string() }));
/// ```
pub fn evaluate_with<N: Visitable + ?Sized>(node: &N, config: EvalConfig) -> Result<f64, EvalError> {
    let mut evaluator = Evaluator::with_config(config);
    node.visit(&mut evaluator);
    evaluator.finish()
}
