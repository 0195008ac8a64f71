/// Lexing errors.
///
/// Only strict tokenizers raise these; the default tokenizer skips
/// characters it does not recognize.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the AST: unexpected
/// tokens, missing delimiters, malformed literals and illegal assignment
/// targets.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the problems the evaluator can run into: stack underflow, unbound
/// names, type mismatches and arity mismatches. They are recovered locally
/// unless strict evaluation is requested.
pub mod eval_error;

pub use eval_error::{EvalError, EvalResult};
pub use lex_error::LexError;
pub use parse_error::{ParseError, ParseResult};
