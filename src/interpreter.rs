/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator is a visitor driving an explicit operand stack of symbols and
/// a flat environment of names. It never aborts: problems are recovered
/// locally and reported, unless strict evaluation is requested.
///
/// # Responsibilities
/// - Evaluates every expression form on the operand stack.
/// - Manages the name environment and built-in functions.
/// - Records evaluation warnings and reports them through `tracing`.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The tokenizer reads the raw source text and produces a lazy stream of
/// tokens: single-character punctuators, names and number literals.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Saturates at end of input.
/// - Skips, or in strict mode rejects, unrecognized characters.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// Parsing is a single precedence-climbing procedure consulting a registry
/// of parselets keyed by token kind.
///
/// # Responsibilities
/// - Drives the Pratt loop over the token stream.
/// - Holds the standard prefix and infix/postfix parselets.
/// - Reports the first syntax error and stops.
pub mod parser;
