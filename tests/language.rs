use std::{fs, sync::Arc, thread};

use bantam::{
    ast::Expr,
    error::{EvalError, LexError, ParseError, ParseResult},
    evaluate, evaluate_with,
    interpreter::{
        evaluator::{
            core::{EvalConfig, Evaluator},
            function::BUILTIN_FUNCTIONS,
        },
        lexer::{Token, TokenKind, Tokenizer},
        parser::{
            core::{MAX_NESTING, Parser},
            parselet::InfixParselet,
            precedence::Precedence,
            registry::ParseletRegistry,
        },
    },
    parse, parse_block, print, to_sexpr, to_tree, tokenize,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, example) in extract_examples(&content).into_iter().enumerate() {
            count += 1;
            let block = parse_block(tokenize(&example.code)).unwrap_or_else(|e| {
                            panic!("Example {} in {:?} failed to parse:\n{}\nError: {e}",
                                   i + 1,
                                   path,
                                   example.code)
                        });
            if let Some(parsed) = example.parsed {
                assert_eq!(print(&block), parsed, "Example {} in {:?}", i + 1, path);
            }
            if let Some(output) = example.output {
                assert_eq!(evaluate(&block).to_string(),
                           output,
                           "Example {} in {:?}",
                           i + 1,
                           path);
            }
        }
    }

    assert!(count > 0, "No bantam examples found in book/src");
}

#[derive(Default)]
struct BookExample {
    code:   String,
    parsed: Option<String>,
    output: Option<String>,
}

/// Collects every ```` ```bantam ```` block, attaching the ```` ```parsed ````
/// and ```` ```output ```` blocks that follow it.
fn extract_examples(content: &str) -> Vec<BookExample> {
    let mut examples: Vec<BookExample> = Vec::new();
    let mut inside: Option<String> = None;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        let Some(tag) = &inside else {
            if let Some(tag) = trimmed.strip_prefix("```")
               && !tag.is_empty()
            {
                inside = Some(tag.trim().to_string());
                buf.clear();
            }
            continue;
        };
        if trimmed.starts_with("```") {
            let text = buf.trim_end().to_string();
            if tag == "bantam" {
                examples.push(BookExample { code: text,
                                            ..BookExample::default() });
            } else if let Some(last) = examples.last_mut() {
                match tag.as_str() {
                    "parsed" => last.parsed = Some(text),
                    "output" => last.output = Some(text),
                    _ => {},
                }
            }
            inside = None;
            continue;
        }
        buf.push_str(line);
        buf.push('\n');
    }

    examples
}

fn assert_prints(src: &str, expected: &str) {
    match parse_block(tokenize(src)) {
        Ok(block) => assert_eq!(print(&block), expected, "printing {src:?}"),
        Err(e) => panic!("Parsing {src:?} failed: {e}"),
    }
}

fn assert_parse_error(src: &str) -> ParseError {
    match parse(tokenize(src)) {
        Ok(expr) => panic!("Parsing {src:?} succeeded with {} but was expected to fail",
                           print(&expr)),
        Err(e) => e,
    }
}

fn eval(src: &str) -> f64 {
    let block = parse_block(tokenize(src)).unwrap_or_else(|e| panic!("Parsing {src:?} failed: {e}"));
    evaluate(&block)
}

fn eval_strict(src: &str) -> Result<f64, EvalError> {
    let block = parse_block(tokenize(src)).unwrap_or_else(|e| panic!("Parsing {src:?} failed: {e}"));
    evaluate_with(&block, EvalConfig { strict: true })
}

#[test]
fn function_calls() {
    assert_prints("a()", "a()");
    assert_prints("a(b)", "a(b)");
    assert_prints("a(b, c)", "a(b, c)");
    assert_prints("a(b)(c)", "a(b)(c)");
    assert_prints("a(b) + c(d)", "(a(b) + c(d))");
    assert_prints("a(b ? c : d, e + f)", "a((b ? c : d), (e + f))");
}

#[test]
fn unary_precedence() {
    assert_prints("~!-+a", "(~(!(-(+a))))");
    assert_prints("a!!!", "(((a!)!)!)");
}

#[test]
fn unary_and_binary_precedence() {
    assert_prints("-a * b", "((-a) * b)");
    assert_prints("!a + b", "((!a) + b)");
    assert_prints("~a ^ b", "((~a) ^ b)");
    assert_prints("-a!", "(-(a!))");
    assert_prints("!a!", "(!(a!))");
}

#[test]
fn binary_precedence() {
    assert_prints("a = b + c * d ^ e - f / g", "(a = ((b + (c * (d ^ e))) - (f / g)))");
}

#[test]
fn binary_associativity() {
    assert_prints("a = b = c", "(a = (b = c))");
    assert_prints("a + b - c", "((a + b) - c)");
    assert_prints("a * b / c", "((a * b) / c)");
    assert_prints("a ^ b ^ c", "(a ^ (b ^ c))");
}

#[test]
fn conditional_operator() {
    assert_prints("a ? b : c ? d : e", "(a ? b : (c ? d : e))");
    assert_prints("a ? b ? c : d : e", "(a ? (b ? c : d) : e)");
    assert_prints("a + b ? c * d : e / f", "((a + b) ? (c * d) : (e / f))");
}

#[test]
fn grouping() {
    assert_prints("a + (b + c) + d", "((a + (b + c)) + d)");
    assert_prints("a ^ (b + c)", "(a ^ (b + c))");
    assert_prints("(!a)!", "((!a)!)");
}

#[test]
fn blocks_with_optional_semicolons() {
    assert_prints("a b c", "a; b; c");
    assert_prints("a; b c;", "a; b; c");
    assert_prints("", "");
    assert_prints(" \n\t", "");
}

#[test]
fn printing_is_a_fixed_point() {
    for src in ["a = b + c * d ^ e - f / g",
                "a(b ? c : d, e + f)",
                "~!-+a!!",
                "a ? b ? c : d : e",
                "x = 1.5 * (y - 2)"]
    {
        let once = print(&parse(tokenize(src)).unwrap());
        let twice = print(&parse(tokenize(&once)).unwrap());
        assert_eq!(once, twice, "re-parsing the rendering of {src:?}");
    }
}

#[test]
fn numbers_and_names() {
    assert_eq!(parse(tokenize("2.5")).unwrap(), Expr::number(2.5));
    assert_eq!(parse(tokenize("x")).unwrap(), Expr::name("x"));
    assert_prints("12", "12");
    assert_prints("0.5 + x_1", "(0.5 + x_1)");
    assert_prints("_tmp", "_tmp");
}

#[test]
fn incomplete_input_is_error() {
    assert_eq!(assert_parse_error("a +"), ParseError::UnexpectedEndOfInput);
    assert_eq!(assert_parse_error(""), ParseError::UnexpectedEndOfInput);
    assert_eq!(assert_parse_error("(a"),
               ParseError::ExpectedToken { expected: TokenKind::RightParen,
                                           found:    "end of input".to_string(), });
    assert_eq!(assert_parse_error("a ? b"),
               ParseError::ExpectedToken { expected: TokenKind::Colon,
                                           found:    "end of input".to_string(), });
    assert_eq!(assert_parse_error("f(a, b"),
               ParseError::ExpectedToken { expected: TokenKind::RightParen,
                                           found:    "end of input".to_string(), });
}

#[test]
fn unexpected_tokens_are_errors() {
    assert_eq!(assert_parse_error(")"), ParseError::UnexpectedToken { token: ")".to_string() });
    assert_eq!(assert_parse_error("a b"), ParseError::UnexpectedToken { token: "b".to_string() });
    assert_eq!(assert_parse_error("* a"), ParseError::UnexpectedToken { token: "*".to_string() });
    assert!(parse_block(tokenize("a; )")).is_err());
}

#[test]
fn invalid_number_is_error() {
    assert_eq!(assert_parse_error("1.2.3"),
               ParseError::InvalidNumber { text: "1.2.3".to_string() });
}

#[test]
fn assignment_target_must_be_a_name() {
    assert_eq!(print(&parse(tokenize("(a) = b")).unwrap()), "(a = b)");
    assert_eq!(assert_parse_error("a + b = c"), ParseError::InvalidAssignmentTarget);
    assert_eq!(assert_parse_error("f(x) = 1"), ParseError::InvalidAssignmentTarget);
}

#[test]
fn tokenizer_saturates_at_end_of_input() {
    let mut tokens = tokenize("a");
    assert!(tokens.has_next());
    assert_eq!(tokens.next_token(), Token::new(TokenKind::Name, "a"));
    assert!(!tokens.has_next());
    assert_eq!(tokens.next_token(), Token::eof());
    assert_eq!(tokens.next_token(), Token::eof());
}

#[test]
fn punctuators_carry_their_character() {
    let kinds: Vec<TokenKind> = tokenize("()=+-*/^~!?:;,").map(|token| token.kind).collect();
    let text: String = kinds.iter().filter_map(|kind| kind.as_char()).collect();
    assert_eq!(text, "()=+-*/^~!?:;,");
    assert_eq!(TokenKind::Name.as_char(), None);
    assert_eq!(TokenKind::Eof.as_char(), None);
}

#[test]
fn unknown_characters_are_skipped_unless_strict() {
    assert_prints("a $ b", "a; b");

    let error = Parser::new(Tokenizer::strict("a $ b")).parse_block().unwrap_err();
    assert_eq!(error, ParseError::Lex(LexError::UnexpectedCharacter { ch: '$', offset: 2 }));
}

#[test]
fn strict_iteration_stops_at_rejected_character() {
    let lenient: Vec<String> = tokenize("a $ b").map(|token| token.text).collect();
    assert_eq!(lenient, ["a", "b"]);

    let strict: Vec<String> = Tokenizer::strict("a $ b").map(|token| token.text).collect();
    assert_eq!(strict, ["a"]);
}

#[test]
fn moderate_nesting_parses_and_evaluates() {
    let parens = format!("{}a{}", "(".repeat(200), ")".repeat(200));
    assert_eq!(print(&parse(tokenize(&parens)).unwrap()), "a");

    let sums = format!("{}1{}", "(1 + ".repeat(100), ")".repeat(100));
    assert_eq!(eval(&sums), 101.0);

    let chain = vec!["1"; 500].join(" + ");
    assert_eq!(eval(&chain), 500.0);
    assert_eq!(eval(&format!("{}3", "-".repeat(200))), 3.0);
}

#[test]
fn deep_nesting_is_error() {
    let too_deep = ParseError::TooDeeplyNested { limit: MAX_NESTING };
    let n = 100_000;

    let parens = format!("{}a{}", "(".repeat(n), ")".repeat(n));
    assert_eq!(assert_parse_error(&parens), too_deep);
    assert_eq!(parse_block(tokenize(&parens)), Err(too_deep.clone()));

    assert_eq!(assert_parse_error(&format!("{}a", "-".repeat(n))), too_deep);
    assert_eq!(assert_parse_error(&format!("a{}", "!".repeat(n))), too_deep);
    assert_eq!(assert_parse_error(&vec!["a"; n].join(" + ")), too_deep);
    assert_eq!(assert_parse_error(&format!("f{}", "()".repeat(n))), too_deep);
    assert_eq!(assert_parse_error(&format!("{}a", "a = ".repeat(n))), too_deep);

    // The budget is per expression.
    let many = vec!["(((a)))"; n].join("; ");
    assert_eq!(parse_block(tokenize(&many)).map(|block| block.expressions.len()), Ok(n));
}

#[test]
fn evaluates_the_constants_example() {
    let answer = eval("PI=3.14159265358979323846;\nE=2.71828182845904523536;\npow(PI,2) + pow(E,2)");
    assert!((answer - 17.2587).abs() < 1e-4, "got {answer}");
}

#[test]
fn arithmetic() {
    assert_eq!(eval("1 + 2 * 3"), 7.0);
    assert_eq!(eval("(1 + 2) * 3"), 9.0);
    assert_eq!(eval("7 - 2 - 1"), 4.0);
    assert_eq!(eval("2 ^ 3 ^ 2"), 512.0);
    assert_eq!(eval("-2 ^ 2"), 4.0);
    assert_eq!(eval("1 / 0"), f64::INFINITY);
    assert!(eval("0 / 0").is_nan());
}

#[test]
fn prefix_operators() {
    assert_eq!(eval("+3"), 3.0);
    assert_eq!(eval("-3"), -3.0);
    assert_eq!(eval("~5"), -6.0);
    assert_eq!(eval("~5.9"), -6.0);
    assert_eq!(eval("!0"), 1.0);
    assert_eq!(eval("!0.4"), 1.0);
    assert_eq!(eval("!7"), 0.0);
}

#[test]
fn factorial() {
    assert_eq!(eval("4!"), 24.0);
    assert_eq!(eval("0!"), 1.0);
    assert_eq!(eval("3!!"), 720.0);
    assert_eq!(eval("-3!"), -6.0);
    assert_eq!(eval("(-3)!"), 1.0);
}

#[test]
fn factorial_beyond_u64_is_finite() {
    let answer = eval_strict("21!").unwrap();
    assert!((answer / 51_090_942_171_709_440_000.0 - 1.0).abs() < 1e-12, "got {answer}");
    assert!(eval("170!").is_finite());
    assert_eq!(eval_strict("20!"), Ok(2_432_902_008_176_640_000.0));
}

#[test]
fn factorial_overflow_is_infinite() {
    assert_eq!(eval("171!"), f64::INFINITY);
    assert_eq!(eval_strict("171!"), Err(EvalError::Overflow { operand: 171 }));
    assert_eq!(eval("100000000000000000000!"), f64::INFINITY);
}

#[test]
fn assignment_and_blocks() {
    assert_eq!(eval("a = 3; a * a"), 9.0);
    assert_eq!(eval("a = 4; b = a + 1; a * b"), 20.0);
    assert_eq!(eval("x = 2 x = x * 5 x"), 10.0);
}

#[test]
fn assignment_has_no_value() {
    let mut evaluator = Evaluator::new();
    parse_block(tokenize("a = 1")).unwrap().accept(&mut evaluator);
    assert_eq!(evaluator.depth(), 0);
    assert_eq!(evaluator.answer(), 0.0);
    assert_eq!(evaluator.warnings(), [EvalError::StackUnderflow]);

    assert_eq!(eval_strict("a = 1"), Err(EvalError::StackUnderflow));
}

#[test]
fn left_operand_is_evaluated_first() {
    // The left side rebinds `x` before the right side reads it.
    assert_eq!(eval("x = 1; (x = 10) + x"), 10.0);
}

#[test]
fn conditionals() {
    assert_eq!(eval("1 ? 2 : 3"), 2.0);
    assert_eq!(eval("0 ? 2 : 3"), 3.0);
    assert_eq!(eval("0.5 ? 2 : 3"), 3.0);
    assert_eq!(eval("-1 ? 2 : 3"), 2.0);
    assert_eq!(eval("n = 5; n - 5 ? 1 : 0 ? 2 : 3"), 3.0);
}

#[test]
fn only_the_taken_branch_is_evaluated() {
    assert_eq!(eval("x = 1; 1 ? 2 : (x = 9); x"), 1.0);
    assert_eq!(eval_strict("1 ? 2 : undefined"), Ok(2.0));
}

#[test]
fn builtin_pow() {
    assert_eq!(BUILTIN_FUNCTIONS, ["pow"]);
    assert_eq!(eval("pow(2, 10)"), 1024.0);
    assert_eq!(eval("pow(9, 2)"), 81.0);
}

#[test]
fn call_problems_are_recovered() {
    assert_eq!(eval("pow(2)"), 0.0);
    assert_eq!(eval_strict("pow(2)"),
               Err(EvalError::ArgumentCountMismatch { name:     "pow".to_string(),
                                                      expected: 2,
                                                      found:    1, }));

    assert_eq!(eval("nope(1)"), 0.0);
    assert_eq!(eval_strict("nope(1)"),
               Err(EvalError::UndefinedName { name: "nope".to_string() }));

    assert_eq!(eval("x = 3; x(1)"), 0.0);
    assert_eq!(eval_strict("x = 3; x(1)"),
               Err(EvalError::ExpectedFunction { found: "number 3".to_string() }));
}

#[test]
fn undefined_names_are_zero_unless_strict() {
    assert_eq!(eval("x + 1"), 1.0);
    assert_eq!(eval_strict("x + 1"), Err(EvalError::UndefinedName { name: "x".to_string() }));
    assert_eq!(eval_strict("pow + 1"),
               Err(EvalError::ExpectedNumber { found: "function 'pow'".to_string() }));
}

#[test]
fn lenient_evaluation_records_warnings() {
    let mut evaluator = Evaluator::new();
    parse_block(tokenize("x + y")).unwrap().accept(&mut evaluator);
    assert_eq!(evaluator.answer(), 0.0);
    assert_eq!(evaluator.warnings(),
               [EvalError::UndefinedName { name: "x".to_string() },
                EvalError::UndefinedName { name: "y".to_string() }]);
}

#[test]
fn empty_block_evaluates_to_zero() {
    assert_eq!(eval(""), 0.0);
    assert_eq!(eval_strict(""), Err(EvalError::StackUnderflow));
}

#[test]
fn predefined_names() {
    let mut evaluator = Evaluator::new();
    evaluator.define_number("r", 2.0);
    evaluator.define_function("twice", 1, |args| args[0] * 2.0);
    assert!(evaluator.lookup("pow").is_some());
    assert!(evaluator.lookup("nope").is_none());
    parse(tokenize("twice(r) + r")).unwrap().accept(&mut evaluator);
    assert_eq!(evaluator.finish(), Ok(6.0));
}

/// Desugars `a ~ b` into `approx(a, b)`.
struct ApproxParselet;

impl InfixParselet for ApproxParselet {
    fn parse(&self, parser: &mut Parser<'_>, left: Expr, _token: Token) -> ParseResult<Expr> {
        let right = parser.parse_expression(Precedence::Sum.level())?;
        Ok(Expr::Call { callee:    Box::new(Expr::name("approx")),
                        arguments: vec![left, right], })
    }

    fn precedence(&self) -> Precedence {
        Precedence::Sum
    }
}

#[test]
fn custom_parselets_extend_the_grammar() {
    let registry = Arc::new(ParseletRegistry::standard_builder().infix(TokenKind::Tilde,
                                                                       ApproxParselet)
                                                                .build());

    let parse_custom = |src: &str| {
        Parser::with_registry(tokenize(src), Arc::clone(&registry)).parse()
                                                                   .unwrap()
    };

    assert_eq!(print(&parse_custom("a ~ b * 2")), "approx(a, (b * 2))");
    assert_eq!(print(&parse_custom("~a ~ b")), "approx((~a), b)");

    let mut evaluator = Evaluator::new();
    evaluator.define_function("approx", 2, |args| {
                 if (args[0] - args[1]).abs() < 0.01 { 1.0 } else { 0.0 }
             });
    parse_custom("1 ~ 1.001").accept(&mut evaluator);
    assert_eq!(evaluator.answer(), 1.0);

    // The standard table is untouched.
    assert!(parse(tokenize("a ~ b")).is_err());
}

#[test]
fn the_standard_registry_is_shared_between_threads() {
    let handles: Vec<_> = (0..4).map(|i| {
                                    thread::spawn(move || {
                                        let src = format!("x{i} = {i} * 2 + 1; x{i}");
                                        let block = parse_block(tokenize(&src)).unwrap();
                                        evaluate(&block)
                                    })
                                })
                                .collect();

    let answers: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(answers, [1.0, 3.0, 5.0, 7.0]);
    assert!(Arc::ptr_eq(&ParseletRegistry::shared_standard(),
                        &ParseletRegistry::shared_standard()));
}

#[test]
fn s_expressions() {
    let block = parse_block(tokenize("a = f(1, b) ? -c : d!")).unwrap();
    assert_eq!(to_sexpr(&block),
               "(block (write a (if (call (read f) (number 1) (read b)) (prefix - (read c)) \
                (postfix ! (read d)))))");
}

#[test]
fn tree_rendering() {
    let expr = parse(tokenize("a = f(1)")).unwrap();
    assert_eq!(to_tree(&expr),
               "assign\n  name 'a'\n  call\n    name 'f'\n    number 1\n");
}

#[test]
fn test_script_file() {
    let script = fs::read_to_string("tests/example.bantam").expect("missing file");
    let block = parse_block(tokenize(&script)).unwrap();
    assert_eq!(evaluate_with(&block, EvalConfig { strict: true }), Ok(120.0));
}
