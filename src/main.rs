use std::{error::Error, fs, process::ExitCode};

use bantam::{
    interpreter::{
        evaluator::core::{EvalConfig, Evaluator},
        lexer::Tokenizer,
        parser::core::Parser as ExprParser,
    },
    print, to_sexpr, to_tree,
};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

/// bantam parses and evaluates arithmetic-like expressions with a Pratt
/// parser.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells bantam to read the expressions from a file instead of the
    /// command line.
    #[arg(short, long)]
    file: bool,

    /// Fail on the first evaluation problem instead of substituting `0`.
    #[arg(short, long)]
    strict: bool,

    /// Reject characters that cannot start a token instead of skipping them.
    #[arg(long)]
    strict_lex: bool,

    /// Binds a numeric constant before evaluation, e.g. `-D pi=3.14159`.
    #[arg(short = 'D', long = "define", value_name = "NAME=VALUE", value_parser = parse_definition)]
    defines: Vec<(String, f64)>,

    /// Prints a rendering of the parsed expressions before the answer.
    #[arg(long, value_enum)]
    show: Vec<Rendering>,

    contents: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Rendering {
    /// Fully parenthesized source.
    Printer,
    /// S-expression form.
    Sexpr,
    /// Indented tree, one node per line.
    Tree,
}

fn parse_definition(raw: &str) -> Result<(String, f64), String> {
    let (name, value) = raw.split_once('=')
                           .ok_or_else(|| format!("expected NAME=VALUE, found '{raw}'"))?;
    let value = value.trim()
                     .parse::<f64>()
                     .map_err(|e| format!("invalid value for '{name}': {e}"))?;
    Ok((name.trim().to_string(), value))
}

fn run(args: Args) -> Result<f64, Box<dyn Error>> {
    let source = if args.file {
        fs::read_to_string(&args.contents).map_err(|e| {
                                              format!("failed to read the input file '{}': {e}",
                                                      &args.contents)
                                          })?
    } else {
        args.contents
    };

    let tokens = if args.strict_lex {
        Tokenizer::strict(&source)
    } else {
        Tokenizer::new(&source)
    };
    let block = ExprParser::new(tokens).parse_block()?;

    for rendering in &args.show {
        match rendering {
            Rendering::Printer => println!("{}", print(&block)),
            Rendering::Sexpr => println!("{}", to_sexpr(&block)),
            Rendering::Tree => print!("{}", to_tree(&block)),
        }
    }

    let mut evaluator = Evaluator::with_config(EvalConfig { strict: args.strict });
    for (name, value) in args.defines {
        evaluator.define_number(name, value);
    }
    block.accept(&mut evaluator);
    Ok(evaluator.finish()?)
}

fn main() -> ExitCode {
    // BANTAM_LOG takes an env-filter directive, e.g. `BANTAM_LOG=debug`.
    if let Ok(filter) = EnvFilter::try_from_env("BANTAM_LOG") {
        tracing_subscriber::fmt().with_env_filter(filter)
                                 .with_target(true)
                                 .with_writer(std::io::stderr)
                                 .init();
        tracing::debug!("tracing initialized");
    }

    match run(Args::parse()) {
        Ok(answer) => {
            println!("{answer}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
