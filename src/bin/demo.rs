use anyhow::{Context, bail};
use charcomb::text::{character, number, one_of, spaces, string};
use charcomb::{
    AndExt, BoxedExt, BoxedParser, MapExt, OrExt, Parser, between, chainl1, eof, lazy, run,
    run_partial, sep_by,
};
use clap::{Parser as ClapParser, Subcommand};
use tracing::info;

/// Small grammars exercising the charcomb combinators
#[derive(ClapParser, Debug)]
#[command(name = "charcomb-demo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Match the literal "foo" or "bar"
    Literal { input: String },

    /// Parse a comma separated list of integers
    List { input: String },

    /// Evaluate an arithmetic expression with + - * / and parentheses
    Calc { input: String },
}

type BinOp = fn(f64, f64) -> f64;

/// Parser followed by any amount of whitespace
fn lexeme<P: Parser>(parser: P) -> impl Parser<Output = P::Output> {
    parser.skip(spaces())
}

fn operator(symbols: &str) -> impl Parser<Output = BinOp> + use<> {
    lexeme(one_of(symbols)).map(|op| -> BinOp {
        match op {
            '+' => |a: f64, b: f64| a + b,
            '-' => |a: f64, b: f64| a - b,
            '*' => |a: f64, b: f64| a * b,
            _ => |a: f64, b: f64| a / b,
        }
    })
}

fn expr() -> BoxedParser<'static, f64> {
    chainl1(term(), operator("+-")).boxed()
}

fn term() -> impl Parser<Output = f64> {
    chainl1(factor(), operator("*/"))
}

fn factor() -> impl Parser<Output = f64> {
    lexeme(number().map(|n| n as f64)).or(between(
        lexeme(character('(')),
        lexeme(character(')')),
        lazy(expr),
    ))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Literal { input } => {
            let parser = string("foo").or(string("bar"));
            let value = run(&parser, &input).context("expected \"foo\" or \"bar\"")?;
            println!("{}", value);
        }
        Command::List { input } => {
            let parser = sep_by(lexeme(number()), lexeme(character(',')));
            let (values, rest) =
                run_partial(&parser, &input).context("expected a list of integers")?;
            if !rest.at_end() {
                bail!(
                    "unexpected input at line {}, column {}: {:?}",
                    rest.line(),
                    rest.column(),
                    rest.remaining()
                );
            }
            info!(count = values.len(), "parsed list");
            println!("{:?}", values);
        }
        Command::Calc { input } => {
            let parser = spaces().then(expr()).skip(eof());
            let value = run(&parser, &input).context("invalid arithmetic expression")?;
            println!("{}", value);
        }
    }

    Ok(())
}
