use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use reducing_calculator::interpreter::calculate;
use reducing_calculator::interpreter::lexer::tokenize;
use std::io;
use std::io::{BufRead, Write};

/// Evaluates arithmetic expressions one line at a time
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// An expression to evaluate once instead of reading lines from standard input
    expression: Option<String>,

    /// Printed before every line is read
    #[clap(long, default_value = "> ")]
    prompt: String,

    /// Print the tokens of every line before evaluating it
    #[clap(long)]
    tokens: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let stdout = io::stdout();
    let mut output = stdout.lock();
    match &args.expression {
        Some(expression) => answer_line(expression, args.tokens, &mut output),
        None => {
            let stdin = io::stdin();
            let stderr = io::stderr();
            run_session(
                stdin.lock(),
                &mut output,
                &mut stderr.lock(),
                &args.prompt,
                args.tokens,
            )
        }
    }
}

/// Prompts for lines until the input ends or an empty line is read.
///
/// A line that fails to evaluate is reported on `errors` and the session carries on.
fn run_session(
    input: impl BufRead,
    output: &mut impl Write,
    errors: &mut impl Write,
    prompt: &str,
    show_tokens: bool,
) -> Result<()> {
    let mut lines = input.lines();
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line.context("Failed to read a line from the input")?,
            None => break,
        };
        if line.is_empty() {
            break;
        }

        if let Err(error) = answer_line(&line, show_tokens, output) {
            log::debug!("could not evaluate {:?}: {:?}", line, error);
            writeln!(errors, "error: {}", error)?;
        }
    }
    Ok(())
}

fn answer_line(line: &str, show_tokens: bool, output: &mut impl Write) -> Result<()> {
    if show_tokens {
        writeln!(output, "tokens = {}", tokenize(line)?)?;
    }
    let answer = calculate(line)?;
    writeln!(output, "answer = {}", answer)?;
    Ok(())
}
