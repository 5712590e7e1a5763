use std::{fs, path::PathBuf, process};

use anyhow::{bail, Context as _, Result};
use ariadne::{Color, Fmt, Label, Report, ReportKind, Source};
use lambda::{
    error::Error,
    reduce::{is_normal_form, Reductions},
    term::Term,
};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "lambda",
    about = "Normalizes an untyped lambda calculus term written as an s-expression"
)]
struct Options {
    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,

    /// Silence all log output (-q)
    #[structopt(short, long)]
    quiet: bool,

    /// Give up after this many reduction steps, unbounded by default
    #[structopt(long)]
    max_steps: Option<usize>,

    /// Source file
    #[structopt(parse(from_os_str))]
    input: PathBuf,
}

fn build_report(e: &Error) -> Report {
    let message = e.to_string();
    Report::build(ReportKind::Error, (), e.span().start)
        .with_message(&message)
        .with_label(
            Label::new(e.span())
                .with_message(format!("{}", message.fg(Color::Red)))
                .with_color(Color::Red),
        )
        .finish()
}

fn normalize(term: Term, max_steps: Option<usize>) -> Result<Term> {
    for (step, current) in Reductions::new(term).enumerate() {
        if is_normal_form(&current) {
            log::info!("Normal form reached after {step} steps");
            return Ok(current);
        }
        log::debug!("step {step}: {current}");
        if max_steps.map_or(false, |max| step >= max) {
            bail!("No normal form within {step} reduction steps");
        }
    }
    bail!("Reduction stopped before reaching a normal form")
}

fn main() -> Result<()> {
    let options = Options::from_args();

    stderrlog::new()
        .verbosity(options.verbose)
        .quiet(options.quiet)
        .init()?;

    let source = fs::read_to_string(&options.input)
        .with_context(|| format!("Failed to read {}", options.input.display()))?;

    let term = match lambda::parse(&source) {
        Ok(term) => term,
        Err(e) => {
            build_report(&e).eprint(Source::from(&source))?;
            process::exit(1);
        }
    };
    println!("{term}");

    let normal = normalize(term, options.max_steps)?;
    println!("{normal}");
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_max_steps() {
        let term = lambda::parse("((lambda (x) (x x)) (lambda (x) (x x)))").unwrap();
        assert!(normalize(term, Some(50)).is_err());

        let term = lambda::parse("((lambda (a b) b) p q)").unwrap();
        assert!(normalize(term.clone(), Some(1)).is_err());
        assert_eq!(normalize(term, Some(2)).unwrap().to_string(), "q");

        let term = lambda::parse("(x y)").unwrap();
        assert_eq!(normalize(term, Some(0)).unwrap().to_string(), "(x y)");
    }

    #[test]
    fn test_report_points_at_error() {
        let e = lambda::parse("(lambda (x))").unwrap_err();
        assert_eq!(e.span(), 0..12);
        let mut rendered = vec![];
        build_report(&e)
            .write(Source::from("(lambda (x))"), &mut rendered)
            .unwrap();
        assert!(String::from_utf8_lossy(&rendered).contains("Missing lambda body"));
    }
}
