//! Untyped lambda calculus written as s-expressions, normalized by beta reduction.

pub mod desugar;
pub mod error;
pub mod reduce;
pub mod term;

use error::Error;
use term::Term;

/// Reads the first expression of `source` and lowers it to a term.
pub fn parse(source: &str) -> Result<Term, Error> {
    let sexp = sexp::read(source)?;
    log::debug!("read {sexp}");
    Ok(desugar::extract(&sexp)?)
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::{reduce::normalize, term::Term, *};

    fn eval(s: &str) -> String {
        normalize(parse(s).unwrap()).to_string()
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            parse("; identity\n((lambda (x) x) y)").unwrap().to_string(),
            "((x -> x) y)"
        );
        assert!(matches!(parse("(a b"), Err(Error::Read(_))));
        assert!(matches!(parse("(lambda (x))"), Err(Error::Extract(_))));
    }

    #[test]
    fn test_eval() {
        assert_eq!(eval("(let ((a y)) a)"), "y");
        assert_eq!(eval("(let* ((a y) (b a)) b)"), "y");
        assert_eq!(eval("((lambda (a b) a) p q)"), "p");
        assert_eq!(eval("(lambda (f) ((lambda (x) x) f))"), "(f -> f)");
    }

    #[test]
    fn test_church_numerals() {
        let source = "
            (let* ((zero (lambda (f x) x))
                   (succ (lambda (n f x) (f (n f x))))
                   (plus (lambda (m n f x) (m f (n f x))))
                   (one (succ zero)))
              (plus one one))
        ";
        assert_eq!(eval(source), "(f -> (x -> (f (f x))))");
    }

    #[test]
    fn test_error_span() {
        let source = "(let ((a 1 2)) a)";
        assert_eq!(parse(source).unwrap_err().span(), 6..13);
    }

    fn arb_name() -> impl Strategy<Value = String> {
        "[a-z][0-9]?"
    }

    fn arb_term() -> impl Strategy<Value = Term> {
        let leaf = arb_name().prop_map(Term::Var);
        leaf.prop_recursive(6, 64, 2, |inner| {
            prop_oneof![
                (arb_name(), inner.clone()).prop_map(|(x, body)| Term::abs(x, body)),
                (inner.clone(), inner).prop_map(|(callee, arg)| Term::app(callee, arg)),
            ]
        })
    }

    proptest! {
        #[test]
        fn test_surface_round_trip(term in arb_term()) {
            let source = term.surface().to_string();
            prop_assert_eq!(parse(&source).unwrap(), term);
        }
    }
}
