//! Lowers an s-expression into a pure lambda term.
//!
//! `lambda`, `let` and `let*` are the only special forms. Every other list is a left-associative
//! application and every symbol is a variable.

use sexp::{Sexp, Span, Spanned};
use thiserror::Error;

use crate::term::Term;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ExtractError {
    #[error("Lambda parameter must be a symbol")]
    NonSymbolLambdaParameter(Span),
    #[error("Missing lambda parameter list")]
    MissingLambdaParameterList(Span),
    #[error("Lambda parameter list is empty")]
    EmptyLambdaParameterList(Span),
    #[error("Missing lambda body")]
    MissingLambdaBody(Span),
    #[error("Too many elements after the lambda body")]
    ExtraLambdaArguments(Span),
    #[error("Missing {0} bindings")]
    MissingLetBindings(&'static str, Span),
    #[error("Binding must be a `(name value)` list")]
    MalformedLetBinding(Span),
    #[error("Missing {0} body")]
    MissingLetBody(&'static str, Span),
    #[error("Too many elements after the {0} body")]
    ExtraLetArguments(&'static str, Span),
    #[error("Empty list cannot be applied")]
    EmptyApplicationList(Span),
    #[error("Missing application argument")]
    MissingApplicationArgument(Span),
}

impl ExtractError {
    pub fn span(&self) -> Span {
        use ExtractError::*;
        match self {
            NonSymbolLambdaParameter(span)
            | MissingLambdaParameterList(span)
            | EmptyLambdaParameterList(span)
            | MissingLambdaBody(span)
            | ExtraLambdaArguments(span)
            | MissingLetBindings(_, span)
            | MalformedLetBinding(span)
            | MissingLetBody(_, span)
            | ExtraLetArguments(_, span)
            | EmptyApplicationList(span)
            | MissingApplicationArgument(span) => span.clone(),
        }
    }
}

pub type Result<T, E = ExtractError> = std::result::Result<T, E>;

const LAMBDA: &str = "lambda";
const LET: &str = "let";
const LET_STAR: &str = "let*";

pub fn extract(sexp: &Spanned<Sexp>) -> Result<Term> {
    match sexp.value() {
        Sexp::Symbol(name) => Ok(Term::Var(name.clone())),
        Sexp::List(elements) => {
            log::trace!("list: {sexp}");
            let span = sexp.span();
            match elements.first().and_then(|head| head.value().as_symbol()) {
                Some(LAMBDA) => extract_lambda(span, &elements[1..]),
                Some(LET) => extract_let(span, &elements[1..]),
                Some(LET_STAR) => extract_let_star(span, &elements[1..]),
                _ => extract_application(span, elements),
            }
        }
    }
}

/// `(lambda (a b) body)` becomes `(a -> (b -> body))`.
fn extract_lambda(span: Span, rest: &[Spanned<Sexp>]) -> Result<Term> {
    let (params, body) = match rest {
        [] => return Err(ExtractError::MissingLambdaParameterList(span)),
        [params] => (params, None),
        [params, body] => (params, Some(body)),
        [_, _, extra, ..] => return Err(ExtractError::ExtraLambdaArguments(extra.span())),
    };
    let params = params
        .value()
        .as_list()
        .ok_or_else(|| ExtractError::MissingLambdaParameterList(params.span()))?;
    if params.is_empty() {
        return Err(ExtractError::EmptyLambdaParameterList(span));
    }
    let body = body.ok_or_else(|| ExtractError::MissingLambdaBody(span))?;
    let names = params
        .iter()
        .map(|param| {
            param
                .value()
                .as_symbol()
                .ok_or_else(|| ExtractError::NonSymbolLambdaParameter(param.span()))
        })
        .collect::<Result<Vec<_>>>()?;

    let body = extract(body)?;
    Ok(names
        .into_iter()
        .rev()
        .fold(body, |body, name| Term::abs(name, body)))
}

/// Splits `((name value) ...) body` into its bindings and body.
fn let_shape<'a>(
    form: &'static str,
    span: Span,
    rest: &'a [Spanned<Sexp>],
) -> Result<(Vec<(&'a str, &'a Spanned<Sexp>)>, &'a Spanned<Sexp>)> {
    let (bindings, body) = match rest {
        [] => return Err(ExtractError::MissingLetBindings(form, span)),
        [_] => return Err(ExtractError::MissingLetBody(form, span)),
        [bindings, body] => (bindings, body),
        [_, _, extra, ..] => return Err(ExtractError::ExtraLetArguments(form, extra.span())),
    };
    let bindings = bindings
        .value()
        .as_list()
        .ok_or_else(|| ExtractError::MissingLetBindings(form, bindings.span()))?
        .iter()
        .map(|binding| match binding.value().as_list() {
            Some([name, value]) => name
                .value()
                .as_symbol()
                .map(|name| (name, value))
                .ok_or_else(|| ExtractError::MalformedLetBinding(binding.span())),
            _ => Err(ExtractError::MalformedLetBinding(binding.span())),
        })
        .collect::<Result<Vec<_>>>()?;
    Ok((bindings, body))
}

/// `(let ((a x) (b y)) body)` becomes `((b -> ((a -> body) x)) y)`.
fn extract_let(span: Span, rest: &[Spanned<Sexp>]) -> Result<Term> {
    let (bindings, body) = let_shape(LET, span, rest)?;
    log::debug!("let with {} bindings", bindings.len());
    bindings
        .into_iter()
        .try_fold(extract(body)?, |term, (name, value)| {
            Ok(Term::app(Term::abs(name, term), extract(value)?))
        })
}

/// `(let* ((a x) (b y)) body)` is rewritten to `(let ((a x)) (let ((b y)) body))` and extracted again.
fn extract_let_star(span: Span, rest: &[Spanned<Sexp>]) -> Result<Term> {
    let (bindings, body) = let_shape(LET_STAR, span, rest)?;
    let nested = bindings
        .into_iter()
        .rev()
        .fold(body.clone(), |inner, (name, value)| {
            let span = value.span();
            let symbol = |name: &str| Spanned::new(Sexp::Symbol(name.to_string()), span.clone());
            let binding = Spanned::new(Sexp::List(vec![symbol(name), value.clone()]), span.clone());
            let bindings = Spanned::new(Sexp::List(vec![binding]), span.clone());
            Spanned::new(Sexp::List(vec![symbol(LET), bindings, inner]), span.clone())
        });
    log::debug!("let* rewritten to {nested}");
    extract(&nested)
}

/// `(f a b)` becomes `((f a) b)`.
fn extract_application(span: Span, elements: &[Spanned<Sexp>]) -> Result<Term> {
    let (callee, args) = match elements {
        [] => return Err(ExtractError::EmptyApplicationList(span)),
        [_] => return Err(ExtractError::MissingApplicationArgument(span)),
        [callee, args @ ..] => (callee, args),
    };
    args.iter().try_fold(extract(callee)?, |term, arg| {
        Ok(Term::app(term, extract(arg)?))
    })
}
