use chumsky::{error::Simple, prelude::*};
use thiserror::Error;

use crate::{
    expr::Sexp,
    prelude::{Span, Spanned},
};

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ReadError {
    #[error("Unterminated list: reached the end of the input before `)`")]
    UnterminatedList(Span),
    #[error("Unrecognized character `{}`", .0.escape_debug())]
    UnrecognizedCharacter(char, Span),
    #[error("Unexpected end of the input, expected an expression")]
    UnexpectedEndOfInput(Span),
}

impl ReadError {
    pub fn span(&self) -> Span {
        match self {
            ReadError::UnterminatedList(span)
            | ReadError::UnrecognizedCharacter(_, span)
            | ReadError::UnexpectedEndOfInput(span) => span.clone(),
        }
    }
}

impl From<Simple<char>> for ReadError {
    fn from(e: Simple<char>) -> Self {
        let span = e.span();
        match e.found() {
            Some(&c) => ReadError::UnrecognizedCharacter(c, span),
            // Only an open list ever waits for `)`.
            None if e.expected().any(|t| t == &Some(')')) => ReadError::UnterminatedList(span),
            None => ReadError::UnexpectedEndOfInput(span),
        }
    }
}

pub trait SimpleParser<O>: Parser<char, O, Error = Simple<char>> + Clone {}
impl<O, T> SimpleParser<O> for T where T: Parser<char, O, Error = Simple<char>> + Clone {}

fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "+*^/#,\\-_?!|>".contains(c)
}

/// Whitespace and `;` comments, in any order.
fn blank() -> impl SimpleParser<()> {
    let comment = just(';')
        .then(filter(|c: &char| *c != '\n').repeated())
        .ignored();
    choice((one_of(" \n").ignored(), comment))
        .repeated()
        .ignored()
}

/// Reads one expression starting exactly at the current position.
pub fn reader() -> impl SimpleParser<Spanned<Sexp>> {
    recursive(|sexp: Recursive<char, Spanned<Sexp>, Simple<char>>| {
        let symbol = filter(|c: &char| is_symbol_char(*c))
            .repeated()
            .at_least(1)
            .collect::<String>()
            .map(Sexp::Symbol);

        let list = sexp
            .then_ignore(blank())
            .repeated()
            .delimited_by(just('(').then(blank()), just(')'))
            .map(Sexp::List);

        choice((list, symbol)).map_with_span(Spanned::new)
    })
}

/// Reads the first expression of `source`. Anything after it is ignored.
pub fn read(source: &str) -> Result<Spanned<Sexp>, ReadError> {
    blank()
        .ignore_then(reader())
        .parse(source)
        .map_err(|es| match es.into_iter().next() {
            Some(e) => e.into(),
            None => {
                let len = source.chars().count();
                ReadError::UnexpectedEndOfInput(len..len)
            }
        })
}
