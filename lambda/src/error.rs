use sexp::{ReadError, Span};
use thiserror::Error;

use crate::desugar::ExtractError;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum Error {
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error(transparent)]
    Extract(#[from] ExtractError),
}

impl Error {
    pub fn span(&self) -> Span {
        match self {
            Error::Read(e) => e.span(),
            Error::Extract(e) => e.span(),
        }
    }
}
