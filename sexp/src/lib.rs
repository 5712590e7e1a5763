//! Reader for a small s-expression notation: symbols, parenthesised lists and `;` line comments.

mod expr;
mod prelude;
mod reader;

pub use expr::{Identifier, Sexp};
pub use prelude::{Span, Spanned};
pub use reader::{read, reader, ReadError, SimpleParser};
