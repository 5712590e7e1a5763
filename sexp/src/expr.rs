use crate::prelude::Spanned;

pub type Identifier = String;

/// A generic nested expression. Lists own their elements; copies are always deep.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Sexp {
    /// `x`
    Symbol(Identifier),
    /// `(e e ...)`
    List(Vec<Spanned<Sexp>>),
}

impl Sexp {
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Sexp::Symbol(name) => Some(name),
            Sexp::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Spanned<Sexp>]> {
        match self {
            Sexp::Symbol(_) => None,
            Sexp::List(elements) => Some(elements),
        }
    }

    pub fn is_symbol(&self, name: &str) -> bool {
        self.as_symbol() == Some(name)
    }
}

impl std::fmt::Display for Sexp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sexp::Symbol(name) => f.write_str(name),
            Sexp::List(elements) => {
                f.write_str("(")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    f.write_fmt(format_args!("{element}"))?;
                }
                f.write_str(")")
            }
        }
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    fn symbol(name: &str) -> Spanned<Sexp> {
        Spanned::new(Sexp::Symbol(name.to_string()), 0..0)
    }

    #[test]
    fn test_display() {
        let sexp = Sexp::List(vec![
            symbol("f"),
            Spanned::new(Sexp::List(vec![]), 0..0),
            Spanned::new(Sexp::List(vec![symbol("a"), symbol("b")]), 0..0),
        ]);
        assert_eq!(sexp.to_string(), "(f () (a b))");
    }

    #[test]
    fn test_accessors() {
        let sexp = Sexp::List(vec![symbol("let*")]);
        assert!(sexp.as_symbol().is_none());
        assert_eq!(sexp.as_list().map(<[_]>::len), Some(1));
        assert!(sexp.as_list().unwrap()[0].value().is_symbol("let*"));
        assert!(!sexp.as_list().unwrap()[0].value().is_symbol("let"));
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Sexp::List(vec![symbol("a")]);
        let mut copy = original.clone();
        if let Sexp::List(elements) = &mut copy {
            elements.push(symbol("b"));
        }
        assert_eq!(original.to_string(), "(a)");
        assert_eq!(copy.to_string(), "(a b)");
    }
}
