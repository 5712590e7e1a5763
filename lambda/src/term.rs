pub type Identifier = String;

/// A pure lambda calculus term. Every node owns its children, so `clone` is a deep copy.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Term {
    /// `x`
    Var(Identifier),
    /// `(x -> t)`
    Abs(Identifier, Box<Term>),
    /// `(t t)`
    App(Box<Term>, Box<Term>),
}

impl Term {
    pub fn var(name: impl Into<Identifier>) -> Self {
        Term::Var(name.into())
    }

    pub fn abs(name: impl Into<Identifier>, body: Term) -> Self {
        Term::Abs(name.into(), body.into())
    }

    pub fn app(callee: Term, arg: Term) -> Self {
        Term::App(callee.into(), arg.into())
    }

    pub fn is_abs(&self) -> bool {
        matches!(self, Term::Abs(_, _))
    }

    /// Renders the term back into the s-expression notation it can be read from.
    pub fn surface(&self) -> Surface<'_> {
        Surface(self)
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Var(name) => f.write_str(name),
            Term::Abs(name, body) => f.write_fmt(format_args!("({name} -> {body})")),
            Term::App(callee, arg) => f.write_fmt(format_args!("({callee} {arg})")),
        }
    }
}

pub struct Surface<'a>(&'a Term);

impl std::fmt::Display for Surface<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Term::Var(name) => f.write_str(name),
            Term::Abs(name, body) => {
                f.write_fmt(format_args!("(lambda ({name}) {})", body.surface()))
            }
            Term::App(callee, arg) => {
                f.write_fmt(format_args!("({} {})", callee.surface(), arg.surface()))
            }
        }
    }
}
