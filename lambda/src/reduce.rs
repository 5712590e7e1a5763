use crate::term::Term;

/// Replaces every free occurrence of `name` in `term` with a copy of `replacement`.
///
/// Binders are never renamed, so a free variable of `replacement` can be captured by an
/// abstraction inside `term` that binds the same name.
pub fn substitute(term: &Term, name: &str, replacement: &Term) -> Term {
    match term {
        Term::Var(x) if x == name => replacement.clone(),
        Term::Var(_) => term.clone(),
        Term::Abs(x, _) if x == name => term.clone(),
        Term::Abs(x, body) => Term::abs(x.clone(), substitute(body, name, replacement)),
        Term::App(callee, arg) => Term::app(
            substitute(callee, name, replacement),
            substitute(arg, name, replacement),
        ),
    }
}

/// Performs one reduction step.
///
/// A redex at the head of an application fires at once. Otherwise both sides of the application
/// advance by one step, and abstraction bodies are reduced in place.
pub fn reduce_once(term: &Term) -> Term {
    match term {
        Term::Var(_) => term.clone(),
        Term::Abs(x, body) => Term::abs(x.clone(), reduce_once(body)),
        Term::App(callee, arg) => match callee.as_ref() {
            Term::Abs(x, body) => substitute(body, x, arg),
            _ => Term::app(reduce_once(callee), reduce_once(arg)),
        },
    }
}

pub fn is_normal_form(term: &Term) -> bool {
    match term {
        Term::Var(_) => true,
        Term::Abs(_, body) => is_normal_form(body),
        Term::App(callee, arg) => {
            !callee.is_abs() && is_normal_form(callee) && is_normal_form(arg)
        }
    }
}

/// The sequence of generations of a term: the term itself, then the result of each reduction
/// step, ending with the first generation in normal form.
///
/// The sequence is infinite when the term has no normal form. Only the next generation is kept;
/// yielded terms belong to the caller.
pub struct Reductions {
    pending: Option<Term>,
}

impl Reductions {
    pub fn new(term: Term) -> Self {
        Self {
            pending: Some(term),
        }
    }
}

impl Iterator for Reductions {
    type Item = Term;

    fn next(&mut self) -> Option<Term> {
        let current = self.pending.take()?;
        if !is_normal_form(&current) {
            self.pending = Some(reduce_once(&current));
        }
        Some(current)
    }
}

impl std::iter::FusedIterator for Reductions {}

/// Reduces `term` until it is in normal form. Never returns if there is none.
pub fn normalize(term: Term) -> Term {
    normalize_with(term, |_| {})
}

/// Like [`normalize`], calling `observer` with the current term before every step.
pub fn normalize_with(mut term: Term, mut observer: impl FnMut(&Term)) -> Term {
    while !is_normal_form(&term) {
        observer(&term);
        term = reduce_once(&term);
    }
    term
}
