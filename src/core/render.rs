use super::*;

/// How loosely a construct binds. A sub-term rendered in a position that allows less than its
/// own precedence gets parenthesized.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
pub enum Precedence {
    Enclosed = 0,
    App = 1,
    Times = 2,
    Plus = 3,
    Annot = 4,
    Func = 5,
}

fn term_precedence(term: &Term) -> Precedence {
    match term.kind() {
        TermKind::Universe(..) |
        TermKind::Var(..) |
        TermKind::DoubleType |
        TermKind::DoubleLit(..) |
        TermKind::BoolType |
        TermKind::BoolLit(..) |
        TermKind::NaturalType |
        TermKind::NaturalLit(..) |
        TermKind::IntegerType |
        TermKind::IntegerLit(..) |
        TermKind::ListType |
        TermKind::NonEmptyList { .. } => {
            Precedence::Enclosed
        },

        TermKind::App { .. } => Precedence::App,
        TermKind::NaturalTimes { .. } => Precedence::Times,
        TermKind::NaturalPlus { .. } => Precedence::Plus,

        TermKind::Annot { .. } |
        TermKind::EmptyList { .. } => {
            Precedence::Annot
        },

        TermKind::Lambda { .. } |
        TermKind::Pi { .. } => {
            Precedence::Func
        },
    }
}

fn render_double(f: &mut fmt::Formatter, value: f64) -> fmt::Result {
    if value.is_nan() {
        write!(f, "NaN")
    } else if value.is_infinite() {
        if value > 0.0 {
            write!(f, "Infinity")
        } else {
            write!(f, "-Infinity")
        }
    } else {
        // `{:?}` always keeps a fractional part, except in exponent form (`1e300`).
        let text = format!("{:?}", value);
        match text.find('e') {
            Some(exp) if !text[..exp].contains('.') => {
                write!(f, "{}.0{}", &text[..exp], &text[exp..])
            },
            _ => write!(f, "{}", text),
        }
    }
}

pub fn render_term(
    term: &Term,
    f: &mut fmt::Formatter,
    precedence: Precedence,
) -> fmt::Result {
    guarded(|| render_term_impl(term, f, precedence))
}

fn render_term_impl(
    term: &Term,
    f: &mut fmt::Formatter,
    precedence: Precedence,
) -> fmt::Result {
    let inner_precedence = term_precedence(term);
    if inner_precedence > precedence {
        write!(f, "(")?;
    }

    match term.kind() {
        TermKind::Universe(universe) => write!(f, "{}", universe)?,
        TermKind::Var(var) => write!(f, "{}", var)?,
        TermKind::Lambda { label, param_type, body } => {
            write!(f, "λ({} : ", label)?;
            render_term(param_type, f, Precedence::Func)?;
            write!(f, ") → ")?;
            render_term(body, f, Precedence::Func)?;
        },
        TermKind::Pi { label, domain, codomain } => {
            if label.is_anonymous() {
                render_term(domain, f, Precedence::Plus)?;
            } else {
                write!(f, "∀({} : ", label)?;
                render_term(domain, f, Precedence::Func)?;
                write!(f, ")")?;
            }
            write!(f, " → ")?;
            render_term(codomain, f, Precedence::Func)?;
        },
        TermKind::App { func, arg } => {
            render_term(func, f, Precedence::App)?;
            write!(f, " ")?;
            render_term(arg, f, Precedence::Enclosed)?;
        },
        TermKind::Annot { expr, ty } => {
            render_term(expr, f, Precedence::Plus)?;
            write!(f, " : ")?;
            render_term(ty, f, Precedence::Func)?;
        },
        TermKind::DoubleType => write!(f, "Double")?,
        TermKind::DoubleLit(Double(value)) => render_double(f, *value)?,
        TermKind::BoolType => write!(f, "Bool")?,
        TermKind::BoolLit(true) => write!(f, "True")?,
        TermKind::BoolLit(false) => write!(f, "False")?,
        TermKind::NaturalType => write!(f, "Natural")?,
        TermKind::NaturalLit(n) => write!(f, "{}", n)?,
        TermKind::IntegerType => write!(f, "Integer")?,
        TermKind::IntegerLit(n) => write!(f, "{:+}", n)?,
        TermKind::NaturalPlus { left, right } => {
            render_term(left, f, Precedence::Plus)?;
            write!(f, " + ")?;
            render_term(right, f, Precedence::Times)?;
        },
        TermKind::NaturalTimes { left, right } => {
            render_term(left, f, Precedence::Times)?;
            write!(f, " * ")?;
            render_term(right, f, Precedence::App)?;
        },
        TermKind::ListType => write!(f, "List")?,
        TermKind::EmptyList { elem_type } => {
            write!(f, "[] : List ")?;
            render_term(elem_type, f, Precedence::Enclosed)?;
        },
        TermKind::NonEmptyList { head, tail } => {
            write!(f, "[")?;
            render_term(head, f, Precedence::Func)?;
            for elem in tail {
                write!(f, ", ")?;
                render_term(elem, f, Precedence::Func)?;
            }
            write!(f, "]")?;
        },
    }

    if inner_precedence > precedence {
        write!(f, ")")?;
    }

    Ok(())
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        render_term(self, f, Precedence::Func)
    }
}
