use super::*;

/// Renames the binder of `body` from `label` to `_`.
fn rename_to_anonymous(label: &Label, body: &Term) -> Term {
    if label.is_anonymous() {
        return body.clone();
    }
    let anonymous = V::new(Label::anonymous(), 0);
    let var = V::new(label.clone(), 0);
    body
        .shift(1, &anonymous)
        .subst(&var, &Term::from_var(anonymous))
        .shift(-1, &var)
}

impl Term {
    /// Relabels every binder `_`, so that terms differing only in the names of their bound
    /// variables become structurally equal.
    pub fn alpha_normalize(&self) -> Term {
        guarded(|| self.alpha_normalize_impl())
    }

    fn alpha_normalize_impl(&self) -> Term {
        match self.kind() {
            TermKind::Lambda { label, param_type, body } => {
                let param_type = param_type.alpha_normalize();
                let body = rename_to_anonymous(label, body).alpha_normalize();
                Term::lambda(Label::anonymous(), param_type, body)
            },
            TermKind::Pi { label, domain, codomain } => {
                let domain = domain.alpha_normalize();
                let codomain = rename_to_anonymous(label, codomain).alpha_normalize();
                Term::pi(Label::anonymous(), domain, codomain)
            },
            TermKind::App { func, arg } => {
                Term::app(func.alpha_normalize(), arg.alpha_normalize())
            },
            TermKind::Annot { expr, ty } => {
                Term::annot(expr.alpha_normalize(), ty.alpha_normalize())
            },
            TermKind::NaturalPlus { left, right } => {
                Term::natural_plus(left.alpha_normalize(), right.alpha_normalize())
            },
            TermKind::NaturalTimes { left, right } => {
                Term::natural_times(left.alpha_normalize(), right.alpha_normalize())
            },
            TermKind::EmptyList { elem_type } => {
                Term::empty_list(elem_type.alpha_normalize())
            },
            TermKind::NonEmptyList { head, tail } => {
                let head = head.alpha_normalize();
                let tail = tail.iter().map(Term::alpha_normalize);
                Term::non_empty_list(head, tail)
            },
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
            TermKind::ListType => self.clone(),
        }
    }
}

/// Equality up to normalization and renaming of bound variables.
pub fn judgmentally_equal(a: &Term, b: &Term) -> bool {
    if a.ptr_eq(b) {
        return true;
    }
    a.normalize().alpha_normalize() == b.normalize().alpha_normalize()
}
