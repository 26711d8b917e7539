use super::*;

impl Term {
    /// Reduces the term to normal form. Only meaningful, and only guaranteed to terminate, for
    /// well-typed terms. Annotations are erased.
    pub fn normalize(&self) -> Term {
        guarded(|| self.normalize_impl())
    }

    fn normalize_impl(&self) -> Term {
        match self.kind() {
            TermKind::Lambda { label, param_type, body } => {
                Term::lambda(label.clone(), param_type.normalize(), body.normalize())
            },
            TermKind::Pi { label, domain, codomain } => {
                Term::pi(label.clone(), domain.normalize(), codomain.normalize())
            },
            TermKind::App { func, arg } => {
                let func = func.normalize();
                let arg = arg.normalize();
                match func.kind() {
                    TermKind::Lambda { label, body, .. } => {
                        trace!("beta-reducing application of λ({} : ...)", label);
                        body.instantiate(label, &arg).normalize()
                    },
                    _ => Term::app(func, arg),
                }
            },
            TermKind::Annot { expr, .. } => expr.normalize(),
            TermKind::NaturalPlus { left, right } => {
                let left = left.normalize();
                let right = right.normalize();
                match (left.kind(), right.kind()) {
                    (TermKind::NaturalLit(l), TermKind::NaturalLit(r)) => {
                        match l.checked_add(*r) {
                            Some(n) => Term::natural_lit(n),
                            None => {
                                warn!("{} + {} overflows, leaving it unreduced", l, r);
                                Term::natural_plus(left, right)
                            },
                        }
                    },
                    _ => Term::natural_plus(left, right),
                }
            },
            TermKind::NaturalTimes { left, right } => {
                let left = left.normalize();
                let right = right.normalize();
                match (left.kind(), right.kind()) {
                    (TermKind::NaturalLit(l), TermKind::NaturalLit(r)) => {
                        match l.checked_mul(*r) {
                            Some(n) => Term::natural_lit(n),
                            None => {
                                warn!("{} * {} overflows, leaving it unreduced", l, r);
                                Term::natural_times(left, right)
                            },
                        }
                    },
                    _ => Term::natural_times(left, right),
                }
            },
            TermKind::EmptyList { elem_type } => {
                Term::empty_list(elem_type.normalize())
            },
            TermKind::NonEmptyList { head, tail } => {
                let head = head.normalize();
                let tail = tail.iter().map(Term::normalize);
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

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn nat(n: u64) -> Term {
        Term::natural_lit(n)
    }

    fn assert_idempotent(term: &Term) {
        let once = term.normalize();
        assert_eq!(once.normalize(), once);
    }

    #[test]
    fn plus_evaluates_literals() {
        let term = Term::natural_plus(nat(2), nat(2));
        assert_eq!(term.normalize(), nat(4));
    }

    #[test]
    fn times_evaluates_nested_literals() {
        let term = Term::natural_times(Term::natural_plus(nat(1), nat(2)), nat(5));
        assert_eq!(term.normalize(), nat(15));
    }

    #[test]
    fn overflowing_plus_is_left_alone() {
        let term = Term::natural_plus(nat(std::u64::MAX), nat(1));
        assert_eq!(term.normalize(), term);
    }

    #[test]
    fn plus_with_variable_is_stuck() {
        let term = Term::natural_plus(Term::var("x", 0), Term::natural_plus(nat(1), nat(1)));
        assert_eq!(term.normalize(), Term::natural_plus(Term::var("x", 0), nat(2)));
    }

    #[test]
    fn beta_reduces_applied_lambda() {
        // (λ(x : Natural) → x + x) 3
        let func = Term::lambda(
            "x",
            Term::natural_type(),
            Term::natural_plus(Term::var("x", 0), Term::var("x", 0)),
        );
        let term = Term::app(func, nat(3));
        assert_eq!(term.normalize(), nat(6));
    }

    #[test]
    fn beta_reduces_under_binders() {
        // λ(y : Natural) → (λ(x : Natural) → x) y
        let id = Term::lambda("x", Term::natural_type(), Term::var("x", 0));
        let term = Term::lambda(
            "y",
            Term::natural_type(),
            Term::app(id, Term::var("y", 0)),
        );
        assert_eq!(
            term.normalize(),
            Term::lambda("y", Term::natural_type(), Term::var("y", 0)),
        );
    }

    #[test]
    fn beta_reduction_exposes_new_redexes() {
        // (λ(f : Natural → Natural) → f 1) (λ(n : Natural) → n * 10)
        let nat_to_nat = Term::pi("_", Term::natural_type(), Term::natural_type());
        let apply_to_one = Term::lambda(
            "f",
            nat_to_nat,
            Term::app(Term::var("f", 0), nat(1)),
        );
        let times_ten = Term::lambda(
            "n",
            Term::natural_type(),
            Term::natural_times(Term::var("n", 0), nat(10)),
        );
        assert_eq!(Term::app(apply_to_one, times_ten).normalize(), nat(10));
    }

    #[test]
    fn stuck_application_keeps_normalized_parts() {
        let term = Term::app(Term::var("f", 0), Term::natural_plus(nat(1), nat(1)));
        assert_eq!(term.normalize(), Term::app(Term::var("f", 0), nat(2)));
    }

    #[test]
    fn annotations_are_erased_and_lists_normalize_pointwise() {
        let term = Term::annot(
            Term::non_empty_list(Term::natural_plus(nat(1), nat(1)), vec![nat(3)]),
            Term::list_of(Term::natural_type()),
        );
        assert_eq!(term.normalize(), Term::non_empty_list(nat(2), vec![nat(3)]));

        // Natural : Type
        let annotated_type = Term::annot(Term::natural_type(), Term::universe(Universe::Type));
        assert_eq!(annotated_type.normalize(), Term::natural_type());
    }

    #[test]
    fn deep_chains_normalize() {
        let mut term = nat(0);
        for _ in 0..100_000 {
            term = Term::natural_plus(term, nat(1));
        }
        assert_eq!(term.normalize(), nat(100_000));
    }

    #[test]
    fn normalization_is_idempotent() {
        let id = Term::lambda("x", Term::natural_type(), Term::var("x", 0));
        let terms = vec![
            Term::universe(Universe::Type),
            Term::natural_plus(nat(2), nat(2)),
            Term::app(id.clone(), Term::natural_times(nat(3), nat(3))),
            Term::lambda("y", Term::natural_type(), Term::app(id, Term::var("y", 0))),
            Term::empty_list(Term::natural_type()),
            Term::annot(Term::bool_lit(true), Term::bool_type()),
            Term::app(Term::var("f", 0), Term::natural_plus(Term::var("x", 0), nat(1))),
        ];
        for term in &terms {
            assert_idempotent(term);
        }
    }
}
