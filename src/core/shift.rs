use super::*;

fn shift_index(index: u32, delta: i32) -> Option<u32> {
    u32::try_from(i64::from(index) + i64::from(delta)).ok()
}

impl Term {
    /// Adds `delta` to the index of every free occurrence of `var.name` whose index is at least
    /// `var.index`. Passing under a binder with the same label raises that cutoff by one.
    pub fn shift(&self, delta: i32, var: &V) -> Term {
        guarded(|| self.shift_impl(delta, var))
    }

    fn shift_impl(&self, delta: i32, var: &V) -> Term {
        match self.kind() {
            TermKind::Var(v) => {
                if v.name == var.name && v.index >= var.index {
                    let index = unwrap!(
                        shift_index(v.index, delta),
                        "shifting {} by {} takes it out of scope",
                        v,
                        delta
                    );
                    Term::var(v.name.clone(), index)
                } else {
                    self.clone()
                }
            },
            TermKind::Lambda { label, param_type, body } => {
                let param_type = param_type.shift(delta, var);
                let body = body.shift(delta, &var.bump_over(label));
                Term::lambda(label.clone(), param_type, body)
            },
            TermKind::Pi { label, domain, codomain } => {
                let domain = domain.shift(delta, var);
                let codomain = codomain.shift(delta, &var.bump_over(label));
                Term::pi(label.clone(), domain, codomain)
            },
            TermKind::App { func, arg } => {
                let func = func.shift(delta, var);
                let arg = arg.shift(delta, var);
                Term::app(func, arg)
            },
            TermKind::Annot { expr, ty } => {
                let expr = expr.shift(delta, var);
                let ty = ty.shift(delta, var);
                Term::annot(expr, ty)
            },
            TermKind::NaturalPlus { left, right } => {
                let left = left.shift(delta, var);
                let right = right.shift(delta, var);
                Term::natural_plus(left, right)
            },
            TermKind::NaturalTimes { left, right } => {
                let left = left.shift(delta, var);
                let right = right.shift(delta, var);
                Term::natural_times(left, right)
            },
            TermKind::EmptyList { elem_type } => {
                Term::empty_list(elem_type.shift(delta, var))
            },
            TermKind::NonEmptyList { head, tail } => {
                let head = head.shift(delta, var);
                let tail = tail.iter().map(|elem| elem.shift(delta, var));
                Term::non_empty_list(head, tail)
            },
            TermKind::Universe(..) |
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

    /// Replaces every free occurrence of `var` with `value`.
    ///
    /// Under a binder labelled `x`, `var` is looked for one index further out if it is also named
    /// `x`, and `value` has its own free `x`s shifted so they keep pointing past the binder.
    pub fn subst(&self, var: &V, value: &Term) -> Term {
        guarded(|| self.subst_impl(var, value))
    }

    fn subst_impl(&self, var: &V, value: &Term) -> Term {
        match self.kind() {
            TermKind::Var(v) => {
                if v == var {
                    value.clone()
                } else {
                    self.clone()
                }
            },
            TermKind::Lambda { label, param_type, body } => {
                let param_type = param_type.subst(var, value);
                let body_value = value.shift(1, &V::new(label.clone(), 0));
                let body = body.subst(&var.bump_over(label), &body_value);
                Term::lambda(label.clone(), param_type, body)
            },
            TermKind::Pi { label, domain, codomain } => {
                let domain = domain.subst(var, value);
                let codomain_value = value.shift(1, &V::new(label.clone(), 0));
                let codomain = codomain.subst(&var.bump_over(label), &codomain_value);
                Term::pi(label.clone(), domain, codomain)
            },
            TermKind::App { func, arg } => {
                let func = func.subst(var, value);
                let arg = arg.subst(var, value);
                Term::app(func, arg)
            },
            TermKind::Annot { expr, ty } => {
                let expr = expr.subst(var, value);
                let ty = ty.subst(var, value);
                Term::annot(expr, ty)
            },
            TermKind::NaturalPlus { left, right } => {
                let left = left.subst(var, value);
                let right = right.subst(var, value);
                Term::natural_plus(left, right)
            },
            TermKind::NaturalTimes { left, right } => {
                let left = left.subst(var, value);
                let right = right.subst(var, value);
                Term::natural_times(left, right)
            },
            TermKind::EmptyList { elem_type } => {
                Term::empty_list(elem_type.subst(var, value))
            },
            TermKind::NonEmptyList { head, tail } => {
                let head = head.subst(var, value);
                let tail = tail.iter().map(|elem| elem.subst(var, value));
                Term::non_empty_list(head, tail)
            },
            TermKind::Universe(..) |
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

    /// Takes `self` as the body of a binder labelled `label` and fills that binder with `arg`,
    /// which is expressed in the binder's enclosing scope. The result lives in that enclosing
    /// scope too.
    pub fn instantiate(&self, label: &Label, arg: &Term) -> Term {
        let var = V::new(label.clone(), 0);
        let arg = arg.shift(1, &var);
        self.subst(&var, &arg).shift(-1, &var)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn x(index: u32) -> Term {
        Term::var("x", index)
    }

    #[test]
    fn shift_leaves_other_names_alone() {
        let term = Term::app(x(0), Term::var("y", 0));
        let shifted = term.shift(1, &V::new("x", 0));
        assert_eq!(shifted, Term::app(x(1), Term::var("y", 0)));
    }

    #[test]
    fn shift_respects_cutoff() {
        let term = Term::app(x(0), x(1));
        let shifted = term.shift(1, &V::new("x", 1));
        assert_eq!(shifted, Term::app(x(0), x(2)));
    }

    #[test]
    fn shift_skips_variables_bound_by_same_label() {
        // λ(x : Natural) → x@0 + x@1: only x@1 is free.
        let term = Term::lambda(
            "x",
            Term::natural_type(),
            Term::natural_plus(x(0), x(1)),
        );
        let shifted = term.shift(1, &V::new("x", 0));
        let expected = Term::lambda(
            "x",
            Term::natural_type(),
            Term::natural_plus(x(0), x(2)),
        );
        assert_eq!(shifted, expected);
    }

    #[test]
    fn shift_ignores_binders_with_other_labels() {
        let term = Term::pi("y", x(0), x(0));
        let shifted = term.shift(1, &V::new("x", 0));
        assert_eq!(shifted, Term::pi("y", x(1), x(1)));
    }

    #[test]
    fn shift_descends_into_every_field() {
        let term = Term::non_empty_list(
            Term::annot(x(0), Term::empty_list(x(0))),
            vec![Term::natural_times(x(0), x(0))],
        );
        let shifted = term.shift(2, &V::new("x", 0));
        let expected = Term::non_empty_list(
            Term::annot(x(2), Term::empty_list(x(2))),
            vec![Term::natural_times(x(2), x(2))],
        );
        assert_eq!(shifted, expected);
    }

    #[test]
    fn shift_under_same_named_pi_and_into_param_type() {
        // ∀(x : x) → λ(x : x@1) → x@2: every occurrence names the outer `x`.
        let term = Term::pi("x", x(0), Term::lambda("x", x(1), x(2)));
        let shifted = term.shift(1, &V::new("x", 0));
        let expected = Term::pi("x", x(1), Term::lambda("x", x(2), x(3)));
        assert_eq!(shifted, expected);

        // ∀(x : Type) → x is closed.
        let closed = Term::pi("x", Term::universe(Universe::Type), x(0));
        assert_eq!(closed.shift(1, &V::new("x", 0)), closed);
    }

    #[test]
    fn shift_down_after_consuming_a_binder() {
        assert_eq!(x(3).shift(-1, &V::new("x", 0)), x(2));
    }

    #[test]
    #[should_panic]
    fn shift_below_zero_panics() {
        x(0).shift(-1, &V::new("x", 0));
    }

    #[test]
    fn subst_replaces_only_the_target() {
        let term = Term::natural_plus(x(0), x(1));
        let replaced = term.subst(&V::new("x", 0), &Term::natural_lit(7));
        assert_eq!(replaced, Term::natural_plus(Term::natural_lit(7), x(1)));
    }

    #[test]
    fn subst_tracks_same_named_binders() {
        // (λ(x : Natural) → x@1)[x := 7] == λ(x : Natural) → 7
        let term = Term::lambda("x", Term::natural_type(), x(1));
        let replaced = term.subst(&V::new("x", 0), &Term::natural_lit(7));
        assert_eq!(replaced, Term::lambda("x", Term::natural_type(), Term::natural_lit(7)));
    }

    #[test]
    fn subst_avoids_capture() {
        // (λ(y : Natural) → x)[x := y] must not let the binder capture the free `y`.
        let term = Term::lambda("y", Term::natural_type(), x(0));
        let replaced = term.subst(&V::new("x", 0), &Term::var("y", 0));
        assert_eq!(replaced, Term::lambda("y", Term::natural_type(), Term::var("y", 1)));
    }

    #[test]
    fn subst_descends_into_every_field() {
        let seven = Term::natural_lit(7);
        let term = Term::non_empty_list(
            Term::app(Term::annot(x(0), Term::empty_list(x(0))), x(0)),
            vec![Term::natural_times(x(0), Term::natural_plus(x(0), x(1)))],
        );
        let replaced = term.subst(&V::new("x", 0), &seven);
        let expected = Term::non_empty_list(
            Term::app(Term::annot(seven.clone(), Term::empty_list(seven.clone())), seven.clone()),
            vec![Term::natural_times(seven.clone(), Term::natural_plus(seven.clone(), x(1)))],
        );
        assert_eq!(replaced, expected);
    }

    #[test]
    fn subst_tracks_same_named_pi_binders() {
        // (∀(x : x) → x@1)[x := y] == ∀(x : y) → y: the domain sits outside the binder.
        let term = Term::pi("x", x(0), x(1));
        let replaced = term.subst(&V::new("x", 0), &Term::var("y", 0));
        assert_eq!(replaced, Term::pi("x", Term::var("y", 0), Term::var("y", 0)));

        // The replacement's own free `x` is shifted past the binder.
        let replaced = term.subst(&V::new("x", 0), &x(0));
        assert_eq!(replaced, Term::pi("x", x(0), x(1)));
    }

    #[test]
    fn instantiate_drops_the_binder() {
        // body of λ(x : Natural) → x + x@1, applied to 3, leaves x@1 as x@0.
        let body = Term::natural_plus(x(0), x(1));
        let result = body.instantiate(&Label::from("x"), &Term::natural_lit(3));
        assert_eq!(result, Term::natural_plus(Term::natural_lit(3), x(0)));
    }

    #[test]
    fn instantiate_with_free_variable_argument() {
        // body `λ(y : Natural) → x` applied to free `y` gives `λ(y : Natural) → y@1`.
        let body = Term::lambda("y", Term::natural_type(), x(0));
        let result = body.instantiate(&Label::from("x"), &Term::var("y", 0));
        assert_eq!(result, Term::lambda("y", Term::natural_type(), Term::var("y", 1)));
    }
}
