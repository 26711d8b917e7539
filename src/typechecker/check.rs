use super::*;

/// Infers the type of a closed term with the default config.
pub fn type_of(term: &Term) -> Result<Term, TypeError> {
    Checker::default().type_of(term)
}

impl Term {
    /// Infers the type of this term under `ctx` with the default config.
    pub fn type_with(&self, ctx: &Ctx) -> Result<Term, TypeError> {
        Checker::default().type_with(self, ctx)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Checker {
    config: Config,
}

impl Checker {
    pub fn new(config: Config) -> Checker {
        Checker { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn type_of(&self, term: &Term) -> Result<Term, TypeError> {
        self.type_with(term, &Ctx::empty())
    }

    pub fn type_with(&self, term: &Term, ctx: &Ctx) -> Result<Term, TypeError> {
        let ret = self.infer(term, ctx, 0);
        if let Err(ref e) = ret {
            debug!("rejected {}: {}", term, e);
        }
        ret
    }

    fn infer(&self, term: &Term, ctx: &Ctx, depth: u32) -> Result<Term, TypeError> {
        guarded(|| self.infer_impl(term, ctx, depth))
    }

    fn infer_impl(&self, term: &Term, ctx: &Ctx, depth: u32) -> Result<Term, TypeError> {
        if depth >= self.config.max_depth {
            return Err(TypeError::RecursionLimit { limit: self.config.max_depth });
        }
        let depth = depth + 1;
        trace!("{} ⊢ {}", ctx.debug_summary(), term);

        match term.kind() {
            TermKind::Universe(universe) => {
                match universe.type_of() {
                    Some(universe) => Ok(Term::universe(universe)),
                    None => Err(TypeError::SortHasNoType),
                }
            },
            TermKind::Var(var) => {
                match ctx.lookup(&var.name, var.index) {
                    Some(ty) => Ok(ty),
                    None => Err(TypeError::UnboundVariable { var: var.clone() }),
                }
            },
            TermKind::Lambda { label, param_type, body } => {
                self.infer(param_type, ctx, depth)?;
                let param_type = param_type.normalize();
                let body_ctx = ctx.bind(label, &param_type);
                let body_type = self.infer(body, &body_ctx, depth)?;
                let func_type = Term::pi(label.clone(), param_type, body_type);
                self.infer(&func_type, ctx, depth)?;
                Ok(func_type)
            },
            TermKind::Pi { label, domain, codomain } => {
                let domain_universe = self.infer_universe(domain, ctx, depth, "domain of a function type")?;
                let codomain_ctx = ctx.bind(label, &domain.normalize());
                let codomain_universe = self.infer_universe(codomain, &codomain_ctx, depth, "codomain of a function type")?;
                let universe = function_universe(domain_universe, codomain_universe)?;
                Ok(Term::universe(universe))
            },
            TermKind::App { func, arg } => {
                let func_type = self.infer(func, ctx, depth)?.normalize();
                let (label, domain, codomain) = match func_type.kind() {
                    TermKind::Pi { label, domain, codomain } => (label, domain, codomain),
                    _ => return Err(TypeError::ExpectedFunctionType { actual: func_type.clone() }),
                };
                let arg_type = self.infer(arg, ctx, depth)?;
                if !judgmentally_equal(domain, &arg_type) {
                    return Err(TypeError::TypeMismatch {
                        expected: domain.clone(),
                        actual: arg_type,
                        hint: "function argument",
                    });
                }
                Ok(codomain.instantiate(label, arg))
            },
            TermKind::Annot { expr, ty } => {
                self.infer(ty, ctx, depth)?;
                let inferred = self.infer(expr, ctx, depth)?;
                if !judgmentally_equal(ty, &inferred) {
                    return Err(TypeError::AnnotationMismatch {
                        declared: ty.clone(),
                        inferred,
                    });
                }
                Ok(ty.clone())
            },

            TermKind::DoubleType |
            TermKind::BoolType |
            TermKind::NaturalType |
            TermKind::IntegerType => Ok(Term::universe(Universe::Type)),
            TermKind::ListType => {
                Ok(Term::pi(
                    Label::anonymous(),
                    Term::universe(Universe::Type),
                    Term::universe(Universe::Type),
                ))
            },

            TermKind::DoubleLit(..) => Ok(Term::double_type()),
            TermKind::BoolLit(..) => Ok(Term::bool_type()),
            TermKind::NaturalLit(..) => Ok(Term::natural_type()),
            TermKind::IntegerLit(..) => Ok(Term::integer_type()),

            TermKind::NaturalPlus { left, right } => {
                self.expect_natural(left, ctx, depth, "left operand of `+`")?;
                self.expect_natural(right, ctx, depth, "right operand of `+`")?;
                Ok(Term::natural_type())
            },
            TermKind::NaturalTimes { left, right } => {
                self.expect_natural(left, ctx, depth, "left operand of `*`")?;
                self.expect_natural(right, ctx, depth, "right operand of `*`")?;
                Ok(Term::natural_type())
            },

            TermKind::EmptyList { elem_type } => {
                self.expect_type(elem_type, ctx, depth, "list element type")?;
                Ok(Term::list_of(elem_type.clone()))
            },
            TermKind::NonEmptyList { head, tail } => {
                let elem_type = self.infer(head, ctx, depth)?;
                self.expect_type(&elem_type, ctx, depth, "list element type")?;
                for elem in tail {
                    let other_type = self.infer(elem, ctx, depth)?;
                    if !judgmentally_equal(&elem_type, &other_type) {
                        return Err(TypeError::ListElementTypeMismatch {
                            first: elem_type,
                            offending: other_type,
                        });
                    }
                }
                Ok(Term::list_of(elem_type))
            },
        }
    }

    fn infer_universe(
        &self,
        term: &Term,
        ctx: &Ctx,
        depth: u32,
        hint: &'static str,
    ) -> Result<Universe, TypeError> {
        let ty = self.infer(term, ctx, depth)?.normalize();
        match ty.as_universe() {
            Some(universe) => Ok(universe),
            None => Err(TypeError::ExpectedUniverse { actual: ty, hint }),
        }
    }

    // `ty` must itself be a type, i.e. have type `Type`.
    fn expect_type(
        &self,
        ty: &Term,
        ctx: &Ctx,
        depth: u32,
        hint: &'static str,
    ) -> Result<(), TypeError> {
        let kind = self.infer(ty, ctx, depth)?.normalize();
        match kind.as_universe() {
            Some(Universe::Type) => Ok(()),
            _ => {
                Err(TypeError::TypeMismatch {
                    expected: Term::universe(Universe::Type),
                    actual: kind,
                    hint,
                })
            },
        }
    }

    fn expect_natural(
        &self,
        operand: &Term,
        ctx: &Ctx,
        depth: u32,
        hint: &'static str,
    ) -> Result<(), TypeError> {
        let ty = self.infer(operand, ctx, depth)?.normalize();
        match ty.kind() {
            TermKind::NaturalType => Ok(()),
            _ => {
                Err(TypeError::TypeMismatch {
                    expected: Term::natural_type(),
                    actual: ty,
                    hint,
                })
            },
        }
    }
}
