use super::*;

/// A typing context: the types of the variables in scope, innermost binder first.
///
/// Contexts are persistent. `insert` and `map` return new contexts and never touch the one they
/// were called on, so a context can be shared freely between sub-checks.
#[derive(Clone)]
pub struct Ctx {
    inner: Arc<CtxKind>,
}

impl PartialEq for Ctx {
    fn eq(&self, other: &Ctx) -> bool {
        self.inner == other.inner
    }
}

impl fmt::Debug for Ctx {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

#[derive(PartialEq, Debug)]
enum CtxKind {
    Nil,
    Var {
        parent: Ctx,
        name: Label,
        ty: Term,
    },
}

impl Ctx {
    pub fn empty() -> Ctx {
        Ctx {
            inner: Arc::new(CtxKind::Nil),
        }
    }

    fn kind(&self) -> &CtxKind {
        &self.inner
    }

    pub fn is_empty(&self) -> bool {
        match self.kind() {
            CtxKind::Nil => true,
            CtxKind::Var { .. } => false,
        }
    }

    /// The type of the `index`-th most recent binding of `name`.
    pub fn lookup(&self, name: &Label, index: u32) -> Option<Term> {
        let mut ctx = self;
        let mut index = index;
        loop {
            match ctx.kind() {
                CtxKind::Nil => return None,
                CtxKind::Var { parent, name: var_name, ty } => {
                    if var_name == name {
                        if index == 0 {
                            return Some(ty.clone());
                        }
                        index -= 1;
                    }
                    ctx = parent;
                },
            }
        }
    }

    pub fn insert(&self, name: Label, ty: Term) -> Ctx {
        Ctx {
            inner: Arc::new(CtxKind::Var {
                parent: self.clone(),
                name,
                ty,
            }),
        }
    }

    pub fn map<F>(&self, f: F) -> Ctx
    where
        F: Fn(&Term) -> Term,
    {
        self.map_inner(&f)
    }

    fn map_inner<F>(&self, f: &F) -> Ctx
    where
        F: Fn(&Term) -> Term,
    {
        match self.kind() {
            CtxKind::Nil => self.clone(),
            CtxKind::Var { parent, name, ty } => {
                let parent = parent.map_inner(f);
                parent.insert(name.clone(), f(ty))
            },
        }
    }

    /// The context under a new binder `name : ty`.
    ///
    /// Every stored type, `ty` included, was written outside the binder, so free occurrences of
    /// `name` in them get shifted past it.
    pub fn bind(&self, name: &Label, ty: &Term) -> Ctx {
        let var = V::new(name.clone(), 0);
        self.insert(name.clone(), ty.clone())
            .map(|ty| ty.shift(1, &var))
    }

    pub fn debug_summary(&self) -> String {
        let mut ret = self.debug_summary_inner();
        ret.push_str(" ⊦");
        ret
    }

    fn debug_summary_inner(&self) -> String {
        match self.kind() {
            CtxKind::Nil => String::from("·"),
            CtxKind::Var { parent, name, ty } => {
                let mut ret = parent.debug_summary_inner();
                ret.push_str(&format!(", {} : {}", name, ty));
                ret
            },
        }
    }
}
