use super::*;

/// The sort hierarchy `Type : Kind : Sort`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Universe {
    Type,
    Kind,
    Sort,
}

impl Universe {
    /// The universe one level up, or `None` for `Sort`, which has no type.
    pub fn type_of(self) -> Option<Universe> {
        match self {
            Universe::Type => Some(Universe::Kind),
            Universe::Kind => Some(Universe::Sort),
            Universe::Sort => None,
        }
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Universe::Type => write!(f, "Type"),
            Universe::Kind => write!(f, "Kind"),
            Universe::Sort => write!(f, "Sort"),
        }
    }
}

/// A double literal. Compared bit-for-bit so that `NaN` is equal to itself.
#[derive(Clone, Copy, Debug)]
pub struct Double(pub f64);

impl PartialEq for Double {
    fn eq(&self, other: &Double) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

#[derive(Clone)]
pub struct Term {
    inner: Arc<TermKind>,
}

lazy_static! {
    // Stands in for the contents of a term while it is being taken apart in `drop`.
    static ref VACANT: Arc<TermKind> = Arc::new(TermKind::Universe(Universe::Type));
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        guarded(|| fmt::Debug::fmt(&*self.inner, f))
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Term) -> bool {
        self.ptr_eq(other) || guarded(|| *self.inner == *other.inner)
    }
}

// Dropping the last handle to a deeply nested term would otherwise recurse once per level.
// Uniquely owned children are moved onto a heap-allocated worklist instead.
impl Drop for Term {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut term) = pending.pop() {
            term.detach_children(&mut pending);
        }
    }
}

#[derive(PartialEq, Debug)]
pub enum TermKind {
    Universe(Universe),
    Var(V),
    Lambda {
        label: Label,
        param_type: Term,
        body: Term,
    },
    Pi {
        label: Label,
        domain: Term,
        codomain: Term,
    },
    App {
        func: Term,
        arg: Term,
    },
    Annot {
        expr: Term,
        ty: Term,
    },
    DoubleType,
    DoubleLit(Double),
    BoolType,
    BoolLit(bool),
    NaturalType,
    NaturalLit(u64),
    IntegerType,
    IntegerLit(i64),
    NaturalPlus {
        left: Term,
        right: Term,
    },
    NaturalTimes {
        left: Term,
        right: Term,
    },
    ListType,
    EmptyList {
        elem_type: Term,
    },
    NonEmptyList {
        head: Term,
        tail: Vec<Term>,
    },
}

impl Term {
    fn from_kind(kind: TermKind) -> Term {
        Term {
            inner: Arc::new(kind),
        }
    }

    fn detach_children(&mut self, pending: &mut Vec<Term>) {
        if Arc::strong_count(&self.inner) > 1 {
            return;
        }
        let inner = std::mem::replace(&mut self.inner, VACANT.clone());
        let kind = match Arc::try_unwrap(inner) {
            Ok(kind) => kind,
            Err(..) => return,
        };
        match kind {
            TermKind::Lambda { param_type, body, .. } => {
                pending.push(param_type);
                pending.push(body);
            },
            TermKind::Pi { domain, codomain, .. } => {
                pending.push(domain);
                pending.push(codomain);
            },
            TermKind::App { func: left, arg: right } |
            TermKind::Annot { expr: left, ty: right } |
            TermKind::NaturalPlus { left, right } |
            TermKind::NaturalTimes { left, right } => {
                pending.push(left);
                pending.push(right);
            },
            TermKind::EmptyList { elem_type } => pending.push(elem_type),
            TermKind::NonEmptyList { head, tail } => {
                pending.push(head);
                pending.extend(tail);
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
            TermKind::ListType => (),
        }
    }

    pub fn kind(&self) -> &TermKind {
        &self.inner
    }

    /// Returns the universe this term denotes, if it is one.
    pub fn as_universe(&self) -> Option<Universe> {
        match self.kind() {
            TermKind::Universe(universe) => Some(*universe),
            _ => None,
        }
    }

    /// `true` if both handles point at the same node.
    pub fn ptr_eq(&self, other: &Term) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn universe(universe: Universe) -> Term {
        Term::from_kind(TermKind::Universe(universe))
    }

    pub fn var<L: Into<Label>>(name: L, index: u32) -> Term {
        Term::from_kind(TermKind::Var(V::new(name, index)))
    }

    pub fn from_var(var: V) -> Term {
        Term::from_kind(TermKind::Var(var))
    }

    pub fn lambda<L: Into<Label>>(label: L, param_type: Term, body: Term) -> Term {
        Term::from_kind(TermKind::Lambda {
            label: label.into(),
            param_type,
            body,
        })
    }

    pub fn pi<L: Into<Label>>(label: L, domain: Term, codomain: Term) -> Term {
        Term::from_kind(TermKind::Pi {
            label: label.into(),
            domain,
            codomain,
        })
    }

    pub fn app(func: Term, arg: Term) -> Term {
        Term::from_kind(TermKind::App { func, arg })
    }

    pub fn annot(expr: Term, ty: Term) -> Term {
        Term::from_kind(TermKind::Annot { expr, ty })
    }

    pub fn double_type() -> Term {
        Term::from_kind(TermKind::DoubleType)
    }

    pub fn double_lit(value: f64) -> Term {
        Term::from_kind(TermKind::DoubleLit(Double(value)))
    }

    pub fn bool_type() -> Term {
        Term::from_kind(TermKind::BoolType)
    }

    pub fn bool_lit(value: bool) -> Term {
        Term::from_kind(TermKind::BoolLit(value))
    }

    pub fn natural_type() -> Term {
        Term::from_kind(TermKind::NaturalType)
    }

    pub fn natural_lit(value: u64) -> Term {
        Term::from_kind(TermKind::NaturalLit(value))
    }

    pub fn integer_type() -> Term {
        Term::from_kind(TermKind::IntegerType)
    }

    pub fn integer_lit(value: i64) -> Term {
        Term::from_kind(TermKind::IntegerLit(value))
    }

    pub fn natural_plus(left: Term, right: Term) -> Term {
        Term::from_kind(TermKind::NaturalPlus { left, right })
    }

    pub fn natural_times(left: Term, right: Term) -> Term {
        Term::from_kind(TermKind::NaturalTimes { left, right })
    }

    pub fn list_type() -> Term {
        Term::from_kind(TermKind::ListType)
    }

    pub fn empty_list(elem_type: Term) -> Term {
        Term::from_kind(TermKind::EmptyList { elem_type })
    }

    pub fn non_empty_list<I>(head: Term, tail: I) -> Term
    where
        I: IntoIterator<Item = Term>,
    {
        Term::from_kind(TermKind::NonEmptyList {
            head,
            tail: tail.into_iter().collect(),
        })
    }

    /// `List elem_type`, the type of every list literal.
    pub fn list_of(elem_type: Term) -> Term {
        Term::app(Term::list_type(), elem_type)
    }
}
