use super::*;

/// The name a binder introduces. Cloning is a reference count bump.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Label {
    inner: Arc<str>,
}

impl Label {
    pub fn new<S: Into<String>>(s: S) -> Label {
        let string: String = s.into();
        Label {
            inner: Arc::from(string),
        }
    }

    /// The label `_`, which alpha-normalization gives every binder.
    pub fn anonymous() -> Label {
        Label::new("_")
    }

    pub fn is_anonymous(&self) -> bool {
        self.as_str() == "_"
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&*self.inner, f)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&*self.inner, f)
    }
}

impl<'a> From<&'a str> for Label {
    fn from(s: &'a str) -> Label {
        Label::new(s)
    }
}

impl From<String> for Label {
    fn from(s: String) -> Label {
        Label::new(s)
    }
}

/// A variable reference: the `index`-th enclosing binder labelled `name`, counting outwards from
/// zero. Binders with other labels do not count.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct V {
    pub name: Label,
    pub index: u32,
}

impl V {
    pub fn new<L: Into<Label>>(name: L, index: u32) -> V {
        V {
            name: name.into(),
            index,
        }
    }

    /// The same variable as seen from under one more binder labelled `label`.
    pub fn bump_over(&self, label: &Label) -> V {
        if self.name == *label {
            V {
                name: self.name.clone(),
                index: self.index + 1,
            }
        } else {
            self.clone()
        }
    }
}

impl fmt::Display for V {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.index == 0 {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}@{}", self.name, self.index)
        }
    }
}
