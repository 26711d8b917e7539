use super::*;

/// Why a term was rejected. Checking stops at the first of these.
#[derive(Debug, Fail)]
pub enum TypeError {
    #[fail(display = "unbound variable `{}`", var)]
    UnboundVariable {
        var: V,
    },
    #[fail(display = "Sort has no type")]
    SortHasNoType,
    #[fail(display = "type mismatch in {}: expected `{}`, found `{}`", hint, expected, actual)]
    TypeMismatch {
        expected: Term,
        actual: Term,
        hint: &'static str,
    },
    #[fail(display = "expected a function type, found `{}`", actual)]
    ExpectedFunctionType {
        actual: Term,
    },
    #[fail(display = "the {} has type `{}`, which is not a universe", hint, actual)]
    ExpectedUniverse {
        actual: Term,
        hint: &'static str,
    },
    #[fail(
        display = "all list elements must have the same type, but `{}` and `{}` differ",
        first,
        offending
    )]
    ListElementTypeMismatch {
        first: Term,
        offending: Term,
    },
    #[fail(display = "no function type from {} to {}", domain, codomain)]
    InvalidUniverseCombination {
        domain: Universe,
        codomain: Universe,
    },
    #[fail(display = "annotation mismatch: inferred type `{}` but annotated `{}`", inferred, declared)]
    AnnotationMismatch {
        declared: Term,
        inferred: Term,
    },
    #[fail(display = "term is nested more than {} levels deep", limit)]
    RecursionLimit {
        limit: u32,
    },
}
