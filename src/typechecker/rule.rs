use super::*;

lazy_static! {
    // Pi types may abstract over anything, but may only return terms (`Type` codomain), types
    // from types (`Kind`) or kinds from kinds (`Sort`). Types never depend on terms.
    static ref FUNCTION_UNIVERSES: HashMap<(Universe, Universe), Universe> = hashmap! {
        (Universe::Type, Universe::Type) => Universe::Type,
        (Universe::Kind, Universe::Type) => Universe::Type,
        (Universe::Sort, Universe::Type) => Universe::Type,
        (Universe::Kind, Universe::Kind) => Universe::Kind,
        (Universe::Sort, Universe::Kind) => Universe::Sort,
        (Universe::Sort, Universe::Sort) => Universe::Sort,
    };
}

/// The universe a function type lives in, given the universes of its domain and codomain.
pub fn function_universe(domain: Universe, codomain: Universe) -> Result<Universe, TypeError> {
    match FUNCTION_UNIVERSES.get(&(domain, codomain)) {
        Some(universe) => Ok(*universe),
        None => Err(TypeError::InvalidUniverseCombination { domain, codomain }),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn value_functions_live_in_type() {
        assert_eq!(unwrap!(function_universe(Universe::Type, Universe::Type)), Universe::Type);
        assert_eq!(unwrap!(function_universe(Universe::Kind, Universe::Type)), Universe::Type);
    }

    #[test]
    fn type_constructors_live_in_kind() {
        assert_eq!(unwrap!(function_universe(Universe::Kind, Universe::Kind)), Universe::Kind);
        assert_eq!(unwrap!(function_universe(Universe::Sort, Universe::Kind)), Universe::Sort);
        assert_eq!(unwrap!(function_universe(Universe::Sort, Universe::Sort)), Universe::Sort);
    }

    #[test]
    fn dependent_types_are_rejected() {
        let rejected = [
            (Universe::Type, Universe::Kind),
            (Universe::Type, Universe::Sort),
            (Universe::Kind, Universe::Sort),
        ];
        for &(domain, codomain) in &rejected {
            match function_universe(domain, codomain) {
                Err(TypeError::InvalidUniverseCombination { .. }) => (),
                other => panic!("{:?} → {:?} gave {:?}", domain, codomain, other),
            }
        }
    }
}
