//! HK/AR split of reactions.
//!
//! MKMCXX describes adsorption steps (a free site `*` is consumed) with Hertz-Knudsen kinetics,
//! "HK" lines with sticking coefficients, and every other surface step with Arrhenius
//! parameters, "AR" lines. The decision is made on the reactant side of the equation as it was
//! given by the database, not on the canonical MKMCXX form.
use crate::MicroKinetics::equation_parser::{EquationError, split_sides};
use crate::MicroKinetics::reaction_record::ReactionRecord;
use regex::Regex;
use std::sync::LazyLock;

/// ` *`
static FREE_SITE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s\*").unwrap());
/// ` 2*`
static MULTIPLIED_FREE_SITE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s\d+\*").unwrap());
/// ` 0*` - bookkeeping term, never makes reaction an adsorption
static ZERO_FREE_SITE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s0\*").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mechanism {
    /// adsorption, Hertz-Knudsen
    HK,
    /// surface reaction, Arrhenius
    AR,
}

impl Mechanism {
    pub fn label(&self) -> &'static str {
        match self {
            Mechanism::HK => "HK",
            Mechanism::AR => "AR",
        }
    }
}

impl std::fmt::Display for Mechanism {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

pub fn classify_reactants(reactants: &str) -> Mechanism {
    let consumes_site = FREE_SITE.is_match(reactants) || MULTIPLIED_FREE_SITE.is_match(reactants);
    if consumes_site && !ZERO_FREE_SITE.is_match(reactants) {
        Mechanism::HK
    } else {
        Mechanism::AR
    }
}

pub fn classify(equation: &str) -> Result<Mechanism, EquationError> {
    let (reactants, _) = split_sides(equation)?;
    Ok(classify_reactants(reactants))
}

/// (HK reactions, AR reactions), each keeping the input order
pub fn separate_reactions(
    reactions: &[ReactionRecord],
) -> Result<(Vec<&ReactionRecord>, Vec<&ReactionRecord>), EquationError> {
    let mut hk_reactions = Vec::new();
    let mut ar_reactions = Vec::new();
    for reaction in reactions {
        match classify(&reaction.equation)? {
            Mechanism::HK => hk_reactions.push(reaction),
            Mechanism::AR => ar_reactions.push(reaction),
        }
    }
    Ok((hk_reactions, ar_reactions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_adsorption() {
        assert_eq!(classify("12CO2 + * -> 12CO2*").unwrap(), Mechanism::HK);
        assert_eq!(classify("H2(g) + 2* -> 2H*").unwrap(), Mechanism::HK);
        assert_eq!(classify("CO + 10* -> CO*").unwrap(), Mechanism::HK);
    }

    #[test]
    fn test_surface_reaction() {
        assert_eq!(classify("CO* + O* - 0* -> CO2(g) + 2*").unwrap(), Mechanism::AR);
        // ` 0*` wins even if a real free site is present
        assert_eq!(classify("CO + * - 0* -> CO*").unwrap(), Mechanism::AR);
        assert_eq!(classify("FeCO* -> FeCO*").unwrap(), Mechanism::AR);
        // free sites on the product side only: desorption
        assert_eq!(classify("CO* -> CO(g) + *").unwrap(), Mechanism::AR);
        // the side is trimmed, a leading star has no whitespace before it
        assert_eq!(classify("* + CO -> CO*").unwrap(), Mechanism::AR);
    }

    #[test]
    fn test_classify_needs_arrow() {
        assert!(matches!(
            classify("CO + *"),
            Err(EquationError::MissingArrow(_))
        ));
    }

    #[test]
    fn test_separate_reactions_keeps_order() {
        let reactions: Vec<ReactionRecord> = [
            "CO + * -> CO*",
            "CO* + O* -> CO2 + 2*",
            "O2 + 2* -> 2O*",
            "CO2* -> CO2 + *",
        ]
        .iter()
        .map(|eq| ReactionRecord::new(eq, json!(0.1), json!(0.2)))
        .collect();
        let (hk, ar) = separate_reactions(&reactions).unwrap();
        let hk: Vec<&str> = hk.iter().map(|r| r.equation.as_str()).collect();
        let ar: Vec<&str> = ar.iter().map(|r| r.equation.as_str()).collect();
        assert_eq!(hk, vec!["CO + * -> CO*", "O2 + 2* -> 2O*"]);
        assert_eq!(ar, vec!["CO* + O* -> CO2 + 2*", "CO2* -> CO2 + *"]);
        assert_eq!(Mechanism::HK.to_string(), "HK");
    }
}
