use std::fmt;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::chemistry::sum_formula::MassProvider;
use crate::error::LipidDatabaseError;

/// A chemical modification applied on top of a generated species.
///
/// The formula fragment is appended to the base formula and abbreviation as
/// written; a leading `-` marks a loss, in which case the mass delta is
/// negative.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LipidModification {
    pub name: String,
    pub formula_fragment: String,
    pub mass_delta: f64,
}

impl LipidModification {
    pub fn new(name: &str, formula_fragment: &str, mass_delta: f64) -> Self {
        LipidModification {
            name: name.to_string(),
            formula_fragment: formula_fragment.to_string(),
            mass_delta,
        }
    }

    /// Build a modification whose mass delta is derived from its formula
    /// fragment via the given mass provider.
    pub fn from_formula(
        name: &str,
        formula_fragment: &str,
        provider: &dyn MassProvider,
    ) -> Result<Self, LipidDatabaseError> {
        let (sign, formula) = match formula_fragment.strip_prefix('-') {
            Some(rest) => (-1.0, rest),
            None => (1.0, formula_fragment),
        };
        let mass_delta = sign * provider.exact_mass(formula)?;
        Ok(LipidModification::new(name, formula_fragment, mass_delta))
    }
}

impl Display for LipidModification {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Look up a modification by name in an active-modification list.
pub fn modification_by_name<'a>(
    modifications: &'a [LipidModification],
    name: &str,
) -> Result<&'a LipidModification, LipidDatabaseError> {
    modifications
        .iter()
        .find(|modification| modification.name == name)
        .ok_or_else(|| LipidDatabaseError::Lookup(format!("unknown modification: {}", name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chemistry::sum_formula::MonoisotopicMassProvider;

    #[test]
    fn test_mass_delta_from_formula() {
        let provider = MonoisotopicMassProvider;
        let oxidation = LipidModification::from_formula("Oxidation", "O", &provider).unwrap();
        let delta = (oxidation.mass_delta * 1e5).round() / 1e5;
        assert_eq!(delta, 15.99491);
    }

    #[test]
    fn test_leading_minus_is_a_loss() {
        let provider = MonoisotopicMassProvider;
        let dehydration =
            LipidModification::from_formula("Water loss", "-H2O", &provider).unwrap();
        assert!(dehydration.mass_delta < 0.0);
        let delta = (dehydration.mass_delta * 1e5).round() / 1e5;
        assert_eq!(delta, -18.01056);
        assert_eq!(dehydration.formula_fragment, "-H2O");
    }

    #[test]
    fn test_modification_lookup() {
        let modifications = vec![LipidModification::new("Oxidation", "O", 15.994915)];
        assert!(modification_by_name(&modifications, "Oxidation").is_ok());
        assert!(matches!(
            modification_by_name(&modifications, "Methylation"),
            Err(LipidDatabaseError::Lookup(_))
        ));
    }
}
