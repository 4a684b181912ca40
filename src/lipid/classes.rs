use std::fmt;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::chemistry::sum_formula::{hill_formula, parse_formula};
use crate::error::LipidDatabaseError;

/// Structural top-level category of a lipid class.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum LipidCoreClass {
    FattyAcyls,
    Glycerolipids,
    Glycerophospholipids,
    Sphingolipids,
}

impl Display for LipidCoreClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LipidCoreClass::FattyAcyls => write!(f, "Fatty acyls"),
            LipidCoreClass::Glycerolipids => write!(f, "Glycerolipids"),
            LipidCoreClass::Glycerophospholipids => write!(f, "Glycerophospholipids"),
            LipidCoreClass::Sphingolipids => write!(f, "Sphingolipids"),
        }
    }
}

/// Main class within a core class.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum LipidMainClass {
    FattyAcids,
    Monoradylglycerols,
    Diradylglycerols,
    Triradylglycerols,
    Glycerophosphocholines,
    Glycerophosphoethanolamines,
    Glycerophosphoserines,
    Glycerophosphoglycerols,
    Glycerophosphates,
    Ceramides,
    Phosphosphingolipids,
}

impl Display for LipidMainClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LipidMainClass::FattyAcids => write!(f, "Fatty acids"),
            LipidMainClass::Monoradylglycerols => write!(f, "Monoradylglycerols"),
            LipidMainClass::Diradylglycerols => write!(f, "Diradylglycerols"),
            LipidMainClass::Triradylglycerols => write!(f, "Triradylglycerols"),
            LipidMainClass::Glycerophosphocholines => write!(f, "Glycerophosphocholines"),
            LipidMainClass::Glycerophosphoethanolamines => {
                write!(f, "Glycerophosphoethanolamines")
            }
            LipidMainClass::Glycerophosphoserines => write!(f, "Glycerophosphoserines"),
            LipidMainClass::Glycerophosphoglycerols => write!(f, "Glycerophosphoglycerols"),
            LipidMainClass::Glycerophosphates => write!(f, "Glycerophosphates"),
            LipidMainClass::Ceramides => write!(f, "Ceramides"),
            LipidMainClass::Phosphosphingolipids => write!(f, "Phosphosphingolipids"),
        }
    }
}

/// Immutable descriptor of a lipid class with a parametric formula.
///
/// The head-group formula is the element block shared by every species of the
/// class; the variable chain block is added per chain length and double-bond
/// count, see [`LipidClassDefinition::total_formula`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LipidClassDefinition {
    pub name: String,
    pub core_class: LipidCoreClass,
    pub main_class: LipidMainClass,
    pub abbreviation: String,
    pub head_group_formula: String,
    pub acyl_chains: u32,
    pub alkyl_chains: u32,
    pub fragments_positive: Vec<String>,
    pub fragments_negative: Vec<String>,
}

impl LipidClassDefinition {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &str,
        core_class: LipidCoreClass,
        main_class: LipidMainClass,
        abbreviation: &str,
        head_group_formula: &str,
        acyl_chains: u32,
        alkyl_chains: u32,
        fragments_positive: &[&str],
        fragments_negative: &[&str],
    ) -> Self {
        LipidClassDefinition {
            name: name.to_string(),
            core_class,
            main_class,
            abbreviation: abbreviation.to_string(),
            head_group_formula: head_group_formula.to_string(),
            acyl_chains,
            alkyl_chains,
            fragments_positive: fragments_positive.iter().map(|s| s.to_string()).collect(),
            fragments_negative: fragments_negative.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Total sum formula of the species with the given total chain length and
    /// double-bond count, in Hill notation.
    ///
    /// The chain block contributes `C{len}` and `H{2*len - 2*db - 2*acyl}`
    /// on top of the head group; each acyl linkage trades two hydrogens for
    /// the carbonyl oxygen already counted in the head group. Chain length 0
    /// contributes nothing (head-group-only species).
    ///
    /// # Example
    ///
    /// ```
    /// use lipidms::lipid::classes::lipid_class_catalog;
    ///
    /// let catalog = lipid_class_catalog();
    /// let pc = catalog.iter().find(|c| c.abbreviation == "PC").unwrap();
    /// assert_eq!(pc.total_formula(32, 0).unwrap(), "C40H80NO8P");
    /// ```
    pub fn total_formula(
        &self,
        chain_length: u32,
        double_bonds: u32,
    ) -> Result<String, LipidDatabaseError> {
        if self.head_group_formula.is_empty() {
            return Err(LipidDatabaseError::Lookup(format!(
                "lipid class {} has no formula template",
                self.name
            )));
        }
        let mut elements = parse_formula(&self.head_group_formula)?;
        if chain_length > 0 {
            let hydrogens =
                2 * chain_length as i32 - 2 * double_bonds as i32 - 2 * self.acyl_chains as i32;
            *elements.entry("C".to_string()).or_insert(0) += chain_length as i32;
            *elements.entry("H".to_string()).or_insert(0) += hydrogens;
        }
        Ok(hill_formula(&elements))
    }

    /// Display abbreviation for a concrete species, e.g. `PC (34:1)`.
    pub fn species_abbreviation(&self, chain_length: u32, double_bonds: u32) -> String {
        format!("{} ({}:{})", self.abbreviation, chain_length, double_bonds)
    }
}

/// Static catalog of supported lipid classes.
///
/// Head-group formulas are chosen so that the chain-block rule of
/// [`LipidClassDefinition::total_formula`] reproduces the literature sum
/// formulas, e.g. PC 32:0 -> C40H80NO8P (DPPC), FA 16:0 -> C16H32O2.
pub fn lipid_class_catalog() -> Vec<LipidClassDefinition> {
    vec![
        LipidClassDefinition::new(
            "Free fatty acids",
            LipidCoreClass::FattyAcyls,
            LipidMainClass::FattyAcids,
            "FA",
            "H2O2",
            1,
            0,
            &["[M+H-H2O]+"],
            &["[M-H]-"],
        ),
        LipidClassDefinition::new(
            "Monoacylglycerols",
            LipidCoreClass::Glycerolipids,
            LipidMainClass::Monoradylglycerols,
            "MG",
            "C3H8O4",
            1,
            0,
            &["[M+H-H2O]+", "[M+NH4-H2O]+"],
            &[],
        ),
        LipidClassDefinition::new(
            "Diacylglycerols",
            LipidCoreClass::Glycerolipids,
            LipidMainClass::Diradylglycerols,
            "DG",
            "C3H8O5",
            2,
            0,
            &["[M+H-H2O]+", "[M+NH4-H2O]+"],
            &[],
        ),
        LipidClassDefinition::new(
            "Triacylglycerols",
            LipidCoreClass::Glycerolipids,
            LipidMainClass::Triradylglycerols,
            "TG",
            "C3H8O6",
            3,
            0,
            &["[M+NH4]+", "[M+H-RCOOH]+"],
            &[],
        ),
        LipidClassDefinition::new(
            "Phosphatidylcholines",
            LipidCoreClass::Glycerophospholipids,
            LipidMainClass::Glycerophosphocholines,
            "PC",
            "C8H20NO8P",
            2,
            0,
            &["184.0733 (phosphocholine)"],
            &["[M-CH3]-"],
        ),
        LipidClassDefinition::new(
            "Phosphatidylethanolamines",
            LipidCoreClass::Glycerophospholipids,
            LipidMainClass::Glycerophosphoethanolamines,
            "PE",
            "C5H14NO8P",
            2,
            0,
            &["[M+H-141.0191]+"],
            &["140.0118 (phosphoethanolamine)", "196.0380"],
        ),
        LipidClassDefinition::new(
            "Phosphatidylserines",
            LipidCoreClass::Glycerophospholipids,
            LipidMainClass::Glycerophosphoserines,
            "PS",
            "C6H14NO10P",
            2,
            0,
            &[],
            &["[M-H-87.0320]- (serine loss)"],
        ),
        LipidClassDefinition::new(
            "Phosphatidylglycerols",
            LipidCoreClass::Glycerophospholipids,
            LipidMainClass::Glycerophosphoglycerols,
            "PG",
            "C6H15O10P",
            2,
            0,
            &[],
            &["152.9958 (glycerophosphate)"],
        ),
        LipidClassDefinition::new(
            "Phosphatidic acids",
            LipidCoreClass::Glycerophospholipids,
            LipidMainClass::Glycerophosphates,
            "PA",
            "C3H9O8P",
            2,
            0,
            &[],
            &["152.9958 (glycerophosphate)"],
        ),
        LipidClassDefinition::new(
            "Ceramides",
            LipidCoreClass::Sphingolipids,
            LipidMainClass::Ceramides,
            "Cer",
            "H3NO3",
            1,
            1,
            &["[M+H-H2O]+", "264.2686 (sphingosine)"],
            &["[M-H]-"],
        ),
        LipidClassDefinition::new(
            "Sphingomyelins",
            LipidCoreClass::Sphingolipids,
            LipidMainClass::Phosphosphingolipids,
            "SM",
            "C5H15N2O6P",
            1,
            1,
            &["184.0733 (phosphocholine)"],
            &[],
        ),
    ]
}

/// Look up a catalog entry by its abbreviation.
pub fn lipid_class_by_abbreviation<'a>(
    catalog: &'a [LipidClassDefinition],
    abbreviation: &str,
) -> Result<&'a LipidClassDefinition, LipidDatabaseError> {
    catalog
        .iter()
        .find(|definition| definition.abbreviation == abbreviation)
        .ok_or_else(|| {
            LipidDatabaseError::Lookup(format!("unknown lipid class: {}", abbreviation))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_formulas_are_parsable() {
        for definition in lipid_class_catalog() {
            assert!(
                parse_formula(&definition.head_group_formula).is_ok(),
                "head group of {} does not parse",
                definition.name
            );
        }
    }

    #[test]
    fn test_catalog_abbreviations_are_unique() {
        let catalog = lipid_class_catalog();
        for (i, a) in catalog.iter().enumerate() {
            for b in catalog.iter().skip(i + 1) {
                assert_ne!(a.abbreviation, b.abbreviation);
            }
        }
    }

    #[test]
    fn test_total_formula_free_fatty_acid() {
        let catalog = lipid_class_catalog();
        let fa = lipid_class_by_abbreviation(&catalog, "FA").unwrap();
        assert_eq!(fa.total_formula(16, 0).unwrap(), "C16H32O2");
        assert_eq!(fa.total_formula(18, 1).unwrap(), "C18H34O2");
    }

    #[test]
    fn test_total_formula_ceramide() {
        let catalog = lipid_class_catalog();
        let cer = lipid_class_by_abbreviation(&catalog, "Cer").unwrap();
        assert_eq!(cer.total_formula(34, 1).unwrap(), "C34H67NO3");
    }

    #[test]
    fn test_total_formula_chain_length_zero_is_head_group() {
        let catalog = lipid_class_catalog();
        let pc = lipid_class_by_abbreviation(&catalog, "PC").unwrap();
        assert_eq!(pc.total_formula(0, 0).unwrap(), "C8H20NO8P");
    }

    #[test]
    fn test_unknown_abbreviation_is_lookup_error() {
        let catalog = lipid_class_catalog();
        let result = lipid_class_by_abbreviation(&catalog, "XYZ");
        assert!(matches!(result, Err(LipidDatabaseError::Lookup(_))));
    }

    #[test]
    fn test_species_abbreviation_format() {
        let catalog = lipid_class_catalog();
        let pc = lipid_class_by_abbreviation(&catalog, "PC").unwrap();
        assert_eq!(pc.species_abbreviation(34, 1), "PC (34:1)");
    }
}
