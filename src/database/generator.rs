use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::chemistry::sum_formula::MassProvider;
use crate::chemistry::tolerance::MzTolerance;
use crate::database::candidate::{display_mass, CandidateRecord};
use crate::database::interference::annotate_interferences;
use crate::error::LipidDatabaseError;
use crate::lipid::classes::LipidClassDefinition;
use crate::lipid::ionization::IonizationType;
use crate::lipid::modification::LipidModification;

/// Search configuration for database generation. Ranges are inclusive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub min_chain_length: u32,
    pub max_chain_length: u32,
    pub min_double_bonds: u32,
    pub max_double_bonds: u32,
    pub ionization: IonizationType,
    /// Active chain modifications; every valid combination additionally emits
    /// one modified record per entry.
    pub modifications: Vec<LipidModification>,
}

impl GeneratorConfig {
    pub fn new(
        chain_length: (u32, u32),
        double_bonds: (u32, u32),
        ionization: IonizationType,
    ) -> Self {
        GeneratorConfig {
            min_chain_length: chain_length.0,
            max_chain_length: chain_length.1,
            min_double_bonds: double_bonds.0,
            max_double_bonds: double_bonds.1,
            ionization,
            modifications: Vec::new(),
        }
    }

    pub fn with_modifications(mut self, modifications: Vec<LipidModification>) -> Self {
        self.modifications = modifications;
        self
    }

    pub fn validate(&self) -> Result<(), LipidDatabaseError> {
        if self.min_chain_length > self.max_chain_length {
            return Err(LipidDatabaseError::Configuration(format!(
                "chain length range {}..={} is inverted",
                self.min_chain_length, self.max_chain_length
            )));
        }
        if self.min_double_bonds > self.max_double_bonds {
            return Err(LipidDatabaseError::Configuration(format!(
                "double bond range {}..={} is inverted",
                self.min_double_bonds, self.max_double_bonds
            )));
        }
        Ok(())
    }
}

/// Chain length 0 is a sentinel for classes without a variable chain and
/// bypasses the lower-bound check.
pub fn chain_length_is_valid(chain_length: u32, min_chain_length: u32) -> bool {
    chain_length == 0 || chain_length >= min_chain_length
}

/// A chain cannot carry more unsaturations than carbon-carbon bonds, so a
/// positive double-bond count must not exceed `chain_length - 1`.
pub fn double_bonds_are_valid(chain_length: u32, double_bonds: u32) -> bool {
    double_bonds == 0 || double_bonds <= chain_length.saturating_sub(1)
}

/// One valid (class, chain length, double bonds) combination.
#[derive(Clone, Copy, Debug)]
pub struct ChainCombination<'a> {
    pub definition: &'a LipidClassDefinition,
    pub chain_length: u32,
    pub double_bonds: u32,
}

/// Lazily enumerate all valid combinations, class-major, then chain length,
/// then double bonds.
pub fn enumerate_chain_combinations<'a>(
    classes: &'a [LipidClassDefinition],
    config: &'a GeneratorConfig,
) -> impl Iterator<Item = ChainCombination<'a>> + 'a {
    classes
        .iter()
        .cartesian_product(config.min_chain_length..=config.max_chain_length)
        .cartesian_product(config.min_double_bonds..=config.max_double_bonds)
        .map(
            |((definition, chain_length), double_bonds)| ChainCombination {
                definition,
                chain_length,
                double_bonds,
            },
        )
        .filter(move |combination| {
            chain_length_is_valid(combination.chain_length, config.min_chain_length)
                && double_bonds_are_valid(combination.chain_length, combination.double_bonds)
        })
}

/// Generate the ordered candidate sequence for the given classes and
/// configuration.
///
/// Emission order is the combination order of
/// [`enumerate_chain_combinations`], with the unmodified record before its
/// modification-expanded variants. Ids are assigned by a separate pass after
/// collection, 1-based with no gaps.
///
/// Fails eagerly with no partial output: `Configuration` on inverted ranges,
/// `Lookup` on an unresolvable formula template, `Formula` when the mass
/// provider cannot parse a formula.
pub fn generate_candidates(
    classes: &[LipidClassDefinition],
    config: &GeneratorConfig,
    provider: &dyn MassProvider,
) -> Result<Vec<CandidateRecord>, LipidDatabaseError> {
    config.validate()?;

    let adduct_mass = config.ionization.added_mass();
    let ionization_label = config.ionization.to_string();
    let mut records = Vec::new();

    for combination in enumerate_chain_combinations(classes, config) {
        let definition = combination.definition;
        let formula =
            definition.total_formula(combination.chain_length, combination.double_bonds)?;
        let base_mass = provider.exact_mass(&formula)?;
        let abbreviation =
            definition.species_abbreviation(combination.chain_length, combination.double_bonds);

        records.push(CandidateRecord::new(
            definition.core_class.to_string(),
            definition.main_class.to_string(),
            definition.name.clone(),
            formula.clone(),
            abbreviation.clone(),
            ionization_label.clone(),
            display_mass(base_mass + adduct_mass),
            definition.fragments_positive.join(", "),
            definition.fragments_negative.join(", "),
        ));

        for modification in &config.modifications {
            // modified rows are combinatorial variants without independently
            // characterized fragments
            records.push(CandidateRecord::new(
                definition.core_class.to_string(),
                definition.main_class.to_string(),
                format!("{} {}", definition.name, modification),
                format!("{}{}", formula, modification.formula_fragment),
                format!("{}{}", abbreviation, modification.formula_fragment),
                ionization_label.clone(),
                display_mass(base_mass + adduct_mass + modification.mass_delta),
                String::new(),
                String::new(),
            ));
        }
    }

    for (index, record) in records.iter_mut().enumerate() {
        record.id = index + 1;
    }

    Ok(records)
}

/// Run the full pipeline: generation over the configured search space, then
/// interference classification over the complete set. Classification is a
/// global all-pairs property, so it only starts once generation has finished.
pub fn build_lipid_database(
    classes: &[LipidClassDefinition],
    config: &GeneratorConfig,
    tolerance: &MzTolerance,
    provider: &dyn MassProvider,
) -> Result<Vec<CandidateRecord>, LipidDatabaseError> {
    let mut records = generate_candidates(classes, config, provider)?;
    annotate_interferences(&mut records, tolerance);
    Ok(records)
}
