use std::fmt;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Number of decimals of the display representation of an exact mass. All
/// interference comparisons run on this representation, since downstream
/// consumers compare by the displayed value.
pub const MASS_DISPLAY_DECIMALS: i32 = 6;

/// Round a mass to the fixed display precision.
pub fn display_mass(mass: f64) -> f64 {
    let scale = 10f64.powi(MASS_DISPLAY_DECIMALS);
    (mass * scale).round() / scale
}

/// Interference classification of a candidate relative to the rest of the
/// generated set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum InterferenceStatus {
    /// No other candidate falls within the tolerance window.
    None,
    /// Another candidate lies within tolerance but is not mass-identical.
    Possible { peer: String },
    /// Another candidate has the identical rounded exact mass.
    Exact { peer: String },
}

impl Default for InterferenceStatus {
    fn default() -> Self {
        InterferenceStatus::None
    }
}

impl Display for InterferenceStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            InterferenceStatus::None => write!(f, ""),
            InterferenceStatus::Possible { peer } => {
                write!(f, "Possible interference with: {}", peer)
            }
            InterferenceStatus::Exact { peer } => write!(f, "Interference with: {}", peer),
        }
    }
}

/// One theoretical lipid species of the generated database.
///
/// Records are created once per (class, chain length, double bonds
/// [, modification]) combination, annotated exactly once by the interference
/// classifier and then handed frozen to consumers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    /// Sequential id, assigned in emission order starting at 1.
    pub id: usize,
    pub core_class: String,
    pub main_class: String,
    pub lipid_class: String,
    pub formula: String,
    pub abbreviation: String,
    pub ionization: String,
    /// Adduct mass included, rounded to the display precision.
    pub exact_mass: f64,
    pub interference: InterferenceStatus,
    pub fragments_positive: String,
    pub fragments_negative: String,
}

impl CandidateRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        core_class: String,
        main_class: String,
        lipid_class: String,
        formula: String,
        abbreviation: String,
        ionization: String,
        exact_mass: f64,
        fragments_positive: String,
        fragments_negative: String,
    ) -> Self {
        CandidateRecord {
            id: 0,
            core_class,
            main_class,
            lipid_class,
            formula,
            abbreviation,
            ionization,
            exact_mass,
            interference: InterferenceStatus::None,
            fragments_positive,
            fragments_negative,
        }
    }

    /// Legacy free-text note of the interference column.
    pub fn interference_note(&self) -> String {
        self.interference.to_string()
    }
}
