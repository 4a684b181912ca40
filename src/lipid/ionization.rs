use std::fmt;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::chemistry::constants::{MASS_ELECTRON, MASS_PROTON};
use crate::chemistry::elements::atomic_weights_mono_isotopic;

/// Ionization mode of the generated database, an adduct label plus the mass
/// the adduct adds to (or removes from) the neutral species.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum IonizationType {
    PositiveHydrogen,
    PositiveSodium,
    PositiveAmmonium,
    NegativeHydrogen,
    NegativeFormate,
    NegativeAcetate,
}

impl IonizationType {
    /// Mass added to the neutral monoisotopic mass by this adduct.
    pub fn added_mass(&self) -> f64 {
        let weights = atomic_weights_mono_isotopic();
        match self {
            IonizationType::PositiveHydrogen => MASS_PROTON,
            IonizationType::PositiveSodium => weights["Na"] - MASS_ELECTRON,
            IonizationType::PositiveAmmonium => {
                weights["N"] + 4.0 * weights["H"] - MASS_ELECTRON
            }
            IonizationType::NegativeHydrogen => -MASS_PROTON,
            IonizationType::NegativeFormate => {
                weights["C"] + weights["H"] + 2.0 * weights["O"] + MASS_ELECTRON
            }
            IonizationType::NegativeAcetate => {
                2.0 * weights["C"] + 3.0 * weights["H"] + 2.0 * weights["O"] + MASS_ELECTRON
            }
        }
    }
}

impl Display for IonizationType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            IonizationType::PositiveHydrogen => write!(f, "[M+H]+"),
            IonizationType::PositiveSodium => write!(f, "[M+Na]+"),
            IonizationType::PositiveAmmonium => write!(f, "[M+NH4]+"),
            IonizationType::NegativeHydrogen => write!(f, "[M-H]-"),
            IonizationType::NegativeFormate => write!(f, "[M+HCOO]-"),
            IonizationType::NegativeAcetate => write!(f, "[M+CH3COO]-"),
        }
    }
}
