use std::fmt;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::chemistry::elements::atomic_weights_mono_isotopic;
use crate::database::candidate::{CandidateRecord, InterferenceStatus};

/// Repeating-unit base of the Kendrick mass scale.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum KendrickBase {
    CH2,
    H,
}

impl KendrickBase {
    pub fn formula(&self) -> &'static str {
        match self {
            KendrickBase::CH2 => "CH2",
            KendrickBase::H => "H",
        }
    }

    /// Integer nominal mass of the base unit.
    pub fn nominal_mass(&self) -> u32 {
        match self {
            KendrickBase::CH2 => 14,
            KendrickBase::H => 1,
        }
    }

    /// Exact monoisotopic mass of the base unit.
    pub fn exact_mass(&self) -> f64 {
        let weights = atomic_weights_mono_isotopic();
        match self {
            KendrickBase::CH2 => weights["C"] + 2.0 * weights["H"],
            KendrickBase::H => weights["H"],
        }
    }

    /// Scaling factor from the IUPAC mass scale to the Kendrick scale.
    pub fn kendrick_factor(&self) -> f64 {
        self.nominal_mass() as f64 / self.exact_mass()
    }
}

impl Display for KendrickBase {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formula())
    }
}

/// Kendrick mass defect of a mass for the given base, the distance of the
/// rescaled mass to the next integer. Lies in `[0, 1)` by construction.
///
/// # Example
///
/// ```
/// use lipidms::database::kendrick::{kendrick_mass_defect, KendrickBase};
///
/// let kmd = kendrick_mass_defect(760.585082, KendrickBase::CH2);
/// assert!((0.0..1.0).contains(&kmd));
/// ```
pub fn kendrick_mass_defect(exact_mass: f64, base: KendrickBase) -> f64 {
    let kendrick_mass = exact_mass * base.kendrick_factor();
    kendrick_mass.ceil() - kendrick_mass
}

/// 2D plot data of a classified candidate set for one Kendrick base,
/// partitioned into one series per interference state. Every candidate lands
/// in exactly one series, id-ordered, with `x` the exact mass and `y` the
/// Kendrick mass defect.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KendrickPlotData {
    pub no_interference: Vec<(f64, f64)>,
    pub possible_interference: Vec<(f64, f64)>,
    pub isomeric_interference: Vec<(f64, f64)>,
}

impl KendrickPlotData {
    pub fn len(&self) -> usize {
        self.no_interference.len()
            + self.possible_interference.len()
            + self.isomeric_interference.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Project a classified candidate sequence onto the Kendrick plane of the
/// given base.
pub fn kendrick_plot_data(records: &[CandidateRecord], base: KendrickBase) -> KendrickPlotData {
    let mut plot_data = KendrickPlotData::default();
    for record in records {
        let point = (
            record.exact_mass,
            kendrick_mass_defect(record.exact_mass, base),
        );
        match &record.interference {
            InterferenceStatus::None => plot_data.no_interference.push(point),
            InterferenceStatus::Possible { .. } => plot_data.possible_interference.push(point),
            InterferenceStatus::Exact { .. } => plot_data.isomeric_interference.push(point),
        }
    }
    plot_data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chemistry::sum_formula::MonoisotopicMassProvider;
    use crate::chemistry::tolerance::MzTolerance;
    use crate::database::generator::{build_lipid_database, GeneratorConfig};
    use crate::lipid::classes::lipid_class_catalog;
    use crate::lipid::ionization::IonizationType;
    use rand::distributions::{Distribution, Uniform};

    #[test]
    fn test_kmd_lies_in_unit_interval() {
        let masses = Uniform::new(50.0, 2500.0);
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let mass = masses.sample(&mut rng);
            for base in [KendrickBase::CH2, KendrickBase::H] {
                let kmd = kendrick_mass_defect(mass, base);
                assert!((0.0..1.0).contains(&kmd), "kmd {} out of range", kmd);
            }
        }
    }

    #[test]
    fn test_kendrick_factor_ch2() {
        let factor = KendrickBase::CH2.kendrick_factor();
        // 14 / 14.01565...
        assert!(factor < 1.0);
        assert!((factor - 0.99888).abs() < 1e-5);
    }

    #[test]
    fn test_partition_covers_all_candidates() {
        let classes = lipid_class_catalog();
        let config = GeneratorConfig::new((30, 36), (0, 3), IonizationType::PositiveHydrogen);
        let tolerance = MzTolerance::new(0.01, 0.0);
        let records = build_lipid_database(
            &classes,
            &config,
            &tolerance,
            &MonoisotopicMassProvider,
        )
        .unwrap();

        for base in [KendrickBase::CH2, KendrickBase::H] {
            let plot_data = kendrick_plot_data(&records, base);
            assert_eq!(plot_data.len(), records.len());

            let expected_none = records
                .iter()
                .filter(|r| r.interference == InterferenceStatus::None)
                .count();
            assert_eq!(plot_data.no_interference.len(), expected_none);
        }
    }

    #[test]
    fn test_series_follow_candidate_order() {
        let classes = lipid_class_catalog();
        let config = GeneratorConfig::new((30, 34), (0, 2), IonizationType::PositiveHydrogen);
        let tolerance = MzTolerance::new(0.005, 0.0);
        let records = build_lipid_database(
            &classes,
            &config,
            &tolerance,
            &MonoisotopicMassProvider,
        )
        .unwrap();

        let plot_data = kendrick_plot_data(&records, KendrickBase::CH2);
        let unclassified: Vec<f64> = records
            .iter()
            .filter(|r| r.interference == InterferenceStatus::None)
            .map(|r| r.exact_mass)
            .collect();
        let xs: Vec<f64> = plot_data.no_interference.iter().map(|p| p.0).collect();
        assert_eq!(xs, unclassified);
    }
}
