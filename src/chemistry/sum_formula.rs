use std::collections::BTreeMap;

use crate::chemistry::elements::atomic_weights_mono_isotopic;
use crate::error::LipidDatabaseError;

/// A parsed chemical sum formula.
///
/// Element counts are kept in a `BTreeMap` so that mass summation runs in a
/// fixed order and repeated parses of the same formula produce bit-identical
/// weights.
pub struct SumFormula {
    pub formula: String,
    pub elements: BTreeMap<String, i32>,
}

impl SumFormula {
    pub fn new(formula: &str) -> Result<Self, LipidDatabaseError> {
        let elements = parse_formula(formula)?;
        Ok(SumFormula {
            formula: formula.to_string(),
            elements,
        })
    }

    /// Calculate the monoisotopic weight of the chemical formula.
    ///
    /// Returns:
    ///
    /// * `f64` - The monoisotopic weight of the chemical formula.
    ///
    /// # Example
    ///
    /// ```
    /// use lipidms::chemistry::sum_formula::SumFormula;
    ///
    /// let sum_formula = SumFormula::new("H2O").unwrap();
    /// let weight = (sum_formula.monoisotopic_weight() * 1e5).round() / 1e5;
    /// assert_eq!(weight, 18.01056);
    /// ```
    pub fn monoisotopic_weight(&self) -> f64 {
        let atomic_weights = atomic_weights_mono_isotopic();
        self.elements.iter().fold(0.0, |acc, (element, count)| {
            acc + atomic_weights[element.as_str()] * *count as f64
        })
    }

    /// The formula in Hill notation (C first, H second, rest alphabetical).
    pub fn hill_notation(&self) -> String {
        hill_formula(&self.elements)
    }
}

/// Black-box seam for exact-mass calculation, so hosts can substitute their
/// own mass calculator for the built-in monoisotopic one.
pub trait MassProvider {
    fn exact_mass(&self, formula: &str) -> Result<f64, LipidDatabaseError>;
}

/// Default mass provider backed by the monoisotopic atomic-weight table.
pub struct MonoisotopicMassProvider;

impl MassProvider for MonoisotopicMassProvider {
    fn exact_mass(&self, formula: &str) -> Result<f64, LipidDatabaseError> {
        Ok(SumFormula::new(formula)?.monoisotopic_weight())
    }
}

/// Parse a chemical formula into a map of elements and their counts.
///
/// Arguments:
///
/// * `formula` - The chemical formula to parse.
///
/// Returns:
///
/// * `Result<BTreeMap<String, i32>, LipidDatabaseError>` - A map of elements and their counts.
///
/// # Example
///
/// ```
/// use lipidms::chemistry::sum_formula::parse_formula;
///
/// let elements = parse_formula("H2O").unwrap();
/// assert_eq!(elements.get("H"), Some(&2));
/// assert_eq!(elements.get("O"), Some(&1));
/// ```
pub fn parse_formula(formula: &str) -> Result<BTreeMap<String, i32>, LipidDatabaseError> {
    let mut element_counts = BTreeMap::new();
    let mut current_element = String::new();
    let mut current_count = String::new();

    for c in formula.chars() {
        if c.is_ascii_uppercase() {
            flush_element(&mut current_element, &mut current_count, &mut element_counts)?;
            current_element.push(c);
        } else if c.is_ascii_lowercase() {
            current_element.push(c);
        } else if c.is_ascii_digit() {
            current_count.push(c);
        } else {
            return Err(LipidDatabaseError::Formula(format!(
                "unexpected character '{}' in formula {}",
                c, formula
            )));
        }
    }
    flush_element(&mut current_element, &mut current_count, &mut element_counts)?;

    Ok(element_counts)
}

fn flush_element(
    current_element: &mut String,
    current_count: &mut String,
    element_counts: &mut BTreeMap<String, i32>,
) -> Result<(), LipidDatabaseError> {
    if current_element.is_empty() {
        return Ok(());
    }
    if !atomic_weights_mono_isotopic().contains_key(current_element.as_str()) {
        return Err(LipidDatabaseError::Formula(format!(
            "unknown element: {}",
            current_element
        )));
    }
    let count = current_count.parse::<i32>().unwrap_or(1);
    *element_counts.entry(current_element.clone()).or_insert(0) += count;
    current_element.clear();
    current_count.clear();
    Ok(())
}

/// Render element counts as a formula string in Hill notation, carbon first,
/// hydrogen second, remaining elements alphabetical. Counts of one are
/// omitted, counts of zero are skipped.
///
/// # Example
///
/// ```
/// use lipidms::chemistry::sum_formula::{hill_formula, parse_formula};
///
/// let elements = parse_formula("C8H20NO8P").unwrap();
/// assert_eq!(hill_formula(&elements), "C8H20NO8P");
/// ```
pub fn hill_formula(elements: &BTreeMap<String, i32>) -> String {
    let mut formula = String::new();
    for symbol in ["C", "H"] {
        if let Some(&count) = elements.get(symbol) {
            append_element(&mut formula, symbol, count);
        }
    }
    for (symbol, &count) in elements {
        if symbol != "C" && symbol != "H" {
            append_element(&mut formula, symbol, count);
        }
    }
    formula
}

fn append_element(formula: &mut String, symbol: &str, count: i32) {
    if count == 0 {
        return;
    }
    formula.push_str(symbol);
    if count != 1 {
        formula.push_str(&count.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LipidDatabaseError;

    #[test]
    fn test_parse_accumulates_repeated_elements() {
        let elements = parse_formula("C3H8O4C16H30").unwrap();
        assert_eq!(elements.get("C"), Some(&19));
        assert_eq!(elements.get("H"), Some(&38));
        assert_eq!(elements.get("O"), Some(&4));
    }

    #[test]
    fn test_unknown_element_is_formula_error() {
        let result = parse_formula("C3Xx2");
        assert!(matches!(result, Err(LipidDatabaseError::Formula(_))));
    }

    #[test]
    fn test_unexpected_character_is_formula_error() {
        let result = parse_formula("C3(H8)");
        assert!(matches!(result, Err(LipidDatabaseError::Formula(_))));
    }

    #[test]
    fn test_monoisotopic_weight_ch2() {
        let ch2 = SumFormula::new("CH2").unwrap();
        let weight = (ch2.monoisotopic_weight() * 1e5).round() / 1e5;
        assert_eq!(weight, 14.01565);
    }

    #[test]
    fn test_hill_notation_orders_carbon_first() {
        let sum_formula = SumFormula::new("O2H32C16").unwrap();
        assert_eq!(sum_formula.hill_notation(), "C16H32O2");
    }

    #[test]
    fn test_repeated_parses_give_bit_identical_weights() {
        let first = SumFormula::new("C40H80NO8P").unwrap().monoisotopic_weight();
        let second = SumFormula::new("C40H80NO8P").unwrap().monoisotopic_weight();
        assert_eq!(first, second);
    }

    #[test]
    fn test_default_provider_matches_sum_formula() {
        let provider = MonoisotopicMassProvider;
        let mass = provider.exact_mass("C16H32O2").unwrap();
        let weight = SumFormula::new("C16H32O2").unwrap().monoisotopic_weight();
        assert_eq!(mass, weight);
    }
}
