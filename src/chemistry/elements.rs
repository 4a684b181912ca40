use std::collections::HashMap;

/// Monoisotopic atomic weights of the elements occurring in lipid formulas.
pub fn atomic_weights_mono_isotopic() -> HashMap<&'static str, f64> {
    let mut map = HashMap::new();
    map.insert("H", 1.00782503207);
    map.insert("C", 12.0);
    map.insert("N", 14.0030740048);
    map.insert("O", 15.99491461956);
    map.insert("P", 30.97376163);
    map.insert("S", 31.97207100);
    map.insert("Na", 22.9897692809);
    map.insert("K", 38.96370668);
    map.insert("Cl", 34.96885268);
    map.insert("F", 18.99840322);
    map
}
