use thiserror::Error;

/// Errors raised during lipid database generation.
///
/// All three variants are detected eagerly at generation time and abort the
/// whole run, since a partially generated candidate set would corrupt the
/// all-pairs interference analysis downstream.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LipidDatabaseError {
    /// An invalid search configuration, e.g. an inverted range.
    #[error("invalid configuration: {0}")]
    Configuration(String),
    /// A lipid class or modification reference that cannot be resolved.
    #[error("unknown reference: {0}")]
    Lookup(String),
    /// A chemical formula the mass provider cannot parse.
    #[error("cannot parse formula: {0}")]
    Formula(String),
}
