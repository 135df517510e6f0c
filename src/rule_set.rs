//! Serializable rule tables.
//!
//! A [RuleSet] is the raw material an [Inflector](crate::Inflector) is built
//! from. Every collection is optional, so a TOML file only needs the parts it
//! cares about:
//!
//! ```
//! use noun_inflector::RuleSet;
//!
//! let rules = RuleSet::from_toml_str(
//!     r#"
//!     plurals = [['$', 's']]
//!     uncountable = ['fish']
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(rules.plurals.len(), 1);
//! assert!(rules.singular.is_empty());
//! ```
use crate::error::Error;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static ENGLISH_TOML: &str = include_str!("../rules/english.toml");

static ENGLISH: Lazy<RuleSet> = Lazy::new(|| {
    RuleSet::from_toml_str(ENGLISH_TOML).expect("Could not parse the embedded English rule set")
});

/// Plural rules, singular rules, irregular pairs, and uncountable words.
///
/// Rules are `(pattern, replacement)` pairs. Later rules take precedence over
/// earlier ones when more than one matches a word.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct RuleSet {
    pub plurals: Vec<(String, String)>,
    pub singular: Vec<(String, String)>,
    /// `(singular, plural)` pairs.
    pub irregular_pairs: Vec<(String, String)>,
    pub uncountable: Vec<String>,
}

impl RuleSet {
    /// The standard English rule set.
    pub fn english() -> &'static RuleSet {
        &ENGLISH
    }

    pub fn from_toml_str(toml: &str) -> Result<Self, Error> {
        Ok(toml::from_str(toml)?)
    }
}
