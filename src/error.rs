use thiserror::Error;

/// Errors returned while building rules or rule sets. Inflecting a word never
/// fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("`{pattern}` is not a valid rule pattern: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("could not parse rule set: {0}")]
    InvalidRuleSet(#[from] toml::de::Error),
}
