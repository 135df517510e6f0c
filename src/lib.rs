// #![deny(missing_docs)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Pluralize and singularize English nouns.
//!
//! Inflection is driven by an ordered table of rules. Every word is put
//! through three tiers:
//!
//! - **Uncountable** words, like "fish" or "equipment", never change.
//! - **Irregular** words, like "person" and "people", are swapped for their
//!   registered counterpart.
//! - **Regular** rules, regex and replacement pairs like `(x|ch|ss|sh)$` to
//!   `$1es`, handle everything else. When several rules match, the one
//!   registered last wins, so your own rules always beat the built-in ones.
//!
//! Identifiers work too. The last word of a dashed, underscored, slashed,
//! spaced, or camel-cased identifier decides how it is inflected, and the
//! casing of the identifier is kept:
//!
//! ```
//! use noun_inflector::{pluralize, singularize};
//!
//! assert_eq!(pluralize("ox"), "oxen");
//! assert_eq!(pluralize("node_child"), "node_children");
//! assert_eq!(pluralize("SuperWoman"), "SuperWomen");
//! assert_eq!(pluralize("funky jeans"), "funky jeans");
//! assert_eq!(singularize("octopi"), "octopus");
//! ```
//!
//! # The default inflector
//!
//! The free functions in this crate share one process-wide [Inflector]
//! loaded with the standard English rules. It is created the first time it
//! is used. Rules added through [default_inflector_mut] are seen by every
//! later caller in the process. Code that wants its own rules without
//! affecting anyone else should build an [Inflector] and pass it around
//! instead.
//!
//! ```
//! use noun_inflector::Inflector;
//!
//! let mut inflector = Inflector::english();
//! inflector.register_irregular("octopus", "octopuses");
//! assert_eq!(inflector.pluralize("octopus"), "octopuses");
//! assert_eq!(noun_inflector::pluralize("octopus"), "octopi");
//! ```
//!
//! # Known oddities
//!
//! Irregular words are matched against the end of the whole word in the order
//! they were registered, not by the longest match. The standard rules
//! register "man" before anything ending in "man", so every such word is
//! inflected through "man".
//!
//! The uncountable check only looks at the whole word and at its last word.
//! A word that merely ends in an uncountable noun without a separator is
//! inflected by the regular rules, so "subspecies" becomes "subspecy" even
//! though "species" is uncountable.

mod error;
mod resolver;
mod util;

pub mod count;
pub mod inflector;
pub mod noun;
pub mod rule;
pub mod rule_set;
pub mod store;
pub mod term;

pub use count::Count;
pub use error::Error;
pub use inflector::{Inflector, PluralizeOptions};
pub use rule::Rule;
pub use rule_set::RuleSet;

use once_cell::sync::Lazy;
use std::{
    borrow::Cow,
    sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

static DEFAULT_INFLECTOR: Lazy<RwLock<Inflector>> =
    Lazy::new(|| RwLock::new(Inflector::english()));

/// Shared access to the process-wide inflector.
pub fn default_inflector() -> RwLockReadGuard<'static, Inflector> {
    DEFAULT_INFLECTOR
        .read()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Exclusive access to the process-wide inflector, for registering rules.
/// Hold the guard only as long as needed, since every other caller waits on
/// it.
///
/// ```
/// noun_inflector::default_inflector_mut().register_irregular("die", "dice");
/// assert_eq!(noun_inflector::pluralize("die"), "dice");
/// ```
pub fn default_inflector_mut() -> RwLockWriteGuard<'static, Inflector> {
    DEFAULT_INFLECTOR
        .write()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Pluralizes `word` with the default inflector.
pub fn pluralize(word: &str) -> Cow<'_, str> {
    default_inflector().pluralize(word)
}

/// Prefixes `word` with `count`, pluralizing it unless the count is one, using
/// the default inflector.
///
/// ```
/// use noun_inflector::{pluralize_with_count, PluralizeOptions};
///
/// let options = PluralizeOptions::default();
/// assert_eq!(pluralize_with_count(2, "wife", options), "2 wives");
/// assert_eq!(pluralize_with_count(1, "wife", options), "1 wife");
/// ```
pub fn pluralize_with_count<'c>(
    count: impl Into<Count<'c>>,
    word: &str,
    options: PluralizeOptions,
) -> String {
    default_inflector().pluralize_with_count(count, word, options)
}

/// Singularizes `word` with the default inflector.
pub fn singularize(word: &str) -> Cow<'_, str> {
    default_inflector().singularize(word)
}

#[cfg(test)]
mod tests {
    use crate::{Inflector, PluralizeOptions};

    #[test]
    fn defaults() {
        let tests = [
            ("word", "words"),
            ("ox", "oxen"),
            ("octopus", "octopi"),
            ("cow", "kine"),
        ];
        for (singular, plural) in tests {
            assert_eq!(super::pluralize(singular), plural, "pluralize({})", singular);
            assert_eq!(super::singularize(plural), singular, "singularize({})", plural);
        }
    }

    #[test]
    fn default_counts() {
        let options = PluralizeOptions::default();
        assert_eq!(super::pluralize_with_count(5, "box", options), "5 boxes");
        assert_eq!(super::pluralize_with_count(1, "box", options), "1 box");
    }

    #[test]
    fn default_registration() {
        // Uses a made up word so other tests sharing the default inflector
        // are not affected.
        assert_eq!(super::pluralize("blorp"), "blorps");
        assert_eq!(super::pluralize("blorf"), "blorves");
        super::default_inflector_mut().register_uncountable("blorp");
        assert_eq!(super::pluralize("blorp"), "blorp");
        assert_eq!(super::pluralize("red-blorp"), "red-blorp");
    }

    #[test]
    fn english_rules() {
        let inflector = Inflector::english();

        assert_eq!(inflector.pluralize("cow"), "kine");
        assert_eq!(inflector.singularize("kine"), "cow");
        assert_eq!(inflector.pluralize("item"), "items");
        assert_eq!(inflector.singularize("items"), "item");
    }

    #[test]
    fn compound_words() {
        let inflector = Inflector::english();

        assert_eq!(inflector.pluralize("woman"), "women");
        assert_eq!(inflector.pluralize("salesperson"), "salespeople");
        assert_eq!(inflector.singularize("women"), "woman");
        assert_eq!(inflector.singularize("salespeople"), "salesperson");
        assert_eq!(inflector.singularize("pufferfish"), "pufferfish");
        assert_eq!(inflector.pluralize("price"), "prices");
        assert_eq!(inflector.singularize("subspecies"), "subspecy");
    }

    #[test]
    fn camel_case_is_preserved() {
        let inflector = Inflector::english();

        let tests = [
            ("SuperWoman", "SuperWomen"),
            ("superWoman", "superWomen"),
            ("SuperMan", "SuperMen"),
            ("superMan", "superMen"),
            ("FriedRice", "FriedRice"),
            ("friedRice", "friedRice"),
        ];
        for (singular, plural) in tests {
            assert_eq!(inflector.pluralize(singular), plural, "pluralize({})", singular);
            assert_eq!(inflector.singularize(plural), singular, "singularize({})", plural);
        }
    }

    #[test]
    fn camel_case_irregulars() {
        let mut inflector = Inflector::english();
        inflector.register_irregular("unitOfMeasure", "unitsOfMeasure");
        inflector.register_irregular("tipoDocumento", "tiposDocumento");

        assert_eq!(inflector.singularize("unitsOfMeasure"), "unitOfMeasure");
        assert_eq!(inflector.pluralize("unitOfMeasure"), "unitsOfMeasure");
        assert_eq!(inflector.singularize("tiposDocumento"), "tipoDocumento");
        assert_eq!(inflector.pluralize("tipoDocumento"), "tiposDocumento");
    }

    #[test]
    fn uncountable_round_trip() {
        let inflector = Inflector::english();
        for word in crate::RuleSet::english().uncountable.iter() {
            assert_eq!(inflector.pluralize(word), *word, "pluralize({})", word);
            assert_eq!(inflector.singularize(word), *word, "singularize({})", word);
            let upper = word.to_uppercase();
            assert_eq!(inflector.pluralize(&upper), upper, "pluralize({})", upper);
        }
    }

    #[test]
    fn regular_round_trip() {
        let mut inflector = Inflector::default();
        inflector.register_plural_rule("$", "s").unwrap();
        inflector.register_singular_rule("s$", "").unwrap();
        for word in ["cat", "dog", "red-cow", "redCow", "node_thing", "a b c"] {
            let plural = inflector.pluralize(word).into_owned();
            assert_eq!(inflector.singularize(&plural), word, "round trip of {}", word);
        }
    }

    #[test]
    fn last_registered_plural_rule_wins() {
        let mut inflector = Inflector::default();
        inflector.register_plural_rule("$", "s").unwrap();
        inflector.register_plural_rule("$", "z").unwrap();
        assert_eq!(inflector.pluralize("cat"), "catz");
    }

    // These match ActiveSupport::Inflector's pluralize and singularize tests.
    const PAIRS: &[(&str, &str)] = &[
        ("search", "searches"),
        ("switch", "switches"),
        ("fix", "fixes"),
        ("box", "boxes"),
        ("process", "processes"),
        ("address", "addresses"),
        ("case", "cases"),
        ("stack", "stacks"),
        ("wish", "wishes"),
        ("fish", "fish"),
        ("jeans", "jeans"),
        ("funky jeans", "funky jeans"),
        ("my money", "my money"),
        ("category", "categories"),
        ("query", "queries"),
        ("ability", "abilities"),
        ("agency", "agencies"),
        ("movie", "movies"),
        ("archive", "archives"),
        ("index", "indices"),
        ("wife", "wives"),
        ("safe", "saves"),
        ("half", "halves"),
        ("move", "moves"),
        ("salesperson", "salespeople"),
        ("person", "people"),
        ("spokesman", "spokesmen"),
        ("man", "men"),
        ("woman", "women"),
        ("basis", "bases"),
        ("diagnosis", "diagnoses"),
        ("diagnosis_a", "diagnosis_as"),
        ("datum", "data"),
        ("medium", "media"),
        ("stadium", "stadia"),
        ("analysis", "analyses"),
        ("my_analysis", "my_analyses"),
        ("node_child", "node_children"),
        ("child", "children"),
        ("experience", "experiences"),
        ("day", "days"),
        ("comment", "comments"),
        ("foobar", "foobars"),
        ("newsletter", "newsletters"),
        ("old_news", "old_news"),
        ("news", "news"),
        ("series", "series"),
        ("miniseries", "miniseries"),
        ("species", "species"),
        ("quiz", "quizzes"),
        ("perspective", "perspectives"),
        ("ox", "oxen"),
        ("photo", "photos"),
        ("buffalo", "buffaloes"),
        ("tomato", "tomatoes"),
        ("dwarf", "dwarves"),
        ("elf", "elves"),
        ("information", "information"),
        ("equipment", "equipment"),
        ("bus", "buses"),
        ("status", "statuses"),
        ("status_code", "status_codes"),
        ("mouse", "mice"),
        ("louse", "lice"),
        ("house", "houses"),
        ("octopus", "octopi"),
        ("virus", "viri"),
        ("alias", "aliases"),
        ("portfolio", "portfolios"),
        ("vertex", "vertices"),
        ("matrix", "matrices"),
        ("matrix_fu", "matrix_fus"),
        ("axis", "axes"),
        ("taxi", "taxis"),
        ("testis", "testes"),
        ("crisis", "crises"),
        ("rice", "rice"),
        ("shoe", "shoes"),
        ("horse", "horses"),
        ("prize", "prizes"),
        ("edge", "edges"),
        ("database", "databases"),
        ("|ice", "|ices"),
        ("|ouse", "|ouses"),
        ("slice", "slices"),
        ("police", "police"),
        ("bonus", "bonuses"),
    ];

    #[test]
    fn pluralize_english() {
        let inflector = Inflector::english();
        for (singular, plural) in PAIRS {
            assert_eq!(
                inflector.pluralize(singular),
                *plural,
                "pluralize({}) = {}",
                singular,
                plural,
            );
        }
    }

    #[test]
    fn singularize_english() {
        let inflector = Inflector::english();
        for (singular, plural) in PAIRS {
            assert_eq!(
                inflector.singularize(plural),
                *singular,
                "singularize({}) = {}",
                plural,
                singular,
            );
        }
    }
}
