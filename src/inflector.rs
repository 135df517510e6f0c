//! The inflection engine.
//!
//! An [Inflector] owns a rule store and a memo cache. It can start empty and
//! be taught rules one at a time, or be built from a whole [RuleSet]:
//!
//! ```
//! use noun_inflector::Inflector;
//!
//! let mut inflector = Inflector::default();
//! assert_eq!(inflector.pluralize("advice"), "advice");
//!
//! inflector.register_plural_rule("$", "s").unwrap();
//! assert_eq!(inflector.pluralize("advice"), "advices");
//!
//! inflector.register_uncountable("advice");
//! assert_eq!(inflector.pluralize("advice"), "advice");
//!
//! inflector.register_irregular("formula", "formulae");
//! assert_eq!(inflector.pluralize("formula"), "formulae");
//! ```
use crate::{
    count::Count,
    error::Error,
    resolver,
    rule::Rule,
    rule_set::RuleSet,
    store::{IrregularMap, RuleStore},
};
use log::debug;
use std::{
    borrow::Cow,
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

/// Options for [Inflector::pluralize_with_count].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PluralizeOptions {
    /// Return just the word, without the count in front of it.
    pub without_count: bool,
}

#[derive(Debug, Eq, Hash, PartialEq)]
enum PluralKey {
    Word(String),
    Counted {
        count: String,
        word: String,
        without_count: bool,
    },
}

#[derive(Debug, Default)]
struct Cache {
    used: bool,
    plurals: HashMap<PluralKey, String>,
    singulars: HashMap<String, String>,
}

/// Pluralizes and singularizes words with its own set of rules.
#[derive(Debug)]
pub struct Inflector {
    store: RuleStore,
    cache: Option<Mutex<Cache>>,
}

impl Default for Inflector {
    /// An inflector with no rules at all. Every word is returned as is until
    /// rules are registered.
    fn default() -> Self {
        Self {
            store: RuleStore::default(),
            cache: Some(Mutex::default()),
        }
    }
}

impl Inflector {
    /// Builds an inflector from a rule set. Fails if any rule's pattern does
    /// not compile.
    pub fn new(rule_set: &RuleSet) -> Result<Self, Error> {
        debug!(
            "building inflector with {} plural rules, {} singular rules, {} irregular pairs, and {} uncountable words",
            rule_set.plurals.len(),
            rule_set.singular.len(),
            rule_set.irregular_pairs.len(),
            rule_set.uncountable.len(),
        );
        Ok(Self {
            store: RuleStore::from_rule_set(rule_set)?,
            ..Self::default()
        })
    }

    /// An inflector loaded with the standard English rules.
    pub fn english() -> Self {
        Self::new(RuleSet::english()).expect("The embedded English rule set should compile")
    }

    /// Builds an inflector from a rule set in TOML form.
    pub fn from_toml_str(toml: &str) -> Result<Self, Error> {
        Self::new(&RuleSet::from_toml_str(toml)?)
    }

    pub fn rules(&self) -> &RuleStore {
        &self.store
    }

    /// Compiles `pattern` case-insensitively and adds it as the highest
    /// priority plural rule. The replacement is lower-cased.
    pub fn register_plural_rule(&mut self, pattern: &str, replacement: &str) -> Result<(), Error> {
        let rule = Rule::new(pattern, replacement)?;
        self.push_plural_rule(rule);
        Ok(())
    }

    /// Compiles `pattern` case-insensitively and adds it as the highest
    /// priority singular rule. The replacement is lower-cased.
    pub fn register_singular_rule(
        &mut self,
        pattern: &str,
        replacement: &str,
    ) -> Result<(), Error> {
        let rule = Rule::new(pattern, replacement)?;
        self.push_singular_rule(rule);
        Ok(())
    }

    /// Adds an already built rule as the highest priority plural rule. The
    /// replacement is lower-cased.
    pub fn push_plural_rule(&mut self, rule: Rule) {
        self.invalidate_cache();
        self.store.add_plural(rule.with_lowercase_replacement());
    }

    /// Adds an already built rule as the highest priority singular rule. The
    /// replacement is lower-cased.
    pub fn push_singular_rule(&mut self, rule: Rule) {
        self.invalidate_cache();
        self.store.add_singular(rule.with_lowercase_replacement());
    }

    /// Marks a word as having no distinct plural. Blank words are ignored.
    pub fn register_uncountable(&mut self, word: &str) {
        if self.store.add_uncountable(word) {
            self.invalidate_cache();
        }
    }

    /// Registers a singular and plural pair that the regular rules get wrong.
    /// Both spellings are recognized in either direction, so "people" stays
    /// "people" when pluralized.
    pub fn register_irregular(&mut self, singular: &str, plural: &str) {
        self.invalidate_cache();
        self.store.add_irregular(singular, plural);
    }

    /// Turns on memoization with an empty cache. Inflectors start with the
    /// cache enabled.
    pub fn enable_cache(&mut self) {
        self.cache = Some(Mutex::default());
    }

    /// Forgets every memoized result. Does nothing if the cache is disabled.
    pub fn purge_cache(&mut self) {
        if let Some(cache) = self.cache.as_mut() {
            *cache.get_mut().unwrap_or_else(PoisonError::into_inner) = Cache::default();
        }
    }

    /// Turns memoization off and drops anything cached so far.
    pub fn disable_cache(&mut self) {
        self.cache = None;
    }

    pub fn is_cache_enabled(&self) -> bool {
        self.cache.is_some()
    }

    /// Returns the plural form of `word`.
    ///
    /// ```
    /// use noun_inflector::Inflector;
    ///
    /// let inflector = Inflector::english();
    /// assert_eq!(inflector.pluralize("person"), "people");
    /// assert_eq!(inflector.pluralize("node_child"), "node_children");
    /// assert_eq!(inflector.pluralize("SuperMan"), "SuperMen");
    /// ```
    pub fn pluralize<'a>(&self, word: &'a str) -> Cow<'a, str> {
        match &self.cache {
            Some(cache) => {
                let mut cache = lock(cache);
                cache.used = true;
                let plural = cache
                    .plurals
                    .entry(PluralKey::Word(word.to_string()))
                    .or_insert_with(|| self.plural(word).into_owned());
                Cow::Owned(plural.clone())
            }
            None => self.plural(word),
        }
    }

    /// Returns `word` preceded by `count`, pluralizing the word unless the
    /// count is one.
    ///
    /// ```
    /// use noun_inflector::{Inflector, PluralizeOptions};
    ///
    /// let inflector = Inflector::english();
    /// let options = PluralizeOptions::default();
    /// assert_eq!(inflector.pluralize_with_count(1, "cat", options), "1 cat");
    /// assert_eq!(inflector.pluralize_with_count(5, "cat", options), "5 cats");
    /// assert_eq!(inflector.pluralize_with_count("1", "ox", options), "1 ox");
    ///
    /// let options = PluralizeOptions { without_count: true };
    /// assert_eq!(inflector.pluralize_with_count(5, "cat", options), "cats");
    /// ```
    pub fn pluralize_with_count<'c>(
        &self,
        count: impl Into<Count<'c>>,
        word: &str,
        options: PluralizeOptions,
    ) -> String {
        let count = count.into();
        match &self.cache {
            Some(cache) => {
                let mut cache = lock(cache);
                cache.used = true;
                let key = PluralKey::Counted {
                    count: count.to_string(),
                    word: word.to_string(),
                    without_count: options.without_count,
                };
                cache
                    .plurals
                    .entry(key)
                    .or_insert_with(|| self.plural_with_count(count, word, options))
                    .clone()
            }
            None => self.plural_with_count(count, word, options),
        }
    }

    /// Returns the singular form of `word`.
    ///
    /// ```
    /// use noun_inflector::Inflector;
    ///
    /// let inflector = Inflector::english();
    /// assert_eq!(inflector.singularize("kine"), "cow");
    /// assert_eq!(inflector.singularize("red-kine"), "red-cow");
    /// assert_eq!(inflector.singularize("FriedRice"), "FriedRice");
    /// ```
    pub fn singularize<'a>(&self, word: &'a str) -> Cow<'a, str> {
        match &self.cache {
            Some(cache) => {
                let mut cache = lock(cache);
                cache.used = true;
                let singular = cache
                    .singulars
                    .entry(word.to_string())
                    .or_insert_with(|| self.singular(word).into_owned());
                Cow::Owned(singular.clone())
            }
            None => self.singular(word),
        }
    }

    /// Inflects `word` with caller supplied rules and irregular forms. This
    /// inflector's uncountable words still apply. Nothing is cached.
    pub fn inflect<'a>(
        &self,
        word: &'a str,
        rules: &[Rule],
        irregular: &IrregularMap,
    ) -> Cow<'a, str> {
        resolver::inflect(word, rules, irregular, self.store.uncountable())
    }

    fn plural<'a>(&self, word: &'a str) -> Cow<'a, str> {
        self.inflect(word, self.store.plurals(), self.store.irregular())
    }

    fn singular<'a>(&self, word: &'a str) -> Cow<'a, str> {
        self.inflect(word, self.store.singular(), self.store.irregular_inverse())
    }

    fn plural_with_count(&self, count: Count<'_>, word: &str, options: PluralizeOptions) -> String {
        let word = if count.is_one() {
            Cow::Borrowed(word)
        } else {
            self.plural(word)
        };
        if options.without_count {
            return word.into_owned();
        }
        format!("{} {}", count, word)
    }

    fn invalidate_cache(&mut self) {
        let Some(cache) = self.cache.as_mut() else {
            return;
        };
        let cache = cache.get_mut().unwrap_or_else(PoisonError::into_inner);
        if cache.used {
            debug!("purging inflection cache");
            *cache = Cache::default();
        }
    }
}

fn lock(cache: &Mutex<Cache>) -> MutexGuard<'_, Cache> {
    cache.lock().unwrap_or_else(PoisonError::into_inner)
}
