//! The rule store behind an [Inflector](crate::Inflector).
//!
//! Regular rules are kept in registration order. Irregular pairs are resolved
//! into two insertion ordered maps, one used when pluralizing and one used
//! when singularizing. Each pair contributes its singular and its plural
//! spelling (lower-cased) as keys to both maps, so either spelling of a word
//! resolves to the right form.
use crate::{error::Error, rule::Rule, rule_set::RuleSet, util};
use indexmap::IndexMap;
use log::debug;
use std::collections::HashSet;

/// Irregular forms keyed by lower-cased spelling, in insertion order.
pub type IrregularMap = IndexMap<String, String>;

#[derive(Clone, Debug, Default)]
pub struct RuleStore {
    plurals: Vec<Rule>,
    singular: Vec<Rule>,
    irregular: IrregularMap,
    irregular_inverse: IrregularMap,
    uncountable: HashSet<String>,
}

impl RuleStore {
    /// Builds a store from a rule set, compiling every pattern. Replacements
    /// are stored as given.
    pub fn from_rule_set(rule_set: &RuleSet) -> Result<Self, Error> {
        let mut store = Self {
            plurals: compile(&rule_set.plurals)?,
            singular: compile(&rule_set.singular)?,
            ..Self::default()
        };
        for word in &rule_set.uncountable {
            store.add_uncountable(word);
        }
        for (singular, plural) in &rule_set.irregular_pairs {
            store.add_irregular(singular, plural);
        }
        Ok(store)
    }

    pub fn plurals(&self) -> &[Rule] {
        &self.plurals
    }

    pub fn singular(&self) -> &[Rule] {
        &self.singular
    }

    /// Maps either spelling of an irregular word to its plural.
    pub fn irregular(&self) -> &IrregularMap {
        &self.irregular
    }

    /// Maps either spelling of an irregular word to its singular.
    pub fn irregular_inverse(&self) -> &IrregularMap {
        &self.irregular_inverse
    }

    pub fn is_uncountable(&self, word: &str) -> bool {
        self.uncountable.contains(util::lowercase(word).as_ref())
    }

    pub(crate) fn uncountable(&self) -> &HashSet<String> {
        &self.uncountable
    }

    pub(crate) fn add_plural(&mut self, rule: Rule) {
        debug!("adding plural rule /{}/ => {}", rule.pattern(), rule.replacement());
        self.plurals.push(rule);
    }

    pub(crate) fn add_singular(&mut self, rule: Rule) {
        debug!("adding singular rule /{}/ => {}", rule.pattern(), rule.replacement());
        self.singular.push(rule);
    }

    /// Returns false if the word was blank and nothing was added.
    pub(crate) fn add_uncountable(&mut self, word: &str) -> bool {
        if util::is_blank(word) {
            return false;
        }
        debug!("adding uncountable word {}", word);
        self.uncountable.insert(word.to_lowercase());
        true
    }

    pub(crate) fn add_irregular(&mut self, singular: &str, plural: &str) {
        debug!("adding irregular pair {} => {}", singular, plural);
        let lc_singular = singular.to_lowercase();
        let lc_plural = plural.to_lowercase();

        self.irregular.insert(lc_singular.clone(), plural.to_string());
        self.irregular.insert(lc_plural.clone(), plural.to_string());

        self.irregular_inverse.insert(lc_singular, singular.to_string());
        self.irregular_inverse.insert(lc_plural, singular.to_string());
    }
}

fn compile(rules: &[(String, String)]) -> Result<Vec<Rule>, Error> {
    rules
        .iter()
        .map(|(pattern, replacement)| Rule::new(pattern, replacement))
        .collect()
}
