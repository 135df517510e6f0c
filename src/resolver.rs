//! Word classification and transformation.
//!
//! A word is checked against three tiers in turn:
//!
//! 1. Uncountable words are returned unchanged. The check looks at both the
//!    whole word and its last word, so "funky jeans", "red-fish", and
//!    "FriedRice" are all left alone.
//! 2. Irregular words are matched as suffixes of the lower-cased word, in the
//!    order they were registered. The first hit is substituted into the
//!    original word in place, so "salesperson" becomes "salespeople".
//! 3. Regular rules are tried from the most recently registered back to the
//!    first. The first rule that matches is applied.
//!
//! Each tier falls through to the next, and a word nothing matches comes back
//! as it was given.
use crate::{rule::Rule, store::IrregularMap, util};
use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;
use std::{borrow::Cow, collections::HashSet};

static LAST_WORD_DASHED_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?x)
    [A-Za-z0-9_/-]+ [_/\s-]   # everything up to the last separator
    (?P<last> [a-z0-9]+ ) $   # a lower case word at the end
"#,
    )
    .expect("Could not parse last dashed word regex")
});

static LAST_WORD_CAMELIZED_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?x)
    [A-Za-z0-9_/\s-]+                # everything before the last hump
    (?P<last> [A-Z] [a-z0-9]* ) $    # a capitalized word at the end
"#,
    )
    .expect("Could not parse last camelized word regex")
});

static CAMELIZED_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z][a-z0-9]*$").expect("Could not parse camelized regex"));

/// Returns true if the word ends with a capitalized segment, like
/// "SuperWoman" or "redCow".
pub(crate) fn is_camelized(word: &str) -> bool {
    CAMELIZED_REGEX.is_match(word)
}

/// Finds the last word of a delimited or camel-cased identifier, lower-cased.
/// "red-cow", "red/cow", "red cow", and "redCow" all end in "cow". A word with
/// no separator and no hump has no last word.
pub(crate) fn last_word(word: &str) -> Option<String> {
    LAST_WORD_DASHED_REGEX
        .captures(word)
        .or_else(|| LAST_WORD_CAMELIZED_REGEX.captures(word))
        .map(|caps| caps["last"].to_lowercase())
}

/// Inflects `word` with the given regular rules and irregular map. Words in
/// `uncountable` (which must be lower-cased) are never changed.
pub(crate) fn inflect<'a>(
    word: &'a str,
    rules: &[Rule],
    irregular: &IrregularMap,
    uncountable: &HashSet<String>,
) -> Cow<'a, str> {
    if util::is_blank(word) {
        return Cow::Borrowed(word);
    }

    let lowercase = util::lowercase(word);
    let last_word = last_word(word);

    if uncountable.contains(lowercase.as_ref())
        || last_word.as_ref().is_some_and(|w| uncountable.contains(w))
    {
        trace!("{} is uncountable", word);
        return Cow::Borrowed(word);
    }

    if let Some(inflected) = inflect_irregular(word, &lowercase, last_word.as_deref(), irregular)
    {
        return inflected;
    }

    match rules.iter().rev().find(|rule| rule.is_match(word)) {
        Some(rule) => {
            trace!("{} matches /{}/", word, rule.pattern());
            rule.apply(word)
        }
        None => {
            trace!("no rule matches {}", word);
            Cow::Borrowed(word)
        }
    }
}

fn inflect_irregular<'a>(
    word: &'a str,
    lowercase: &str,
    last_word: Option<&str>,
    irregular: &IrregularMap,
) -> Option<Cow<'a, str>> {
    let (key, form) = irregular.iter().find(|(key, _)| lowercase.ends_with(key.as_str()))?;
    trace!("{} ends with irregular {}", word, key);

    // Keep the hump in camel-cased identifiers: "SuperMan" => "SuperMen".
    let substitution = if is_camelized(word) && last_word.is_some_and(|w| irregular.contains_key(w))
    {
        util::capitalize(form)
    } else {
        Cow::Borrowed(form.as_str())
    };

    let Some(found) = util::find_ignoring_case(word, key) else {
        trace!("{} does not contain {} once case is ignored", word, key);
        return None;
    };
    let mut inflected = String::with_capacity(word.len() + substitution.len());
    inflected.push_str(&word[..found.start]);
    inflected.push_str(&substitution);
    inflected.push_str(&word[found.end..]);
    Some(Cow::Owned(inflected))
}
