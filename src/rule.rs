//! A single regular inflection rule.
//!
//! A [Rule] pairs a matcher with a replacement template. Templates use the
//! familiar `$1`-style group references, so a rule that turns "box" into
//! "boxes" is written like this:
//!
//! ```
//! use noun_inflector::rule::Rule;
//!
//! let rule = Rule::new("(x|ch|ss|sh)$", "$1es").unwrap();
//! assert!(rule.is_match("Box"));
//! assert_eq!(rule.apply("box"), "boxes");
//! ```
use crate::error::Error;
use regex::{Regex, RegexBuilder};
use std::borrow::Cow;

/// A matcher and the replacement applied to the first place it matches.
#[derive(Clone, Debug)]
pub struct Rule {
    matcher: Regex,
    replacement: String,
}

impl Rule {
    /// Compiles `pattern` as a case-insensitive regex. The replacement may
    /// refer to capture groups as `$1`, `$<name>`, or `$&` for the whole
    /// match, and `$$` for a literal dollar sign. Groups that do not take part
    /// in a match expand to nothing. `$0` and references to groups the
    /// pattern does not have are kept as written, and `$12` means group 1
    /// followed by "2" unless the pattern has twelve groups.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self, Error> {
        let matcher = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| Error::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(Self::from_regex(matcher, replacement))
    }

    /// Uses an already compiled regex as the matcher. The regex is used as
    /// is, so it is up to the caller to make it case-insensitive.
    pub fn from_regex(matcher: Regex, replacement: &str) -> Self {
        let replacement = translate_template(replacement, &matcher);
        Self {
            matcher,
            replacement,
        }
    }

    /// The matcher's source pattern.
    pub fn pattern(&self) -> &str {
        self.matcher.as_str()
    }

    /// The replacement template in the regex crate's `${1}` syntax.
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    pub fn is_match(&self, word: &str) -> bool {
        self.matcher.is_match(word)
    }

    /// Replaces the first match in `word`. Returns the word untouched if the
    /// rule does not match.
    pub fn apply<'a>(&self, word: &'a str) -> Cow<'a, str> {
        self.matcher.replace(word, self.replacement.as_str())
    }

    pub(crate) fn with_lowercase_replacement(self) -> Self {
        Self {
            replacement: self.replacement.to_lowercase(),
            ..self
        }
    }
}

// The regex crate reads `$1es` as a reference to a group named "1es", so
// group references need braces. References read the way browsers read them:
// two digits if the matcher has that many groups, otherwise one digit, and
// `$0` or a reference past the last group is kept literally. `$<name>` is
// only a reference when the matcher has named groups.
fn translate_template(template: &str, matcher: &Regex) -> String {
    let groups = matcher.captures_len() - 1;
    let has_names = matcher.capture_names().any(|name| name.is_some());
    let group_at = |n: u32| (n >= 1 && n as usize <= groups).then_some(n);

    let mut translated = String::with_capacity(template.len() + 8);
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            translated.push(c);
            continue;
        }

        match chars.peek().copied() {
            Some(d) if d.is_ascii_digit() => {
                chars.next();
                let first = d.to_digit(10).unwrap_or(0);
                let two_digits = chars
                    .peek()
                    .and_then(|d| d.to_digit(10))
                    .and_then(|second| group_at(first * 10 + second));
                match two_digits.or_else(|| group_at(first)) {
                    Some(group) => {
                        if two_digits.is_some() {
                            chars.next();
                        }
                        translated.push_str(&format!("${{{}}}", group));
                    }
                    None => {
                        translated.push_str("$$");
                        translated.push(d);
                    }
                }
            }
            Some('&') => {
                chars.next();
                translated.push_str("${0}");
            }
            Some('$') => {
                chars.next();
                translated.push_str("$$");
            }
            Some('<') if has_names => {
                let rest: String = chars.clone().skip(1).collect();
                match rest.find('>') {
                    Some(end) if end > 0 => {
                        translated.push_str(&format!("${{{}}}", &rest[..end]));
                        // Skip the `<`, the name, and the `>`.
                        for _ in 0..rest[..end].chars().count() + 2 {
                            chars.next();
                        }
                    }
                    _ => translated.push_str("$$"),
                }
            }
            _ => translated.push_str("$$"),
        }
    }

    translated
}
