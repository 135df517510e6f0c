//! The [Noun] struct.
//!
//! # Examples
//!
//! ```
//! use noun_inflector::noun::Noun;
//! use noun_inflector::term::Term; // Provides most of the interesting methods
//!
//! let noun = Noun::new("ox");
//! assert_eq!(noun.plural(), "oxen");
//! assert_eq!(noun.singular(), "ox");
//!
//! let noun = Noun::new("octopi");
//! assert_eq!(noun.singular(), "octopus");
//! ```
use crate::{count::Count, inflector::PluralizeOptions, term::Term, Inflector};
use std::borrow::Cow;

/// A `Noun` is a single noun inflected with the default English rules.
#[derive(Clone, Copy, Debug)]
pub struct Noun<'a>(&'a str);

impl<'a> Term<'a> for Noun<'a> {
    /// Creates a new noun from a string. Note that nothing in the code
    /// actually ensures that this is a noun, so you could write
    /// `Noun::new("eat")` and it would work, for some value of "work".
    fn new(noun: &'a str) -> Self {
        Self(noun)
    }

    fn singular(&self) -> Cow<'a, str> {
        crate::singularize(self.0)
    }

    fn plural(&self) -> Cow<'a, str> {
        crate::pluralize(self.0)
    }
}

impl<'a> Noun<'a> {
    /// Returns the noun preceded by `count`, pluralized unless the count is
    /// one.
    pub fn with_count<'c>(&self, count: impl Into<Count<'c>>) -> String {
        crate::pluralize_with_count(count, self.0, PluralizeOptions::default())
    }

    /// Like [Term::singular] but with the given inflector's rules.
    pub fn singular_with(&self, inflector: &Inflector) -> Cow<'a, str> {
        inflector.singularize(self.0)
    }

    /// Like [Term::plural] but with the given inflector's rules.
    pub fn plural_with(&self, inflector: &Inflector) -> Cow<'a, str> {
        inflector.pluralize(self.0)
    }
}
