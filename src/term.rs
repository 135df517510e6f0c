//! Provides the [Term] trait, which defines methods shared by word structs.

use std::borrow::Cow;

/// This trait is implemented by words that have a singular and a plural
/// form.
pub trait Term<'a> {
    fn new(word: &'a str) -> Self;

    /// Returns the singular form of the given word. If the word is already
    /// singular, or nothing knows how to singularize it, the word given to
    /// `new` comes back unchanged.
    fn singular(&self) -> Cow<'a, str>;

    /// Returns the plural form of the given word. Compound identifiers are
    /// inflected on their last word and keep their casing, so "node_child"
    /// becomes "node_children" and "SuperMan" becomes "SuperMen".
    fn plural(&self) -> Cow<'a, str>;
}
