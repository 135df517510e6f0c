use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::{borrow::Cow, ops::Range};

static WORD_START_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?x)
    (?P<before> \A | [\s-] )  # the start of the string or a separator
    (?P<first> \p{Ll} )       # a lower case letter starting a word
"#,
    )
    .expect("Could not parse word start regex")
});

/// Upper-cases the first letter of every word, leaving everything else
/// alone. Words are separated by whitespace or dashes, so "unit of-measure"
/// becomes "Unit Of-Measure" and "people" becomes "People".
pub(crate) fn capitalize(word: &str) -> Cow<'_, str> {
    WORD_START_REGEX.replace_all(word, |caps: &Captures| {
        format!("{}{}", &caps["before"], caps["first"].to_uppercase())
    })
}

pub(crate) fn is_blank(word: &str) -> bool {
    word.chars().all(char::is_whitespace)
}

pub(crate) fn is_lowercase(word: &str) -> bool {
    word.chars().all(|c| c.to_lowercase().eq([c]))
}

/// Returns the word in lower case, only allocating when something has to
/// change.
pub(crate) fn lowercase(word: &str) -> Cow<'_, str> {
    if is_lowercase(word) {
        Cow::Borrowed(word)
    } else {
        Cow::Owned(word.to_lowercase())
    }
}

/// Finds the first place `needle` occurs in `haystack`, ignoring case, and
/// returns its byte range in `haystack`.
pub(crate) fn find_ignoring_case(haystack: &str, needle: &str) -> Option<Range<usize>> {
    haystack.char_indices().find_map(|(start, _)| {
        prefix_len_ignoring_case(&haystack[start..], needle).map(|len| start..start + len)
    })
}

fn prefix_len_ignoring_case(text: &str, needle: &str) -> Option<usize> {
    let mut expected = needle.chars().flat_map(char::to_lowercase).peekable();
    for (i, c) in text.char_indices() {
        if expected.peek().is_none() {
            return Some(i);
        }
        for lc in c.to_lowercase() {
            if expected.next() != Some(lc) {
                return None;
            }
        }
    }
    expected.peek().is_none().then_some(text.len())
}
