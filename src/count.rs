//! Counts for [pluralize_with_count](crate::Inflector::pluralize_with_count).
//!
//! A count can be a number or text. Text is read the way a spreadsheet or a
//! browser would read it, taking the longest leading number and ignoring
//! whatever follows, so "1 item" counts as one. Text with no leading number
//! never counts as one.
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static LEADING_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?x)
    \A
    [+-]?
    (?:
        Infinity |
        (?: [0-9]+ \.? [0-9]* | \. [0-9]+ )  # digits with an optional fraction
        (?: [eE] [+-]? [0-9]+ )?             # and an optional exponent
    )
"#,
    )
    .expect("Could not parse leading number regex")
});

/// How many of something there are.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Count<'a> {
    Integer(i64),
    Float(f64),
    Text(&'a str),
}

impl Count<'_> {
    /// Returns true if the count is numerically one. Only then is the word
    /// left singular.
    pub fn is_one(&self) -> bool {
        match self {
            Count::Integer(n) => *n == 1,
            Count::Float(f) => *f == 1.0,
            Count::Text(t) => parse_leading_number(t) == Some(1.0),
        }
    }
}

impl fmt::Display for Count<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Count::Integer(n) => write!(f, "{}", n),
            Count::Float(n) if n.is_nan() => f.write_str("NaN"),
            Count::Float(n) if n.is_infinite() => {
                f.write_str(if n.is_sign_positive() { "Infinity" } else { "-Infinity" })
            }
            Count::Float(n) => write!(f, "{}", n),
            Count::Text(t) => f.write_str(t),
        }
    }
}

macro_rules! count_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Count<'_> {
                fn from(n: $t) -> Self {
                    Count::Integer(i64::from(n))
                }
            }
        )*
    };
}

count_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<usize> for Count<'_> {
    fn from(n: usize) -> Self {
        match i64::try_from(n) {
            Ok(n) => Count::Integer(n),
            Err(_) => Count::Float(n as f64),
        }
    }
}

impl From<u64> for Count<'_> {
    fn from(n: u64) -> Self {
        match i64::try_from(n) {
            Ok(n) => Count::Integer(n),
            Err(_) => Count::Float(n as f64),
        }
    }
}

impl From<f32> for Count<'_> {
    fn from(n: f32) -> Self {
        Count::Float(f64::from(n))
    }
}

impl From<f64> for Count<'_> {
    fn from(n: f64) -> Self {
        Count::Float(n)
    }
}

impl<'a> From<&'a str> for Count<'a> {
    fn from(t: &'a str) -> Self {
        Count::Text(t)
    }
}

impl<'a> From<&'a String> for Count<'a> {
    fn from(t: &'a String) -> Self {
        Count::Text(t)
    }
}

/// Reads the longest number at the start of `text`, after any leading
/// whitespace.
fn parse_leading_number(text: &str) -> Option<f64> {
    let m = LEADING_NUMBER_REGEX.find(text.trim_start())?;
    m.as_str().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::Count;

    #[test]
    fn parse_leading_number() {
        let tests = [
            ("1", Some(1.0)),
            ("  1", Some(1.0)),
            ("1.0", Some(1.0)),
            ("1.", Some(1.0)),
            ("1 item", Some(1.0)),
            ("1e0", Some(1.0)),
            ("+1", Some(1.0)),
            (".5", Some(0.5)),
            ("-2.5kg", Some(-2.5)),
            ("10", Some(10.0)),
            ("Infinity", Some(f64::INFINITY)),
            ("one", None),
            ("", None),
            (".", None),
            ("e1", None),
        ];
        for test in tests {
            assert_eq!(
                super::parse_leading_number(test.0),
                test.1,
                "parse_leading_number({:?}) = {:?}",
                test.0,
                test.1,
            );
        }
    }

    #[test]
    fn is_one() {
        let ones: [Count<'_>; 5] = [
            1i32.into(),
            1.0f64.into(),
            "1".into(),
            "1.00".into(),
            1usize.into(),
        ];
        for count in ones {
            assert!(count.is_one(), "{:?} is one", count);
        }

        let others: [Count<'_>; 6] = [
            0i32.into(),
            5u8.into(),
            (-1i64).into(),
            1.5f64.into(),
            "one".into(),
            f64::NAN.into(),
        ];
        for count in others {
            assert!(!count.is_one(), "{:?} is not one", count);
        }
    }

    #[test]
    fn display() {
        let tests: [(Count<'_>, &str); 8] = [
            (5i32.into(), "5"),
            (5.0f64.into(), "5"),
            (2.5f32.into(), "2.5"),
            ("05".into(), "05"),
            ((-3i64).into(), "-3"),
            (f64::INFINITY.into(), "Infinity"),
            (f64::NEG_INFINITY.into(), "-Infinity"),
            (f64::NAN.into(), "NaN"),
        ];
        for test in tests {
            assert_eq!(test.0.to_string(), test.1);
        }

        let infinity = Count::from(f64::INFINITY).to_string();
        assert_eq!(
            super::parse_leading_number(&infinity),
            Some(f64::INFINITY),
            "an infinite count reads back as infinity",
        );
    }
}
