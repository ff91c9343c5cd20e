//! Tag sequence styles.
//!
//! Tags are the short labels ("a", "2", "IV") that identify subplots for
//! reference in accompanying text. A [`TagStyle`] names a sequence; the
//! annotation pass walks the composition handing out consecutive values
//! from it, one counter per nesting level.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when a tag style token is not recognized.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("unknown tag style '{token}': expected one of a, A, 1, i, I")]
pub struct TagStyleParseError {
    token: String,
}

/// A tag numbering sequence.
///
/// The style token follows the conventional shorthand: `"a"`/`"A"` for
/// latin letters, `"1"` for arabic numerals, `"i"`/`"I"` for roman
/// numerals, with case selecting case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagStyle {
    /// a, b, c, …, z, aa, ab, …
    LatinLower,
    /// A, B, C, …, Z, AA, AB, …
    LatinUpper,
    /// 1, 2, 3, …
    Arabic,
    /// i, ii, iii, iv, …
    RomanLower,
    /// I, II, III, IV, …
    RomanUpper,
}

impl TagStyle {
    /// Renders the 0-based `index` as a tag in this style.
    pub fn format(self, index: usize) -> String {
        match self {
            TagStyle::LatinLower => latin(index, false),
            TagStyle::LatinUpper => latin(index, true),
            TagStyle::Arabic => (index + 1).to_string(),
            TagStyle::RomanLower => roman(index + 1).to_lowercase(),
            TagStyle::RomanUpper => roman(index + 1),
        }
    }
}

impl FromStr for TagStyle {
    type Err = TagStyleParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "a" => Ok(TagStyle::LatinLower),
            "A" => Ok(TagStyle::LatinUpper),
            "1" => Ok(TagStyle::Arabic),
            "i" => Ok(TagStyle::RomanLower),
            "I" => Ok(TagStyle::RomanUpper),
            _ => Err(TagStyleParseError {
                token: token.to_string(),
            }),
        }
    }
}

impl fmt::Display for TagStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            TagStyle::LatinLower => "a",
            TagStyle::LatinUpper => "A",
            TagStyle::Arabic => "1",
            TagStyle::RomanLower => "i",
            TagStyle::RomanUpper => "I",
        };
        write!(f, "{token}")
    }
}

/// Spreadsheet-style base-26 letters: 0 → a, 25 → z, 26 → aa.
fn latin(index: usize, upper: bool) -> String {
    let base = if upper { b'A' } else { b'a' };
    let mut n = index + 1;
    let mut out = Vec::new();
    while n > 0 {
        n -= 1;
        out.push(base + (n % 26) as u8);
        n /= 26;
    }
    out.reverse();
    // Only ASCII letters were pushed.
    String::from_utf8(out).unwrap()
}

/// Standard subtractive roman numerals for n >= 1, uppercase.
fn roman(mut n: usize) -> String {
    const VALUES: [(usize, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];
    let mut out = String::new();
    for (value, digits) in VALUES {
        while n >= value {
            out.push_str(digits);
            n -= value;
        }
    }
    out
}
