//! This library contains a [Soundex](https://en.wikipedia.org/wiki/Soundex) phonetic
//! algorithm for Persian and Arabic script words, written in Rust.
//!
//! Two words that sound alike share the same code, so it can be used for fuzzy
//! name matching, deduplication or search.
//!
//! * The first character of a word is mapped to a latin letter (see [FIRST_LETTER_MAPPING]).
//! * Each following character is mapped to a digit (see [SUBSEQUENT_LETTER_MAPPING]),
//!   characters without a digit, mostly vowels, are skipped.
//!
//! Words are not normalized : there is no diacritic removal, nor unification of
//! Arabic and Persian letter forms (`ك` is not `ک`). Blank words and words
//! starting with a character that has no latin letter have an empty code.
//!
//! # Example
//!
//! ```rust
//! use persian_soundex::{encode, sounds_equal};
//!
//! assert_eq!(encode("برف"), "B61");
//! assert_eq!(encode("سلام"), "S45");
//! assert_eq!(encode(None), "");
//! assert!(sounds_equal("ثابت", "صابط"));
//! ```
//!
//! Custom mappings can be provided with a [PersianSoundex] :
//!
//! ```rust
//! # fn main() -> Result<(), persian_soundex::PhoneticError> {
//! use persian_soundex::{Encoder, PersianSoundex};
//!
//! let soundex: PersianSoundex = "\"ك\" \"K\" \"2\"\n\"ت\" \"T\" \"3\"".parse()?;
//! assert_eq!(soundex.encode("كت"), "K3");
//! #    Ok(())
//! # }
//! ```
#[macro_use]
extern crate lazy_static;

use std::fmt;
use std::fmt::Formatter;

pub use crate::constants::{FIRST_LETTER_MAPPING, SUBSEQUENT_LETTER_MAPPING};
pub use crate::persian_soundex::PersianSoundex;

mod constants;
mod persian_soundex;
mod rules_parser;

lazy_static! {
    static ref DEFAULT_ENCODER: PersianSoundex = PersianSoundex::default();
}

/// Errors
#[derive(Clone, Debug, Ord, PartialOrd, Eq, PartialEq)]
pub enum PhoneticError {
    /// This variant is raised when there is an error in the rules
    /// of a custom [PersianSoundex].
    ParseRuleError(String),
}

impl fmt::Display for PhoneticError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParseRuleError(error) => write!(f, "Error parsing rules : {}", error),
        }
    }
}

impl std::error::Error for PhoneticError {}

/// This trait represents a phonetic algorithm.
pub trait Encoder {
    /// This method convert a string into its code.
    ///
    /// # Parameter
    ///
    /// * `s` : string to encode.
    ///
    /// # Return
    ///
    /// String encoded.
    ///
    /// # Example
    ///
    /// ```rust
    /// use persian_soundex::{Encoder, PersianSoundex};
    ///
    /// let soundex = PersianSoundex::default();
    ///
    /// assert_eq!(soundex.encode("باران"), "B65");
    /// ```
    fn encode(&self, s: &str) -> String;

    /// This method check that two strings have the same code.
    ///
    /// # Parameters
    ///
    /// * `first` : first string.
    /// * `second` : second string.
    ///
    /// # Return
    ///
    /// Return `true` if both strings have the same code, false otherwise.
    ///
    /// # Example
    ///
    /// ```rust
    /// use persian_soundex::{Encoder, PersianSoundex};
    ///
    /// let soundex = PersianSoundex::default();
    /// assert!(!soundex.is_encoded_equals("برف", "باران"));
    /// assert!(soundex.is_encoded_equals("ذکر", "زکر"));
    /// ```
    fn is_encoded_equals(&self, first: &str, second: &str) -> bool {
        let f = self.encode(first);
        let s = self.encode(second);

        f == s
    }
}

/// Encode a word with the default [PersianSoundex].
///
/// A missing word is encoded like an empty one, into an empty code.
///
/// # Example
///
/// ```rust
/// use persian_soundex::encode;
///
/// assert_eq!(encode("برف"), "B61");
/// assert_eq!(encode(Some("سلام")), "S45");
/// assert_eq!(encode(None), "");
/// assert_eq!(encode("   "), "");
/// ```
pub fn encode<'a>(word: impl Into<Option<&'a str>>) -> String {
    DEFAULT_ENCODER.encode(word.into().unwrap_or_default())
}

/// Check that two words have the same code with the default [PersianSoundex].
///
/// Words that can't be encoded (missing, blank or starting with an unknown
/// character) all have an empty code, so they are equals.
///
/// # Example
///
/// ```rust
/// use persian_soundex::sounds_equal;
///
/// assert!(!sounds_equal("برف", "باران"));
/// assert!(sounds_equal("", "xyz"));
/// assert!(sounds_equal(None, ""));
/// ```
pub fn sounds_equal<'a, 'b>(
    left: impl Into<Option<&'a str>>,
    right: impl Into<Option<&'b str>>,
) -> bool {
    encode(left) == encode(right)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(encode("برف"), "B61");
        assert_eq!(encode("سلام"), "S45");
        assert_eq!(encode("باران"), "B65");
    }

    #[test]
    fn test_encode_missing_or_blank() {
        assert_eq!(encode(None), "");
        assert_eq!(encode(""), "");
        assert_eq!(encode(Some("")), "");
        assert_eq!(encode("   "), "");
    }

    #[test]
    fn test_encode_same_as_default_encoder() {
        let soundex = PersianSoundex::default();

        for word in ["برف", "سلام", "xyz", "", "آسمان", "گلستان"] {
            assert_eq!(encode(word), soundex.encode(word));
        }
    }

    #[test]
    fn test_sounds_equal() {
        assert!(!sounds_equal("برف", "باران"));
        assert!(sounds_equal("برف", "بارف"));
        assert!(sounds_equal("", "xyz"));
        assert!(sounds_equal(None, "   "));
        assert!(sounds_equal(None, None));
    }

    #[test]
    fn test_sounds_equal_is_encode_equality() {
        let words = ["برف", "باران", "بروف", "سلام", "ثلام", "", "xyz", "آب", "اب"];

        for left in words {
            for right in words {
                assert_eq!(sounds_equal(left, right), encode(left) == encode(right));
            }
        }
    }

    #[test]
    fn test_concurrent_encode() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| (0..100).all(|_| encode("خداحافظ") == "X312")))
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }

    #[test]
    fn test_error_display() {
        let error = PhoneticError::ParseRuleError("Invalid".to_string());

        assert_eq!(error.to_string(), "Error parsing rules : Invalid");
    }
}
