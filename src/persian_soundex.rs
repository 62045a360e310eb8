use std::collections::BTreeMap;
use std::str::FromStr;

use nom::Parser;
use serde::{Deserialize, Serialize};

use crate::constants::{
    FIRST_LETTERS, MULTI_LINE_COMMENT_END, MULTI_LINE_COMMENT_START, SUBSEQUENT_LETTERS,
};
use crate::rules_parser::{end_of_line, multiline_comment, triplet};
use crate::{Encoder, PhoneticError};

/// This is the Soundex implementation of [Encoder] for Persian and Arabic script.
///
/// The first character of a word is mapped to a latin letter, using
/// [FIRST_LETTER_MAPPING](crate::FIRST_LETTER_MAPPING). Each following
/// character is mapped to a digit using
/// [SUBSEQUENT_LETTER_MAPPING](crate::SUBSEQUENT_LETTER_MAPPING), characters
/// without a digit are skipped.
///
/// Unlike the english Soundex, the code is neither padded nor truncated, and
/// adjacent identical digits are kept.
///
/// If the word is blank or if its first character has no latin letter, the
/// code is empty. So two words that can't be encoded are considered equals.
///
/// # Example :
///
/// ```rust
/// use persian_soundex::{Encoder, PersianSoundex};
///
/// let soundex = PersianSoundex::default();
/// assert_eq!(soundex.encode("برف"), "B61");
/// assert_eq!(soundex.encode("سلام"), "S45");
/// assert!(!soundex.is_encoded_equals("برف", "باران"));
/// ```
#[derive(Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct PersianSoundex {
    first_letters: BTreeMap<char, char>,
    subsequent_letters: BTreeMap<char, char>,
}

impl PersianSoundex {
    /// Construct a new [PersianSoundex] with the provided mappings.
    ///
    /// There are implementations of [TryFrom] and [FromStr] to build one from rules.
    ///
    /// # Parameters
    ///
    /// * `first_letters` : code of a character when it starts a word.
    /// * `subsequent_letters` : code of a character anywhere else. Characters missing
    ///   from this mapping won't appear in the code.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    ///
    /// use persian_soundex::{Encoder, PersianSoundex};
    ///
    /// let first_letters = BTreeMap::from([('ك', 'K'), ('ي', 'Y')]);
    /// let subsequent_letters = BTreeMap::from([('ك', '2'), ('ت', '3'), ('ب', '1')]);
    /// let soundex = PersianSoundex::new(first_letters, subsequent_letters);
    ///
    /// assert_eq!(soundex.encode("كتاب"), "K31");
    /// ```
    pub fn new(
        first_letters: BTreeMap<char, char>,
        subsequent_letters: BTreeMap<char, char>,
    ) -> Self {
        Self {
            first_letters,
            subsequent_letters,
        }
    }

    /// Code of the first character of a word, if any.
    pub fn first_letter_code(&self, ch: char) -> Option<char> {
        self.first_letters.get(&ch).copied()
    }

    /// Code of a character that is not the first one of a word, if any.
    pub fn subsequent_letter_code(&self, ch: char) -> Option<char> {
        self.subsequent_letters.get(&ch).copied()
    }

    fn parse_code(
        line_number: usize,
        line: &str,
        code: &str,
        valid: impl Fn(char) -> bool,
    ) -> Result<Option<char>, PhoneticError> {
        let mut chars = code.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Ok(None),
            (Some(ch), None) if valid(ch) => Ok(Some(ch)),
            (_, _) => Err(PhoneticError::ParseRuleError(format!(
                "Invalid code '{}' at line {} : {}",
                code, line_number, line
            ))),
        }
    }
}

/// This is the [Default] implementation for [PersianSoundex], it returns an
/// instance with [FIRST_LETTER_MAPPING](crate::FIRST_LETTER_MAPPING) and
/// [SUBSEQUENT_LETTER_MAPPING](crate::SUBSEQUENT_LETTER_MAPPING).
impl Default for PersianSoundex {
    fn default() -> Self {
        Self {
            first_letters: FIRST_LETTERS.clone(),
            subsequent_letters: SUBSEQUENT_LETTERS.clone(),
        }
    }
}

impl TryFrom<&str> for PersianSoundex {
    type Error = PhoneticError;

    /// Construct a [PersianSoundex] from rules. There is one rule per line,
    /// `"character" "first letter code" "subsequent code"`. A code can be empty
    /// (`""`) if the character has no code at that position.
    ///
    /// Empty lines, `// ...` and `/* ... */` comments are ignored.
    ///
    /// # Parameters
    ///
    /// * `rules` : rules, one per line.
    ///
    /// # Example
    ///
    /// ```rust
    /// # fn main() -> Result<(), persian_soundex::PhoneticError> {
    /// use persian_soundex::{Encoder, PersianSoundex};
    ///
    /// let rules = r#"
    /// /* Arabic kaf and yeh,
    ///    missing from the default mapping */
    /// "ك" "K" "2"
    /// "ي" "Y" ""  // silent
    /// "ت" "T" "3"
    /// "ب" "B" "1"
    /// "#;
    /// let soundex = PersianSoundex::try_from(rules)?;
    ///
    /// assert_eq!(soundex.encode("كتيب"), "K31");
    /// #    Ok(())
    /// # }
    /// ```
    fn try_from(rules: &str) -> Result<Self, Self::Error> {
        let mut first_letters: BTreeMap<char, char> = BTreeMap::new();
        let mut subsequent_letters: BTreeMap<char, char> = BTreeMap::new();
        let mut remains = rules;
        let mut line_number = 1;
        while !remains.is_empty() {
            let line = remains.split('\n').next().unwrap_or_default().trim();

            // Empty line or single line comment.
            if let Ok((rest, _)) = end_of_line().parse(remains) {
                remains = rest;
                line_number += 1;
                continue;
            }

            if let Ok((rest, line_count)) = multiline_comment().parse(remains) {
                remains = rest;
                line_number += line_count;
                continue;
            } else if line.starts_with(MULTI_LINE_COMMENT_START)
                && !remains.contains(MULTI_LINE_COMMENT_END)
            {
                return Err(PhoneticError::ParseRuleError(format!(
                    "Multiline comment is never closed at line {} : {}",
                    line_number, line
                )));
            }

            let (rest, (ch, first, subsequent)) = match triplet().parse(remains) {
                Ok(result) => result,
                Err(_) => {
                    return Err(PhoneticError::ParseRuleError(format!(
                        "Rule doesn't follow format \"character\" \"first letter code\" \"subsequent code\" at line {} : {}",
                        line_number, line
                    )))
                }
            };

            let mut chars = ch.chars();
            let ch = match (chars.next(), chars.next()) {
                (Some(ch), None) => ch,
                (_, _) => {
                    return Err(PhoneticError::ParseRuleError(format!(
                        "Rule must be for exactly one character at line {} : {}",
                        line_number, line
                    )))
                }
            };

            match Self::parse_code(line_number, line, first, |c| !c.is_whitespace())? {
                Some(code) => first_letters.insert(ch, code),
                None => first_letters.remove(&ch),
            };
            match Self::parse_code(line_number, line, subsequent, |c| c.is_ascii_digit())? {
                Some(code) => subsequent_letters.insert(ch, code),
                None => subsequent_letters.remove(&ch),
            };

            remains = rest;
            line_number += 1;
        }

        Ok(Self {
            first_letters,
            subsequent_letters,
        })
    }
}

impl TryFrom<String> for PersianSoundex {
    type Error = PhoneticError;

    /// Construct a [PersianSoundex] from rules. See [TryFrom<&str>](#impl-TryFrom%3C%26str%3E-for-PersianSoundex)
    /// for the format.
    fn try_from(rules: String) -> Result<Self, Self::Error> {
        Self::try_from(rules.as_str())
    }
}

impl FromStr for PersianSoundex {
    type Err = PhoneticError;

    /// Construct a [PersianSoundex] from rules. See [TryFrom<&str>](#impl-TryFrom%3C%26str%3E-for-PersianSoundex)
    /// for the format.
    ///
    /// # Example
    ///
    /// ```rust
    /// # fn main() -> Result<(), persian_soundex::PhoneticError> {
    /// use persian_soundex::{Encoder, PersianSoundex};
    ///
    /// let soundex = "\"ب\" \"B\" \"1\"\n\"ر\" \"R\" \"6\"".parse::<PersianSoundex>()?;
    ///
    /// assert_eq!(soundex.encode("ربب"), "R11");
    /// #    Ok(())
    /// # }
    /// ```
    fn from_str(rules: &str) -> Result<Self, Self::Err> {
        Self::try_from(rules)
    }
}

impl Encoder for PersianSoundex {
    fn encode(&self, value: &str) -> String {
        if value.chars().all(char::is_whitespace) {
            return String::new();
        }

        let mut chars = value.chars();
        let first = match chars.next().and_then(|ch| self.first_letter_code(ch)) {
            None => return String::new(),
            Some(code) => code,
        };

        let mut code = String::with_capacity(value.len());
        code.push(first);
        chars
            .filter_map(|ch| self.subsequent_letter_code(ch))
            .for_each(|digit| code.push(digit));

        code
    }
}
