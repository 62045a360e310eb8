use std::collections::BTreeMap;

/// Code of the first character of a word.
///
/// A word whose first character is not in this table can't be encoded.
pub const FIRST_LETTER_MAPPING: [(char, char); 36] = [
    ('ب', 'B'),
    ('پ', 'P'),
    ('ت', 'T'),
    ('ط', 'T'),
    ('س', 'S'),
    ('ث', 'S'),
    ('ص', 'S'),
    ('ج', 'J'),
    ('چ', 'C'),
    ('ر', 'R'),
    ('ه', 'H'),
    ('ح', 'H'),
    ('خ', 'X'),
    ('د', 'D'),
    ('ذ', 'Z'),
    ('ظ', 'Z'),
    ('ض', 'Z'),
    ('ز', 'Z'),
    ('ژ', 'Z'),
    ('ش', 'S'),
    ('غ', 'G'),
    ('ک', 'K'),
    ('گ', 'G'),
    ('ق', 'G'),
    ('ف', 'F'),
    ('ل', 'L'),
    ('م', 'M'),
    ('ن', 'N'),
    ('و', 'V'),
    ('ع', 'A'),
    ('ا', 'A'),
    ('آ', 'A'),
    ('أ', 'A'),
    ('إ', 'A'),
    ('ء', 'A'),
    ('ی', 'Y'),
];

/// Code of every character after the first one.
///
/// * `1` : labials (`ب`, `پ`, `ف`)
/// * `2` : sibilants, gutturals and velars
/// * `3` : dentals (`د`, `ت`, `ط`)
/// * `4` : `ل`
/// * `5` : nasals (`م`, `ن`)
/// * `6` : `ر`
///
/// Characters that are not in this table (mostly vowels) produce nothing.
pub const SUBSEQUENT_LETTER_MAPPING: [(char, char); 26] = [
    ('ب', '1'),
    ('پ', '1'),
    ('ف', '1'),
    ('س', '2'),
    ('ص', '2'),
    ('ث', '2'),
    ('ج', '2'),
    ('ز', '2'),
    ('ظ', '2'),
    ('ض', '2'),
    ('ذ', '2'),
    ('ژ', '2'),
    ('چ', '2'),
    ('ک', '2'),
    ('غ', '2'),
    ('ق', '2'),
    ('گ', '2'),
    ('خ', '2'),
    ('ش', '2'),
    ('د', '3'),
    ('ت', '3'),
    ('ط', '3'),
    ('ل', '4'),
    ('م', '5'),
    ('ن', '5'),
    ('ر', '6'),
];

lazy_static! {
    pub static ref FIRST_LETTERS: BTreeMap<char, char> =
        FIRST_LETTER_MAPPING.iter().copied().collect();
    pub static ref SUBSEQUENT_LETTERS: BTreeMap<char, char> =
        SUBSEQUENT_LETTER_MAPPING.iter().copied().collect();
}

pub const SINGLE_LINE_COMMENT: &str = "//";
pub const MULTI_LINE_COMMENT_START: &str = "/*";
pub const MULTI_LINE_COMMENT_END: &str = "*/";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_have_no_duplicate_key() {
        assert_eq!(FIRST_LETTERS.len(), FIRST_LETTER_MAPPING.len());
        assert_eq!(SUBSEQUENT_LETTERS.len(), SUBSEQUENT_LETTER_MAPPING.len());
    }

    #[test]
    fn test_first_letters_are_uppercase_latin() {
        assert!(FIRST_LETTERS.values().all(|ch| ch.is_ascii_uppercase()));
    }

    #[test]
    fn test_subsequent_letters_are_digits() {
        assert!(SUBSEQUENT_LETTERS
            .values()
            .all(|ch| ('1'..='6').contains(ch)));
    }

    #[test]
    fn test_tables_are_independent() {
        // Vowels only start a word.
        for ch in ['ا', 'آ', 'و', 'ی', 'ع', 'ه', 'ح', 'ء'] {
            assert!(FIRST_LETTERS.contains_key(&ch), "{ch} should start a word");
            assert!(!SUBSEQUENT_LETTERS.contains_key(&ch), "{ch} should be silent");
        }
    }
}
