//! Character classification.

use crate::error::{BasicsError, BasicsResult};

/// First code point of every run of ten decimal digits (general category Nd).
const DECIMAL_DIGIT_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50,
    0x11D50, 0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2,
    0x1D7EC, 0x1D7F6, 0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

/// Check if `c` is a decimal digit in any script.
///
/// Fractions, superscripts and roman numerals are numeric but not decimal
/// digits.
pub fn is_digit(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_digit();
    }
    let code = u32::from(c);
    DECIMAL_DIGIT_ZEROS
        .iter()
        .any(|zero| (*zero..*zero + 10).contains(&code))
}

/// Check if `c` is a letter.
pub fn is_letter(c: char) -> bool {
    c.is_alphabetic()
}

/// Check whether the character at `index` (counted in chars) is whitespace.
pub fn is_whitespace_at(s: &str, index: usize) -> BasicsResult<bool> {
    s.chars()
        .nth(index)
        .map(char::is_whitespace)
        .ok_or_else(|| BasicsError::IndexOutOfRange {
            index,
            len: s.chars().count(),
        })
}

/// Check if `c` is punctuation.
///
/// ASCII math and currency symbols such as `$`, `+` and `<` are symbols,
/// not punctuation. Outside ASCII the table covers Latin-1, Arabic,
/// Devanagari and Thai marks, General and Supplemental Punctuation, CJK
/// brackets and the fullwidth forms; rarer scripts are not recognized.
pub fn is_punctuation(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_punctuation()
            && !matches!(c, '$' | '+' | '<' | '=' | '>' | '^' | '`' | '|' | '~');
    }
    matches!(
        c,
        '\u{00A1}' | '\u{00A7}' | '\u{00AB}' | '\u{00B6}' | '\u{00B7}' | '\u{00BB}' | '\u{00BF}'
            | '\u{060C}'..='\u{060D}'
            | '\u{061B}'
            | '\u{061D}'..='\u{061F}'
            | '\u{066A}'..='\u{066D}'
            | '\u{06D4}'
            | '\u{0964}'..='\u{0965}'
            | '\u{0970}'
            | '\u{0E4F}'
            | '\u{0E5A}'..='\u{0E5B}'
            | '\u{2010}'..='\u{2027}'
            | '\u{2030}'..='\u{2043}'
            | '\u{2045}'..='\u{2051}'
            | '\u{2053}'..='\u{205E}'
            | '\u{207D}'..='\u{207E}'
            | '\u{208D}'..='\u{208E}'
            | '\u{2E00}'..='\u{2E2E}'
            | '\u{2E30}'..='\u{2E4F}'
            | '\u{2E52}'..='\u{2E5D}'
            | '\u{3001}'..='\u{3003}'
            | '\u{3008}'..='\u{3011}'
            | '\u{3014}'..='\u{301F}'
            | '\u{3030}'
            | '\u{303D}'
            | '\u{30A0}'
            | '\u{30FB}'
            | '\u{FE10}'..='\u{FE19}'
            | '\u{FE30}'..='\u{FE52}'
            | '\u{FE54}'..='\u{FE61}'
            | '\u{FF01}'..='\u{FF03}'
            | '\u{FF05}'..='\u{FF0A}'
            | '\u{FF0C}'..='\u{FF0F}'
            | '\u{FF1A}'..='\u{FF1B}'
            | '\u{FF1F}'..='\u{FF20}'
            | '\u{FF3B}'..='\u{FF3D}'
            | '\u{FF3F}'
            | '\u{FF5B}'
            | '\u{FF5D}'
            | '\u{FF5F}'..='\u{FF65}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_letters_are_letters_not_digits() {
        for c in ('a'..='z').chain('A'..='Z') {
            assert!(is_letter(c), "{c} should be a letter");
            assert!(!is_digit(c), "{c} should not be a digit");
        }
    }

    #[test]
    fn test_digits() {
        for c in '0'..='9' {
            assert!(is_digit(c));
            assert!(!is_letter(c));
        }
        assert!(!is_digit('½'));
    }

    #[test]
    fn test_digits_in_other_scripts() {
        for c in ['٣', '۵', '७', '৯', '๒', '０', '９', '𝟘'] {
            assert!(is_digit(c), "{c} should be a digit");
        }
        for c in ['²', 'Ⅻ', '¼', '〇', '/', ':'] {
            assert!(!is_digit(c), "{c} should not be a digit");
        }
    }

    #[test]
    fn test_whitespace_at_index() {
        assert!(is_whitespace_at("Hello There", 5).unwrap());
        assert!(!is_whitespace_at("Hello There", 6).unwrap());
    }

    #[test]
    fn test_whitespace_at_counts_chars_not_bytes() {
        assert!(is_whitespace_at("é x", 1).unwrap());
    }

    #[test]
    fn test_whitespace_out_of_range() {
        let err = is_whitespace_at("Hello There", 11).unwrap_err();
        assert!(matches!(
            err,
            BasicsError::IndexOutOfRange { index: 11, len: 11 }
        ));
    }

    #[test]
    fn test_punctuation() {
        let marks = [
            '?', '!', '.', ',', ';', ':', '"', '\'', '(', ')', '-', '_', '@', '#', '%', '&', '*',
            '/', '\\', '[', ']', '{', '}',
        ];
        for c in marks {
            assert!(is_punctuation(c), "{c} should be punctuation");
        }
    }

    #[test]
    fn test_symbols_are_not_punctuation() {
        for c in ['$', '+', '<', '=', '>', '^', '`', '|', '~', 'a', '1', ' '] {
            assert!(!is_punctuation(c), "{c} should not be punctuation");
        }
    }

    #[test]
    fn test_unicode_punctuation() {
        assert!(is_punctuation('¿'));
        assert!(is_punctuation('—'));
        assert!(is_punctuation('、'));
        assert!(!is_punctuation('€'));
    }

    #[test]
    fn test_fullwidth_and_supplemental_punctuation() {
        for c in ['？', '：', '［', '＿', '｛', '｡', '⸮', '⸘', '؟', '।', '「', '・'] {
            assert!(is_punctuation(c), "{c} should be punctuation");
        }
        for c in ['＋', '＜', '＄', '＾', '｜', 'ⸯ', '°'] {
            assert!(!is_punctuation(c), "{c} should not be punctuation");
        }
    }
}
