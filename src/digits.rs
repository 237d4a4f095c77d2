/// KHMER DIGIT ZERO; the other nine follow contiguously up to U+17E9.
pub const KHMER_DIGIT_ZERO: char = '\u{17E0}';

/// Khmer digits indexed by the value of the ASCII digit they replace.
const KHMER_DIGITS: [char; 10] = ['០', '១', '២', '៣', '៤', '៥', '៦', '៧', '៨', '៩'];

pub fn is_khmer_digit(c: char) -> bool {
    matches!(c, '\u{17E0}'..='\u{17E9}')
}

/// Khmer digit for an ASCII digit, `None` for anything else.
#[inline]
pub fn khmer_digit(c: char) -> Option<char> {
    if c.is_ascii_digit() {
        Some(KHMER_DIGITS[(c as u8 - b'0') as usize])
    } else {
        None
    }
}

/// ASCII digit for a Khmer digit, `None` for anything else.
#[inline]
pub fn arabic_digit(c: char) -> Option<char> {
    if is_khmer_digit(c) {
        let offset = c as u32 - KHMER_DIGIT_ZERO as u32;
        Some((b'0' + offset as u8) as char)
    } else {
        None
    }
}

/// Replaces every ASCII digit with its Khmer digit; everything else stays put.
pub fn to_khmer_digits(text: &str) -> String {
    text.chars().map(|c| khmer_digit(c).unwrap_or(c)).collect()
}

/// Inverse of [`to_khmer_digits`].
pub fn to_arabic_digits(text: &str) -> String {
    text.chars().map(|c| arabic_digit(c).unwrap_or(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_total_and_one_to_one() {
        for (i, ascii) in ('0'..='9').enumerate() {
            let khmer = khmer_digit(ascii).unwrap();
            assert_eq!(khmer, KHMER_DIGITS[i]);
            assert_eq!(arabic_digit(khmer), Some(ascii));
        }
    }

    #[test]
    fn test_non_digits_pass_through() {
        assert_eq!(to_khmer_digits("-12.5e+3"), "-១២.៥e+៣");
        assert_eq!(to_arabic_digits("ឆ្នាំ២០២៤"), "ឆ្នាំ2024");
        assert_eq!(khmer_digit('x'), None);
        assert_eq!(arabic_digit('7'), None);
    }

    #[test]
    fn test_khmer_digit_range() {
        assert!(is_khmer_digit(KHMER_DIGIT_ZERO));
        assert!(is_khmer_digit('៩'));
        assert!(!is_khmer_digit('7'));
        // KHMER SYMBOL LEK ATTAK SON sits just past the digits
        assert!(!is_khmer_digit('\u{17F0}'));
    }

    #[test]
    fn test_unicode_digits_are_not_ascii() {
        // Arabic-Indic digits are not in the table.
        assert_eq!(to_khmer_digits("\u{0663}"), "\u{0663}");
    }
}
