//! Character classification and weighted checksum helpers shared by the national schemes.
//!
//! None of these functions fail loudly: a character that cannot be classified or looked up
//! yields `false` or `None`, which the country validators turn into a rejected identifier.

const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// Zero-based position of `c` in `alphabet`.
#[inline]
pub fn alphabet_value(c: char, alphabet: &str) -> Option<u32> {
    alphabet.chars().position(|x| x == c).map(|idx| idx as u32)
}

/// Sum of `alphabet_value(c) * weight` where the weight starts at `first_weight` for the
/// first character and decreases by one for each following character.
///
/// Returns `None` if a character is missing from the alphabet or if `code` is longer than
/// `first_weight` characters.
pub fn weighted_checksum(code: &str, alphabet: &str, first_weight: u32) -> Option<u32> {
    let mut sum = 0;
    for (idx, c) in code.chars().enumerate() {
        let weight = first_weight
            .checked_sub(idx as u32)
            .filter(|weight| *weight > 0)?;
        sum += alphabet_value(c, alphabet)? * weight;
    }
    Some(sum)
}

/// Sum of the digits of `code` multiplied by the matching entry of `weights`.
///
/// Returns `None` if `code` holds a non digit character or has fewer digits than weights.
pub fn digit_weighted_sum(code: &str, weights: &[u32]) -> Option<u32> {
    let mut digits = code.chars();
    let mut sum = 0;
    for weight in weights {
        sum += digits.next()?.to_digit(10)? * weight;
    }
    Some(sum)
}

/// Check digit completing `sum` to the next multiple of ten.
#[inline]
pub fn mod10_check_digit(sum: u32) -> u32 {
    (10 - sum % 10) % 10
}

/// `11 - sum mod 11`, with the two values that do not fit a single digit mapped to zero.
#[inline]
pub fn mod11_check_digit(sum: u32) -> u32 {
    let check_digit = 11 - sum % 11;
    if check_digit > 9 {
        0
    } else {
        check_digit
    }
}

/// Decimal value of a string made only of ASCII digits.
pub fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || s.len() > 9 {
        return None;
    }
    let mut value = 0;
    for c in s.chars() {
        value = value * 10 + c.to_digit(10)?;
    }
    Some(value)
}

#[inline]
pub fn is_alphabetic(c: char) -> bool {
    c.to_ascii_uppercase().is_ascii_uppercase()
}

#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

#[inline]
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_uppercase())
}

#[inline]
pub fn is_consonant(c: char) -> bool {
    is_alphabetic(c) && !is_vowel(c)
}

#[cfg(test)]
mod test {
    use super::*;

    const ALPHABET: &str = "0123456789ABCDEFGHIJKLMN&OPQRSTUVWXYZ";

    #[test]
    fn should_look_up_alphabet_positions() {
        assert_eq!(alphabet_value('0', ALPHABET), Some(0));
        assert_eq!(alphabet_value('A', ALPHABET), Some(10));
        assert_eq!(alphabet_value('&', ALPHABET), Some(24));
        assert_eq!(alphabet_value('O', ALPHABET), Some(25));
        assert_eq!(alphabet_value('Z', ALPHABET), Some(36));
        assert_eq!(alphabet_value('a', ALPHABET), None);
        assert_eq!(alphabet_value('Ñ', ALPHABET), None);
    }

    #[test]
    fn should_compute_descending_weighted_checksum() {
        // 1*3 + 2*2 + 3*1
        assert_eq!(weighted_checksum("123", ALPHABET, 3), Some(10));
        // A=10, B=11
        assert_eq!(weighted_checksum("AB", ALPHABET, 18), Some(10 * 18 + 11 * 17));
        assert_eq!(weighted_checksum("", ALPHABET, 18), Some(0));
    }

    #[test]
    fn should_fail_checksum_on_unknown_characters() {
        assert_eq!(weighted_checksum("12-3", ALPHABET, 18), None);
        assert_eq!(weighted_checksum("abc", ALPHABET, 18), None);
        // more characters than weights
        assert_eq!(weighted_checksum("1234", ALPHABET, 3), None);
    }

    #[test]
    fn should_compute_digit_weighted_sum() {
        let weights = [7, 6, 5, 4, 3, 2, 7, 6, 5, 4, 3, 2];
        assert_eq!(digit_weighted_sum("010110071000", &weights), Some(60));
        assert_eq!(digit_weighted_sum("01011007100", &weights), None);
        assert_eq!(digit_weighted_sum("01011007100A", &weights), None);
    }

    #[test]
    fn should_compute_check_digits() {
        assert_eq!(mod10_check_digit(0), 0);
        assert_eq!(mod10_check_digit(10), 0);
        assert_eq!(mod10_check_digit(13), 7);
        assert_eq!(mod11_check_digit(60), 6);
        // remainder 0 gives 11, remainder 1 gives 10
        assert_eq!(mod11_check_digit(22), 0);
        assert_eq!(mod11_check_digit(23), 0);
        assert_eq!(mod11_check_digit(24), 9);
    }

    #[test]
    fn should_parse_digits() {
        assert_eq!(parse_digits("007"), Some(7));
        assert_eq!(parse_digits("931"), Some(931));
        assert_eq!(parse_digits(""), None);
        assert_eq!(parse_digits("9a"), None);
        assert_eq!(parse_digits("１２"), None);
    }

    #[test]
    fn should_classify_characters_case_insensitively() {
        assert!(is_alphabetic('a'));
        assert!(is_alphabetic('Z'));
        assert!(!is_alphabetic('1'));
        assert!(!is_alphabetic('&'));
        assert!(!is_alphabetic('é'));

        assert!(is_digit('0'));
        assert!(!is_digit('O'));

        for c in ['a', 'E', 'i', 'O', 'u'] {
            assert!(is_vowel(c), "{c} should be a vowel");
            assert!(!is_consonant(c), "{c} should not be a consonant");
        }
        for c in ['b', 'X', 'r', 'L'] {
            assert!(is_consonant(c), "{c} should be a consonant");
        }
        assert!(!is_consonant('1'));
    }
}
