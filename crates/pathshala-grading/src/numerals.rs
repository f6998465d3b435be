//! Conversion between Western and Bangla digits.

const BENGALI_DIGITS: [char; 10] = ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯'];

/// Render a number with Bangla digits.
///
/// The sign and decimal point are kept as they are, so `-2.5` becomes `-২.৫`.
pub fn to_bengali_number(value: f64) -> String {
    to_bengali_digits(&value.to_string())
}

/// Replace every ASCII digit in `text` with its Bangla counterpart
pub fn to_bengali_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(digit) => BENGALI_DIGITS[digit as usize],
            None => c,
        })
        .collect()
}

/// Replace every Bangla digit in `text` with its ASCII counterpart
pub fn to_ascii_digits(text: &str) -> String {
    text.chars()
        .map(|c| {
            BENGALI_DIGITS
                .iter()
                .position(|&bengali| bengali == c)
                .and_then(|digit| char::from_digit(digit as u32, 10))
                .unwrap_or(c)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_bengali_number() {
        assert_eq!(to_bengali_number(0.0), "০");
        assert_eq!(to_bengali_number(5.0), "৫");
        assert_eq!(to_bengali_number(360.0), "৩৬০");
        assert_eq!(to_bengali_number(-2.5), "-২.৫");
    }

    #[test]
    fn test_to_bengali_digits_keeps_other_characters() {
        assert_eq!(to_bengali_digits("2 + 3 = 5"), "২ + ৩ = ৫");
        assert_eq!(to_bengali_digits("90°"), "৯০°");
    }

    #[test]
    fn test_to_ascii_digits() {
        assert_eq!(to_ascii_digits("১২৩"), "123");
        assert_eq!(to_ascii_digits("৩.৫"), "3.5");
        assert_eq!(to_ascii_digits("abc"), "abc");
    }

    #[test]
    fn test_digits_round_trip() {
        assert_eq!(to_ascii_digits(&to_bengali_digits("1234567890")), "1234567890");
    }
}
