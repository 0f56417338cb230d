//! CNPJ check-digit validation.
//!
//! A CNPJ is a 14-digit identifier whose last two digits are check digits
//! computed from the preceding ones with a weighted sum mod 11. Validation is
//! pure and total: every malformed input collapses to `false`, nothing
//! panics.

/// Largest value representable with 14 decimal digits.
const MAX_14_DIGITS: i64 = 99_999_999_999_999;

const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Validate a numeric CNPJ candidate.
///
/// Values outside `0..=99_999_999_999_999` cannot be a 14-digit sequence and
/// are invalid; in-range values are left-padded with zeros to 14 digits.
pub fn is_valid_cnpj(candidate: i64) -> bool {
    if !(0..=MAX_14_DIGITS).contains(&candidate) {
        return false;
    }

    let mut digits = [0u32; 14];
    let mut rest = candidate;
    for slot in digits.iter_mut().rev() {
        *slot = (rest % 10) as u32;
        rest /= 10;
    }
    is_valid_digits(&digits)
}

/// Validate a string CNPJ candidate.
///
/// Only sequences of exactly 14 ASCII decimal digits can be valid; formatted
/// input (`12.345.678/0001-95`) is the caller's problem.
pub fn is_valid_cnpj_str(candidate: &str) -> bool {
    let mut digits = [0u32; 14];
    let mut count = 0;
    for ch in candidate.chars() {
        let Some(digit) = ch.to_digit(10) else {
            return false;
        };
        if count == 14 {
            return false;
        }
        digits[count] = digit;
        count += 1;
    }
    count == 14 && is_valid_digits(&digits)
}

fn is_valid_digits(digits: &[u32; 14]) -> bool {
    // Sequences like 00000000000000 or 11111111111111 satisfy the check-digit
    // equations but are conventionally invalid.
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    check_digit(&digits[..12], &FIRST_WEIGHTS) == digits[12]
        && check_digit(&digits[..13], &SECOND_WEIGHTS) == digits[13]
}

fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    let remainder = sum % 11;
    if remainder < 2 { 0 } else { 11 - remainder }
}
