//! URN:NBN:DE check digit calculation
//!
//! Algorithm:
//! 1. Replace every character of the URN with its number from the substitution table
//! 2. Weight (multiply) every digit of the resulting number string with its
//!    1-based position
//! 3. Sum up the products
//! 4. Divide the sum by the last digit of the number string (truncating)
//! 5. The ones place of the quotient is the check digit
//!
//! The calculation is only valid for the `urn:nbn:de` namespace.

use crate::domain::error::CheckDigitError;
use crate::domain::mapping::char_value;

/// Convert an identifier into its number string
///
/// Each character is looked up case-insensitively and the decimal digits of
/// its value are appended in input order. Fails on the first unmapped
/// character.
pub fn convert_to_number_string(urn: &str) -> Result<String, CheckDigitError> {
    if urn.is_empty() {
        return Err(CheckDigitError::EmptyInput);
    }

    // Values are at most two digits
    let mut number_string = String::with_capacity(urn.len() * 2);
    for (position, character) in urn.chars().enumerate() {
        let value = char_value(character).ok_or(CheckDigitError::UnmappedCharacter {
            character,
            position,
        })?;
        if value >= 10 {
            number_string.push(char::from(b'0' + value / 10));
        }
        number_string.push(char::from(b'0' + value % 10));
    }

    Ok(number_string)
}

/// Get the last digit of a number string
pub fn last_number(number_string: &str) -> Result<u32, CheckDigitError> {
    let character = number_string
        .chars()
        .next_back()
        .ok_or(CheckDigitError::EmptyInput)?;

    character.to_digit(10).ok_or(CheckDigitError::NonDigit {
        character,
        position: number_string.chars().count() - 1,
    })
}

/// Calculate the weighted sum of all digits
///
/// Each digit is multiplied by its 1-based position.
pub fn calc_sum_of_products(number_string: &str) -> Result<u64, CheckDigitError> {
    if number_string.is_empty() {
        return Err(CheckDigitError::EmptyInput);
    }

    number_string
        .chars()
        .enumerate()
        .try_fold(0u64, |sum, (position, character)| {
            let digit = character
                .to_digit(10)
                .ok_or(CheckDigitError::NonDigit {
                    character,
                    position,
                })?;
            Ok(sum + u64::from(digit) * (position as u64 + 1))
        })
}

/// Create the check digit from the sum of products and the last digit
///
/// The quotient is truncated, not rounded. Returns its ones place.
pub fn create_check_digit(sum_of_products: u64, last_digit: u32) -> Result<char, CheckDigitError> {
    if last_digit == 0 {
        return Err(CheckDigitError::DivisionByZero);
    }

    let quotient = sum_of_products / u64::from(last_digit);
    Ok(char::from(b'0' + (quotient % 10) as u8))
}

/// Calculate the check digit of a URN without check digit
pub fn calc(urn_without_check_digit: &str) -> Result<char, CheckDigitError> {
    let number_string = convert_to_number_string(urn_without_check_digit)?;
    let last_digit = last_number(&number_string)?;
    let sum_of_products = calc_sum_of_products(&number_string)?;
    let check_digit = create_check_digit(sum_of_products, last_digit)?;

    tracing::trace!(
        urn = urn_without_check_digit,
        %number_string,
        sum_of_products,
        last_digit,
        %check_digit,
        "calculated check digit"
    );

    Ok(check_digit)
}

/// Append the check digit to a URN
///
/// A trailing separator (e.g. "urn:nbn:de:bvb:12-bsb00103137-") must already
/// be part of the input, since it is covered by the checksum.
/// The input is returned unchanged (including its case) with the digit appended.
pub fn append_check_digit(urn_without_check_digit: &str) -> Result<String, CheckDigitError> {
    let check_digit = calc(urn_without_check_digit)?;

    let mut urn = String::with_capacity(urn_without_check_digit.len() + 1);
    urn.push_str(urn_without_check_digit);
    urn.push(check_digit);
    Ok(urn)
}

/// Split a complete URN into its body and trailing check digit
pub fn split_check_digit(urn_with_check_digit: &str) -> Result<(&str, char), CheckDigitError> {
    let mut chars = urn_with_check_digit.chars();
    match chars.next_back() {
        Some(c) if c.is_ascii_digit() => Ok((chars.as_str(), c)),
        Some(_) => Err(CheckDigitError::MissingCheckDigit),
        None => Err(CheckDigitError::EmptyInput),
    }
}

/// Verify the trailing check digit of a complete URN
///
/// Returns `Ok(false)` when the digit does not match.
pub fn verify(urn_with_check_digit: &str) -> Result<bool, CheckDigitError> {
    let (body, check_digit) = split_check_digit(urn_with_check_digit)?;
    Ok(calc(body)? == check_digit)
}
