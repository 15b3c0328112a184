//! Pure validation over raw form input. Nothing here touches the network;
//! invalid data never leaves the client.

use crate::models::OrderRequest;
use crate::settings::Settings;

pub const INVALID_NAME_MESSAGE: &str = "Invalid name. Please use letters and spaces only";
pub const INVALID_PHONE_MESSAGE: &str =
    "Invalid phone number. Please use digits and standard symbols only";

const NAME_MIN_CHARS: usize = 2;
const NAME_MAX_CHARS: usize = 128;

/// Validate a customer name. Returns the trimmed name if valid,
/// Err with a user-facing message if not.
///
/// Accepts Unicode letters plus spaces, apostrophes and hyphens,
/// 2 to 128 characters after trimming.
pub fn validate_name(raw: &str) -> Result<String, String> {
    let name = raw.trim();
    let len = name.chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len) {
        return Err(INVALID_NAME_MESSAGE.to_string());
    }
    let allowed = |c: char| c.is_alphabetic() || matches!(c, ' ' | '\'' | '’' | '-');
    if !name.chars().all(allowed) {
        return Err(INVALID_NAME_MESSAGE.to_string());
    }
    Ok(name.to_string())
}

/// Validate a phone number. Returns the trimmed number if valid,
/// Err with a user-facing message if not.
///
/// Accepts digits and the usual separators (spaces, parentheses, `+`, `-`);
/// the digit count alone must fall within `[min_digits, max_digits]`.
pub fn validate_phone(raw: &str, min_digits: usize, max_digits: usize) -> Result<String, String> {
    let phone = raw.trim();
    if !phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '(' | ')' | '+' | '-'))
    {
        return Err(INVALID_PHONE_MESSAGE.to_string());
    }
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if !(min_digits..=max_digits).contains(&digits) {
        return Err(INVALID_PHONE_MESSAGE.to_string());
    }
    Ok(phone.to_string())
}

/// Run both field validators and build the request body. The first failing
/// field wins, name before phone.
pub fn validate_order(name: &str, phone: &str, settings: &Settings) -> Result<OrderRequest, String> {
    let user_name = validate_name(name)?;
    let phone_number = validate_phone(phone, settings.phone_min_digits, settings.phone_max_digits)?;
    Ok(OrderRequest {
        user_name,
        phone_number,
    })
}
