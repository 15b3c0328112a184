// Integration tests for form input validation
mod common;

use orderdesk::validation::{
    validate_name, validate_order, validate_phone, INVALID_NAME_MESSAGE, INVALID_PHONE_MESSAGE,
};

#[test]
fn test_validate_name_valid() {
    assert_eq!(validate_name("John Doe").unwrap(), "John Doe");
    assert_eq!(validate_name("  John Doe  ").unwrap(), "John Doe");
    assert!(validate_name("Li").is_ok());
    assert!(validate_name("O'Brien").is_ok());
    assert!(validate_name("Anne-Marie D’Arcy").is_ok());
}

#[test]
fn test_validate_name_unicode_letters() {
    assert!(validate_name("Алесь Кавалевіч").is_ok());
    assert!(validate_name("José García").is_ok());
    assert!(validate_name("田中 太郎").is_ok());
}

#[test]
fn test_validate_name_length_bounds() {
    // One character is too short, even after trimming
    assert_eq!(validate_name("J").unwrap_err(), INVALID_NAME_MESSAGE);
    assert_eq!(validate_name("  J  ").unwrap_err(), INVALID_NAME_MESSAGE);
    assert!(validate_name("").is_err());
    assert!(validate_name("   ").is_err());

    let longest = "a".repeat(128);
    assert!(validate_name(&longest).is_ok());
    let too_long = "a".repeat(129);
    assert_eq!(validate_name(&too_long).unwrap_err(), INVALID_NAME_MESSAGE);
}

#[test]
fn test_validate_name_rejects_disallowed_characters() {
    for bad in ["John3", "John_Doe", "John.Doe", "John@Doe", "John\tDoe", "🙂🙂"] {
        assert_eq!(validate_name(bad).unwrap_err(), INVALID_NAME_MESSAGE, "{bad}");
    }
}

#[test]
fn test_validate_phone_valid() {
    assert_eq!(
        validate_phone("+375 29 111-11-11", 7, 15).unwrap(),
        "+375 29 111-11-11"
    );
    assert!(validate_phone("(029) 123-45-67", 7, 15).is_ok());
    assert!(validate_phone("1234567", 7, 15).is_ok());
    assert!(validate_phone("  1234567  ", 7, 15).is_ok());
}

#[test]
fn test_validate_phone_digit_count_bounds() {
    // Separators do not count towards the digit bound
    assert_eq!(
        validate_phone("12-34-56", 7, 15).unwrap_err(),
        INVALID_PHONE_MESSAGE
    );
    assert!(validate_phone("123456789012345", 7, 15).is_ok());
    assert_eq!(
        validate_phone("1234567890123456", 7, 15).unwrap_err(),
        INVALID_PHONE_MESSAGE
    );
    // Nothing but separators
    assert_eq!(
        validate_phone("()+- ", 7, 15).unwrap_err(),
        INVALID_PHONE_MESSAGE
    );
    assert!(validate_phone("", 7, 15).is_err());
}

#[test]
fn test_validate_phone_looser_bound_is_configurable() {
    let twenty_digits = "1".repeat(20);
    assert!(validate_phone(&twenty_digits, 7, 15).is_err());
    assert!(validate_phone(&twenty_digits, 7, 24).is_ok());
}

#[test]
fn test_validate_phone_rejects_disallowed_characters() {
    for bad in ["12345x67", "123.456.789", "1234567!", "12 34 56 7a"] {
        assert_eq!(
            validate_phone(bad, 7, 15).unwrap_err(),
            INVALID_PHONE_MESSAGE,
            "{bad}"
        );
    }
}

#[test]
fn test_validate_order_builds_trimmed_request() {
    let settings = common::test_settings();
    let order = validate_order("  John Doe  ", "  +375 29 111-11-11 ", &settings).unwrap();
    assert_eq!(order.user_name, "John Doe");
    assert_eq!(order.phone_number, "+375 29 111-11-11");
}

#[test]
fn test_validate_order_name_error_wins_over_phone() {
    let settings = common::test_settings();
    let err = validate_order("!", "also invalid", &settings).unwrap_err();
    assert_eq!(err, INVALID_NAME_MESSAGE);
}
