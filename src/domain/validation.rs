use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Amounts accepted by bundle-style operations (Surfline bundles).
pub const BUNDLE_AMOUNTS: [u32; 5] = [1, 5, 10, 20, 50];

// Country code 233 followed by the 9-digit national significant number.
static PHONE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^233[0-9]{9}$").expect("phone pattern is valid"));

/// Returns `true` iff `input` is a `233xxxxxxxxx` subscriber number.
pub fn is_valid_phone_number(input: &str) -> bool {
    PHONE_NUMBER.is_match(input)
}

/// Returns `true` iff `amount` is one of [`BUNDLE_AMOUNTS`].
pub fn is_allowed_bundle_amount(amount: u32) -> bool {
    BUNDLE_AMOUNTS.contains(&amount)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidPhoneNumber { input: String },
    UnknownCarrier { input: String },
    ZeroAmount { field: &'static str },
    BundleAmountNotAllowed { actual: u32 },
    InvalidServiceKind { input: String },
    InvalidMethod { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::UnknownCarrier { input } => write!(f, "unknown carrier: {input}"),
            Self::ZeroAmount { field } => write!(f, "{field} must be a positive integer"),
            Self::BundleAmountNotAllowed { actual } => {
                write!(
                    f,
                    "bundle amount not allowed: {actual} (expected one of 1, 5, 10, 20, 50)"
                )
            }
            Self::InvalidServiceKind { input } => {
                write!(
                    f,
                    "invalid service kind: {input} (expected postpaid or broadband)"
                )
            }
            Self::InvalidMethod { input } => {
                write!(f, "invalid HTTP method: {input} (expected GET or POST)")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "account" };
        assert_eq!(err.to_string(), "account must not be empty");

        let err = ValidationError::InvalidPhoneNumber {
            input: "bad".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid phone number: bad");

        let err = ValidationError::UnknownCarrier {
            input: "orange".to_owned(),
        };
        assert_eq!(err.to_string(), "unknown carrier: orange");

        let err = ValidationError::BundleAmountNotAllowed { actual: 7 };
        assert_eq!(
            err.to_string(),
            "bundle amount not allowed: 7 (expected one of 1, 5, 10, 20, 50)"
        );
    }

    #[test]
    fn phone_grammar_requires_country_code_and_nine_digits() {
        assert!(is_valid_phone_number("233200000000"));
        assert!(is_valid_phone_number("233541234567"));

        assert!(!is_valid_phone_number(""));
        assert!(!is_valid_phone_number("0200000000"));
        assert!(!is_valid_phone_number("+233200000000"));
        assert!(!is_valid_phone_number("23320000000"));
        assert!(!is_valid_phone_number("2332000000000"));
        assert!(!is_valid_phone_number("23320000000a"));
        assert!(!is_valid_phone_number(" 233200000000"));
    }

    #[test]
    fn bundle_amounts_are_a_closed_set() {
        for amount in BUNDLE_AMOUNTS {
            assert!(is_allowed_bundle_amount(amount));
        }
        for amount in [0, 2, 4, 15, 49, 51, 100] {
            assert!(!is_allowed_bundle_amount(amount));
        }
    }
}
