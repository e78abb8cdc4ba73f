use std::fmt;
use std::str::FromStr;

use phonenumber::country;

use crate::domain::validation::{ValidationError, is_allowed_bundle_amount, is_valid_phone_number};

#[derive(Clone, PartialEq, Eq, Hash)]
/// SMSGH API key used by `credit/topup` (`api-key`).
///
/// Invariant: not blank. Stored and sent exactly as given.
pub struct ApiKey(String);

impl ApiKey {
    /// Form field name used by SMSGH (`api-key`).
    pub const FIELD: &'static str = "api-key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(..)")
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Pre-encoded Basic-Auth credential (the part after `Basic `).
///
/// Invariant: not blank. Stored and sent exactly as given.
pub struct BasicAuth(String);

impl BasicAuth {
    pub const FIELD: &'static str = "basicAuth";

    /// Create a validated [`BasicAuth`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Value of the `Authorization` header.
    pub fn header_value(&self) -> String {
        format!("Basic {}", self.0)
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BasicAuth(..)")
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// USP session token, sent in every payload and in the balance URL.
///
/// Invariant: not blank. Stored and sent exactly as given.
pub struct SessionToken(String);

impl SessionToken {
    /// JSON field name used by the USP endpoints (`token`).
    pub const FIELD: &'static str = "token";

    /// Create a validated [`SessionToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(..)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Ghanaian subscriber number in wire form (`233xxxxxxxxx`).
pub struct MobileNumber(String);

impl MobileNumber {
    /// Form/JSON field name used by SMSGH (`phone`).
    pub const FIELD: &'static str = "phone";

    /// Accept `input` only if it already is in wire form.
    pub fn new(input: impl Into<String>) -> Result<Self, ValidationError> {
        let input = input.into();
        if !is_valid_phone_number(&input) {
            return Err(ValidationError::InvalidPhoneNumber { input });
        }
        Ok(Self(input))
    }

    /// Parse a human-entered number (`+233 20 123 4567`, `0201234567`, ...) and
    /// normalize it to wire form.
    ///
    /// Numbers without an explicit country prefix are read as Ghanaian.
    pub fn parse(input: impl Into<String>) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if is_valid_phone_number(raw) {
            return Ok(Self(raw.to_owned()));
        }

        let parsed = phonenumber::parse(Some(country::Id::GH), raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.to_owned() })?;
        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Self::new(e164.trim_start_matches('+')).map_err(|_| ValidationError::InvalidPhoneNumber {
            input: raw.to_owned(),
        })
    }

    /// Wire value (`233xxxxxxxxx`).
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Payment amount in whole Ghana cedis.
///
/// Invariant: positive.
pub struct Amount(u32);

impl Amount {
    /// Form/JSON field name used by SMSGH (`amount`).
    pub const FIELD: &'static str = "amount";

    /// Create a validated [`Amount`].
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::ZeroAmount { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Get the underlying amount.
    pub fn value(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Bundle amount for Surfline purchases.
///
/// Invariant: one of `1, 5, 10, 20, 50`.
pub struct BundleAmount(u32);

impl BundleAmount {
    /// JSON field name used by SMSGH (`amount`).
    pub const FIELD: &'static str = "amount";

    /// Create a validated [`BundleAmount`].
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if !is_allowed_bundle_amount(value) {
            return Err(ValidationError::BundleAmountNotAllowed { actual: value });
        }
        Ok(Self(value))
    }

    /// Get the underlying amount.
    pub fn value(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Customer account number for bill payments (DSTV, Vodafone).
///
/// Invariant: non-empty after trimming.
pub struct AccountNumber(String);

impl AccountNumber {
    /// JSON field name used by SMSGH (`account`).
    pub const FIELD: &'static str = "account";

    /// Create a validated [`AccountNumber`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated account number.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Surfline bundle identifier (`bundle`).
///
/// Invariant: non-empty after trimming.
pub struct BundleCode(String);

impl BundleCode {
    /// JSON field name used by SMSGH (`bundle`).
    pub const FIELD: &'static str = "bundle";

    /// Create a validated [`BundleCode`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated bundle code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Subscriber line type (`line-type`).
pub enum LineType {
    #[default]
    Prepaid,
    Postpaid,
}

impl LineType {
    /// Form field name used by SMSGH (`line-type`).
    pub const FIELD: &'static str = "line-type";

    /// Wire value: `0` for prepaid, `1` for postpaid.
    pub fn code(self) -> u8 {
        match self {
            Self::Prepaid => 0,
            Self::Postpaid => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// HTTP verb of an outgoing request.
pub enum HttpMethod {
    #[default]
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl FromStr for HttpMethod {
    type Err = ValidationError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_lowercase().as_str() {
            "get" => Ok(Self::Get),
            "post" => Ok(Self::Post),
            _ => Err(ValidationError::InvalidMethod {
                input: input.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Vodafone bill category (`service`).
pub enum ServiceKind {
    Postpaid,
    Broadband,
}

impl ServiceKind {
    /// JSON field name used by `usp/vodafone` (`service`).
    pub const FIELD: &'static str = "service";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Postpaid => "postpaid",
            Self::Broadband => "broadband",
        }
    }
}

impl FromStr for ServiceKind {
    type Err = ValidationError;

    /// Only the exact lowercase names are accepted.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "postpaid" => Ok(Self::Postpaid),
            "broadband" => Ok(Self::Broadband),
            _ => Err(ValidationError::InvalidServiceKind {
                input: input.to_owned(),
            }),
        }
    }
}
