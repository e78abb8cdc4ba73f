//! Domain layer: strong types with validation and invariants (no I/O).

pub mod carrier;
mod request;
mod response;
mod validation;
mod value;

pub use carrier::{Carrier, CarrierCode, TOP_UP_NETWORKS, is_top_up_network};
pub use request::{TopUpRequest, UtilityOperation};
pub use response::{ProviderBody, ProviderResponse};
pub use validation::{
    BUNDLE_AMOUNTS, ValidationError, is_allowed_bundle_amount, is_valid_phone_number,
};
pub use value::{
    AccountNumber, Amount, ApiKey, BasicAuth, BundleAmount, BundleCode, HttpMethod, LineType,
    MobileNumber, ServiceKind, SessionToken,
};
