//! Typed Rust client for the SMSGH airtime top-up and utility services (USP) HTTP API.
//!
//! The crate is split into a domain layer of strong types (carriers, amounts,
//! subscriber numbers, operations), a transport layer that turns them into
//! ready-to-send request envelopes, and a client layer with two façades:
//!
//! - [`CreditTopUp`] for `credit/topup`, authenticated with an API key,
//! - [`UtilityServices`] for the `usp/*` endpoints, authenticated with Basic-Auth
//!   and a session token.
//!
//! ```rust,no_run
//! use smsgh_vas::{CreditTopUp, LineType, TopUpRequest, UtilityOperation, UtilityServices};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let topup = CreditTopUp::new("api-key")?;
//!     let request = TopUpRequest::new("233200000000", "tigo", LineType::Prepaid, 5);
//!     let _response = topup.top_it_up(request).await?;
//!
//!     let usp = UtilityServices::new("dXNlcjpwYXNz", "session-token")?;
//!     let bundle = UtilityOperation::bundle_surfline_plus("233200000000", 10)?;
//!     let _body = usp.execute(bundle).await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    BoxError, BoxFuture, Callback, CreditTopUp, CreditTopUpBuilder, GatewayError, HttpTransport,
    UtilityServices, UtilityServicesBuilder,
};
pub use domain::{
    AccountNumber, Amount, ApiKey, BasicAuth, BundleAmount, BundleCode, Carrier, CarrierCode,
    HttpMethod, LineType, MobileNumber, ProviderBody, ProviderResponse, ServiceKind,
    SessionToken, TopUpRequest, UtilityOperation, ValidationError, is_allowed_bundle_amount,
    is_valid_phone_number,
};
pub use transport::{RequestBody, RequestEnvelope, serialize_form};
