use serde::de::DeserializeOwned;

use crate::client::GatewayError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// HTTP response as handed back by the transport.
pub struct ProviderResponse {
    pub status: u16,
    pub body: String,
}

impl ProviderResponse {
    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Response body delivered by the USP endpoints, unwrapped from its envelope.
pub struct ProviderBody(String);

impl ProviderBody {
    pub fn new(body: impl Into<String>) -> Self {
        Self(body.into())
    }

    /// Borrow the body as received.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Decode the body as JSON.
    ///
    /// Fails with [`GatewayError::Parse`] when the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, GatewayError> {
        serde_json::from_str(&self.0).map_err(GatewayError::Parse)
    }
}

impl From<ProviderResponse> for ProviderBody {
    fn from(value: ProviderResponse) -> Self {
        Self(value.body)
    }
}
