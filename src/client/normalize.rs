use super::{BoxError, GatewayError};
use crate::domain::{ProviderBody, ProviderResponse};

/// Unwrap a transport outcome to the response body.
///
/// Transport errors pass through untouched; the HTTP status is not inspected.
pub(crate) fn normalize(
    result: Result<ProviderResponse, BoxError>,
) -> Result<ProviderBody, GatewayError> {
    result
        .map(ProviderBody::from)
        .map_err(GatewayError::Transport)
}
