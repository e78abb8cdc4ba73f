//! Client layer: façades that validate, build envelopes, and drive the transport.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{HttpMethod, ProviderResponse, ValidationError};
use crate::transport::{RequestBody, RequestEnvelope};

mod normalize;
mod top_up;
mod usp;

#[cfg(test)]
mod fake;

pub use top_up::{CreditTopUp, CreditTopUpBuilder};
pub use usp::{UtilityServices, UtilityServicesBuilder};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Opaque error produced by an [`HttpTransport`].
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Continuation for the callback-style entry points.
///
/// Invoked exactly once with either the error or the success value.
pub type Callback<T> = Box<dyn FnOnce(Result<T, GatewayError>) + Send + 'static>;

/// Performs a single HTTP exchange.
///
/// The default implementation is built on `reqwest`; inject your own through the
/// client builders to reuse an existing HTTP stack or to stub the network in tests.
pub trait HttpTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        request: &'a RequestEnvelope,
    ) -> BoxFuture<'a, Result<ProviderResponse, BoxError>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        request: &'a RequestEnvelope,
    ) -> BoxFuture<'a, Result<ProviderResponse, BoxError>> {
        Box::pin(async move {
            let method = match request.method {
                HttpMethod::Get => reqwest::Method::GET,
                HttpMethod::Post => reqwest::Method::POST,
            };
            let mut builder = self.client.request(method, request.url.as_str());
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            builder = match request.body.as_ref() {
                Some(RequestBody::Json(value)) => builder.json(value),
                Some(RequestBody::Form(form)) => builder.body(form.clone()),
                None => builder,
            };

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(ProviderResponse { status, body })
        })
    }
}

fn reqwest_transport(
    timeout: Option<Duration>,
    user_agent: Option<String>,
) -> Result<Arc<dyn HttpTransport>, GatewayError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(user_agent) = user_agent {
        builder = builder.user_agent(user_agent);
    }

    let client = builder
        .build()
        .map_err(|err| GatewayError::Transport(Box::new(err)))?;
    Ok(Arc::new(ReqwestTransport { client }))
}

fn default_transport() -> Arc<dyn HttpTransport> {
    Arc::new(ReqwestTransport {
        client: reqwest::Client::new(),
    })
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`CreditTopUp`] and [`UtilityServices`].
///
/// Construction problems surface immediately. For [`CreditTopUp`], argument problems
/// are reported through the call result; for [`UtilityServices`] they are caught when
/// the [`UtilityOperation`](crate::UtilityOperation) is built.
pub enum GatewayError {
    /// A credential passed to a constructor was rejected.
    #[error("invalid credential: {0}")]
    InvalidCredential(#[source] ValidationError),

    /// A top-up request field is malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[source] ValidationError),

    /// The top-up network is not one of `mtn`, `vodafone`, `expresso`, `airtel`,
    /// `tigo` or `glo`.
    #[error(
        "invalid network `{network}`: available networks are mtn, vodafone, expresso, airtel, tigo or glo"
    )]
    InvalidCarrier { network: String },

    /// No Basic-Auth credential was provided to [`UtilityServices`].
    #[error("no basic auth credential provided")]
    MissingAuth,

    /// A callback-style USP call was made without a callback.
    #[error("a callback must be specified for this request")]
    MissingCallback,

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The request could not be built: the JSON payload failed to encode or the
    /// base URL is unusable.
    #[error("failed to encode request: {0}")]
    Encode(#[source] BoxError),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc), passed through as-is.
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// A response body could not be decoded as the requested JSON shape.
    #[error("failed to parse response body: {0}")]
    Parse(#[source] serde_json::Error),
}

fn ignore<T>(_: Result<T, GatewayError>) {}
