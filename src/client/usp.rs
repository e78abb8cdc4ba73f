use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use super::normalize::normalize;
use super::{Callback, GatewayError, HttpTransport, default_transport, reqwest_transport};
use crate::domain::{BasicAuth, ProviderBody, SessionToken, UtilityOperation};
use crate::transport::{CONTENT_TYPE_JSON, build_usp_envelope};

const DEFAULT_BASE_URL: &str = "https://api.smsgh.com";

#[derive(Clone)]
/// Builder for [`UtilityServices`].
pub struct UtilityServicesBuilder {
    auth: BasicAuth,
    token: SessionToken,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl UtilityServicesBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(auth: BasicAuth, token: SessionToken) -> Self {
        Self {
            auth,
            token,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
            transport: None,
        }
    }

    /// Override the API base URL (`https://api.smsgh.com` by default). The `usp/...`
    /// paths are appended to it.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    ///
    /// Ignored when a custom transport is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    ///
    /// Ignored when a custom transport is supplied.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Send requests through `transport` instead of the built-in `reqwest` client.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build a [`UtilityServices`].
    pub fn build(self) -> Result<UtilityServices, GatewayError> {
        let http = match self.transport {
            Some(transport) => transport,
            None => reqwest_transport(self.timeout, self.user_agent)?,
        };
        Ok(UtilityServices::from_parts(
            &self.auth,
            self.token,
            self.base_url,
            http,
        ))
    }
}

#[derive(Clone)]
/// USP client: airtime, DSTV, Surfline, Vodafone payments and balance queries.
///
/// Authenticated with a Basic-Auth credential and a session token. Operations are
/// validated when the [`UtilityOperation`] is constructed, so nothing malformed can
/// reach [`UtilityServices::execute`]. Responses are unwrapped to their body.
pub struct UtilityServices {
    token: SessionToken,
    base_url: String,
    headers: Arc<[(String, String)]>,
    http: Arc<dyn HttpTransport>,
}

impl UtilityServices {
    /// Create a client using the default base URL.
    ///
    /// Fails with [`GatewayError::MissingAuth`] when `auth` is blank and with
    /// [`GatewayError::InvalidCredential`] when `token` is blank.
    pub fn new(auth: impl Into<String>, token: impl Into<String>) -> Result<Self, GatewayError> {
        let auth = BasicAuth::new(auth).map_err(|_| GatewayError::MissingAuth)?;
        let token = SessionToken::new(token).map_err(GatewayError::InvalidCredential)?;
        Ok(Self::from_parts(
            &auth,
            token,
            DEFAULT_BASE_URL.to_owned(),
            default_transport(),
        ))
    }

    /// Start building a client with custom settings.
    pub fn builder(auth: BasicAuth, token: SessionToken) -> UtilityServicesBuilder {
        UtilityServicesBuilder::new(auth, token)
    }

    fn from_parts(
        auth: &BasicAuth,
        token: SessionToken,
        base_url: String,
        http: Arc<dyn HttpTransport>,
    ) -> Self {
        let headers = vec![
            ("Authorization".to_owned(), auth.header_value()),
            ("Content-Type".to_owned(), CONTENT_TYPE_JSON.to_owned()),
            ("Accept".to_owned(), CONTENT_TYPE_JSON.to_owned()),
        ];
        Self {
            token,
            base_url: base_url.trim_end_matches('/').to_owned(),
            headers: headers.into(),
            http,
        }
    }

    /// Perform `operation` with a single request.
    ///
    /// The HTTP status is not inspected: whatever body the provider returns is handed
    /// back. Only transport failures are errors.
    pub async fn execute(&self, operation: UtilityOperation) -> Result<ProviderBody, GatewayError> {
        let envelope = build_usp_envelope(&self.base_url, &self.headers, &self.token, &operation)
            .map_err(|err| GatewayError::Encode(Box::new(err)))?;

        tracing::debug!(
            operation = operation.name(),
            method = envelope.method.as_str(),
            "sending USP request"
        );
        normalize(self.http.send(&envelope).await)
    }

    /// Query the account balance (`GET usp/account/{token}`).
    pub async fn get_account_balance(&self) -> Result<ProviderBody, GatewayError> {
        self.execute(UtilityOperation::account_balance()).await
    }

    /// Callback-style variant of [`UtilityServices::execute`].
    ///
    /// Returns [`GatewayError::MissingCallback`] immediately, before anything is sent,
    /// when `callback` is `None`. Otherwise the returned future performs the request
    /// and invokes `callback` exactly once with the body or the error.
    pub fn dispatch(
        &self,
        operation: UtilityOperation,
        callback: Option<Callback<ProviderBody>>,
    ) -> Result<impl Future<Output = ()> + Send + '_, GatewayError> {
        let Some(callback) = callback else {
            return Err(GatewayError::MissingCallback);
        };
        Ok(async move { callback(self.execute(operation).await) })
    }
}
