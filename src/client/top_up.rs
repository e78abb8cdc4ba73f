use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use super::{Callback, GatewayError, HttpTransport, default_transport, ignore, reqwest_transport};
use crate::domain::{
    Amount, ApiKey, HttpMethod, MobileNumber, ProviderResponse, TopUpRequest, is_top_up_network,
};
use crate::transport::{TopUpFields, build_top_up_envelope};

const DEFAULT_TOP_UP_ENDPOINT: &str = "https://api.smsgh.com/credit/topup";

#[derive(Clone)]
/// Builder for [`CreditTopUp`].
///
/// Use this when you need to customize the endpoint, timeout, user-agent, or transport.
pub struct CreditTopUpBuilder {
    api_key: ApiKey,
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl CreditTopUpBuilder {
    /// Create a builder with the default endpoint and no timeout/user-agent override.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            endpoint: DEFAULT_TOP_UP_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
            transport: None,
        }
    }

    /// Override the `credit/topup` endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
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

    /// Build a [`CreditTopUp`].
    pub fn build(self) -> Result<CreditTopUp, GatewayError> {
        let http = match self.transport {
            Some(transport) => transport,
            None => reqwest_transport(self.timeout, self.user_agent)?,
        };
        Ok(CreditTopUp {
            api_key: self.api_key,
            endpoint: self.endpoint,
            http,
        })
    }
}

#[derive(Clone)]
/// Airtime credit top-up through `credit/topup`, authenticated with an API key.
///
/// Unlike [`UtilityServices`](crate::UtilityServices), this façade checks request
/// fields at call time and reports problems through the call result, and it hands
/// the HTTP response back verbatim (status and body), whatever its status.
pub struct CreditTopUp {
    api_key: ApiKey,
    endpoint: String,
    http: Arc<dyn HttpTransport>,
}

struct ValidTopUp {
    phone: MobileNumber,
    network: String,
    amount: Amount,
    method: HttpMethod,
}

impl CreditTopUp {
    /// Create a client using the default endpoint.
    ///
    /// Fails with [`GatewayError::InvalidCredential`] when `api_key` is blank.
    pub fn new(api_key: impl Into<String>) -> Result<Self, GatewayError> {
        let api_key = ApiKey::new(api_key).map_err(GatewayError::InvalidCredential)?;
        Ok(Self {
            api_key,
            endpoint: DEFAULT_TOP_UP_ENDPOINT.to_owned(),
            http: default_transport(),
        })
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: ApiKey) -> CreditTopUpBuilder {
        CreditTopUpBuilder::new(api_key)
    }

    /// Top up airtime credit.
    ///
    /// `GET` (the default) sends the fields as a query string; `POST` sends them as a
    /// form-encoded body.
    ///
    /// Errors:
    /// - [`GatewayError::InvalidArgument`] for a malformed phone, a zero amount or an
    ///   unsupported method,
    /// - [`GatewayError::InvalidCarrier`] for a network outside the whitelist,
    /// - [`GatewayError::Transport`] when the request could not be performed.
    pub async fn top_it_up(&self, request: TopUpRequest) -> Result<ProviderResponse, GatewayError> {
        let valid = validate(&request).inspect_err(|err| {
            tracing::warn!(error = %err, "rejected top-up request");
        })?;

        let fields = TopUpFields {
            phone: &valid.phone,
            line_type: request.line_type,
            network: &valid.network,
            amount: valid.amount,
            api_key: &self.api_key,
        };
        let envelope = build_top_up_envelope(&self.endpoint, valid.method, &fields);

        tracing::debug!(
            endpoint = %self.endpoint,
            method = valid.method.as_str(),
            network = %valid.network,
            "sending top-up request"
        );
        self.http
            .send(&envelope)
            .await
            .map_err(GatewayError::Transport)
    }

    /// Callback-style variant of [`CreditTopUp::top_it_up`].
    ///
    /// The returned future invokes `callback` exactly once when awaited, with either
    /// the response or the error (including validation errors). A missing callback
    /// is replaced by a no-op.
    pub fn dispatch(
        &self,
        request: TopUpRequest,
        callback: Option<Callback<ProviderResponse>>,
    ) -> impl Future<Output = ()> + Send + '_ {
        let callback = callback.unwrap_or_else(|| Box::new(ignore::<ProviderResponse>));
        async move { callback(self.top_it_up(request).await) }
    }
}

fn validate(request: &TopUpRequest) -> Result<ValidTopUp, GatewayError> {
    let phone = MobileNumber::new(request.phone.as_str()).map_err(GatewayError::InvalidArgument)?;
    let amount = Amount::new(request.amount).map_err(GatewayError::InvalidArgument)?;
    let method = match request.method.as_deref() {
        Some(method) => method.parse().map_err(GatewayError::InvalidArgument)?,
        None => HttpMethod::Get,
    };

    let network = request.network.trim().to_lowercase();
    if !is_top_up_network(&network) {
        return Err(GatewayError::InvalidCarrier {
            network: request.network.clone(),
        });
    }

    Ok(ValidTopUp {
        phone,
        network,
        amount,
        method,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::client::fake::FakeTransport;
    use crate::domain::{LineType, TOP_UP_NETWORKS, ValidationError};
    use crate::transport::{CONTENT_TYPE_FORM, RequestBody};

    const ENDPOINT: &str = "https://example.invalid/credit/topup";
    const FORM: &str = "phone=233200000000&line-type=0&network=tigo&amount=5&api-key=k";

    fn make_client(transport: FakeTransport) -> CreditTopUp {
        CreditTopUp::builder(ApiKey::new("k").unwrap())
            .endpoint(ENDPOINT)
            .transport(Arc::new(transport))
            .build()
            .unwrap()
    }

    fn request() -> TopUpRequest {
        TopUpRequest::new("233200000000", "tigo", LineType::Prepaid, 5)
    }

    #[test]
    fn new_rejects_blank_api_key() {
        assert!(matches!(
            CreditTopUp::new("  "),
            Err(GatewayError::InvalidCredential(ValidationError::Empty { .. }))
        ));
        assert!(CreditTopUp::new("key").is_ok());
    }

    #[tokio::test]
    async fn omitted_method_issues_get_with_query_string() {
        let transport = FakeTransport::new(200, "OK");
        let client = make_client(transport.clone());

        let response = client.top_it_up(request()).await.unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, "OK");

        let sent = transport.last_request();
        assert_eq!(sent.method, HttpMethod::Get);
        assert_eq!(sent.url, format!("{ENDPOINT}?{FORM}"));
        assert_eq!(sent.body, None);
    }

    #[tokio::test]
    async fn post_method_sends_form_body() {
        let transport = FakeTransport::new(200, "OK");
        let client = make_client(transport.clone());

        client.top_it_up(request().method("POST")).await.unwrap();

        let sent = transport.last_request();
        assert_eq!(sent.method, HttpMethod::Post);
        assert_eq!(sent.url, ENDPOINT);
        assert_eq!(sent.header("Content-Type"), Some(CONTENT_TYPE_FORM));
        assert_eq!(sent.body, Some(RequestBody::Form(FORM.to_owned())));
    }

    #[tokio::test]
    async fn network_and_method_are_normalized_to_lowercase() {
        let transport = FakeTransport::new(200, "OK");
        let client = make_client(transport.clone());

        let mut req = request().method("get");
        req.network = "TiGo".to_owned();
        client.top_it_up(req).await.unwrap();

        let sent = transport.last_request();
        assert_eq!(sent.method, HttpMethod::Get);
        assert!(sent.url.contains("network=tigo"));
    }

    #[tokio::test]
    async fn unknown_network_is_reported_without_a_request() {
        let transport = FakeTransport::new(200, "OK");
        let client = make_client(transport.clone());

        let mut req = request();
        req.network = "globacom".to_owned();
        let err = client.top_it_up(req).await.unwrap_err();
        assert!(matches!(
            err,
            GatewayError::InvalidCarrier { ref network } if network == "globacom"
        ));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn malformed_fields_are_invalid_arguments() {
        let transport = FakeTransport::new(200, "OK");
        let client = make_client(transport.clone());

        let mut bad_phone = request();
        bad_phone.phone = "0200000000".to_owned();
        assert!(matches!(
            client.top_it_up(bad_phone).await,
            Err(GatewayError::InvalidArgument(
                ValidationError::InvalidPhoneNumber { .. }
            ))
        ));

        let mut zero = request();
        zero.amount = 0;
        assert!(matches!(
            client.top_it_up(zero).await,
            Err(GatewayError::InvalidArgument(ValidationError::ZeroAmount { .. }))
        ));

        assert!(matches!(
            client.top_it_up(request().method("PUT")).await,
            Err(GatewayError::InvalidArgument(
                ValidationError::InvalidMethod { .. }
            ))
        ));

        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn non_success_response_is_delivered_verbatim() {
        let transport = FakeTransport::new(402, r#"{"error":"insufficient funds"}"#);
        let client = make_client(transport);

        let response = client.top_it_up(request()).await.unwrap();
        assert_eq!(response.status, 402);
        assert!(!response.is_success());
        assert_eq!(response.body, r#"{"error":"insufficient funds"}"#);
    }

    #[tokio::test]
    async fn transport_failure_is_passed_through() {
        let client = make_client(FakeTransport::failing("connection refused"));

        let err = client.top_it_up(request()).await.unwrap_err();
        match err {
            GatewayError::Transport(source) => {
                assert_eq!(source.to_string(), "connection refused");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn dispatch_delivers_validation_errors_to_the_callback() {
        let client = make_client(FakeTransport::new(200, "OK"));
        let seen = Arc::new(Mutex::new(None));

        let sink = Arc::clone(&seen);
        let mut req = request();
        req.network = "orange".to_owned();
        client
            .dispatch(
                req,
                Some(Box::new(move |result: Result<ProviderResponse, GatewayError>| {
                    *sink.lock().unwrap() = Some(result.map(|it| it.status));
                })),
            )
            .await;

        let seen = seen.lock().unwrap().take().unwrap();
        assert!(matches!(seen, Err(GatewayError::InvalidCarrier { .. })));
    }

    #[tokio::test]
    async fn dispatch_without_callback_still_sends() {
        let transport = FakeTransport::new(200, "OK");
        let client = make_client(transport.clone());

        client.dispatch(request(), None).await;
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn api_key_is_sent_as_given() {
        let transport = FakeTransport::new(200, "OK");
        let client = CreditTopUp::builder(ApiKey::new(" k ").unwrap())
            .endpoint(ENDPOINT)
            .transport(Arc::new(transport.clone()))
            .build()
            .unwrap();

        client.top_it_up(request()).await.unwrap();
        assert!(transport.last_request().url.ends_with("&api-key=+k+"));
    }

    fn mixed_case(name: &str, upper: &[bool]) -> String {
        name.chars()
            .zip(upper.iter().copied().chain(std::iter::repeat(false)))
            .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
            .collect()
    }

    proptest::proptest! {
        #[test]
        fn query_string_recovers_request_fields(
            national in "[0-9]{9}",
            network_index in 0..TOP_UP_NETWORKS.len(),
            upper in proptest::collection::vec(proptest::bool::ANY, 8),
            postpaid in proptest::bool::ANY,
            amount in 1u32..1_000_000,
        ) {
            let phone = format!("233{national}");
            let network = TOP_UP_NETWORKS[network_index];
            let line_type = if postpaid { LineType::Postpaid } else { LineType::Prepaid };
            let request = TopUpRequest::new(
                phone.as_str(),
                mixed_case(network, &upper),
                line_type,
                amount,
            );

            let transport = FakeTransport::new(200, "OK");
            let client = make_client(transport.clone());
            let runtime = tokio::runtime::Builder::new_current_thread()
                .build()
                .unwrap();
            runtime.block_on(client.top_it_up(request)).unwrap();

            let sent = transport.last_request();
            proptest::prop_assert_eq!(sent.method, HttpMethod::Get);
            let (base, query) = sent.url.split_once('?').unwrap();
            proptest::prop_assert_eq!(base, ENDPOINT);

            let pairs: Vec<(String, String)> = url::form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect();
            let expected = vec![
                ("phone".to_owned(), phone),
                ("line-type".to_owned(), if postpaid { "1" } else { "0" }.to_owned()),
                ("network".to_owned(), network.to_owned()),
                ("amount".to_owned(), amount.to_string()),
                ("api-key".to_owned(), "k".to_owned()),
            ];
            proptest::prop_assert_eq!(pairs, expected);
        }
    }
}
