use serde::Serialize;
use url::Url;

use super::envelope::{RequestBody, RequestEnvelope};
use crate::domain::{HttpMethod, SessionToken, UtilityOperation};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("failed to encode JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid base URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("base URL `{0}` cannot carry a path")]
    CannotBeABase(String),
}

#[derive(Debug, Serialize)]
struct AirtimePayload<'a> {
    network: String,
    amount: u32,
    phone: &'a str,
    token: &'a str,
}

#[derive(Debug, Serialize)]
struct AccountPayload<'a> {
    account: &'a str,
    amount: u32,
    token: &'a str,
}

#[derive(Debug, Serialize)]
struct TokenPayload<'a> {
    token: &'a str,
}

#[derive(Debug, Serialize)]
struct BundlePayload<'a> {
    device: &'a str,
    amount: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    bundle: Option<&'a str>,
    token: &'a str,
}

#[derive(Debug, Serialize)]
struct BillPayload<'a> {
    account: &'a str,
    amount: u32,
    service: &'a str,
    token: &'a str,
}

/// Build the request for `operation` against `base_url` (no trailing slash).
///
/// `headers` is the client's fixed header set and is copied into the envelope.
pub fn build_usp_envelope(
    base_url: &str,
    headers: &[(String, String)],
    token: &SessionToken,
    operation: &UtilityOperation,
) -> Result<RequestEnvelope, TransportError> {
    let token_str = token.as_str();
    let (method, path, payload) = match operation {
        UtilityOperation::AirtimeTopUp {
            carrier,
            amount,
            phone,
        } => (
            HttpMethod::Post,
            "usp/airtime".to_owned(),
            Some(serde_json::to_value(AirtimePayload {
                network: carrier.code().to_string(),
                amount: amount.value(),
                phone: phone.as_str(),
                token: token_str,
            })?),
        ),
        UtilityOperation::DstvPayment { account, amount } => (
            HttpMethod::Post,
            "usp/dstv".to_owned(),
            Some(serde_json::to_value(AccountPayload {
                account: account.as_str(),
                amount: amount.value(),
                token: token_str,
            })?),
        ),
        UtilityOperation::SurflineQuery { device } => (
            HttpMethod::Post,
            format!("usp/surfline?{}", device.as_str()),
            Some(serde_json::to_value(TokenPayload { token: token_str })?),
        ),
        UtilityOperation::SurflineBundlePurchase {
            device,
            amount,
            bundle,
        } => (
            HttpMethod::Post,
            "usp/surflineplus".to_owned(),
            Some(serde_json::to_value(BundlePayload {
                device: device.as_str(),
                amount: amount.value(),
                bundle: bundle.as_ref().map(|it| it.as_str()),
                token: token_str,
            })?),
        ),
        UtilityOperation::VodafoneInternetPayment { account, amount } => (
            HttpMethod::Post,
            "usp/vodafone-internet".to_owned(),
            Some(serde_json::to_value(AccountPayload {
                account: account.as_str(),
                amount: amount.value(),
                token: token_str,
            })?),
        ),
        UtilityOperation::VodafoneBillPayment {
            account,
            amount,
            service,
        } => (
            HttpMethod::Post,
            "usp/vodafone".to_owned(),
            Some(serde_json::to_value(BillPayload {
                account: account.as_str(),
                amount: amount.value(),
                service: service.as_str(),
                token: token_str,
            })?),
        ),
        UtilityOperation::BalanceQuery => {
            return Ok(RequestEnvelope {
                method: HttpMethod::Get,
                url: account_url(base_url, token_str)?.into(),
                headers: headers.to_vec(),
                body: None,
            });
        }
    };

    Ok(RequestEnvelope {
        method,
        url: format!("{base_url}/{path}"),
        headers: headers.to_vec(),
        body: payload.map(RequestBody::Json),
    })
}

/// `{base_url}/usp/account/{token}`, with the token escaped as a single path segment.
fn account_url(base_url: &str, token: &str) -> Result<Url, TransportError> {
    let mut url = Url::parse(base_url)?;
    url.path_segments_mut()
        .map_err(|()| TransportError::CannotBeABase(base_url.to_owned()))?
        .pop_if_empty()
        .extend(["usp", "account", token]);
    Ok(url)
}
