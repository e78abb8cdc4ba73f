use super::envelope::{CONTENT_TYPE_FORM, RequestBody, RequestEnvelope};
use super::form::serialize_form;
use crate::domain::{Amount, ApiKey, HttpMethod, LineType, MobileNumber};

/// Validated field set of a `credit/topup` call.
#[derive(Debug, Clone)]
pub struct TopUpFields<'a> {
    pub phone: &'a MobileNumber,
    pub line_type: LineType,
    /// Lowercased, whitelisted network name.
    pub network: &'a str,
    pub amount: Amount,
    pub api_key: &'a ApiKey,
}

pub const NETWORK_FIELD: &str = "network";

pub fn encode_top_up_form(fields: &TopUpFields<'_>) -> String {
    serialize_form(
        [
            (MobileNumber::FIELD, Some(fields.phone.as_str().to_owned())),
            (LineType::FIELD, Some(fields.line_type.code().to_string())),
            (NETWORK_FIELD, Some(fields.network.to_owned())),
            (Amount::FIELD, Some(fields.amount.value().to_string())),
            (ApiKey::FIELD, Some(fields.api_key.as_str().to_owned())),
        ],
        true,
    )
}

/// GET carries the form as query string, POST as a form-encoded body.
pub fn build_top_up_envelope(
    endpoint: &str,
    method: HttpMethod,
    fields: &TopUpFields<'_>,
) -> RequestEnvelope {
    let form = encode_top_up_form(fields);
    match method {
        HttpMethod::Get => RequestEnvelope {
            method,
            url: format!("{endpoint}?{form}"),
            headers: Vec::new(),
            body: None,
        },
        HttpMethod::Post => RequestEnvelope {
            method,
            url: endpoint.to_owned(),
            headers: vec![("Content-Type".to_owned(), CONTENT_TYPE_FORM.to_owned())],
            body: Some(RequestBody::Form(form)),
        },
    }
}
