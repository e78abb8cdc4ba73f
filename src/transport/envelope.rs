use crate::domain::HttpMethod;

pub const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";
pub const CONTENT_TYPE_JSON: &str = "application/json";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Encoded request body.
pub enum RequestBody {
    /// Pre-serialized `application/x-www-form-urlencoded` string.
    Form(String),
    /// JSON document.
    Json(serde_json::Value),
}

impl RequestBody {
    /// Body bytes as sent on the wire.
    pub fn to_wire(&self) -> String {
        match self {
            Self::Form(form) => form.clone(),
            Self::Json(value) => value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Fully resolved, ready-to-send HTTP request.
///
/// Built fresh for every call and not mutated afterwards.
pub struct RequestEnvelope {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
}

impl RequestEnvelope {
    /// First header value matching `name` case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}
