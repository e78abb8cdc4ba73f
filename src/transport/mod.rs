//! Transport layer: wire formats and request envelopes (no I/O).

mod envelope;
mod form;
mod top_up;
mod usp;

pub use envelope::{CONTENT_TYPE_FORM, CONTENT_TYPE_JSON, RequestBody, RequestEnvelope};
pub use form::serialize_form;
pub use top_up::{TopUpFields, build_top_up_envelope};
pub use usp::{TransportError, build_usp_envelope};
