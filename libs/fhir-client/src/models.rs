//! Wire-level types shared by the client and its callers

use serde_json::Value;

/// Media type for FHIR JSON, used for both `Content-Type` and `Accept`.
pub const FHIR_JSON: &str = "application/fhir+json";

/// Successful create response.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedResource {
    /// HTTP status (201 on a conformant server, some answer 200)
    pub status: u16,

    /// Parsed response body, normally the stored resource with its new `id`
    pub body: Value,
}

impl CreatedResource {
    /// Server-assigned logical id, if the body carries one.
    pub fn id(&self) -> Option<&str> {
        self.body.get("id").and_then(Value::as_str)
    }
}
