use serde::{Deserialize, Serialize};

/// Outcome of posting the payload to a single endpoint.
///
/// A response with any status is `delivered`, `ok` tells whether it was a 2xx.
/// Transport failures are `failed` and only carry the error description.
/// The response body is cut to `body_limit` characters (Unicode scalar values, not UTF-16 units).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EndpointResult {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EndpointResult {
    pub fn delivered(
        status: u16,
        status_text: &str,
        body: &str,
        body_limit: usize,
    ) -> Self {
        Self {
            ok: (200..300).contains(&status),
            status: Some(status),
            status_text: Some(status_text.to_string()),
            body: Some(body.chars().take(body_limit).collect()),
            error: None,
        }
    }

    pub fn failed(error: &str) -> Self {
        Self {
            ok: false,
            status: None,
            status_text: None,
            body: None,
            error: Some(error.to_string()),
        }
    }
}
