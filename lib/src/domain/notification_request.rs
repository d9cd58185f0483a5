use crate::error::RelayError;
use serde::Deserialize;
use serde_json::Value;

pub const INVALID_BODY_MESSAGE: &str = "Invalid JSON body.";
pub const MISSING_URLS_MESSAGE: &str = "Missing 'urls' (array of absolute URLs) in request body.";

#[derive(Deserialize, Default)]
struct RawNotificationRequest {
    urls: Option<Value>,
    #[serde(rename = "urlList")]
    url_list: Option<Value>,
    key: Option<Value>,
    #[serde(rename = "keyLocation")]
    key_location: Option<Value>,
}

/// A batch of urls as received from the caller. `key` and `key_location` stay
/// empty when the caller did not provide them, defaults are applied by the relay.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationRequest {
    pub urls: Vec<String>,
    pub key: Option<String>,
    pub key_location: Option<String>,
}

impl NotificationRequest {
    pub fn new(urls: Vec<String>) -> Self {
        Self {
            urls: urls.into_iter().filter(|url| !url.is_empty()).collect(),
            key: None,
            key_location: None,
        }
    }

    pub fn with_key(
        self,
        key: &str,
    ) -> Self {
        Self {
            key: Some(key.to_string()).filter(|it| !it.is_empty()),
            ..self
        }
    }

    pub fn with_key_location(
        self,
        key_location: &str,
    ) -> Self {
        Self {
            key_location: Some(key_location.to_string()).filter(|it| !it.is_empty()),
            ..self
        }
    }

    /// Parses a raw request body. An empty body is read as an empty object.
    pub fn from_body(body: &[u8]) -> Result<Self, RelayError> {
        let raw = if body.is_empty() {
            RawNotificationRequest::default()
        } else {
            serde_json::from_slice::<RawNotificationRequest>(body).map_err(|error| RelayError::bad_request(&error.to_string(), INVALID_BODY_MESSAGE))?
        };

        let urls_field = raw.urls.filter(is_truthy).or(raw.url_list);

        Ok(Self {
            urls: to_url_list(urls_field),
            key: raw.key.filter(is_truthy).map(render),
            key_location: raw.key_location.filter(is_truthy).map(render),
        })
    }

    pub fn validate(&self) -> Result<(), RelayError> {
        if self.urls.is_empty() {
            return Err(RelayError::bad_request("Request without urls", MISSING_URLS_MESSAGE));
        }

        Ok(())
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|it| it != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Only non-empty strings are kept, other entries such as numbers are dropped.
fn to_url_list(value: Option<Value>) -> Vec<String> {
    let values = match value {
        Some(Value::Array(values)) => values,
        Some(value) if is_truthy(&value) => vec![value],
        _ => vec![],
    };

    values
        .into_iter()
        .filter_map(|value| match value {
            Value::String(url) if !url.is_empty() => Some(url),
            _ => None,
        })
        .collect()
}

/// Non-string values are rendered as their JSON text.
fn render(value: Value) -> String {
    match value {
        Value::String(text) => text,
        other => other.to_string(),
    }
}
