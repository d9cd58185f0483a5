use crate::error::RelayError;
use serde::Serialize;
use url::Url;

/// Body posted to every IndexNow endpoint.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IndexNowPayload {
    pub host: String,
    pub key: String,
    pub key_location: String,
    pub url_list: Vec<String>,
}

impl IndexNowPayload {
    pub fn new(
        host: &str,
        key: &str,
        key_location: &str,
        url_list: Vec<String>,
    ) -> Self {
        Self {
            host: host.to_string(),
            key: key.to_string(),
            key_location: key_location.to_string(),
            url_list,
        }
    }

    pub fn to_body(&self) -> Result<Vec<u8>, RelayError> {
        serde_json::to_vec(self).map_err(|error| RelayError::new(&error.to_string(), "Failed to serialize IndexNow payload"))
    }
}

/// Host (with non-default port) of an absolute url, or an empty string when it cannot be parsed.
pub fn infer_host(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return String::new();
    };

    match (parsed.host_str(), parsed.port()) {
        (Some(host), Some(port)) => format!("{host}:{port}"),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    }
}

#[cfg(test)]
mod test {
    use super::{infer_host, IndexNowPayload};
    use serde_json::json;

    #[test]
    fn should_infer_host() {
        assert_eq!("example.com", infer_host("https://example.com/"));
        assert_eq!("example.com", infer_host("https://example.com:443/path?q=1"));
        assert_eq!("example.com:8080", infer_host("http://example.com:8080/"));
    }

    #[test]
    fn should_leave_host_empty_for_malformed_url() {
        assert_eq!("", infer_host("not-a-url"));
        assert_eq!("", infer_host("/relative/path"));
        assert_eq!("", infer_host("mailto:someone@example.com"));
    }

    #[test]
    fn should_serialize_with_indexnow_field_names() {
        let payload = IndexNowPayload::new("example.com", "key-1234", "https://example.com/key-1234.txt", vec!["https://example.com/".to_string()]);

        let body: serde_json::Value = serde_json::from_slice(&payload.to_body().unwrap()).unwrap();

        assert_eq!(
            json!({
                "host": "example.com",
                "key": "key-1234",
                "keyLocation": "https://example.com/key-1234.txt",
                "urlList": ["https://example.com/"]
            }),
            body
        );
    }
}
