use crate::environment::Environment;
use crate::error::RelayError;

pub const DEFAULT_SITE: &str = "https://vidforges.com";
pub const DEFAULT_KEY: &str = "30013c1aaf39462fb4dae8e0518d9842";
pub const DEFAULT_RESPONSE_BODY_LIMIT: usize = 5000;

pub const DEFAULT_ENDPOINTS: [&str; 2] = ["https://api.indexnow.org/indexnow", "https://www.bing.com/indexnow"];

/// Known receivers that are not enabled by default. Opt in through `INDEXNOW_ENDPOINTS`.
pub const ADDITIONAL_ENDPOINTS: [&str; 2] = ["https://search.seznam.cz/indexnow", "https://yandex.com/indexnow"];

/// Process-wide relay configuration. Built once at startup and never mutated.
#[derive(Clone, Debug)]
pub struct RelayResources {
    pub endpoints: Vec<String>,
    pub default_key: String,
    pub default_key_location: String,
    pub http_timeout_in_millis: Option<u64>,
    pub response_body_limit: usize,
}

impl RelayResources {
    pub fn new(
        endpoints: Vec<String>,
        default_key: &str,
        default_key_location: &str,
    ) -> Self {
        Self {
            endpoints,
            default_key: default_key.to_string(),
            default_key_location: default_key_location.to_string(),
            http_timeout_in_millis: None,
            response_body_limit: DEFAULT_RESPONSE_BODY_LIMIT,
        }
    }

    pub fn from_env() -> Result<Self, RelayError> {
        let site = Environment::optional_string("INDEXNOW_SITE").unwrap_or_else(|| DEFAULT_SITE.to_string());
        let default_key = Environment::optional_string("INDEXNOW_KEY").unwrap_or_else(|| DEFAULT_KEY.to_string());
        let default_key_location = Environment::optional_string("INDEXNOW_KEY_LOCATION")
            .unwrap_or_else(|| format!("{}/{}.txt", site.trim_end_matches('/'), default_key));
        let endpoints = Environment::list("INDEXNOW_ENDPOINTS", &DEFAULT_ENDPOINTS);

        let mut resources = Self::new(endpoints, &default_key, &default_key_location)
            .with_response_body_limit(Environment::usize("INDEXNOW_RESPONSE_BODY_LIMIT", DEFAULT_RESPONSE_BODY_LIMIT)?);

        if let Some(timeout) = Environment::optional_u64("INDEXNOW_HTTP_TIMEOUT_IN_MILLIS")? {
            resources = resources.with_http_timeout_in_millis(timeout);
        }

        Ok(resources)
    }

    pub fn with_http_timeout_in_millis(
        self,
        http_timeout: u64,
    ) -> Self {
        Self {
            http_timeout_in_millis: Some(http_timeout),
            ..self
        }
    }

    pub fn with_response_body_limit(
        self,
        response_body_limit: usize,
    ) -> Self {
        Self { response_body_limit, ..self }
    }
}
