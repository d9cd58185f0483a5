use std::time::Duration;

use crate::error::RelayError;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};

#[derive(Clone)]
pub struct HttpGateway {
    pub client: ClientWithMiddleware,
}

impl HttpGateway {
    /// Without a timeout the transport default applies.
    pub fn new(request_timeout_in_millis: Option<u64>) -> Result<Self, RelayError> {
        let mut builder = Client::builder();
        if let Some(timeout) = request_timeout_in_millis {
            builder = builder.timeout(Duration::from_millis(timeout));
        }

        let client = ClientBuilder::new(
            builder
                .build()
                .map_err(|error| RelayError::new(&error.to_string(), "Failed to create http gateway client"))?,
        )
        .build();

        Ok(Self { client })
    }
}
