use std::fmt;

#[derive(Debug)]
pub struct RelayError {
    pub status_code: u16,
    pub cause: String,
    pub message: Option<String>,
}

impl RelayError {
    pub fn new(
        cause: &str,
        message: &str,
    ) -> Self {
        Self {
            status_code: 500,
            cause: cause.to_string(),
            message: Some(message.to_string()),
        }
    }

    pub fn bad_request(
        cause: &str,
        message: &str,
    ) -> Self {
        Self {
            status_code: 400,
            cause: cause.to_string(),
            message: Some(message.to_string()),
        }
    }
}

impl std::error::Error for RelayError {}

impl fmt::Display for RelayError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.cause)
    }
}
