use crate::error::RelayError;
use std::env;
use std::str::FromStr;

pub struct Environment;

impl Environment {
    pub fn string(
        env_name: &str,
        default: &str,
    ) -> String {
        env::var(env_name).ok().unwrap_or(default.to_string())
    }

    pub fn optional_string(env_name: &str) -> Option<String> {
        env::var(env_name).ok().filter(|value| !value.trim().is_empty())
    }

    /// Comma separated values, blanks skipped.
    pub fn list(
        env_name: &str,
        default: &[&str],
    ) -> Vec<String> {
        match Self::optional_string(env_name) {
            Some(value) => value.split(',').map(str::trim).filter(|it| !it.is_empty()).map(str::to_string).collect(),
            None => default.iter().map(|it| it.to_string()).collect(),
        }
    }

    pub fn u16(
        env_name: &str,
        default: u16,
    ) -> Result<u16, RelayError> {
        Self::parse(env_name).map(|value| value.unwrap_or(default))
    }

    pub fn u64(
        env_name: &str,
        default: u64,
    ) -> Result<u64, RelayError> {
        Self::parse(env_name).map(|value| value.unwrap_or(default))
    }

    pub fn usize(
        env_name: &str,
        default: usize,
    ) -> Result<usize, RelayError> {
        Self::parse(env_name).map(|value| value.unwrap_or(default))
    }

    pub fn optional_u64(env_name: &str) -> Result<Option<u64>, RelayError> {
        Self::parse(env_name)
    }

    fn parse<T>(env_name: &str) -> Result<Option<T>, RelayError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match Self::optional_string(env_name) {
            None => Ok(None),
            Some(value) => value
                .trim()
                .parse::<T>()
                .map(Some)
                .map_err(|error| RelayError::new(&error.to_string(), &format!("Failed to parse environment variable {env_name}={value}"))),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Environment;
    use serial_test::serial;
    use std::env;

    #[test]
    #[serial]
    fn should_split_list_and_skip_blanks() {
        env::set_var("INDEXNOW_TEST_LIST", " https://a.test/indexnow , ,https://b.test/indexnow");

        let values = Environment::list("INDEXNOW_TEST_LIST", &["https://default.test"]);

        env::remove_var("INDEXNOW_TEST_LIST");

        assert_eq!(vec!["https://a.test/indexnow", "https://b.test/indexnow"], values);
    }

    #[test]
    #[serial]
    fn should_use_default_list_when_unset() {
        env::remove_var("INDEXNOW_TEST_LIST");

        let values = Environment::list("INDEXNOW_TEST_LIST", &["https://default.test"]);

        assert_eq!(vec!["https://default.test"], values);
    }

    #[test]
    #[serial]
    fn should_fail_on_malformed_number() {
        env::set_var("INDEXNOW_TEST_NUMBER", "ten");

        let result = Environment::u64("INDEXNOW_TEST_NUMBER", 10);

        env::remove_var("INDEXNOW_TEST_NUMBER");

        let error = result.unwrap_err();
        assert_eq!(500, error.status_code);
        assert!(error.message.unwrap().contains("INDEXNOW_TEST_NUMBER"));
    }
}
