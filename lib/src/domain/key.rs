const VISIBLE_PREFIX: usize = 6;
const VISIBLE_SUFFIX: usize = 4;
const MIN_MASKED_LENGTH: usize = 8;

/// Keeps the first 6 and last 4 characters of keys with at least 8 characters.
/// Shorter keys are returned as they are.
pub fn mask_key(key: &str) -> String {
    let chars = key.chars().collect::<Vec<char>>();
    if chars.len() < MIN_MASKED_LENGTH {
        return key.to_string();
    }

    let prefix = chars[..VISIBLE_PREFIX].iter().collect::<String>();
    let suffix = chars[chars.len() - VISIBLE_SUFFIX..].iter().collect::<String>();

    format!("{prefix}…{suffix}")
}

#[cfg(test)]
mod test {
    use super::mask_key;

    #[test]
    fn should_mask_long_key() {
        assert_eq!("30013c…9842", mask_key("30013c1aaf39462fb4dae8e0518d9842"));
    }

    #[test]
    fn should_mask_key_with_exactly_eight_chars() {
        assert_eq!("abcdef…efgh", mask_key("abcdefgh"));
    }

    #[test]
    fn should_not_mask_short_key() {
        assert_eq!("abcdefg", mask_key("abcdefg"));
        assert_eq!("", mask_key(""));
    }

    #[test]
    fn should_count_chars_instead_of_bytes() {
        assert_eq!("éééééé", mask_key("éééééé"));
        assert_eq!("ééééé1…2345", mask_key("ééééé12345"));
    }
}
