use crate::error::{Result, UrlshError};
use url::Url;

pub const CUSTOM_CODE_MIN: usize = 3;
pub const CUSTOM_CODE_MAX: usize = 20;

/// True for absolute `http`/`https` URLs with a non-empty host.
pub fn is_valid_url(input: &str) -> bool {
    match Url::parse(input) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https")
                && url.host_str().is_some_and(|h| !h.is_empty())
        }
        Err(_) => false,
    }
}

pub fn validate_custom_code(code: &str) -> Result<()> {
    let len = code.chars().count();
    if !(CUSTOM_CODE_MIN..=CUSTOM_CODE_MAX).contains(&len) {
        return Err(UrlshError::InvalidCode(format!(
            "custom code must be {}-{} characters",
            CUSTOM_CODE_MIN, CUSTOM_CODE_MAX
        )));
    }
    if let Some(bad) = code
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(UrlshError::InvalidCode(format!(
            "'{}' is not allowed in a code (use letters, digits, '-' or '_')",
            bad
        )));
    }
    Ok(())
}
