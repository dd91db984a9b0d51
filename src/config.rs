/// Local storage key holding the user's backend URL override.
pub const BACKEND_URL_STORAGE_KEY: &str = "PLAYGROUND_BACKEND_URL";

/// Backend used when nothing is stored. Set `PLAYGROUND_BACKEND_URL` at build time to change it.
pub const DEFAULT_BACKEND_URL: &str = match option_env!("PLAYGROUND_BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// Turns a user-entered backend URL into a base that endpoint paths can be appended to.
/// Blank input falls back to [`DEFAULT_BACKEND_URL`].
pub fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_BACKEND_URL.trim_end_matches('/').to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_whitespace_and_trailing_slashes() {
        assert_eq!(
            normalize_base_url("  http://example.com:9000// "),
            "http://example.com:9000"
        );
    }

    #[test]
    fn blank_url_uses_default() {
        assert_eq!(
            normalize_base_url("   "),
            DEFAULT_BACKEND_URL.trim_end_matches('/')
        );
        assert_eq!(normalize_base_url(""), normalize_base_url("   "));
    }

    #[test]
    fn keeps_path_prefix() {
        assert_eq!(
            normalize_base_url("https://host/playground/"),
            "https://host/playground"
        );
    }
}
