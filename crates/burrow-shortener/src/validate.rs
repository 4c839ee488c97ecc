use burrow_core::ShortenerError;
use url::Url;

/// Accepts absolute `http`/`https` URLs that name a host.
///
/// Runs before allocation so that malformed input never reaches the store.
/// The input is stored verbatim and later sent back as a `Location` header,
/// so it must already be in that form: `Url::parse` silently strips
/// surrounding whitespace and embedded tabs or newlines, which therefore
/// have to be rejected up front.
pub fn validate_url(input: &str) -> Result<(), ShortenerError> {
    if input.trim().is_empty() {
        return Err(ShortenerError::InvalidUrl(
            "URL cannot be empty".to_string(),
        ));
    }

    if input != input.trim() || input.chars().any(|c| c.is_ascii_control()) {
        return Err(ShortenerError::InvalidUrl(format!(
            "{} is not a valid url: contains whitespace or control characters",
            input.escape_debug()
        )));
    }

    let parsed = Url::parse(input)
        .map_err(|e| ShortenerError::InvalidUrl(format!("{input} is not a valid url: {e}")))?;

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(ShortenerError::InvalidUrl(format!(
                "URL scheme must be http or https: {scheme}"
            )));
        }
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(ShortenerError::InvalidUrl(format!(
            "{input} is not a valid url: missing host"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_absolute_http_urls() {
        assert!(validate_url("https://example.com").is_ok());
        assert!(validate_url("http://example.com:8080/a/b?c=d#e").is_ok());
        assert!(validate_url("https://sub.example.co.uk/path").is_ok());
        assert!(validate_url("http://127.0.0.1/").is_ok());
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(validate_url(""), Err(ShortenerError::InvalidUrl(_))));
        assert!(matches!(validate_url("   "), Err(ShortenerError::InvalidUrl(_))));
    }

    #[test]
    fn rejects_relative_and_bare_strings() {
        assert!(validate_url("not-a-valid-url").is_err());
        assert!(validate_url("/r/abc").is_err());
        assert!(validate_url("example.com").is_err());
    }

    #[test]
    fn rejects_whitespace_and_control_characters() {
        for input in [
            " https://example.com",
            "https://example.com\n",
            "https://example.com/a\nb",
            "https://example.com/a\tb",
            "https://exa\rmple.com",
            "https://example.com/\u{7f}",
        ] {
            assert!(
                matches!(validate_url(input), Err(ShortenerError::InvalidUrl(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn accepts_non_ascii_paths() {
        assert!(validate_url("https://de.wikipedia.org/wiki/Köln").is_ok());
    }

    #[test]
    fn rejects_other_schemes() {
        assert!(validate_url("ftp://example.com").is_err());
        assert!(validate_url("javascript:alert(1)").is_err());
        assert!(validate_url("file:///etc/passwd").is_err());
    }
}
