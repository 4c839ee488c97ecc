use crate::shortcode::ShortCode;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A persisted short code → URL mapping.
///
/// Mappings are written once by the allocator and never updated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlMapping {
    /// The unique key of the mapping.
    pub short_code: ShortCode,
    /// The original URL that was shortened.
    pub original_url: String,
    pub created_at: Timestamp,
    /// Always equal to `created_at`; nothing mutates a mapping after creation.
    pub updated_at: Timestamp,
}

impl UrlMapping {
    /// Builds a fresh mapping stamped with `created_at`.
    pub fn new(short_code: ShortCode, original_url: impl Into<String>, created_at: Timestamp) -> Self {
        Self {
            short_code,
            original_url: original_url.into(),
            created_at,
            updated_at: created_at,
        }
    }

    /// Builds a fresh mapping stamped with the current time.
    pub fn now(short_code: ShortCode, original_url: impl Into<String>) -> Self {
        Self::new(short_code, original_url, Timestamp::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn updated_at_starts_equal_to_created_at() {
        let mapping = UrlMapping::now(ShortCode::new_unchecked("abc1234"), "https://example.com");
        assert_eq!(mapping.created_at, mapping.updated_at);
        assert_eq!(mapping.original_url, "https://example.com");
    }

    #[test]
    fn new_keeps_given_timestamp() {
        let at = Timestamp::from_second(1_700_000_000).unwrap();
        let mapping = UrlMapping::new(ShortCode::new_unchecked("abc1234"), "https://a.example", at);
        assert_eq!(mapping.created_at, at);
        assert_eq!(mapping.updated_at, at);
    }
}
