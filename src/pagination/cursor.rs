//! Continuation offset extraction from `next` links

use crate::error::{Error, Result};
use tracing::warn;
use url::form_urlencoded;

/// Query parameter carrying the continuation offset
pub const OFFSET_PARAM: &str = "offset";

/// Extract the `offset` query parameter from a `next` href.
///
/// - no href: `Ok(None)`, the last page was reached
/// - href without `offset`: `Ok(None)`, treated as the last page
/// - non-integer `offset`: `Err(MalformedCursor)`
///
/// Absolute and relative hrefs are both accepted, other query parameters are
/// ignored and values are percent-decoded. The first `offset` wins.
pub fn extract_offset(next_href: Option<&str>) -> Result<Option<u64>> {
    let Some(href) = next_href else {
        return Ok(None);
    };

    let query = href.split_once('?').map_or("", |(_, query)| query);
    let query = query.split_once('#').map_or(query, |(query, _)| query);

    let raw = form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == OFFSET_PARAM)
        .map(|(_, value)| value.into_owned());

    match raw {
        Some(value) => value
            .parse::<u64>()
            .map(Some)
            .map_err(|_| Error::malformed_cursor(href, value)),
        None => {
            warn!(
                "next link '{}' has no '{}' parameter, treating it as the last page",
                href, OFFSET_PARAM
            );
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_from_absolute_href() {
        assert_eq!(extract_offset(Some("https://h/p?offset=135")).unwrap(), Some(135));
    }

    #[test]
    fn test_missing_href_is_last_page() {
        assert_eq!(extract_offset(None).unwrap(), None);
    }

    #[test]
    fn test_href_without_offset_is_last_page() {
        assert_eq!(extract_offset(Some("https://h/p")).unwrap(), None);
        assert_eq!(extract_offset(Some("https://h/p?limit=10")).unwrap(), None);
    }

    #[test]
    fn test_non_integer_offset_is_malformed() {
        let err = extract_offset(Some("https://h/p?offset=tiger")).unwrap_err();
        match err {
            Error::MalformedCursor { href, value } => {
                assert_eq!(href, "https://h/p?offset=tiger");
                assert_eq!(value, "tiger");
            }
            other => panic!("Expected MalformedCursor, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_and_empty_offsets_are_malformed() {
        assert!(extract_offset(Some("https://h/p?offset=-5")).is_err());
        assert!(extract_offset(Some("https://h/p?offset=")).is_err());
        assert!(extract_offset(Some("https://h/p?offset=1.5")).is_err());
    }

    #[test]
    fn test_extra_params_and_encoding() {
        let href = "/api/v4/managed_keys?vault.id=a%2Cb&limit=10&offset=%32%30&sort=-label";
        assert_eq!(extract_offset(Some(href)).unwrap(), Some(20));
    }

    #[test]
    fn test_relative_href_and_fragment() {
        assert_eq!(extract_offset(Some("?offset=3")).unwrap(), Some(3));
        assert_eq!(extract_offset(Some("/p?offset=4#frag")).unwrap(), Some(4));
    }

    #[test]
    fn test_first_offset_wins() {
        assert_eq!(
            extract_offset(Some("https://h/p?offset=1&offset=2")).unwrap(),
            Some(1)
        );
    }

    #[test]
    fn test_similar_key_is_not_offset() {
        assert_eq!(
            extract_offset(Some("https://h/p?start_offset=9")).unwrap(),
            None
        );
    }
}
