//! Path parsing helpers
//!
//! Reaction routes are mounted per kind as `{kind}-reactions` collections
//! (`post-reactions`, `place-reactions`, ...). The collection segment is a
//! single path parameter parsed here.

use pulse_core::ContentKind;

use crate::response::ApiError;

/// Parse a `{kind}-reactions` collection segment into its content kind
pub fn parse_collection(segment: &str) -> Result<ContentKind, ApiError> {
    segment
        .strip_suffix("-reactions")
        .and_then(|kind| kind.parse().ok())
        .ok_or_else(|| ApiError::invalid_path(format!("Unknown reaction collection: {segment}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_all_collections() {
        assert_eq!(parse_collection("post-reactions").unwrap(), ContentKind::Post);
        assert_eq!(parse_collection("place-reactions").unwrap(), ContentKind::Place);
        assert_eq!(parse_collection("note-reactions").unwrap(), ContentKind::Note);
        assert_eq!(
            parse_collection("gathering-reactions").unwrap(),
            ContentKind::Gathering
        );
    }

    #[test]
    fn test_rejects_unknown_collections() {
        assert!(parse_collection("moment-reactions").is_err());
        assert!(parse_collection("post").is_err());
        assert!(parse_collection("reactions").is_err());
    }
}
