//! Content kind - the four kinds of reactable content

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The kinds of content a user can react to.
///
/// Each kind is backed by its own reaction table with an identical schema.
/// The engine is generic over the kind; nothing else is duplicated per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Short-lived posts
    Post,
    /// Fixed places
    Place,
    /// Ephemeral notes
    Note,
    /// Scheduled gatherings
    Gathering,
}

impl ContentKind {
    /// All kinds, in a stable order (used by account deletion)
    pub const ALL: [ContentKind; 4] = [Self::Post, Self::Place, Self::Note, Self::Gathering];

    /// The backing reaction table for this kind.
    ///
    /// Table names are compile-time constants so they can be interpolated
    /// into SQL without an injection path.
    #[must_use]
    pub fn table(self) -> &'static str {
        match self {
            Self::Post => "post_reactions",
            Self::Place => "place_reactions",
            Self::Note => "note_reactions",
            Self::Gathering => "gathering_reactions",
        }
    }

    /// URL path segment for this kind
    #[must_use]
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Place => "place",
            Self::Note => "note",
            Self::Gathering => "gathering",
        }
    }

    /// Whether ratings are meaningful for this kind
    #[must_use]
    pub fn supports_ratings(self) -> bool {
        matches!(self, Self::Place)
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// Error returned when parsing an unknown content kind
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown content kind: {0}")]
pub struct ContentKindParseError(pub String);

impl FromStr for ContentKind {
    type Err = ContentKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "post" => Ok(Self::Post),
            "place" => Ok(Self::Place),
            "note" => Ok(Self::Note),
            "gathering" => Ok(Self::Gathering),
            other => Err(ContentKindParseError(other.to_string())),
        }
    }
}
