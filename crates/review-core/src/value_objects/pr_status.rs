//! Pull request lifecycle status
//!
//! A pull request starts `OPEN` and may move to `MERGED` exactly once.
//! `MERGED` is terminal: the reviewer set can no longer be changed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle status of a pull request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum PrStatus {
    #[default]
    Open,
    Merged,
}

impl PrStatus {
    /// Storage and wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Merged => "MERGED",
        }
    }

    /// Check if no further reviewer mutation is permitted
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Merged)
    }
}

impl fmt::Display for PrStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a stored status string is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown pull request status: {0}")]
pub struct PrStatusParseError(pub String);

impl FromStr for PrStatus {
    type Err = PrStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OPEN" => Ok(Self::Open),
            "MERGED" => Ok(Self::Merged),
            other => Err(PrStatusParseError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_statuses() {
        assert_eq!("OPEN".parse::<PrStatus>().unwrap(), PrStatus::Open);
        assert_eq!("MERGED".parse::<PrStatus>().unwrap(), PrStatus::Merged);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let err = "merged".parse::<PrStatus>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown pull request status: merged");
    }

    #[test]
    fn test_terminal() {
        assert!(!PrStatus::Open.is_terminal());
        assert!(PrStatus::Merged.is_terminal());
    }

    #[test]
    fn test_display_matches_storage_form() {
        assert_eq!(PrStatus::Merged.to_string(), "MERGED");
        assert_eq!(PrStatus::default().as_str(), "OPEN");
    }
}
