//! Wager types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Wager errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WagerError {
    /// Token does not match `<bettor><^|_><stake>`
    #[error("Malformed wager token: {0:?}")]
    Format(String),
    /// Bettor name is empty or not alphanumeric
    #[error("Invalid bettor name: {0:?}")]
    InvalidBettor(String),
    /// Stake must be at least 1
    #[error("Stake must be positive")]
    ZeroStake,
    /// Unknown side label
    #[error("Unknown side: {0:?} (expected over or under)")]
    UnknownSide(String),
}

/// Which side of the line a wager backs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Arrival strictly after the line time
    Over,
    /// Arrival at or before the line time
    Under,
}

impl Side {
    /// Token marker for this side
    pub fn marker(self) -> char {
        match self {
            Side::Over => '^',
            Side::Under => '_',
        }
    }

    /// Side for a token marker
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            '^' => Some(Side::Over),
            '_' => Some(Side::Under),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Over => "over",
            Side::Under => "under",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = WagerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "over" => Ok(Side::Over),
            "under" => Ok(Side::Under),
            _ => Err(WagerError::UnknownSide(s.to_string())),
        }
    }
}

/// A single stake by one bettor on one side of one entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wager {
    /// Bettor identifier, `[A-Za-z0-9]+`
    pub bettor: String,
    /// Backed side
    pub side: Side,
    /// Points staked, at least 1
    pub stake: u64,
}

impl Wager {
    /// Create a validated wager
    pub fn new(bettor: impl Into<String>, side: Side, stake: u64) -> Result<Self, WagerError> {
        let bettor = bettor.into();
        if !is_valid_bettor(&bettor) {
            return Err(WagerError::InvalidBettor(bettor));
        }
        if stake == 0 {
            return Err(WagerError::ZeroStake);
        }
        Ok(Self {
            bettor,
            side,
            stake,
        })
    }
}

/// True when `name` is a non-empty run of ASCII letters and digits
pub fn is_valid_bettor(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wager_new_valid() {
        let wager = Wager::new("bob", Side::Over, 30).unwrap();
        assert_eq!(wager.bettor, "bob");
        assert_eq!(wager.side, Side::Over);
        assert_eq!(wager.stake, 30);
    }

    #[test]
    fn test_wager_new_rejects_zero_stake() {
        assert_eq!(Wager::new("bob", Side::Under, 0), Err(WagerError::ZeroStake));
    }

    #[test]
    fn test_wager_new_rejects_bad_names() {
        assert!(matches!(
            Wager::new("", Side::Over, 1),
            Err(WagerError::InvalidBettor(_))
        ));
        assert!(matches!(
            Wager::new("bo b", Side::Over, 1),
            Err(WagerError::InvalidBettor(_))
        ));
        assert!(matches!(
            Wager::new("bob^", Side::Over, 1),
            Err(WagerError::InvalidBettor(_))
        ));
    }

    #[test]
    fn test_side_markers() {
        assert_eq!(Side::Over.marker(), '^');
        assert_eq!(Side::Under.marker(), '_');
        assert_eq!(Side::from_marker('^'), Some(Side::Over));
        assert_eq!(Side::from_marker('_'), Some(Side::Under));
        assert_eq!(Side::from_marker('-'), None);
    }

    #[test]
    fn test_side_from_str() {
        assert_eq!("over".parse::<Side>().unwrap(), Side::Over);
        assert_eq!(" UNDER ".parse::<Side>().unwrap(), Side::Under);
        assert!(matches!(
            "sideways".parse::<Side>(),
            Err(WagerError::UnknownSide(_))
        ));
    }

    #[test]
    fn test_side_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Side::Over).unwrap(), "\"over\"");
        let side: Side = serde_json::from_str("\"under\"").unwrap();
        assert_eq!(side, Side::Under);
    }
}
