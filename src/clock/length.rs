//! Configurable phase lengths.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A phase length in whole minutes, always within `MIN..=MAX`.
///
/// Adjustments saturate at the bounds instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Length(u8);

impl Length {
    /// Shortest allowed length in minutes.
    pub const MIN: u8 = 1;
    /// Longest allowed length in minutes.
    pub const MAX: u8 = 60;
    /// Break length after a reset.
    pub const DEFAULT_BREAK: Self = Self(5);
    /// Session length after a reset.
    pub const DEFAULT_SESSION: Self = Self(25);

    /// Create a length, or `None` if `minutes` is out of range.
    #[must_use]
    pub const fn new(minutes: u8) -> Option<Self> {
        if minutes >= Self::MIN && minutes <= Self::MAX {
            Some(Self(minutes))
        } else {
            None
        }
    }

    /// Length in minutes.
    #[must_use]
    pub const fn minutes(self) -> u8 {
        self.0
    }

    /// Length in seconds.
    #[must_use]
    pub const fn seconds(self) -> u32 {
        self.0 as u32 * 60
    }

    /// One minute longer, stopping at `MAX`.
    #[must_use]
    pub const fn incremented(self) -> Self {
        if self.0 >= Self::MAX {
            self
        } else {
            Self(self.0 + 1)
        }
    }

    /// One minute shorter, stopping at `MIN`.
    #[must_use]
    pub const fn decremented(self) -> Self {
        if self.0 <= Self::MIN {
            self
        } else {
            Self(self.0 - 1)
        }
    }
}

impl TryFrom<u8> for Length {
    type Error = String;

    fn try_from(minutes: u8) -> Result<Self, Self::Error> {
        Self::new(minutes).ok_or_else(|| {
            format!(
                "length must be between {} and {} minutes, got {minutes}",
                Self::MIN,
                Self::MAX
            )
        })
    }
}

impl From<Length> for u8 {
    fn from(length: Length) -> Self {
        length.0
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which configurable length an adjustment applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthTarget {
    /// The break length.
    Break,
    /// The session length.
    Session,
}

impl fmt::Display for LengthTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Break => write!(f, "Break Length"),
            Self::Session => write!(f, "Session Length"),
        }
    }
}
