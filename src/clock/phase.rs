//! The two alternating phases of the clock.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which interval is currently counting down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Work period.
    #[default]
    Session,
    /// Rest period.
    Break,
}

impl Phase {
    /// The phase that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Session => Self::Break,
            Self::Break => Self::Session,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Session => "Session",
            Self::Break => "Break",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_alternates() {
        assert_eq!(Phase::Session.next(), Phase::Break);
        assert_eq!(Phase::Break.next(), Phase::Session);
        assert_eq!(Phase::default(), Phase::Session);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Phase::Session.to_string(), "Session");
        assert_eq!(Phase::Break.to_string(), "Break");
    }
}
