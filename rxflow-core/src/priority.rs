use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{CoreError, Day};

/// Urgency class of a fulfillment order.
///
/// Declaration order matches rank, so the derived `Ord` agrees with
/// [`Priority::rank`]: STAT sorts ahead of URGENT, URGENT ahead of ROUTINE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    /// Same-day, worked first
    Stat,
    /// Same-day, ships end of day / overnight
    Urgent,
    /// Due two days after receipt
    Routine,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Stat, Priority::Urgent, Priority::Routine];

    /// Smaller number = higher precedence.
    pub fn rank(self) -> u8 {
        match self {
            Priority::Stat => 1,
            Priority::Urgent => 2,
            Priority::Routine => 3,
        }
    }

    /// Days between receipt and due day.
    pub fn due_offset(self) -> Day {
        match self {
            Priority::Stat | Priority::Urgent => 0,
            Priority::Routine => 2,
        }
    }

    pub fn due_day(self, received_day: Day) -> Day {
        received_day.saturating_add(self.due_offset())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Stat => "STAT",
            Priority::Urgent => "URGENT",
            Priority::Routine => "ROUTINE",
        }
    }

    /// Exact, case-insensitive match after trimming. No partial matches.
    pub fn parse(text: &str) -> Result<Self, CoreError> {
        let normalized = text.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| {
                tracing::warn!(input = %normalized, "rejected priority text");
                CoreError::InvalidPriority(normalized.to_string())
            })
    }
}

impl FromStr for Priority {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
