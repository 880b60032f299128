use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Day;

/// Queue status of an order relative to the current day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    OnTrack,
    DueToday,
    Overdue,
}

impl OrderStatus {
    pub fn classify(due_day: Day, current_day: Day) -> Self {
        if current_day > due_day {
            OrderStatus::Overdue
        } else if current_day == due_day {
            OrderStatus::DueToday
        } else {
            OrderStatus::OnTrack
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::OnTrack => "ON_TRACK",
            OrderStatus::DueToday => "DUE_TODAY",
            OrderStatus::Overdue => "OVERDUE",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
