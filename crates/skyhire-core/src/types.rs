use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Repetition pattern of a pilot blockout.
///
/// Stored as a lowercase string in `blockout.recurrence_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceType {
    #[default]
    None,
    Daily,
    Weekly,
    Weekdays,
    Weekends,
    Monthly,
}

impl RecurrenceType {
    pub const ALL: [Self; 6] = [
        Self::None,
        Self::Daily,
        Self::Weekly,
        Self::Weekdays,
        Self::Weekends,
        Self::Monthly,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Weekdays => "weekdays",
            Self::Weekends => "weekends",
            Self::Monthly => "monthly",
        }
    }

    /// Returns `true` for every pattern except a one-time blockout.
    #[must_use]
    pub const fn is_recurring(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl std::fmt::Display for RecurrenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecurrenceType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::InvalidInput(format!("unknown recurrence type `{s}`")))
    }
}
