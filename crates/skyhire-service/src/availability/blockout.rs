use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use skyhire_core::types::RecurrenceType;

use crate::error::{ServiceError, ServiceResult};

/// A pilot's declared period of unavailability, one-time or recurring.
///
/// Mirrors a `blockout` row as loaded by the persistence layer. For recurring
/// blockouts `start_date`/`end_date` also carry the time-of-day window and the
/// weekday or day-of-month anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blockout {
    pub id: uuid::Uuid,
    pub pilot_id: uuid::Uuid,
    #[serde(default)]
    pub title: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub recurrence_type: RecurrenceType,
    #[serde(default)]
    pub recurrence_end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Blockout {
    #[must_use]
    pub const fn is_recurring(&self) -> bool {
        self.recurrence_type.is_recurring()
    }
}

/// Input for creating a blockout, checked before it reaches storage.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewBlockout {
    pub pilot_id: uuid::Uuid,
    #[serde(default)]
    pub title: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub recurrence_type: RecurrenceType,
    #[serde(default)]
    pub recurrence_end_date: Option<DateTime<Utc>>,
}

impl NewBlockout {
    /// ## Summary
    /// Validates the date ordering of a blockout about to be created.
    ///
    /// ## Errors
    /// Returns `ServiceError::ValidationError` if `start_date` is after
    /// `end_date`, or if a recurring blockout's `recurrence_end_date` is
    /// before its `start_date`.
    pub fn validate(&self) -> ServiceResult<()> {
        if self.start_date > self.end_date {
            return Err(ServiceError::ValidationError(format!(
                "start_date {} is after end_date {}",
                self.start_date, self.end_date
            )));
        }

        if let Some(recurrence_end) = self.recurrence_end_date
            && self.recurrence_type.is_recurring()
            && recurrence_end < self.start_date
        {
            return Err(ServiceError::ValidationError(format!(
                "recurrence_end_date {recurrence_end} is before start_date {}",
                self.start_date
            )));
        }

        Ok(())
    }

    /// ## Summary
    /// Validates the input and assigns identity and audit fields.
    ///
    /// ## Errors
    /// Returns the validation error from [`NewBlockout::validate`].
    pub fn into_blockout(self, created_at: DateTime<Utc>) -> ServiceResult<Blockout> {
        self.validate()?;
        Ok(Blockout {
            id: uuid::Uuid::now_v7(),
            pilot_id: self.pilot_id,
            title: self.title,
            start_date: self.start_date,
            end_date: self.end_date,
            recurrence_type: self.recurrence_type,
            recurrence_end_date: self.recurrence_end_date,
            created_at,
        })
    }
}
