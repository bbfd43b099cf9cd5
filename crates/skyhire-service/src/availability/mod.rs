//! Pilot availability built on blockout recurrence matching.

pub mod blockout;
pub mod calendar;
pub mod occurrence;
pub mod recurrence;
pub mod slots;

use chrono::{DateTime, Utc};

pub use blockout::{Blockout, NewBlockout};
pub use calendar::CalendarContext;
pub use occurrence::{Occurrence, occurrences, recurrence_rule, to_rrule_set};
pub use recurrence::{matches, matches_pattern, matches_time_range};
pub use slots::{Slot, day_slots};

use crate::error::{ServiceError, ServiceResult};

/// ## Summary
/// Returns the first blockout, in input order, that blocks `instant`.
#[must_use]
pub fn blocking_blockout<'a>(
    blockouts: &'a [Blockout],
    instant: DateTime<Utc>,
    calendar: &CalendarContext,
) -> Option<&'a Blockout> {
    blockouts
        .iter()
        .find(|blockout| matches(blockout, instant, calendar))
}

/// ## Summary
/// Returns `true` if no blockout covers `instant`.
#[must_use]
pub fn is_available(
    blockouts: &[Blockout],
    instant: DateTime<Utc>,
    calendar: &CalendarContext,
) -> bool {
    blocking_blockout(blockouts, instant, calendar).is_none()
}

/// ## Summary
/// Returns the first of `pilot_id`'s own blockouts that blocks `requested`.
///
/// Blockouts owned by other pilots are ignored, so callers may pass an
/// unfiltered result set.
#[must_use]
pub fn pilot_conflict<'a>(
    pilot_id: uuid::Uuid,
    blockouts: &'a [Blockout],
    requested: DateTime<Utc>,
    calendar: &CalendarContext,
) -> Option<&'a Blockout> {
    blockouts
        .iter()
        .filter(|blockout| blockout.pilot_id == pilot_id)
        .find(|blockout| matches(blockout, requested, calendar))
}

/// ## Summary
/// Admission check for a booking request against a pilot's blockouts.
///
/// ## Errors
/// Returns `ServiceError::Conflict` naming the blockout that covers `requested`.
pub fn ensure_bookable(
    pilot_id: uuid::Uuid,
    blockouts: &[Blockout],
    requested: DateTime<Utc>,
    calendar: &CalendarContext,
) -> ServiceResult<()> {
    if let Some(blockout) = pilot_conflict(pilot_id, blockouts, requested, calendar) {
        tracing::debug!(
            %pilot_id,
            blockout_id = %blockout.id,
            %requested,
            "Booking request falls inside a blockout"
        );
        return Err(ServiceError::Conflict(format!(
            "pilot {pilot_id} is unavailable at {requested} (blockout {})",
            blockout.id
        )));
    }

    Ok(())
}
