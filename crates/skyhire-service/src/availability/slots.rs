use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use serde::Serialize;
use skyhire_core::constants::MINUTES_PER_DAY;

use super::blockout::Blockout;
use super::blocking_blockout;
use super::calendar::CalendarContext;
use crate::error::{ServiceError, ServiceResult};

/// One fixed-length slot of a pilot's availability calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Whether the slot's start instant is covered by a blockout.
    pub blocked: bool,
    pub blockout_id: Option<uuid::Uuid>,
}

/// ## Summary
/// Splits a local calendar day into `slot_minutes`-long slots and marks the
/// ones whose start instant is blocked.
///
/// Slots run from local midnight of `date` to local midnight of the next
/// day in the calendar's timezone, so a DST day has one hour fewer or more.
/// Every slot is `slot_minutes` long except a final slot cut short by the
/// next midnight, which only happens on DST days.
///
/// ## Errors
/// Returns `ServiceError::ValidationError` if `slot_minutes` does not evenly
/// divide a day, or if the date cannot be represented.
pub fn day_slots(
    blockouts: &[Blockout],
    date: NaiveDate,
    slot_minutes: u32,
    calendar: &CalendarContext,
) -> ServiceResult<Vec<Slot>> {
    if slot_minutes == 0
        || slot_minutes > MINUTES_PER_DAY
        || !MINUTES_PER_DAY.is_multiple_of(slot_minutes)
    {
        return Err(ServiceError::ValidationError(format!(
            "slot length must divide {MINUTES_PER_DAY} minutes, got {slot_minutes}"
        )));
    }

    let out_of_range =
        || ServiceError::ValidationError(format!("date {date} is out of range"));
    let day_start = calendar.at_local(date, 0).ok_or_else(out_of_range)?;
    let day_end = date
        .succ_opt()
        .and_then(|next| calendar.at_local(next, 0))
        .ok_or_else(out_of_range)?;

    // Step in absolute time so DST days get 23 or 25 hours of slots
    let step = TimeDelta::minutes(i64::from(slot_minutes));
    let mut slots = Vec::new();
    let mut start = day_start;
    while start < day_end {
        let end = (start + step).min(day_end);
        let blocking = blocking_blockout(blockouts, start, calendar);
        slots.push(Slot {
            start,
            end,
            blocked: blocking.is_some(),
            blockout_id: blocking.map(|blockout| blockout.id),
        });
        start = end;
    }

    tracing::trace!(
        %date,
        slot_minutes,
        blocked = slots.iter().filter(|slot| slot.blocked).count(),
        "Enumerated day slots"
    );

    Ok(slots)
}
