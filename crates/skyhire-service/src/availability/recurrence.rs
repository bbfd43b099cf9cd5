//! Recurrence matching for pilot blockouts.
//!
//! Decides whether a single instant falls inside a one-time or recurring
//! blockout. All functions are pure and total: inconsistent blockouts are not
//! rejected, they simply produce whatever the comparisons yield.

use chrono::{DateTime, Utc};
use skyhire_core::types::RecurrenceType;

use super::blockout::Blockout;
use super::calendar::CalendarContext;

// Weekday numbers as returned by `CalendarContext::weekday_number`
const SUNDAY: u32 = 1;
const MONDAY: u32 = 2;
const FRIDAY: u32 = 6;
const SATURDAY: u32 = 7;

/// ## Summary
/// Returns `true` if `instant` is blocked by `blockout`.
///
/// One-time blockouts match the absolute `[start_date, end_date]` interval.
/// Recurring blockouts stop matching after `recurrence_end_date` and
/// otherwise defer to [`matches_pattern`].
#[must_use]
pub fn matches(blockout: &Blockout, instant: DateTime<Utc>, calendar: &CalendarContext) -> bool {
    if !blockout.is_recurring() {
        return matches_interval(blockout, instant);
    }

    if blockout
        .recurrence_end_date
        .is_some_and(|recurrence_end| instant > recurrence_end)
    {
        tracing::trace!(blockout_id = %blockout.id, %instant, "Recurrence has lapsed");
        return false;
    }

    matches_pattern(blockout, instant, calendar)
}

/// ## Summary
/// Checks the recurrence anchor and the time-of-day window.
///
/// The instant must be on or after the local start of the day containing
/// `start_date`. The anchor is then compared per recurrence type:
/// - daily: any day
/// - weekly: same weekday as `start_date`
/// - weekdays: Monday through Friday
/// - weekends: Saturday or Sunday
/// - monthly: same day of month as `start_date`, months without that day never match
#[must_use]
pub fn matches_pattern(
    blockout: &Blockout,
    instant: DateTime<Utc>,
    calendar: &CalendarContext,
) -> bool {
    if blockout.recurrence_type == RecurrenceType::None {
        return matches_interval(blockout, instant);
    }

    // Comparing local dates is the same as `instant >= start_of_day(start_date)`
    if calendar.local_date(instant) < calendar.local_date(blockout.start_date) {
        return false;
    }

    let anchor_matches = match blockout.recurrence_type {
        RecurrenceType::None | RecurrenceType::Daily => true,
        RecurrenceType::Weekly => {
            calendar.weekday_number(instant) == calendar.weekday_number(blockout.start_date)
        }
        RecurrenceType::Weekdays => (MONDAY..=FRIDAY).contains(&calendar.weekday_number(instant)),
        RecurrenceType::Weekends => {
            matches!(calendar.weekday_number(instant), SATURDAY | SUNDAY)
        }
        RecurrenceType::Monthly => {
            calendar.day_of_month(instant) == calendar.day_of_month(blockout.start_date)
        }
    };

    anchor_matches && matches_time_range(blockout, instant, calendar)
}

/// ## Summary
/// Compares hour and minute of `instant` against the window spanned by the
/// times of day of `start_date` and `end_date`, inclusive on both ends.
///
/// A window whose start is later than its end (e.g. 22:00 to 02:00) matches
/// nothing; it does not wrap around midnight.
#[must_use]
pub fn matches_time_range(
    blockout: &Blockout,
    instant: DateTime<Utc>,
    calendar: &CalendarContext,
) -> bool {
    let start_minutes = calendar.minutes_since_midnight(blockout.start_date);
    let end_minutes = calendar.minutes_since_midnight(blockout.end_date);
    let instant_minutes = calendar.minutes_since_midnight(instant);

    (start_minutes..=end_minutes).contains(&instant_minutes)
}

fn matches_interval(blockout: &Blockout, instant: DateTime<Utc>) -> bool {
    blockout.start_date <= instant && instant <= blockout.end_date
}
