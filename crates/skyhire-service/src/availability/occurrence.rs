//! Expansion of recurring blockouts into concrete blocked spans.
//!
//! Each recurrence type maps onto an RFC 5545 RRULE anchored at the
//! blockout's `start_date` in the calendar timezone. The `rrule` crate then
//! enumerates the days, and the time-of-day window is applied per day.

use chrono::{DateTime, TimeDelta, Utc};
use rrule::{RRule, RRuleSet, Unvalidated};
use serde::Serialize;
use skyhire_core::types::RecurrenceType;

use super::blockout::Blockout;
use super::calendar::CalendarContext;
use super::recurrence::matches_time_range;
use crate::error::{ServiceError, ServiceResult};

/// A concrete blocked span, minute granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// ## Summary
/// Returns the RRULE text for a recurrence type, `None` for one-time blockouts.
///
/// Weekday, day-of-month and time-of-day parts are inferred by the rule
/// builder from DTSTART.
#[must_use]
pub const fn recurrence_rule(recurrence_type: RecurrenceType) -> Option<&'static str> {
    match recurrence_type {
        RecurrenceType::None => None,
        RecurrenceType::Daily => Some("FREQ=DAILY"),
        RecurrenceType::Weekly => Some("FREQ=WEEKLY"),
        RecurrenceType::Weekdays => Some("FREQ=WEEKLY;BYDAY=MO,TU,WE,TH,FR"),
        RecurrenceType::Weekends => Some("FREQ=WEEKLY;BYDAY=SA,SU"),
        RecurrenceType::Monthly => Some("FREQ=MONTHLY"),
    }
}

/// ## Summary
/// Builds the validated rule set for a recurring blockout.
///
/// DTSTART is `start_date` in the calendar timezone so wall-clock times stay
/// fixed across DST changes. The recurrence end is not encoded as UNTIL;
/// callers clip with [`RRuleSet::before`].
///
/// ## Errors
/// Returns `ServiceError::RRuleError` if the rule cannot be parsed or built.
pub fn to_rrule_set(
    blockout: &Blockout,
    calendar: &CalendarContext,
) -> ServiceResult<Option<RRuleSet>> {
    let Some(rule_text) = recurrence_rule(blockout.recurrence_type) else {
        return Ok(None);
    };

    let rrule = rule_text
        .parse::<RRule<Unvalidated>>()
        .map_err(|err| ServiceError::RRuleError(err.to_string()))?;
    let dt_start = blockout
        .start_date
        .with_timezone(&rrule::Tz::Tz(calendar.timezone()));
    let rrule_set = rrule
        .build(dt_start)
        .map_err(|err| ServiceError::RRuleError(err.to_string()))?;

    Ok(Some(rrule_set))
}

/// ## Summary
/// Lists the blocked spans of `blockout` that overlap `[from, to]`.
///
/// One-time blockouts yield their literal interval. Recurring blockouts yield
/// one span per rule occurrence, covering the time-of-day window on that
/// local day and truncated at `recurrence_end_date`. A window that crosses
/// midnight yields nothing, in line with [`super::matches_time_range`], and
/// so does a day on which a window endpoint does not exist locally.
///
/// ## Errors
/// Returns `ServiceError::RRuleError` if the rule cannot be built, or
/// `ServiceError::ValidationError` if a span cannot be represented.
pub fn occurrences(
    blockout: &Blockout,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
    calendar: &CalendarContext,
) -> ServiceResult<Vec<Occurrence>> {
    if from > to {
        return Ok(Vec::new());
    }

    if !blockout.is_recurring() {
        let overlaps = blockout.start_date <= to && blockout.end_date >= from;
        return Ok(overlaps
            .then_some(Occurrence {
                start: blockout.start_date,
                end: blockout.end_date,
            })
            .into_iter()
            .collect());
    }

    let start_minutes = calendar.minutes_since_midnight(blockout.start_date);
    let end_minutes = calendar.minutes_since_midnight(blockout.end_date);
    if start_minutes > end_minutes {
        tracing::trace!(blockout_id = %blockout.id, "Window crosses midnight, no occurrences");
        return Ok(Vec::new());
    }

    let Some(mut rrule_set) = to_rrule_set(blockout, calendar)? else {
        return Ok(Vec::new());
    };

    // A window never exceeds a day, so one day of margin catches spans
    // that started before `from` or whose rule time carries seconds.
    let rule_tz = rrule::Tz::Tz(calendar.timezone());
    let margin = TimeDelta::days(1);
    let mut until = to + margin;
    if let Some(recurrence_end) = blockout.recurrence_end_date {
        until = until.min(recurrence_end + margin);
    }
    rrule_set = rrule_set
        .after((from - margin).with_timezone(&rule_tz))
        .before(until.with_timezone(&rule_tz));

    let result = rrule_set.all(u16::MAX);
    if result.limited {
        tracing::debug!(blockout_id = %blockout.id, "Occurrence expansion hit the limit");
    }

    let mut spans = Vec::with_capacity(result.dates.len());
    for date in result.dates {
        let day = calendar.local_date(date.with_timezone(&Utc));
        let (Some(start), Some(mut end)) = (
            calendar.at_local(day, start_minutes),
            calendar.at_local(day, end_minutes),
        ) else {
            return Err(ServiceError::ValidationError(format!(
                "occurrence on {day} is out of range"
            )));
        };

        // An endpoint in a DST gap is shifted past the window; skip that day
        if !matches_time_range(blockout, start, calendar)
            || !matches_time_range(blockout, end, calendar)
        {
            tracing::trace!(blockout_id = %blockout.id, %day, "Window falls in a DST gap");
            continue;
        }

        if let Some(recurrence_end) = blockout.recurrence_end_date {
            if start > recurrence_end {
                continue;
            }
            end = end.min(recurrence_end);
        }

        if start <= to && end >= from {
            spans.push(Occurrence { start, end });
        }
    }

    tracing::trace!(
        blockout_id = %blockout.id,
        count = spans.len(),
        "Expanded blockout occurrences"
    );

    Ok(spans)
}
