//! Explicit calendar frame for blockout matching.
//!
//! Every calendar component (local date, weekday, day of month, time of day)
//! is read through a [`CalendarContext`] so results never depend on the
//! host's local timezone. Uses ICU4X for Windows timezone ID mapping and
//! IANA canonicalization.

use std::str::FromStr;

use chrono::{
    DateTime, Datelike, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone,
    Timelike, Utc,
};
use chrono_tz::Tz;
use icu::time::zone::WindowsParser;
use icu::time::zone::iana::IanaParserExtended;

use crate::error::{ServiceError, ServiceResult};

/// Timezone frame in which blockout dates and candidate instants are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarContext {
    tz: Tz,
}

impl CalendarContext {
    #[must_use]
    pub const fn new(tz: Tz) -> Self {
        Self { tz }
    }

    #[must_use]
    pub const fn utc() -> Self {
        Self::new(Tz::UTC)
    }

    /// ## Summary
    /// Resolves a timezone identifier into a calendar context.
    ///
    /// Accepts IANA names, their legacy aliases, Windows zone names and the
    /// `/mozilla.org/` style prefixes some clients send.
    ///
    /// ## Errors
    /// Returns `ServiceError::UnknownTimezone` if the identifier cannot be resolved.
    pub fn from_tzid(tzid: &str) -> ServiceResult<Self> {
        let normalized = normalize_tzid(tzid.trim());
        let tz = Tz::from_str(&normalized)
            .map_err(|_e| ServiceError::UnknownTimezone(tzid.to_string()))?;
        tracing::trace!(tzid, resolved = %tz, "Resolved calendar timezone");
        Ok(Self::new(tz))
    }

    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.tz
    }

    #[must_use]
    pub fn local(&self, instant: DateTime<Utc>) -> DateTime<Tz> {
        instant.with_timezone(&self.tz)
    }

    #[must_use]
    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        self.local(instant).date_naive()
    }

    /// Weekday with Sunday = 1 through Saturday = 7.
    #[must_use]
    pub fn weekday_number(&self, instant: DateTime<Utc>) -> u32 {
        self.local(instant).weekday().number_from_sunday()
    }

    #[must_use]
    pub fn day_of_month(&self, instant: DateTime<Utc>) -> u32 {
        self.local(instant).day()
    }

    /// Hour and minute of the local time as minutes since midnight. Seconds are dropped.
    #[must_use]
    pub fn minutes_since_midnight(&self, instant: DateTime<Utc>) -> u32 {
        let local = self.local(instant);
        local.hour() * 60 + local.minute()
    }

    /// ## Summary
    /// Returns the instant at `minutes` past local midnight of `date`.
    ///
    /// Minutes past 1440 roll into the following days. A local time that
    /// falls in a DST gap is shifted forward one hour; an ambiguous one
    /// resolves to the earlier instant.
    #[must_use]
    pub fn at_local(&self, date: NaiveDate, minutes: u32) -> Option<DateTime<Utc>> {
        let naive = NaiveDateTime::new(date, NaiveTime::MIN)
            .checked_add_signed(TimeDelta::minutes(i64::from(minutes)))?;

        match self.tz.from_local_datetime(&naive) {
            LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Some(dt.with_timezone(&Utc)),
            LocalResult::None => {
                let shifted = naive.checked_add_signed(TimeDelta::hours(1))?;
                self.tz
                    .from_local_datetime(&shifted)
                    .earliest()
                    .map(|dt| dt.with_timezone(&Utc))
            }
        }
    }
}

impl Default for CalendarContext {
    fn default() -> Self {
        Self::utc()
    }
}

/// Normalizes common client timezone identifiers to IANA names.
fn normalize_tzid(tzid: &str) -> String {
    let stripped = tzid
        .strip_prefix("/mozilla.org/")
        .or_else(|| tzid.strip_prefix("/softwarestudio.org/"))
        .unwrap_or(tzid);

    // Windows zone names first, then IANA alias canonicalization
    let windows_parser = WindowsParser::new();
    if let Some(tz) = windows_parser.parse(stripped, None) {
        let iana_parser = IanaParserExtended::new();
        for entry in iana_parser.iter() {
            if entry.time_zone == tz {
                return entry.canonical.to_string();
            }
        }
    }

    let iana_parser = IanaParserExtended::new();
    let parsed = iana_parser.parse(stripped);
    if parsed.time_zone != icu::time::TimeZone::UNKNOWN {
        return parsed.canonical.to_string();
    }

    stripped.to_string()
}
