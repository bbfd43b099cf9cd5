use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use skyhire_service::availability::{Blockout, Occurrence, Slot};

/// ## Summary
/// Availability check request payload
#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    pub blockouts: Vec<Blockout>,
    pub instant: DateTime<Utc>,
    /// When set, only this pilot's blockouts count and a match is a conflict.
    #[serde(default)]
    pub pilot_id: Option<uuid::Uuid>,
    #[serde(default)]
    pub timezone: Option<String>,
}

/// ## Summary
/// Availability check response payload
#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub available: bool,
    pub blocking_blockout_id: Option<uuid::Uuid>,
}

/// ## Summary
/// Day slots request payload
#[derive(Debug, Deserialize)]
pub struct SlotsRequest {
    pub blockouts: Vec<Blockout>,
    pub date: NaiveDate,
    #[serde(default)]
    pub slot_minutes: Option<u32>,
    #[serde(default)]
    pub timezone: Option<String>,
}

/// ## Summary
/// Day slots response payload
#[derive(Debug, Serialize)]
pub struct SlotsResponse {
    pub date: NaiveDate,
    pub timezone: String,
    pub slots: Vec<Slot>,
}

/// ## Summary
/// Occurrence expansion request payload
#[derive(Debug, Deserialize)]
pub struct OccurrencesRequest {
    pub blockout: Blockout,
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    #[serde(default)]
    pub timezone: Option<String>,
}

/// ## Summary
/// Occurrence expansion response payload
#[derive(Debug, Serialize)]
pub struct OccurrencesResponse {
    pub occurrences: Vec<Occurrence>,
    /// RFC 5545 rule set of a recurring blockout
    pub rrule: Option<String>,
}
