use serde::{Deserialize, Serialize};

/// Pilot rank bucket derived from logged flight hours.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PilotTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
}

/// Lower bound in flight hours for each tier, highest first.
const TIER_THRESHOLDS: [(PilotTier, f64); 5] = [
    (PilotTier::Diamond, 1000.0),
    (PilotTier::Platinum, 500.0),
    (PilotTier::Gold, 150.0),
    (PilotTier::Silver, 50.0),
    (PilotTier::Bronze, 0.0),
];

impl PilotTier {
    /// ## Summary
    /// Looks up the tier for a number of flight hours.
    ///
    /// Negative and NaN values fall through every threshold and land in bronze.
    #[must_use]
    pub fn for_flight_hours(hours: f64) -> Self {
        TIER_THRESHOLDS
            .iter()
            .find(|(_, min_hours)| hours >= *min_hours)
            .map_or(Self::Bronze, |(tier, _)| *tier)
    }

    /// Flight hours needed to enter this tier.
    #[must_use]
    pub fn min_hours(self) -> f64 {
        TIER_THRESHOLDS
            .iter()
            .find(|(tier, _)| *tier == self)
            .map_or(0.0, |(_, min_hours)| *min_hours)
    }

    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Bronze => Some(Self::Silver),
            Self::Silver => Some(Self::Gold),
            Self::Gold => Some(Self::Platinum),
            Self::Platinum => Some(Self::Diamond),
            Self::Diamond => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bronze => "bronze",
            Self::Silver => "silver",
            Self::Gold => "gold",
            Self::Platinum => "platinum",
            Self::Diamond => "diamond",
        }
    }
}

impl std::fmt::Display for PilotTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ## Summary
/// Returns the next tier and the hours still missing to reach it, `None` at the top tier.
#[must_use]
pub fn hours_to_next_tier(hours: f64) -> Option<(PilotTier, f64)> {
    let next = PilotTier::for_flight_hours(hours).next()?;
    let logged = if hours.is_finite() { hours.max(0.0) } else { 0.0 };
    Some((next, next.min_hours() - logged))
}
