use serde::{Deserialize, Serialize};

use super::tier::PilotTier;

/// Leaderboard input row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PilotStanding {
    pub pilot_id: uuid::Uuid,
    pub display_name: String,
    pub flight_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPilot {
    pub rank: usize,
    pub pilot_id: uuid::Uuid,
    pub display_name: String,
    pub flight_hours: f64,
    pub tier: PilotTier,
}

/// ## Summary
/// Orders pilots by flight hours, most first, and assigns competition ranks.
///
/// Pilots with equal hours share a rank and the following rank is skipped
/// ("1, 1, 3"). Ties are listed by display name. Non-finite or negative
/// hours count as zero.
#[must_use]
pub fn leaderboard(standings: Vec<PilotStanding>) -> Vec<RankedPilot> {
    let mut standings: Vec<PilotStanding> = standings
        .into_iter()
        .map(|mut standing| {
            // `<=` also folds -0.0 into 0.0 so both share a rank
            if !standing.flight_hours.is_finite() || standing.flight_hours <= 0.0 {
                standing.flight_hours = 0.0;
            }
            standing
        })
        .collect();

    standings.sort_by(|a, b| {
        b.flight_hours
            .total_cmp(&a.flight_hours)
            .then_with(|| a.display_name.cmp(&b.display_name))
    });

    let mut ranked: Vec<RankedPilot> = Vec::with_capacity(standings.len());
    for (position, standing) in standings.into_iter().enumerate() {
        let rank = match ranked.last() {
            Some(previous) if previous.flight_hours.total_cmp(&standing.flight_hours).is_eq() => {
                previous.rank
            }
            _ => position + 1,
        };
        ranked.push(RankedPilot {
            rank,
            pilot_id: standing.pilot_id,
            tier: PilotTier::for_flight_hours(standing.flight_hours),
            display_name: standing.display_name,
            flight_hours: standing.flight_hours,
        });
    }

    tracing::trace!(entries = ranked.len(), "Built leaderboard");
    ranked
}
