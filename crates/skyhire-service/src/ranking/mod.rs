//! Pilot tiers and the flight-hours leaderboard.

pub mod leaderboard;
pub mod tier;

pub use leaderboard::{PilotStanding, RankedPilot, leaderboard};
pub use tier::{PilotTier, hours_to_next_tier};
