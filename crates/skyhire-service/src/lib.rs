//! Availability and ranking logic for the SkyHire pilot marketplace.
//!
//! The [`availability`] module decides whether pilot blockouts cover a given
//! instant; [`ranking`] buckets pilots into tiers by logged flight hours.

pub mod availability;
pub mod error;
pub mod ranking;
