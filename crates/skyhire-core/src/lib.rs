//! Shared configuration, error and domain types for the SkyHire workspace.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
