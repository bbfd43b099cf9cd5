//! HTTP surface for SkyHire availability and ranking.

pub mod app;
pub mod calendar_handler;
pub mod config;
pub mod error;

use salvo::Router;
use skyhire_core::config::Settings;
use skyhire_service::availability::CalendarContext;

use crate::calendar_handler::CalendarHandler;
use crate::config::ConfigHandler;

/// ## Summary
/// Builds the root router with settings and the calendar context injected
/// into every request's depot.
///
/// ## Errors
/// Returns an error if the configured timezone cannot be resolved.
pub fn service_router(settings: Settings) -> anyhow::Result<Router> {
    let calendar = CalendarContext::from_tzid(&settings.calendar.timezone)?;
    tracing::info!(timezone = %calendar.timezone(), "Calendar context resolved");

    Ok(Router::new()
        .hoop(ConfigHandler { settings })
        .hoop(CalendarHandler { calendar })
        .push(app::api::routes()))
}
