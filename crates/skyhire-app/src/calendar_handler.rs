use salvo::async_trait;
use std::sync::Arc;

use crate::error::AppResult;
use skyhire_core::error::CoreError;
use skyhire_service::availability::CalendarContext;

/// Injects the configured calendar context into the depot.
pub struct CalendarHandler {
    pub calendar: CalendarContext,
}

#[async_trait]
impl salvo::Handler for CalendarHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::new(self.calendar));
    }
}

/// ## Summary
/// Retrieves the configured calendar context from the depot.
///
/// ## Errors
/// Returns an error if the calendar context is not found in the depot.
pub fn get_calendar_from_depot(depot: &salvo::Depot) -> AppResult<CalendarContext> {
    depot
        .obtain::<Arc<CalendarContext>>()
        .map(|calendar| **calendar)
        .map_err(|_err| CoreError::InvariantViolation("Calendar context not found in depot").into())
}

/// ## Summary
/// Resolves the calendar for a request: an explicit timezone wins over the
/// configured one.
///
/// ## Errors
/// Returns an error if the override is not a known timezone, or if no
/// calendar context was injected.
pub fn resolve_calendar(depot: &salvo::Depot, timezone: Option<&str>) -> AppResult<CalendarContext> {
    match timezone {
        Some(tzid) => Ok(CalendarContext::from_tzid(tzid)?),
        None => get_calendar_from_depot(depot),
    }
}
