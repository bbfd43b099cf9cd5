use salvo::{Depot, Request, Response, Router, handler, writing::Json};
use skyhire_service::availability::day_slots;
use tracing::error;

use super::types::{SlotsRequest, SlotsResponse};
use crate::calendar_handler::resolve_calendar;
use crate::config::get_config_from_depot;
use crate::error::{AppError, AppResult, render_bad_request};

/// ## Summary
/// POST /api/availability/slots - Fixed-length slots of one local day,
/// each marked blocked or free.
///
/// `slot_minutes` defaults to `availability.slot_minutes` from configuration.
///
/// ## Errors
/// Returns HTTP 400 for a malformed body, unknown timezone or uneven slot length
/// Returns HTTP 500 if configuration is missing from the depot
#[handler]
async fn slots_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let slots_req: SlotsRequest = match req.parse_json().await {
        Ok(r) => r,
        Err(e) => {
            error!(error = ?e, "Failed to parse slots request");
            render_bad_request(res, "Invalid request body");
            return;
        }
    };

    match build_slots(depot, &slots_req) {
        Ok(response) => res.render(Json(response)),
        Err(e) => e.render(res),
    }
}

fn build_slots(depot: &Depot, slots_req: &SlotsRequest) -> AppResult<SlotsResponse> {
    let calendar = resolve_calendar(depot, slots_req.timezone.as_deref())?;
    let slot_minutes = match slots_req.slot_minutes {
        Some(minutes) => minutes,
        None => get_config_from_depot(depot)?.availability.slot_minutes,
    };

    let slots = day_slots(&slots_req.blockouts, slots_req.date, slot_minutes, &calendar)
        .map_err(AppError::from)?;

    Ok(SlotsResponse {
        date: slots_req.date,
        timezone: calendar.timezone().name().to_string(),
        slots,
    })
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("slots").post(slots_handler)
}
