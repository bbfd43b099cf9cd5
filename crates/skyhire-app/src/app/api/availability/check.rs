use salvo::{Depot, Request, Response, Router, handler, http::StatusCode, writing::Json};
use skyhire_service::availability::{blocking_blockout, pilot_conflict};
use tracing::error;

use super::types::{CheckRequest, CheckResponse};
use crate::calendar_handler::resolve_calendar;
use crate::error::render_bad_request;

/// ## Summary
/// POST /api/availability/check - Is an instant covered by any blockout?
///
/// With `pilot_id` the request is treated as a booking admission check:
/// other pilots' blockouts are ignored and a covered instant answers
/// HTTP 409 with the blocking blockout id.
///
/// ## Errors
/// Returns HTTP 400 for a malformed body or unknown timezone
/// Returns HTTP 409 if the pilot is unavailable at the requested instant
#[handler]
async fn check_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let check_req: CheckRequest = match req.parse_json().await {
        Ok(r) => r,
        Err(e) => {
            error!(error = ?e, "Failed to parse availability check request");
            render_bad_request(res, "Invalid request body");
            return;
        }
    };

    let calendar = match resolve_calendar(depot, check_req.timezone.as_deref()) {
        Ok(calendar) => calendar,
        Err(e) => {
            e.render(res);
            return;
        }
    };

    tracing::debug!(
        instant = %check_req.instant,
        blockouts = check_req.blockouts.len(),
        pilot_id = ?check_req.pilot_id,
        "Processing availability check"
    );

    let Some(pilot_id) = check_req.pilot_id else {
        let blocking = blocking_blockout(&check_req.blockouts, check_req.instant, &calendar);
        res.render(Json(CheckResponse {
            available: blocking.is_none(),
            blocking_blockout_id: blocking.map(|blockout| blockout.id),
        }));
        return;
    };

    match pilot_conflict(pilot_id, &check_req.blockouts, check_req.instant, &calendar) {
        None => res.render(Json(CheckResponse {
            available: true,
            blocking_blockout_id: None,
        })),
        Some(blockout) => {
            tracing::debug!(%pilot_id, blockout_id = %blockout.id, "Pilot is unavailable");
            res.status_code(StatusCode::CONFLICT);
            res.render(Json(CheckResponse {
                available: false,
                blocking_blockout_id: Some(blockout.id),
            }));
        }
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("check").post(check_handler)
}
