use salvo::{Depot, Request, Response, Router, handler, writing::Json};
use skyhire_service::availability::{occurrences, to_rrule_set};
use tracing::error;

use super::types::{OccurrencesRequest, OccurrencesResponse};
use crate::calendar_handler::resolve_calendar;
use crate::error::{AppResult, render_bad_request};

/// ## Summary
/// POST /api/availability/occurrences - Concrete blocked spans of one
/// blockout within `[from, to]`, plus its RRULE when recurring.
///
/// ## Errors
/// Returns HTTP 400 for a malformed body, unknown timezone or a rule that cannot be built
#[handler]
async fn occurrences_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let occurrences_req: OccurrencesRequest = match req.parse_json().await {
        Ok(r) => r,
        Err(e) => {
            error!(error = ?e, "Failed to parse occurrences request");
            render_bad_request(res, "Invalid request body");
            return;
        }
    };

    match expand(depot, &occurrences_req) {
        Ok(response) => res.render(Json(response)),
        Err(e) => e.render(res),
    }
}

fn expand(depot: &Depot, occurrences_req: &OccurrencesRequest) -> AppResult<OccurrencesResponse> {
    let calendar = resolve_calendar(depot, occurrences_req.timezone.as_deref())?;
    let blockout = &occurrences_req.blockout;

    let spans = occurrences(blockout, occurrences_req.from, occurrences_req.to, &calendar)?;
    let rrule = to_rrule_set(blockout, &calendar)?.map(|rrule_set| rrule_set.to_string());

    Ok(OccurrencesResponse {
        occurrences: spans,
        rrule,
    })
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("occurrences").post(occurrences_handler)
}
