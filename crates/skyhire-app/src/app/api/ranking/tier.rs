use salvo::{Request, Response, Router, handler, writing::Json};
use serde::Serialize;
use skyhire_service::ranking::{PilotTier, hours_to_next_tier};

use crate::error::render_bad_request;

#[derive(Debug, Serialize)]
struct TierResponse {
    tier: PilotTier,
    min_hours: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_tier: Option<PilotTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hours_to_next_tier: Option<f64>,
}

/// ## Summary
/// GET /api/ranking/tier?hours=H - Tier for a number of flight hours.
///
/// ## Errors
/// Returns HTTP 400 if `hours` is missing or not a number
#[handler]
async fn tier_handler(req: &mut Request, res: &mut Response) {
    let Some(hours) = req.query::<f64>("hours") else {
        render_bad_request(res, "Query parameter 'hours' must be a number");
        return;
    };

    let tier = PilotTier::for_flight_hours(hours);
    let next = hours_to_next_tier(hours);

    res.render(Json(TierResponse {
        tier,
        min_hours: tier.min_hours(),
        next_tier: next.map(|(next_tier, _)| next_tier),
        hours_to_next_tier: next.map(|(_, remaining)| remaining),
    }));
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("tier").get(tier_handler)
}
