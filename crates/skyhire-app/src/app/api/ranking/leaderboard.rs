use salvo::{Request, Response, Router, handler, writing::Json};
use serde::{Deserialize, Serialize};
use skyhire_service::ranking::{PilotStanding, RankedPilot, leaderboard};
use tracing::error;

use crate::error::render_bad_request;

#[derive(Debug, Deserialize)]
struct LeaderboardRequest {
    standings: Vec<PilotStanding>,
}

#[derive(Debug, Serialize)]
struct LeaderboardResponse {
    entries: Vec<RankedPilot>,
}

/// ## Summary
/// POST /api/ranking/leaderboard - Ranks the posted pilot standings.
///
/// ## Errors
/// Returns HTTP 400 for a malformed body
#[handler]
async fn leaderboard_handler(req: &mut Request, res: &mut Response) {
    let leaderboard_req: LeaderboardRequest = match req.parse_json().await {
        Ok(r) => r,
        Err(e) => {
            error!(error = ?e, "Failed to parse leaderboard request");
            render_bad_request(res, "Invalid request body");
            return;
        }
    };

    tracing::debug!(
        pilots = leaderboard_req.standings.len(),
        "Building leaderboard"
    );

    res.render(Json(LeaderboardResponse {
        entries: leaderboard(leaderboard_req.standings),
    }));
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("leaderboard").post(leaderboard_handler)
}
