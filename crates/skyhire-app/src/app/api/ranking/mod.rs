use salvo::Router;
use skyhire_core::constants::RANKING_ROUTE_COMPONENT;

mod leaderboard;
mod tier;

#[must_use]
pub fn routes() -> Router {
    Router::with_path(RANKING_ROUTE_COMPONENT)
        .push(tier::routes())
        .push(leaderboard::routes())
}
