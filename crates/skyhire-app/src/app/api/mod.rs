mod app_specific;
mod availability;
mod ranking;

use salvo::Router;

// Re-export route constants from core
pub use skyhire_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, AVAILABILITY_ROUTE_COMPONENT,
    AVAILABILITY_ROUTE_PREFIX, RANKING_ROUTE_COMPONENT, RANKING_ROUTE_PREFIX,
};

/// ## Summary
/// Constructs the main API router.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .push(app_specific::routes())
        .push(availability::routes())
        .push(ranking::routes())
}
