//! Stateless availability endpoints. Blockouts arrive in the request body,
//! already loaded by the caller.

use salvo::Router;
use skyhire_core::constants::AVAILABILITY_ROUTE_COMPONENT;

mod check;
mod occurrences;
mod slots;
mod types;

#[must_use]
pub fn routes() -> Router {
    Router::with_path(AVAILABILITY_ROUTE_COMPONENT)
        .push(check::routes())
        .push(slots::routes())
        .push(occurrences::routes())
}
