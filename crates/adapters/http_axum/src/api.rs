//! JSON REST API handlers.

pub mod accessories;

use axum::Router;
use axum::routing::{get, put};

use tvbridge_app::ports::{AccessoryCache, CommandTransport};

use crate::state::AppState;

/// API routes, nested under `/api` by the router.
pub fn routes<T, C>() -> Router<AppState<T, C>>
where
    T: CommandTransport + Clone + Send + Sync + 'static,
    C: AccessoryCache + Send + Sync + 'static,
{
    Router::new()
        .route("/accessories", get(accessories::list::<T, C>))
        .route("/accessories/{uuid}", get(accessories::get::<T, C>))
        .route(
            "/accessories/{uuid}/active",
            put(accessories::set_active::<T, C>),
        )
        .route(
            "/accessories/{uuid}/active-identifier",
            put(accessories::set_active_identifier::<T, C>),
        )
}
