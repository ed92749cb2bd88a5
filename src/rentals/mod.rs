pub mod dto;
pub mod repo;

mod handlers;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/rentals",
        get(handlers::list_rentals).post(handlers::create_rental),
    )
}
