pub mod dto;
pub mod repo;

mod handlers;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/customers",
        get(handlers::list_customers).post(handlers::create_customer),
    )
}
