pub mod claims;
pub mod extractors;
pub mod jwt;
pub mod password;
pub mod repo;

mod dto;
mod handlers;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", post(handlers::register))
        .route("/users/me", get(handlers::me))
        .route("/auth", post(handlers::login))
}
