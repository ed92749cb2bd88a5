pub mod dto;
pub mod repo;

mod handlers;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/genres", get(handlers::list_genres).post(handlers::create_genre))
        .route(
            "/genres/:id",
            get(handlers::get_genre)
                .put(handlers::update_genre)
                .delete(handlers::delete_genre),
        )
}
