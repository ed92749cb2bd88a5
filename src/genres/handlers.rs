use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{info, instrument};
use uuid::Uuid;

use super::dto::CreateGenre;
use super::repo::Genre;
use crate::auth::extractors::{AdminUser, AuthUser};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[instrument(skip(state))]
pub async fn list_genres(State(state): State<AppState>) -> ApiResult<Json<Vec<Genre>>> {
    let genres = Genre::find_all(&state.db).await?;
    Ok(Json(genres))
}

#[instrument(skip(state))]
pub async fn get_genre(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Genre>> {
    // A malformed id is indistinguishable from a nonexistent one.
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::NotFound)?;
    let genre = Genre::find_by_id(&state.db, id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(genre))
}

#[instrument(skip(state, payload))]
pub async fn create_genre(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Json(payload): Json<CreateGenre>,
) -> ApiResult<Json<Genre>> {
    let name = payload.validate()?;
    let genre = Genre::create(&state.db, &name).await?;
    info!(genre_id = %genre.id, "genre created");
    Ok(Json(genre))
}

#[instrument(skip(state, payload))]
pub async fn update_genre(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<CreateGenre>,
) -> ApiResult<Json<Genre>> {
    let name = payload.validate()?;
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::NotFound)?;
    let genre = Genre::update(&state.db, id, &name)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(genre))
}

#[instrument(skip(state))]
pub async fn delete_genre(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    Path(id): Path<String>,
) -> ApiResult<Json<Genre>> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::NotFound)?;
    let genre = Genre::delete(&state.db, id).await?.ok_or(ApiError::NotFound)?;
    info!(genre_id = %genre.id, deleted_by = %claims.sub, "genre deleted");
    Ok(Json(genre))
}
