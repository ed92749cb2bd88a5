use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::dto::{CreateMovie, MovieResponse};
use super::repo::Movie;
use crate::auth::extractors::{AdminUser, AuthUser};
use crate::error::{ApiError, ApiResult};
use crate::genres::repo::Genre;
use crate::state::AppState;

#[instrument(skip(state))]
pub async fn list_movies(State(state): State<AppState>) -> ApiResult<Json<Vec<MovieResponse>>> {
    let movies = Movie::find_all(&state.db).await?;
    Ok(Json(movies.into_iter().map(MovieResponse::from).collect()))
}

#[instrument(skip(state))]
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MovieResponse>> {
    // A malformed id is indistinguishable from a nonexistent one.
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::NotFound)?;
    let movie = Movie::find_by_id(&state.db, id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(movie.into()))
}

#[instrument(skip(state, payload))]
pub async fn create_movie(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Json(payload): Json<CreateMovie>,
) -> ApiResult<Json<MovieResponse>> {
    let valid = payload.validate()?;

    let genre = match Genre::find_by_id(&state.db, valid.genre_id).await? {
        Some(g) => g,
        None => {
            warn!(genre_id = %valid.genre_id, "unknown genre");
            return Err(ApiError::InvalidReference("genre"));
        }
    };

    let movie = Movie::create(&state.db, &valid, &genre).await?;
    info!(movie_id = %movie.id, "movie created");
    Ok(Json(movie.into()))
}

#[instrument(skip(state, payload))]
pub async fn update_movie(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<CreateMovie>,
) -> ApiResult<Json<MovieResponse>> {
    let valid = payload.validate()?;

    let genre = Genre::find_by_id(&state.db, valid.genre_id)
        .await?
        .ok_or(ApiError::InvalidReference("genre"))?;

    let id = Uuid::parse_str(&id).map_err(|_| ApiError::NotFound)?;
    let movie = Movie::update(&state.db, id, &valid, &genre)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(movie.into()))
}

#[instrument(skip(state))]
pub async fn delete_movie(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MovieResponse>> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::NotFound)?;
    let movie = Movie::delete(&state.db, id).await?.ok_or(ApiError::NotFound)?;
    info!(movie_id = %movie.id, deleted_by = %claims.sub, "movie deleted");
    Ok(Json(movie.into()))
}
