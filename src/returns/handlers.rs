use axum::{extract::State, Json};
use tracing::{info, instrument};

use super::dto::ReturnRequest;
use crate::auth::extractors::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::rentals::dto::RentalResponse;
use crate::rentals::repo::RentalRecord;
use crate::state::AppState;

/// Transitions a rental from open to returned: stamps the return day,
/// computes the fee from the rate snapshot, and restocks the movie.
#[instrument(skip(state, payload))]
pub async fn process_return(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(payload): Json<ReturnRequest>,
) -> ApiResult<Json<RentalResponse>> {
    let (customer_id, movie_id) = payload.validate()?;

    let rental = RentalRecord::lookup(&state.db, customer_id, movie_id)
        .await?
        .ok_or(ApiError::RentalNotFound)?;

    if rental.day_returned.is_some() {
        return Err(ApiError::AlreadyProcessed);
    }

    let returned = rental.process_return(&state.db).await?;
    info!(
        rental_id = %returned.id,
        fee = returned.rental_fee,
        processed_by = %claims.sub,
        "return processed"
    );
    Ok(Json(returned.into()))
}
