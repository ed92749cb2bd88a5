use axum::{extract::State, Json};
use tracing::{info, instrument, warn};

use super::dto::{CreateRental, RentalResponse};
use super::repo::RentalRecord;
use crate::customers::repo::Customer;
use crate::error::{ApiError, ApiResult};
use crate::movies::repo::Movie;
use crate::state::AppState;

#[instrument(skip(state))]
pub async fn list_rentals(State(state): State<AppState>) -> ApiResult<Json<Vec<RentalResponse>>> {
    let rentals = RentalRecord::find_all(&state.db).await?;
    Ok(Json(rentals.into_iter().map(RentalResponse::from).collect()))
}

#[instrument(skip(state, payload))]
pub async fn create_rental(
    State(state): State<AppState>,
    Json(payload): Json<CreateRental>,
) -> ApiResult<Json<RentalResponse>> {
    let (customer_id, movie_id) = payload.validate()?;

    let customer = match Customer::find_by_id(&state.db, customer_id).await? {
        Some(c) => c,
        None => {
            warn!(%customer_id, "unknown customer");
            return Err(ApiError::InvalidReference("customer"));
        }
    };

    let movie = match Movie::find_by_id(&state.db, movie_id).await? {
        Some(m) => m,
        None => {
            warn!(%movie_id, "unknown movie");
            return Err(ApiError::InvalidReference("movie"));
        }
    };

    if movie.number_in_stock == 0 {
        return Err(ApiError::OutOfStock);
    }

    let rental = RentalRecord::create(&state.db, &customer, &movie).await?;
    info!(rental_id = %rental.id, %customer_id, %movie_id, "rental created");
    Ok(Json(rental.into()))
}
