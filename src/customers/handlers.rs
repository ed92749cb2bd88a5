use axum::{extract::State, Json};
use tracing::{info, instrument};

use super::dto::CreateCustomer;
use super::repo::Customer;
use crate::error::ApiResult;
use crate::state::AppState;

#[instrument(skip(state))]
pub async fn list_customers(State(state): State<AppState>) -> ApiResult<Json<Vec<Customer>>> {
    let customers = Customer::find_all(&state.db).await?;
    Ok(Json(customers))
}

#[instrument(skip(state, payload))]
pub async fn create_customer(
    State(state): State<AppState>,
    Json(payload): Json<CreateCustomer>,
) -> ApiResult<Json<Customer>> {
    let valid = payload.validate()?;
    let customer = Customer::create(&state.db, &valid).await?;
    info!(customer_id = %customer.id, "customer created");
    Ok(Json(customer))
}
