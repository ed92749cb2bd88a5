use serde::Deserialize;
use uuid::Uuid;

use crate::validate::{object_id, required, FieldError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnRequest {
    pub customer_id: Option<String>,
    pub movie_id: Option<String>,
}

impl ReturnRequest {
    pub fn validate(&self) -> Result<(Uuid, Uuid), FieldError> {
        let customer_id = object_id("customerId", required("customerId", &self.customer_id)?)?;
        let movie_id = object_id("movieId", required("movieId", &self.movie_id)?)?;
        Ok((customer_id, movie_id))
    }
}
