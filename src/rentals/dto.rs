use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::repo::RentalRecord;
use crate::validate::{object_id, required, FieldError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRental {
    pub customer_id: Option<String>,
    pub movie_id: Option<String>,
}

impl CreateRental {
    /// Both foreign keys must be well-formed before any lookup runs.
    pub fn validate(&self) -> Result<(Uuid, Uuid), FieldError> {
        let customer_id = object_id("customerId", required("customerId", &self.customer_id)?)?;
        let movie_id = object_id("movieId", required("movieId", &self.movie_id)?)?;
        Ok((customer_id, movie_id))
    }
}

/// Customer fields frozen into the rental at creation time.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerSnapshot {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
}

/// Movie fields frozen into the rental at creation time.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieSnapshot {
    pub id: Uuid,
    pub title: String,
    pub daily_rental_rate: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalResponse {
    pub id: Uuid,
    pub customer: CustomerSnapshot,
    pub movie: MovieSnapshot,
    #[serde(with = "time::serde::rfc3339")]
    pub date_out: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub day_returned: Option<OffsetDateTime>,
    pub rental_fee: Option<f64>,
}

impl From<RentalRecord> for RentalResponse {
    fn from(r: RentalRecord) -> Self {
        Self {
            id: r.id,
            customer: CustomerSnapshot {
                id: r.customer_id,
                name: r.customer_name,
                phone: r.customer_phone,
            },
            movie: MovieSnapshot {
                id: r.movie_id,
                title: r.movie_title,
                daily_rental_rate: r.movie_daily_rental_rate,
            },
            date_out: r.date_out,
            day_returned: r.day_returned,
            rental_fee: r.rental_fee,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_ids() {
        let customer_id = Uuid::new_v4();
        let movie_id = Uuid::new_v4();
        let payload = CreateRental {
            customer_id: Some(customer_id.to_string()),
            movie_id: Some(movie_id.to_string()),
        };
        assert_eq!(payload.validate().unwrap(), (customer_id, movie_id));
    }

    #[test]
    fn rejects_missing_or_empty_customer_id() {
        let payload = CreateRental {
            customer_id: None,
            movie_id: Some(Uuid::new_v4().to_string()),
        };
        assert_eq!(payload.validate().unwrap_err().field, "customerId");

        let payload = CreateRental {
            customer_id: Some("".into()),
            movie_id: Some(Uuid::new_v4().to_string()),
        };
        assert_eq!(payload.validate().unwrap_err().field, "customerId");
    }

    #[test]
    fn rejects_malformed_movie_id() {
        let payload = CreateRental {
            customer_id: Some(Uuid::new_v4().to_string()),
            movie_id: Some("12345".into()),
        };
        assert_eq!(payload.validate().unwrap_err().field, "movieId");
    }
}
