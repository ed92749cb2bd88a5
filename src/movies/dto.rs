use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::repo::Movie;
use crate::validate::{length_between, non_negative, object_id, range, required, FieldError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovie {
    pub title: Option<String>,
    pub genre_id: Option<String>,
    pub number_in_stock: Option<i32>,
    pub daily_rental_rate: Option<f64>,
}

/// Validated creation payload: trimmed title, parsed genre id.
#[derive(Debug, Clone)]
pub struct ValidMovie {
    pub title: String,
    pub genre_id: Uuid,
    pub number_in_stock: i32,
    pub daily_rental_rate: f64,
}

impl CreateMovie {
    pub fn validate(&self) -> Result<ValidMovie, FieldError> {
        let title = required("title", &self.title)?.trim();
        length_between("title", title, 1, 250)?;
        let genre_id = object_id("genreId", required("genreId", &self.genre_id)?)?;
        let number_in_stock = *required("numberInStock", &self.number_in_stock)?;
        non_negative("numberInStock", number_in_stock)?;
        let daily_rental_rate = *required("dailyRentalRate", &self.daily_rental_rate)?;
        range("dailyRentalRate", daily_rental_rate, 0.0, 100.0)?;
        Ok(ValidMovie {
            title: title.to_string(),
            genre_id,
            number_in_stock,
            daily_rental_rate,
        })
    }
}

/// Genre fields copied by value into a movie at write time.
#[derive(Debug, Clone, Serialize)]
pub struct GenreSnapshot {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieResponse {
    pub id: Uuid,
    pub title: String,
    pub genre: GenreSnapshot,
    pub number_in_stock: i32,
    pub daily_rental_rate: f64,
}

impl From<Movie> for MovieResponse {
    fn from(m: Movie) -> Self {
        Self {
            id: m.id,
            title: m.title,
            genre: GenreSnapshot {
                id: m.genre_id,
                name: m.genre_name,
            },
            number_in_stock: m.number_in_stock,
            daily_rental_rate: m.daily_rental_rate,
        }
    }
}
