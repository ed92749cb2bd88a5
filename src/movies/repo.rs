use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::dto::ValidMovie;
use crate::genres::repo::Genre;

#[derive(Debug, Clone, FromRow)]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    pub genre_id: Uuid,
    pub genre_name: String,
    pub number_in_stock: i32,
    pub daily_rental_rate: f64,
}

const MOVIE_COLUMNS: &str = "id, title, genre_id, genre_name, number_in_stock, daily_rental_rate";

impl Movie {
    pub async fn find_all(db: &PgPool) -> anyhow::Result<Vec<Movie>> {
        let rows = sqlx::query_as::<_, Movie>(&format!(
            "SELECT {MOVIE_COLUMNS} FROM movies ORDER BY title ASC"
        ))
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Movie>> {
        let row = sqlx::query_as::<_, Movie>(&format!(
            "SELECT {MOVIE_COLUMNS} FROM movies WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    /// The genre is embedded as a value copy, not a live reference.
    pub async fn create(db: &PgPool, movie: &ValidMovie, genre: &Genre) -> anyhow::Result<Movie> {
        let row = sqlx::query_as::<_, Movie>(&format!(
            r#"
            INSERT INTO movies (title, genre_id, genre_name, number_in_stock, daily_rental_rate)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {MOVIE_COLUMNS}
            "#
        ))
        .bind(&movie.title)
        .bind(genre.id)
        .bind(&genre.name)
        .bind(movie.number_in_stock)
        .bind(movie.daily_rental_rate)
        .fetch_one(db)
        .await?;
        Ok(row)
    }

    pub async fn update(
        db: &PgPool,
        id: Uuid,
        movie: &ValidMovie,
        genre: &Genre,
    ) -> anyhow::Result<Option<Movie>> {
        let row = sqlx::query_as::<_, Movie>(&format!(
            r#"
            UPDATE movies
            SET title = $2, genre_id = $3, genre_name = $4,
                number_in_stock = $5, daily_rental_rate = $6
            WHERE id = $1
            RETURNING {MOVIE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&movie.title)
        .bind(genre.id)
        .bind(&genre.name)
        .bind(movie.number_in_stock)
        .bind(movie.daily_rental_rate)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    pub async fn delete(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Movie>> {
        let row = sqlx::query_as::<_, Movie>(&format!(
            "DELETE FROM movies WHERE id = $1 RETURNING {MOVIE_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }
}
