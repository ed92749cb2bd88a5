use sqlx::{FromRow, PgPool};
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::customers::repo::Customer;
use crate::error::ApiError;
use crate::movies::repo::Movie;

/// One rental transaction. The customer and movie fields are snapshot
/// copies taken at creation time; deleting or editing the live records
/// afterwards must not change rental history.
#[derive(Debug, Clone, FromRow)]
pub struct RentalRecord {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub customer_name: String,
    pub customer_phone: String,
    pub movie_id: Uuid,
    pub movie_title: String,
    pub movie_daily_rental_rate: f64,
    pub date_out: OffsetDateTime,
    pub day_returned: Option<OffsetDateTime>,
    pub rental_fee: Option<f64>,
}

#[derive(Debug, Error)]
pub enum CreateRentalError {
    #[error("movie not in stock")]
    OutOfStock,
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

#[derive(Debug, Error)]
pub enum ReturnRentalError {
    #[error("return already processed")]
    AlreadyProcessed,
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

impl From<CreateRentalError> for ApiError {
    fn from(e: CreateRentalError) -> Self {
        match e {
            CreateRentalError::OutOfStock => ApiError::OutOfStock,
            CreateRentalError::Db(e) => ApiError::Database(e),
        }
    }
}

impl From<ReturnRentalError> for ApiError {
    fn from(e: ReturnRentalError) -> Self {
        match e {
            ReturnRentalError::AlreadyProcessed => ApiError::AlreadyProcessed,
            ReturnRentalError::Db(e) => ApiError::Database(e),
        }
    }
}

const RENTAL_COLUMNS: &str = "id, customer_id, customer_name, customer_phone, \
     movie_id, movie_title, movie_daily_rental_rate, date_out, day_returned, rental_fee";

impl RentalRecord {
    /// Fee owed if the rental were returned at `returned`: elapsed whole
    /// days (truncated) times the rate frozen at checkout.
    pub fn fee_at(&self, returned: OffsetDateTime) -> f64 {
        let days = (returned - self.date_out).whole_days().max(0);
        days as f64 * self.movie_daily_rental_rate
    }

    pub async fn find_all(db: &PgPool) -> anyhow::Result<Vec<RentalRecord>> {
        let rows = sqlx::query_as::<_, RentalRecord>(&format!(
            "SELECT {RENTAL_COLUMNS} FROM rentals ORDER BY date_out DESC"
        ))
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// Finds the rental for a (customer, movie) pair by the embedded
    /// snapshot ids, newest first, regardless of returned state.
    pub async fn lookup(
        db: &PgPool,
        customer_id: Uuid,
        movie_id: Uuid,
    ) -> anyhow::Result<Option<RentalRecord>> {
        let row = sqlx::query_as::<_, RentalRecord>(&format!(
            r#"
            SELECT {RENTAL_COLUMNS}
            FROM rentals
            WHERE customer_id = $1 AND movie_id = $2
            ORDER BY date_out DESC
            LIMIT 1
            "#
        ))
        .bind(customer_id)
        .bind(movie_id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    /// Creates the rental and decrements the movie's stock in one
    /// transaction. The decrement is conditional on remaining stock, so a
    /// concurrent rental that would oversell aborts here instead.
    pub async fn create(
        db: &PgPool,
        customer: &Customer,
        movie: &Movie,
    ) -> Result<RentalRecord, CreateRentalError> {
        let mut tx = db.begin().await?;

        let rental = sqlx::query_as::<_, RentalRecord>(&format!(
            r#"
            INSERT INTO rentals (customer_id, customer_name, customer_phone,
                                 movie_id, movie_title, movie_daily_rental_rate)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {RENTAL_COLUMNS}
            "#
        ))
        .bind(customer.id)
        .bind(&customer.name)
        .bind(&customer.phone)
        .bind(movie.id)
        .bind(&movie.title)
        .bind(movie.daily_rental_rate)
        .fetch_one(&mut *tx)
        .await?;

        let decremented = sqlx::query(
            r#"
            UPDATE movies
            SET number_in_stock = number_in_stock - 1
            WHERE id = $1 AND number_in_stock > 0
            "#,
        )
        .bind(movie.id)
        .execute(&mut *tx)
        .await?;

        if decremented.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(CreateRentalError::OutOfStock);
        }

        tx.commit().await?;
        Ok(rental)
    }

    /// Marks the rental returned and restocks the movie in one
    /// transaction. The update is guarded on `day_returned IS NULL`, so a
    /// concurrent second return loses and aborts.
    pub async fn process_return(&self, db: &PgPool) -> Result<RentalRecord, ReturnRentalError> {
        let now = OffsetDateTime::now_utc();
        let fee = self.fee_at(now);

        let mut tx = db.begin().await?;

        let updated = sqlx::query_as::<_, RentalRecord>(&format!(
            r#"
            UPDATE rentals
            SET day_returned = $2, rental_fee = $3
            WHERE id = $1 AND day_returned IS NULL
            RETURNING {RENTAL_COLUMNS}
            "#
        ))
        .bind(self.id)
        .bind(now)
        .bind(fee)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(updated) = updated else {
            tx.rollback().await?;
            return Err(ReturnRentalError::AlreadyProcessed);
        };

        // Restock; a no-op if the movie was deleted in the meantime.
        sqlx::query("UPDATE movies SET number_in_stock = number_in_stock + 1 WHERE id = $1")
            .bind(self.movie_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(updated)
    }
}
