use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::dto::ValidCustomer;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub is_gold: bool,
    pub phone: String,
}

impl Customer {
    pub async fn find_all(db: &PgPool) -> anyhow::Result<Vec<Customer>> {
        let rows = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, is_gold, phone
            FROM customers
            ORDER BY name ASC
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Customer>> {
        let row = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, is_gold, phone
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    pub async fn create(db: &PgPool, customer: &ValidCustomer) -> anyhow::Result<Customer> {
        let row = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (name, is_gold, phone)
            VALUES ($1, $2, $3)
            RETURNING id, name, is_gold, phone
            "#,
        )
        .bind(&customer.name)
        .bind(customer.is_gold)
        .bind(&customer.phone)
        .fetch_one(db)
        .await?;
        Ok(row)
    }
}
