//! MySQL implementation of the DestinationRepository trait.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;

use ta_core::domain::entities::Destination;
use ta_core::errors::{DomainError, DomainResult};
use ta_core::repositories::{DestinationRepository, Repository};

use super::{column, inserted_id, query_error, row_exists};

/// MySQL implementation of DestinationRepository
///
/// Only the destination row is stored here; activities live in the
/// `activities` table and are not loaded by this repository.
pub struct MySqlDestinationRepository {
    pool: MySqlPool,
}

impl MySqlDestinationRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_destination(row: &MySqlRow) -> DomainResult<Destination> {
        Ok(Destination {
            destination_id: column(row, "destination_id")?,
            name: column(row, "name")?,
            activities: Vec::new(),
        })
    }
}

#[async_trait]
impl Repository<Destination> for MySqlDestinationRepository {
    async fn create(&self, mut item: Destination) -> DomainResult<Destination> {
        let result = sqlx::query("INSERT INTO destinations (name) VALUES (?)")
            .bind(&item.name)
            .execute(&self.pool)
            .await
            .map_err(query_error("insert destination"))?;

        item.destination_id = inserted_id(&result)?;
        Ok(item)
    }

    async fn update(&self, item: Destination) -> DomainResult<Destination> {
        let result = sqlx::query("UPDATE destinations SET name = ? WHERE destination_id = ?")
            .bind(&item.name)
            .bind(item.destination_id)
            .execute(&self.pool)
            .await
            .map_err(query_error("update destination"))?;

        if result.rows_affected() == 0
            && !row_exists(&self.pool, "destinations", "destination_id", item.destination_id).await?
        {
            return Err(DomainError::not_found::<Destination>(item.destination_id));
        }

        Ok(item)
    }

    async fn delete(&self, id: i64) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM destinations WHERE destination_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(query_error("delete destination"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Destination>> {
        let row = sqlx::query("SELECT destination_id, name FROM destinations WHERE destination_id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error("find destination"))?;

        row.as_ref().map(Self::row_to_destination).transpose()
    }
}

#[async_trait]
impl DestinationRepository for MySqlDestinationRepository {
    async fn find_all(&self) -> DomainResult<Vec<Destination>> {
        let rows = sqlx::query("SELECT destination_id, name FROM destinations ORDER BY destination_id")
            .fetch_all(&self.pool)
            .await
            .map_err(query_error("list destinations"))?;

        rows.iter().map(Self::row_to_destination).collect()
    }
}
