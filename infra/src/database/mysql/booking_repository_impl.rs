//! MySQL implementation of the BookingRepository trait.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;

use ta_core::domain::entities::{Booking, PassengerId};
use ta_core::errors::{DomainError, DomainResult};
use ta_core::repositories::{BookingRepository, Repository};

use super::{column, inserted_id, parse_enum, query_error, row_exists};

pub struct MySqlBookingRepository {
    pool: MySqlPool,
}

impl MySqlBookingRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Booking entity
    pub(crate) fn row_to_booking(row: &MySqlRow) -> DomainResult<Booking> {
        Ok(Booking {
            booking_id: column(row, "booking_id")?,
            passenger_id: column(row, "passenger_id")?,
            destination_id: column(row, "destination_id")?,
            activity_id: column(row, "activity_id")?,
            status: parse_enum(row, "status")?,
        })
    }
}

#[async_trait]
impl Repository<Booking> for MySqlBookingRepository {
    async fn create(&self, mut item: Booking) -> DomainResult<Booking> {
        let query = r#"
            INSERT INTO bookings (passenger_id, destination_id, activity_id, status)
            VALUES (?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(item.passenger_id)
            .bind(item.destination_id)
            .bind(item.activity_id)
            .bind(item.status.as_str())
            .execute(&self.pool)
            .await
            .map_err(query_error("insert booking"))?;

        item.booking_id = inserted_id(&result)?;
        Ok(item)
    }

    async fn update(&self, item: Booking) -> DomainResult<Booking> {
        let query = r#"
            UPDATE bookings
            SET passenger_id = ?, destination_id = ?, activity_id = ?, status = ?
            WHERE booking_id = ?
        "#;

        let result = sqlx::query(query)
            .bind(item.passenger_id)
            .bind(item.destination_id)
            .bind(item.activity_id)
            .bind(item.status.as_str())
            .bind(item.booking_id)
            .execute(&self.pool)
            .await
            .map_err(query_error("update booking"))?;

        if result.rows_affected() == 0
            && !row_exists(&self.pool, "bookings", "booking_id", item.booking_id).await?
        {
            return Err(DomainError::not_found::<Booking>(item.booking_id));
        }

        Ok(item)
    }

    async fn delete(&self, id: i64) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM bookings WHERE booking_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(query_error("delete booking"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Booking>> {
        let query = r#"
            SELECT booking_id, passenger_id, destination_id, activity_id, status
            FROM bookings
            WHERE booking_id = ?
        "#;

        let row = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error("find booking"))?;

        row.as_ref().map(Self::row_to_booking).transpose()
    }
}

#[async_trait]
impl BookingRepository for MySqlBookingRepository {
    async fn find_by_passenger(&self, passenger_id: PassengerId) -> DomainResult<Vec<Booking>> {
        let query = r#"
            SELECT booking_id, passenger_id, destination_id, activity_id, status
            FROM bookings
            WHERE passenger_id = ?
            ORDER BY booking_id
        "#;

        let rows = sqlx::query(query)
            .bind(passenger_id)
            .fetch_all(&self.pool)
            .await
            .map_err(query_error("find bookings by passenger"))?;

        rows.iter().map(Self::row_to_booking).collect()
    }
}
