//! MySQL implementation of the PassengerRepository trait.
//!
//! A passenger's active bookings are kept in `passenger_bookings`. Every
//! write replaces that association inside the same transaction as the
//! passenger row.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlConnection, MySqlPool};

use ta_core::domain::entities::{Booking, Passenger, PassengerId};
use ta_core::errors::{DomainError, DomainResult};
use ta_core::repositories::{PassengerRepository, Repository};

use super::booking_repository_impl::MySqlBookingRepository;
use super::{column, inserted_id, parse_enum, query_error, row_exists};

pub struct MySqlPassengerRepository {
    pool: MySqlPool,
}

impl MySqlPassengerRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_passenger(row: &MySqlRow) -> DomainResult<Passenger> {
        Ok(Passenger {
            passenger_id: column(row, "passenger_id")?,
            name: column(row, "name")?,
            mobile: column(row, "mobile")?,
            passenger_type: parse_enum(row, "passenger_type")?,
            balance: column(row, "balance")?,
            bookings: Vec::new(),
        })
    }

    /// Replace the passenger's booking links with `bookings`
    async fn replace_bookings(
        conn: &mut MySqlConnection,
        passenger_id: PassengerId,
        bookings: &[Booking],
    ) -> DomainResult<()> {
        sqlx::query("DELETE FROM passenger_bookings WHERE passenger_id = ?")
            .bind(passenger_id)
            .execute(&mut *conn)
            .await
            .map_err(query_error("clear passenger bookings"))?;

        for booking in bookings {
            sqlx::query("INSERT INTO passenger_bookings (passenger_id, booking_id) VALUES (?, ?)")
                .bind(passenger_id)
                .bind(booking.booking_id)
                .execute(&mut *conn)
                .await
                .map_err(query_error("link passenger booking"))?;
        }

        Ok(())
    }

    async fn active_bookings(&self, passenger_id: PassengerId) -> DomainResult<Vec<Booking>> {
        let query = r#"
            SELECT b.booking_id, b.passenger_id, b.destination_id, b.activity_id, b.status
            FROM passenger_bookings pb
            INNER JOIN bookings b ON b.booking_id = pb.booking_id
            WHERE pb.passenger_id = ? AND b.status <> 'CANCELLED'
            ORDER BY b.booking_id
        "#;

        let rows = sqlx::query(query)
            .bind(passenger_id)
            .fetch_all(&self.pool)
            .await
            .map_err(query_error("load passenger bookings"))?;

        rows.iter().map(MySqlBookingRepository::row_to_booking).collect()
    }
}

#[async_trait]
impl Repository<Passenger> for MySqlPassengerRepository {
    async fn create(&self, mut item: Passenger) -> DomainResult<Passenger> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(query_error("begin transaction"))?;

        let query = r#"
            INSERT INTO passengers (name, mobile, passenger_type, balance)
            VALUES (?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&item.name)
            .bind(&item.mobile)
            .bind(item.passenger_type.as_str())
            .bind(item.balance)
            .execute(&mut *tx)
            .await
            .map_err(query_error("insert passenger"))?;

        item.passenger_id = inserted_id(&result)?;
        Self::replace_bookings(&mut tx, item.passenger_id, &item.bookings).await?;

        tx.commit().await.map_err(query_error("commit passenger"))?;
        Ok(item)
    }

    async fn update(&self, item: Passenger) -> DomainResult<Passenger> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(query_error("begin transaction"))?;

        let query = r#"
            UPDATE passengers
            SET name = ?, mobile = ?, passenger_type = ?, balance = ?
            WHERE passenger_id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&item.name)
            .bind(&item.mobile)
            .bind(item.passenger_type.as_str())
            .bind(item.balance)
            .bind(item.passenger_id)
            .execute(&mut *tx)
            .await
            .map_err(query_error("update passenger"))?;

        if result.rows_affected() == 0
            && !row_exists(&mut *tx, "passengers", "passenger_id", item.passenger_id).await?
        {
            // Dropping the transaction rolls it back
            return Err(DomainError::not_found::<Passenger>(item.passenger_id));
        }

        Self::replace_bookings(&mut tx, item.passenger_id, &item.bookings).await?;

        tx.commit().await.map_err(query_error("commit passenger"))?;
        Ok(item)
    }

    async fn delete(&self, id: i64) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM passengers WHERE passenger_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(query_error("delete passenger"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Passenger>> {
        let query = r#"
            SELECT passenger_id, name, mobile, passenger_type, balance
            FROM passengers
            WHERE passenger_id = ?
        "#;

        let row = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error("find passenger"))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut passenger = Self::row_to_passenger(&row)?;
        passenger.bookings = self.active_bookings(id).await?;
        Ok(Some(passenger))
    }
}

impl PassengerRepository for MySqlPassengerRepository {}
