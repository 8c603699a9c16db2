//! MySQL repository implementations
//!
//! Rows are mapped by hand with `try_get`. Enum columns hold the uppercase
//! names produced by `as_str()`.

mod activity_repository_impl;
mod booking_repository_impl;
mod destination_repository_impl;
mod passenger_repository_impl;
mod storage;
mod travel_package_repository_impl;

#[cfg(test)]
mod tests;

pub use activity_repository_impl::MySqlActivityRepository;
pub use booking_repository_impl::MySqlBookingRepository;
pub use destination_repository_impl::MySqlDestinationRepository;
pub use passenger_repository_impl::MySqlPassengerRepository;
pub use storage::MySqlStorage;
pub use travel_package_repository_impl::MySqlTravelPackageRepository;

use sqlx::mysql::{MySqlQueryResult, MySqlRow};
use sqlx::{Executor, MySql, Row};

use ta_core::errors::{DomainError, DomainResult};

/// Maps a driver error to a domain database error, logging the failed operation
pub(crate) fn query_error(operation: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| {
        tracing::error!(error = %e, operation, "Database query failed");
        DomainError::database(format!("Failed to {}: {}", operation, e))
    }
}

/// Reads a column, reporting the column name on failure
pub(crate) fn column<'r, T>(row: &'r MySqlRow, name: &str) -> DomainResult<T>
where
    T: sqlx::Decode<'r, MySql> + sqlx::Type<MySql>,
{
    row.try_get(name).map_err(|e| DomainError::Internal {
        message: format!("Failed to get {}: {}", name, e),
    })
}

/// Identifier generated by the last `INSERT`
pub(crate) fn inserted_id(result: &MySqlQueryResult) -> DomainResult<i64> {
    i64::try_from(result.last_insert_id()).map_err(|e| DomainError::Internal {
        message: format!("Generated id out of range: {}", e),
    })
}

/// Whether a row with the given key exists.
///
/// MySQL reports zero affected rows for an `UPDATE` that changes nothing, so
/// updates fall back to this check before reporting a missing row.
pub(crate) async fn row_exists<'e, E>(
    executor: E,
    table: &'static str,
    key: &'static str,
    id: i64,
) -> DomainResult<bool>
where
    E: Executor<'e, Database = MySql>,
{
    let sql = format!("SELECT COUNT(*) AS found FROM {} WHERE {} = ?", table, key);
    let row = sqlx::query(&sql)
        .bind(id)
        .fetch_one(executor)
        .await
        .map_err(query_error("check row existence"))?;

    let found: i64 = column(&row, "found")?;
    Ok(found > 0)
}

/// Parses an enum column stored as its uppercase name
pub(crate) fn parse_enum<T>(row: &MySqlRow, name: &str) -> DomainResult<T>
where
    T: std::str::FromStr<Err = String>,
{
    let raw: String = column(row, name)?;
    raw.parse().map_err(|message| DomainError::Internal { message })
}
