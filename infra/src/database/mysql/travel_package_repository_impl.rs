//! MySQL implementation of the TravelPackageRepository trait.
//!
//! The itinerary is stored in `package_destinations` with a sort order column.
//! Lookups hydrate destinations and their activities with one LEFT JOIN.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlConnection, MySqlPool};

use ta_core::domain::entities::{Activity, Destination, PackageId, TravelPackage};
use ta_core::errors::{DomainError, DomainResult};
use ta_core::repositories::{Repository, TravelPackageRepository};

use super::{column, inserted_id, query_error, row_exists};

pub struct MySqlTravelPackageRepository {
    pool: MySqlPool,
}

impl MySqlTravelPackageRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Replace the package itinerary, keeping the destinations' order
    async fn replace_destinations(
        conn: &mut MySqlConnection,
        package_id: PackageId,
        destinations: &[Destination],
    ) -> DomainResult<()> {
        sqlx::query("DELETE FROM package_destinations WHERE package_id = ?")
            .bind(package_id)
            .execute(&mut *conn)
            .await
            .map_err(query_error("clear package destinations"))?;

        for (position, destination) in destinations.iter().enumerate() {
            let position = i32::try_from(position).map_err(|e| DomainError::Internal {
                message: format!("Itinerary too long: {}", e),
            })?;

            sqlx::query(
                "INSERT INTO package_destinations (package_id, destination_id, sort_order) VALUES (?, ?, ?)",
            )
            .bind(package_id)
            .bind(destination.destination_id)
            .bind(position)
            .execute(&mut *conn)
            .await
            .map_err(query_error("link package destination"))?;
        }

        Ok(())
    }

    /// Fold the joined rows of one package into a hydrated entity
    fn rows_to_package(rows: &[MySqlRow]) -> DomainResult<Option<TravelPackage>> {
        let Some(first) = rows.first() else {
            return Ok(None);
        };

        let mut package = TravelPackage {
            package_id: column(first, "package_id")?,
            name: column(first, "name")?,
            description: column(first, "description")?,
            capacity: column(first, "capacity")?,
            destinations: Vec::new(),
        };

        for row in rows {
            let Some(destination_id) = column::<Option<i64>>(row, "destination_id")? else {
                continue;
            };

            let is_new = package
                .destinations
                .last()
                .map_or(true, |d| d.destination_id != destination_id);
            if is_new {
                package.destinations.push(Destination {
                    destination_id,
                    name: column(row, "destination_name")?,
                    activities: Vec::new(),
                });
            }

            if let Some(activity_id) = column::<Option<i64>>(row, "activity_id")? {
                let activity = Activity {
                    activity_id,
                    destination_id,
                    name: column(row, "activity_name")?,
                    description: column(row, "activity_description")?,
                    cost: column(row, "activity_cost")?,
                    capacity: column(row, "activity_capacity")?,
                };
                if let Some(destination) = package.destinations.last_mut() {
                    destination.activities.push(activity);
                }
            }
        }

        Ok(Some(package))
    }
}

#[async_trait]
impl Repository<TravelPackage> for MySqlTravelPackageRepository {
    async fn create(&self, mut item: TravelPackage) -> DomainResult<TravelPackage> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(query_error("begin transaction"))?;

        let result = sqlx::query(
            "INSERT INTO travel_packages (name, description, capacity) VALUES (?, ?, ?)",
        )
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.capacity)
        .execute(&mut *tx)
        .await
        .map_err(query_error("insert travel package"))?;

        item.package_id = inserted_id(&result)?;
        Self::replace_destinations(&mut tx, item.package_id, &item.destinations).await?;

        tx.commit().await.map_err(query_error("commit travel package"))?;
        Ok(item)
    }

    async fn update(&self, item: TravelPackage) -> DomainResult<TravelPackage> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(query_error("begin transaction"))?;

        let result = sqlx::query(
            "UPDATE travel_packages SET name = ?, description = ?, capacity = ? WHERE package_id = ?",
        )
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.capacity)
        .bind(item.package_id)
        .execute(&mut *tx)
        .await
        .map_err(query_error("update travel package"))?;

        if result.rows_affected() == 0
            && !row_exists(&mut *tx, "travel_packages", "package_id", item.package_id).await?
        {
            return Err(DomainError::not_found::<TravelPackage>(item.package_id));
        }

        Self::replace_destinations(&mut tx, item.package_id, &item.destinations).await?;

        tx.commit().await.map_err(query_error("commit travel package"))?;
        Ok(item)
    }

    async fn delete(&self, id: i64) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM travel_packages WHERE package_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(query_error("delete travel package"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<TravelPackage>> {
        let query = r#"
            SELECT p.package_id, p.name, p.description, p.capacity,
                   d.destination_id, d.name AS destination_name,
                   a.activity_id, a.name AS activity_name, a.description AS activity_description,
                   a.cost AS activity_cost, a.capacity AS activity_capacity
            FROM travel_packages p
            LEFT JOIN package_destinations pd ON pd.package_id = p.package_id
            LEFT JOIN destinations d ON d.destination_id = pd.destination_id
            LEFT JOIN activities a ON a.destination_id = d.destination_id
            WHERE p.package_id = ?
            ORDER BY pd.sort_order, a.activity_id
        "#;

        let rows = sqlx::query(query)
            .bind(id)
            .fetch_all(&self.pool)
            .await
            .map_err(query_error("find travel package"))?;

        Self::rows_to_package(&rows)
    }
}

impl TravelPackageRepository for MySqlTravelPackageRepository {}
