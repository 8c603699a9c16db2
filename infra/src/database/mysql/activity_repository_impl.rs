//! MySQL implementation of the ActivityRepository trait.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;

use ta_core::domain::entities::{Activity, DestinationId};
use ta_core::errors::{DomainError, DomainResult};
use ta_core::repositories::{ActivityRepository, Repository};

use super::{column, inserted_id, query_error, row_exists};

const SELECT_ACTIVITY: &str = r#"
    SELECT activity_id, destination_id, name, description, cost, capacity
    FROM activities
"#;

pub struct MySqlActivityRepository {
    pool: MySqlPool,
}

impl MySqlActivityRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_activity(row: &MySqlRow) -> DomainResult<Activity> {
        Ok(Activity {
            activity_id: column(row, "activity_id")?,
            destination_id: column(row, "destination_id")?,
            name: column(row, "name")?,
            description: column(row, "description")?,
            cost: column(row, "cost")?,
            capacity: column(row, "capacity")?,
        })
    }

    async fn select(&self, filter: &str, bind: Option<i64>, operation: &'static str) -> DomainResult<Vec<Activity>> {
        let sql = format!("{} {} ORDER BY activity_id", SELECT_ACTIVITY, filter);
        let mut query = sqlx::query(&sql);
        if let Some(value) = bind {
            query = query.bind(value);
        }

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(query_error(operation))?;

        rows.iter().map(Self::row_to_activity).collect()
    }
}

#[async_trait]
impl Repository<Activity> for MySqlActivityRepository {
    async fn create(&self, mut item: Activity) -> DomainResult<Activity> {
        let query = r#"
            INSERT INTO activities (destination_id, name, description, cost, capacity)
            VALUES (?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(item.destination_id)
            .bind(&item.name)
            .bind(&item.description)
            .bind(item.cost)
            .bind(item.capacity)
            .execute(&self.pool)
            .await
            .map_err(query_error("insert activity"))?;

        item.activity_id = inserted_id(&result)?;
        Ok(item)
    }

    async fn update(&self, item: Activity) -> DomainResult<Activity> {
        let query = r#"
            UPDATE activities
            SET destination_id = ?, name = ?, description = ?, cost = ?, capacity = ?
            WHERE activity_id = ?
        "#;

        let result = sqlx::query(query)
            .bind(item.destination_id)
            .bind(&item.name)
            .bind(&item.description)
            .bind(item.cost)
            .bind(item.capacity)
            .bind(item.activity_id)
            .execute(&self.pool)
            .await
            .map_err(query_error("update activity"))?;

        if result.rows_affected() == 0
            && !row_exists(&self.pool, "activities", "activity_id", item.activity_id).await?
        {
            return Err(DomainError::not_found::<Activity>(item.activity_id));
        }

        Ok(item)
    }

    async fn delete(&self, id: i64) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM activities WHERE activity_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(query_error("delete activity"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Activity>> {
        let activities = self
            .select("WHERE activity_id = ?", Some(id), "find activity")
            .await?;
        Ok(activities.into_iter().next())
    }
}

#[async_trait]
impl ActivityRepository for MySqlActivityRepository {
    async fn find_by_destination(&self, destination_id: DestinationId) -> DomainResult<Vec<Activity>> {
        self.select(
            "WHERE destination_id = ?",
            Some(destination_id),
            "find activities by destination",
        )
        .await
    }

    async fn find_with_available_space(&self) -> DomainResult<Vec<Activity>> {
        self.select("WHERE capacity > 0", None, "find available activities")
            .await
    }
}
