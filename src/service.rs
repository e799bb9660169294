use axum::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait, QueryFilter, QueryOrder,
};

use crate::models::urls;

#[derive(Debug, thiserror::Error)]
pub enum DeleteError {
    #[error("url not found")]
    NotFound,
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

/// Removes a stored alias → URL mapping and returns the id of the removed
/// record.
#[async_trait]
pub trait UrlDeleter: Send + Sync {
    async fn delete_url(&self, url: &str, alias: &str) -> Result<i64, DeleteError>;
}

pub struct UrlService {
    db: DatabaseConnection,
}

impl UrlService {
    pub async fn new(postgres_url: &str) -> Result<Self, DbErr> {
        Ok(Self::from_connection(
            sea_orm::Database::connect(postgres_url).await?,
        ))
    }

    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl UrlDeleter for UrlService {
    /// An empty `alias` matches any alias of `url`; the oldest record wins.
    async fn delete_url(&self, url: &str, alias: &str) -> Result<i64, DeleteError> {
        let mut query = urls::Entity::find().filter(urls::Column::Url.eq(url));

        if !alias.is_empty() {
            query = query.filter(urls::Column::Alias.eq(alias));
        }

        let record = query.order_by_asc(urls::Column::Id).one(&self.db).await?;

        let Some(record) = record else {
            return Err(DeleteError::NotFound);
        };

        let id = record.id;
        let result = record.delete(&self.db).await?;

        // someone else removed it between the select and the delete
        if result.rows_affected == 0 {
            return Err(DeleteError::NotFound);
        }

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{prelude::DateTimeWithTimeZone, DatabaseBackend, MockDatabase, MockExecResult};

    use super::*;

    fn record(id: i64, alias: &str) -> urls::Model {
        urls::Model {
            id,
            alias: alias.to_string(),
            url: "https://google.com".to_string(),
            created_at: DateTimeWithTimeZone::parse_from_rfc3339("2024-05-01T10:00:00+00:00")
                .unwrap(),
        }
    }

    fn deleted(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    #[tokio::test]
    async fn returns_id_of_deleted_record() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![record(7, "test_alias")]])
            .append_exec_results([deleted(1)])
            .into_connection();
        let service = UrlService::from_connection(db);

        let id = service
            .delete_url("https://google.com", "test_alias")
            .await
            .unwrap();

        assert_eq!(id, 7);
    }

    #[tokio::test]
    async fn missing_record_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<urls::Model>::new()])
            .into_connection();
        let service = UrlService::from_connection(db);

        let result = service.delete_url("https://google.com", "nope").await;

        assert!(matches!(result, Err(DeleteError::NotFound)));
    }

    #[tokio::test]
    async fn concurrent_removal_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![record(3, "gone")]])
            .append_exec_results([deleted(0)])
            .into_connection();
        let service = UrlService::from_connection(db);

        let result = service.delete_url("https://google.com", "gone").await;

        assert!(matches!(result, Err(DeleteError::NotFound)));
    }

    #[tokio::test]
    async fn database_failure_is_propagated() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let service = UrlService::from_connection(db);

        let result = service.delete_url("https://google.com", "").await;

        assert!(matches!(result, Err(DeleteError::Database(_))));
    }
}
