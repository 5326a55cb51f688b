use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use models::contact::{ContactFields, Model};

use crate::db::contact_store;
use crate::errors::ServiceError;
use crate::pagination::Pagination;

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn insert(&self, fields: ContactFields) -> Result<Model, ServiceError>;
    async fn page(&self, page: Pagination) -> Result<Vec<Model>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<Model>, ServiceError>;
    async fn update(&self, id: i32, fields: ContactFields) -> Result<Model, ServiceError>;
    async fn delete(&self, id: i32) -> Result<Model, ServiceError>;
    async fn search(&self, query: &str) -> Result<Vec<Model>, ServiceError>;
    async fn birthdays_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Model>, ServiceError>;
}

/// SeaORM-backed repository. Each call checks a connection out of the pool
/// for its own duration.
#[derive(Clone)]
pub struct SeaOrmContactRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmContactRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl ContactRepository for SeaOrmContactRepository {
    async fn insert(&self, fields: ContactFields) -> Result<Model, ServiceError> {
        contact_store::insert_contact(&self.db, fields).await
    }

    async fn page(&self, page: Pagination) -> Result<Vec<Model>, ServiceError> {
        contact_store::fetch_page(&self.db, page).await
    }

    async fn get(&self, id: i32) -> Result<Option<Model>, ServiceError> {
        contact_store::fetch_contact(&self.db, id).await
    }

    async fn update(&self, id: i32, fields: ContactFields) -> Result<Model, ServiceError> {
        contact_store::update_contact(&self.db, id, fields).await
    }

    async fn delete(&self, id: i32) -> Result<Model, ServiceError> {
        contact_store::delete_contact(&self.db, id).await
    }

    async fn search(&self, query: &str) -> Result<Vec<Model>, ServiceError> {
        contact_store::search_by_substring(&self.db, query).await
    }

    async fn birthdays_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Model>, ServiceError> {
        contact_store::search_by_birthday_range(&self.db, start, end).await
    }
}
