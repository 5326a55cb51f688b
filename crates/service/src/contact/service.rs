use std::sync::Arc;
use chrono::{Days, NaiveDate};
use tracing::{info, instrument};
use models::contact::{ContactFields, Model};

use crate::contact::repository::ContactRepository;
use crate::errors::ServiceError;
use crate::pagination::Pagination;

/// Queries shorter than this yield no results instead of an error.
pub const MIN_QUERY_CHARS: usize = 3;

/// Length of the upcoming-birthdays window, counted from today inclusive.
pub const UPCOMING_WINDOW_DAYS: u64 = 7;

/// Application service over the contact store.
pub struct ContactService<R: ContactRepository> {
    repo: Arc<R>,
}

impl<R: ContactRepository> ContactService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip_all)]
    pub async fn create(&self, fields: ContactFields) -> Result<Model, ServiceError> {
        let created = self.repo.insert(fields).await?;
        info!(id = created.id, "contact created");
        Ok(created)
    }

    pub async fn list(&self, page: Pagination) -> Result<Vec<Model>, ServiceError> {
        let page = page.validate()?;
        self.repo.page(page).await
    }

    pub async fn get(&self, id: i32) -> Result<Model, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("Contact"))
    }

    #[instrument(skip(self, fields))]
    pub async fn update(&self, id: i32, fields: ContactFields) -> Result<Model, ServiceError> {
        let updated = self.repo.update(id, fields).await?;
        info!("contact updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<Model, ServiceError> {
        let deleted = self.repo.delete(id).await?;
        info!("contact deleted");
        Ok(deleted)
    }

    /// Substring search; a missing or short query returns an empty list.
    pub async fn search(&self, query: Option<&str>) -> Result<Vec<Model>, ServiceError> {
        match query {
            Some(q) if q.chars().count() >= MIN_QUERY_CHARS => self.repo.search(q).await,
            _ => Ok(Vec::new()),
        }
    }

    /// Contacts whose stored birthday falls in `[today, today + 7 days]`.
    ///
    /// Dates are compared as stored, year included; there is no projection
    /// onto the current year and no wrap across New Year.
    pub async fn upcoming_birthdays(&self, today: NaiveDate) -> Result<Vec<Model>, ServiceError> {
        let end = today
            .checked_add_days(Days::new(UPCOMING_WINDOW_DAYS))
            .unwrap_or(NaiveDate::MAX);
        self.repo.birthdays_between(today, end).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use async_trait::async_trait;
    use crate::contact::SeaOrmContactRepository;
    use crate::db::contact_store;
    use crate::test_support::{date, fields, get_db};

    async fn sea_orm_service() -> Result<(ContactService<SeaOrmContactRepository>, SeaOrmContactRepository), anyhow::Error> {
        let repo = SeaOrmContactRepository::new(get_db().await?);
        Ok((ContactService::new(Arc::new(repo.clone())), repo))
    }

    /// Counts store searches; everything else is unreachable in these tests.
    #[derive(Default)]
    struct CountingRepo {
        searches: AtomicUsize,
    }

    #[async_trait]
    impl ContactRepository for CountingRepo {
        async fn insert(&self, _: ContactFields) -> Result<Model, ServiceError> { unimplemented!() }
        async fn page(&self, _: Pagination) -> Result<Vec<Model>, ServiceError> { unimplemented!() }
        async fn get(&self, _: i32) -> Result<Option<Model>, ServiceError> { Ok(None) }
        async fn update(&self, _: i32, _: ContactFields) -> Result<Model, ServiceError> { unimplemented!() }
        async fn delete(&self, _: i32) -> Result<Model, ServiceError> { unimplemented!() }
        async fn search(&self, _: &str) -> Result<Vec<Model>, ServiceError> {
            self.searches.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }
        async fn birthdays_between(&self, _: NaiveDate, _: NaiveDate) -> Result<Vec<Model>, ServiceError> { unimplemented!() }
    }

    #[tokio::test]
    async fn short_or_missing_query_skips_the_store() {
        let repo = Arc::new(CountingRepo::default());
        let svc = ContactService::new(Arc::clone(&repo));

        assert!(svc.search(None).await.unwrap().is_empty());
        assert!(svc.search(Some("an")).await.unwrap().is_empty());
        assert!(svc.search(Some("")).await.unwrap().is_empty());
        assert_eq!(repo.searches.load(Ordering::SeqCst), 0);

        svc.search(Some("ann")).await.unwrap();
        // three characters, six bytes
        svc.search(Some("äöü")).await.unwrap();
        assert_eq!(repo.searches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn get_missing_maps_to_not_found() {
        let svc = ContactService::new(Arc::new(CountingRepo::default()));
        let err = svc.get(1).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == "Contact not found"));
    }

    #[tokio::test]
    async fn zero_limit_is_a_validation_error() {
        let svc = ContactService::new(Arc::new(CountingRepo::default()));
        let err = svc.list(Pagination::new(0, 0)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn search_finds_anna_smith() -> Result<(), anyhow::Error> {
        let (svc, _) = sea_orm_service().await?;
        let anna = svc.create(fields("Anna", "Smith", "anna.smith@example.com", date(1990, 5, 17))).await?;
        svc.create(fields("Bob", "Brown", "bob@example.com", date(1980, 1, 1))).await?;

        assert_eq!(svc.search(Some("ann")).await?, vec![anna]);
        assert!(svc.search(Some("an")).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn upcoming_birthdays_use_literal_dates() -> Result<(), anyhow::Error> {
        let (svc, _) = sea_orm_service().await?;
        let today = date(2024, 6, 10);

        let today_bd = svc.create(fields("Today", "Born", "t@example.com", date(2024, 6, 10))).await?;
        let last_day = svc.create(fields("Week", "Later", "w@example.com", date(2024, 6, 17))).await?;
        svc.create(fields("Too", "Late", "l@example.com", date(2024, 6, 18))).await?;
        svc.create(fields("Yesterday", "Born", "y@example.com", date(2024, 6, 9))).await?;
        // same month/day, real birth year: outside the literal range
        svc.create(fields("Real", "Person", "r@example.com", date(1990, 6, 12))).await?;

        let hits = svc.upcoming_birthdays(today).await?;
        assert_eq!(hits, vec![today_bd, last_day]);
        Ok(())
    }

    #[tokio::test]
    async fn upcoming_birthdays_do_not_wrap_new_year() -> Result<(), anyhow::Error> {
        let (svc, _) = sea_orm_service().await?;
        let today = date(2024, 12, 29);

        let new_year = svc.create(fields("New", "Year", "ny@example.com", date(2025, 1, 2))).await?;
        svc.create(fields("Last", "Year", "ly@example.com", date(2024, 1, 2))).await?;

        assert_eq!(svc.upcoming_birthdays(today).await?, vec![new_year]);
        Ok(())
    }

    #[tokio::test]
    async fn crud_round_trip_through_service() -> Result<(), anyhow::Error> {
        let (svc, repo) = sea_orm_service().await?;
        let created = svc.create(fields("Anna", "Smith", "anna@example.com", date(1990, 5, 17))).await?;
        assert_eq!(svc.get(created.id).await?, created);

        let updated = svc.update(created.id, fields("Anna", "Jones", "anna@example.com", date(1990, 5, 17))).await?;
        assert_eq!(updated.surname, "Jones");

        let deleted = svc.delete(created.id).await?;
        assert_eq!(deleted, updated);
        assert!(matches!(svc.get(created.id).await, Err(ServiceError::NotFound(_))));
        assert!(contact_store::fetch_contact(&repo.db, created.id).await?.is_none());
        Ok(())
    }
}
