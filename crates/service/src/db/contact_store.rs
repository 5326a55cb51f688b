use chrono::NaiveDate;
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseBackend, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use models::contact::{self, ContactFields, Entity as ContactEntity};
use crate::errors::ServiceError;
use crate::pagination::Pagination;

const LIKE_ESCAPE: char = '\\';

/// Insert a contact; the database assigns the id.
pub async fn insert_contact(db: &DatabaseConnection, fields: ContactFields) -> Result<contact::Model, ServiceError> {
    let created = fields.into_active_model().insert(db).await?;
    Ok(created)
}

/// One page of contacts ordered by id.
pub async fn fetch_page(db: &DatabaseConnection, page: Pagination) -> Result<Vec<contact::Model>, ServiceError> {
    let page = page.clamped();
    let rows = ContactEntity::find()
        .order_by_asc(contact::Column::Id)
        .offset(page.skip)
        .limit(page.limit)
        .all(db)
        .await?;
    Ok(rows)
}

/// Get a contact by id.
pub async fn fetch_contact(db: &DatabaseConnection, id: i32) -> Result<Option<contact::Model>, ServiceError> {
    let found = ContactEntity::find_by_id(id).one(db).await?;
    Ok(found)
}

/// Replace every non-id field of a contact.
pub async fn update_contact(db: &DatabaseConnection, id: i32, fields: ContactFields) -> Result<contact::Model, ServiceError> {
    let txn = db.begin().await?;
    let Some(existing) = ContactEntity::find_by_id(id).one(&txn).await? else {
        return Err(ServiceError::not_found("Contact"));
    };
    let mut am: contact::ActiveModel = existing.into();
    fields.apply_to(&mut am);
    let updated = am.update(&txn).await?;
    txn.commit().await?;
    Ok(updated)
}

/// Delete a contact and return the row as it was.
pub async fn delete_contact(db: &DatabaseConnection, id: i32) -> Result<contact::Model, ServiceError> {
    let txn = db.begin().await?;
    let Some(existing) = ContactEntity::find_by_id(id).one(&txn).await? else {
        return Err(ServiceError::not_found("Contact"));
    };
    ContactEntity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;
    Ok(existing)
}

/// Case-insensitive substring match on name, surname or email.
///
/// The query is matched literally: LIKE wildcards in it are escaped.
pub async fn search_by_substring(db: &DatabaseConnection, query: &str) -> Result<Vec<contact::Model>, ServiceError> {
    let folded = fold_case(db.get_database_backend(), query);
    let pattern = format!("%{}%", escape_like(&folded));
    let matches = |col: contact::Column| {
        Expr::expr(Func::lower(Expr::col(col))).like(LikeExpr::new(pattern.clone()).escape(LIKE_ESCAPE))
    };
    let rows = ContactEntity::find()
        .filter(
            Condition::any()
                .add(matches(contact::Column::Name))
                .add(matches(contact::Column::Surname))
                .add(matches(contact::Column::Email)),
        )
        .order_by_asc(contact::Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

/// Contacts whose stored birthday lies in `[start, end]`, compared as full dates.
pub async fn search_by_birthday_range(
    db: &DatabaseConnection,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<contact::Model>, ServiceError> {
    let rows = ContactEntity::find()
        .filter(contact::Column::Birthday.between(start, end))
        .order_by_asc(contact::Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

/// Lowercase the query the same way the backend's `lower()` folds the column.
/// SQLite's `lower()` only folds ASCII.
fn fold_case(backend: DatabaseBackend, query: &str) -> String {
    match backend {
        DatabaseBackend::Sqlite => query.to_ascii_lowercase(),
        _ => query.to_lowercase(),
    }
}

fn escape_like(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            out.push(LIKE_ESCAPE);
        }
        out.push(c);
    }
    out
}
