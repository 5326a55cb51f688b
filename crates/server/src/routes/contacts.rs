use axum::{extract::State, Json};
use models::contact::{ContactFields, Model as Contact};
use serde::Deserialize;
use service::pagination::{Pagination, DEFAULT_LIMIT};
use tracing::info;

use crate::errors::ApiError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::ServerState;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Rows to skip (default 0)
    pub skip: Option<u64>,
    /// Maximum rows to return (default 10)
    pub limit: Option<u64>,
}

impl From<ListQuery> for Pagination {
    fn from(q: ListQuery) -> Self {
        Pagination::new(q.skip.unwrap_or(0), q.limit.unwrap_or(DEFAULT_LIMIT))
    }
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Matched against name, surname and email; fewer than 3 characters matches nothing
    pub query: Option<String>,
}

#[utoipa::path(
    post, path = "/contacts/", tag = "contacts",
    request_body = crate::openapi::ContactBaseDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::ContactDoc),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(input): ApiJson<ContactFields>,
) -> Result<Json<Contact>, ApiError> {
    let created = state.contacts.create(input).await?;
    Ok(Json(created))
}

#[utoipa::path(
    get, path = "/contacts/", tag = "contacts",
    params(ListQuery),
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::ContactDoc]),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    ApiQuery(q): ApiQuery<ListQuery>,
) -> Result<Json<Vec<Contact>>, ApiError> {
    let rows = state.contacts.list(q.into()).await?;
    info!(count = rows.len(), "list contacts");
    Ok(Json(rows))
}

#[utoipa::path(
    get, path = "/contacts/{id}", tag = "contacts",
    params(("id" = i32, Path, description = "Contact ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ContactDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<Contact>, ApiError> {
    Ok(Json(state.contacts.get(id).await?))
}

#[utoipa::path(
    put, path = "/contacts/{id}", tag = "contacts",
    params(("id" = i32, Path, description = "Contact ID")),
    request_body = crate::openapi::ContactBaseDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ContactDoc),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(input): ApiJson<ContactFields>,
) -> Result<Json<Contact>, ApiError> {
    Ok(Json(state.contacts.update(id, input).await?))
}

#[utoipa::path(
    delete, path = "/contacts/{id}", tag = "contacts",
    params(("id" = i32, Path, description = "Contact ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::ContactDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<Contact>, ApiError> {
    Ok(Json(state.contacts.delete(id).await?))
}

#[utoipa::path(
    get, path = "/search/", tag = "contacts",
    params(SearchQuery),
    responses((status = 200, description = "Matching contacts", body = [crate::openapi::ContactDoc]))
)]
pub async fn search(
    State(state): State<ServerState>,
    ApiQuery(q): ApiQuery<SearchQuery>,
) -> Result<Json<Vec<Contact>>, ApiError> {
    let rows = state.contacts.search(q.query.as_deref()).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get, path = "/birthdays/", tag = "contacts",
    responses((status = 200, description = "Birthdays within the next 7 days", body = [crate::openapi::ContactDoc]))
)]
pub async fn upcoming_birthdays(State(state): State<ServerState>) -> Result<Json<Vec<Contact>>, ApiError> {
    let today = chrono::Local::now().date_naive();
    let rows = state.contacts.upcoming_birthdays(today).await?;
    info!(%today, count = rows.len(), "upcoming birthdays");
    Ok(Json(rows))
}
