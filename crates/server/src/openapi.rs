use axum::Json;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Writable contact attributes (`ContactBase`).
#[derive(ToSchema)]
pub struct ContactBaseDoc {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone_number: String,
    #[schema(example = "1990-05-17")]
    pub birthday: String,
    pub additional_info: Option<String>,
}

#[derive(ToSchema)]
pub struct ContactDoc {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone_number: String,
    #[schema(example = "1990-05-17")]
    pub birthday: String,
    pub additional_info: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::contacts::create,
        crate::routes::contacts::list,
        crate::routes::contacts::get,
        crate::routes::contacts::update,
        crate::routes::contacts::delete,
        crate::routes::contacts::search,
        crate::routes::contacts::upcoming_birthdays,
    ),
    components(schemas(HealthResponse, ContactBaseDoc, ContactDoc)),
    tags((name = "health"), (name = "contacts"))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
