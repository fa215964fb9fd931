use crate::error::app_error::AppError;
use crate::middleware::rate_limit::RateLimit;
use crate::models::overview::{OverviewResponse, TagListResponse};
use crate::service::aggregation::all_tags;
use crate::service::session::SessionService;
use crate::store::memory_repository::MemoryRepository;
use crate::store::session::SessionRepository;
use rocket::serde::json::Json;
use rocket::{State, get};
use rocket_okapi::openapi;

#[openapi(tag = "Overview")]
#[get("/overview")]
pub async fn get_overview(repo: &State<MemoryRepository>, _rate_limit: RateLimit) -> Result<Json<OverviewResponse>, AppError> {
    let service = SessionService::new(repo.inner());
    Ok(Json(service.overview().await?))
}

/// Distinct tags across all sessions, in first-seen order.
#[openapi(tag = "Overview")]
#[get("/tags")]
pub async fn list_tags(repo: &State<MemoryRepository>, _rate_limit: RateLimit) -> Result<Json<TagListResponse>, AppError> {
    let sessions = repo.list_sessions().await?;
    Ok(Json(TagListResponse(all_tags(&sessions))))
}

pub fn routes() -> (Vec<rocket::Route>, okapi::openapi3::OpenApi) {
    rocket_okapi::openapi_get_routes_spec![get_overview, list_tags]
}
