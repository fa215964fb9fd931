use crate::error::app_error::AppError;
use crate::middleware::rate_limit::RateLimit;
use crate::models::location::LocationResponse;
use crate::store::location::LocationRepository;
use crate::store::memory_repository::MemoryRepository;
use rocket::serde::json::Json;
use rocket::{State, get};
use rocket_okapi::openapi;

/// Map markers: every known location with its current event aggregates.
#[openapi(tag = "Locations")]
#[get("/")]
pub async fn list_locations(repo: &State<MemoryRepository>, _rate_limit: RateLimit) -> Result<Json<Vec<LocationResponse>>, AppError> {
    let locations = repo.list_locations_with_events().await?;
    Ok(Json(locations.iter().map(LocationResponse::from).collect()))
}

#[openapi(tag = "Locations")]
#[get("/<id>")]
pub async fn get_location(repo: &State<MemoryRepository>, _rate_limit: RateLimit, id: &str) -> Result<Json<LocationResponse>, AppError> {
    repo.get_location_with_events(id)
        .await?
        .map(|l| Json(LocationResponse::from(&l)))
        .ok_or_else(|| AppError::NotFound("Location not found".to_string()))
}

pub fn routes() -> (Vec<rocket::Route>, okapi::openapi3::OpenApi) {
    rocket_okapi::openapi_get_routes_spec![list_locations, get_location]
}
