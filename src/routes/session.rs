use crate::error::app_error::AppError;
use crate::error::json::JsonBody;
use crate::middleware::rate_limit::RateLimit;
use crate::models::filter::{SessionFilter, ViewMode};
use crate::models::join::{JoinIntentResponse, JoinRequest};
use crate::models::session::{SessionListResponse, SessionRequest, SessionResponse};
use crate::service::session::SessionService;
use crate::store::memory_repository::MemoryRepository;
use crate::store::session::SessionRepository;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{State, get, post};
use rocket_okapi::openapi;
use validator::Validate;

/// List sessions, newest first, narrowed by location, free-text search, tag and view.
/// The response also carries the live/upcoming split of the filtered list.
#[openapi(tag = "Sessions")]
#[get("/?<location_id>&<search>&<tag>&<view>")]
pub async fn list_sessions(
    repo: &State<MemoryRepository>,
    _rate_limit: RateLimit,
    location_id: Option<String>,
    search: Option<String>,
    tag: Option<String>,
    view: Option<ViewMode>,
) -> Result<Json<SessionListResponse>, AppError> {
    let filter = SessionFilter::from_query(location_id, search, tag, view);
    let service = SessionService::new(repo.inner());
    Ok(Json(service.list_sessions(&filter).await?))
}

#[openapi(tag = "Sessions")]
#[get("/<id>")]
pub async fn get_session(repo: &State<MemoryRepository>, _rate_limit: RateLimit, id: &str) -> Result<Json<SessionResponse>, AppError> {
    match repo.get_session_by_id(id).await? {
        Some(session) => Ok(Json(SessionResponse::from(&session))),
        None => Err(AppError::NotFound("Session not found".to_string())),
    }
}

/// Start a session. The creator counts as the first participant and the session is live at once.
#[openapi(tag = "Sessions")]
#[post("/", data = "<payload>")]
pub async fn create_session(
    repo: &State<MemoryRepository>,
    _rate_limit: RateLimit,
    payload: JsonBody<SessionRequest>,
) -> Result<(Status, Json<SessionResponse>), AppError> {
    payload.validate()?;

    let service = SessionService::new(repo.inner());
    let session = service.create_session(&payload).await?;
    Ok((Status::Created, Json(SessionResponse::from(&session))))
}

/// Join a session, or ask the host when approval is required. Returns 409 when the session is full.
#[openapi(tag = "Sessions")]
#[post("/<id>/join", data = "<payload>")]
pub async fn join_session(
    repo: &State<MemoryRepository>,
    _rate_limit: RateLimit,
    id: &str,
    payload: JsonBody<JoinRequest>,
) -> Result<Json<JoinIntentResponse>, AppError> {
    payload.validate()?;

    let service = SessionService::new(repo.inner());
    let intent = service.join_session(id, &payload).await?;
    Ok(Json(JoinIntentResponse::from(&intent)))
}

pub fn routes() -> (Vec<rocket::Route>, okapi::openapi3::OpenApi) {
    rocket_okapi::openapi_get_routes_spec![list_sessions, get_session, create_session, join_session]
}
