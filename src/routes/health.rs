use crate::error::app_error::AppError;
use crate::models::health::HealthResponse;
use crate::store::location::LocationRepository;
use crate::store::memory_repository::MemoryRepository;
use crate::store::session::SessionRepository;
use rocket::serde::json::Json;
use rocket::{State, get};
use rocket_okapi::openapi;

#[openapi(tag = "Health")]
#[get("/")]
pub async fn healthcheck(repo: &State<MemoryRepository>) -> Result<Json<HealthResponse>, AppError> {
    Ok(Json(HealthResponse {
        status: "ok",
        sessions: repo.list_sessions().await?.len(),
        locations: repo.list_locations().await?.len(),
    }))
}

pub fn routes() -> (Vec<rocket::Route>, okapi::openapi3::OpenApi) {
    rocket_okapi::openapi_get_routes_spec![healthcheck]
}

#[cfg(test)]
mod tests {
    use crate::build_rocket;
    use crate::test_utils::test_config;
    use rocket::http::Status;
    use rocket::local::asynchronous::Client;
    use serde_json::Value;

    #[rocket::async_test]
    async fn health_check_works() {
        let client = Client::tracked(build_rocket(test_config())).await.expect("valid rocket instance");
        let response = client.get("/api/v1/health").dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        assert!(response.headers().get_one("X-Request-Id").is_some());

        let body: Value = serde_json::from_str(&response.into_string().await.unwrap()).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["sessions"], 4);
    }

    #[rocket::async_test]
    async fn empty_store_when_seeding_disabled() {
        let mut config = test_config();
        config.seed.load_demo_data = false;
        let client = Client::tracked(build_rocket(config)).await.expect("valid rocket instance");

        let response = client.get("/api/v1/health").dispatch().await;
        let body: Value = serde_json::from_str(&response.into_string().await.unwrap()).unwrap();
        assert_eq!(body["sessions"], 0);
        assert_eq!(body["locations"], 0);
    }
}
