use crate::error::app_error::AppError;
use crate::middleware::rate_limit::RateLimit;
use crate::models::page::{PageResponse, PageSummaryResponse};
use crate::service::page::{PAGES, find_page};
use rocket::get;
use rocket::serde::json::Json;
use rocket_okapi::openapi;

#[openapi(tag = "Pages")]
#[get("/")]
pub async fn list_pages(_rate_limit: RateLimit) -> Json<Vec<PageSummaryResponse>> {
    Json(PAGES.iter().map(PageSummaryResponse::from).collect())
}

#[openapi(tag = "Pages")]
#[get("/<slug>")]
pub async fn get_page(_rate_limit: RateLimit, slug: &str) -> Result<Json<PageResponse>, AppError> {
    find_page(slug)
        .map(|page| Json(PageResponse::from(page)))
        .ok_or_else(|| AppError::NotFound("Page not found".to_string()))
}

pub fn routes() -> (Vec<rocket::Route>, okapi::openapi3::OpenApi) {
    rocket_okapi::openapi_get_routes_spec![list_pages, get_page]
}

#[cfg(test)]
mod tests {
    use crate::build_rocket;
    use crate::test_utils::test_config;
    use rocket::http::Status;
    use rocket::local::asynchronous::Client;
    use serde_json::Value;

    #[rocket::async_test]
    async fn pages_are_listed_and_served() {
        let client = Client::tracked(build_rocket(test_config())).await.expect("valid rocket instance");

        let response = client.get("/api/v1/pages").dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        let pages: Value = serde_json::from_str(&response.into_string().await.unwrap()).unwrap();
        assert_eq!(pages.as_array().unwrap().len(), 3);

        let response = client.get("/api/v1/pages/privacy").dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        let page: Value = serde_json::from_str(&response.into_string().await.unwrap()).unwrap();
        assert_eq!(page["title"], "Privacy Policy");
        assert!(!page["sections"].as_array().unwrap().is_empty());
    }

    #[rocket::async_test]
    async fn unknown_page_is_json_not_found() {
        let client = Client::tracked(build_rocket(test_config())).await.expect("valid rocket instance");
        let response = client.get("/api/v1/pages/cookies").dispatch().await;
        assert_eq!(response.status(), Status::NotFound);
    }
}
