mod config;
mod error;
mod middleware;
mod models;
mod routes;
mod service;
mod store;

#[cfg(test)]
pub mod test_utils;

pub use config::Config;
pub use error::app_error::AppError;
pub use store::memory_repository::MemoryRepository;

use crate::middleware::RequestLogger;
use crate::middleware::rate_limit::RateLimiter;
use crate::routes as app_routes;
use rocket::fairing::AdHoc;
use rocket::{Build, Rocket, catchers, http::Method};
use rocket_cors::{AllowedOrigins, Cors, CorsOptions};
use rocket_okapi::swagger_ui::{SwaggerUIConfig, make_swagger_ui};
use rocket_okapi::{get_openapi_route, okapi::merge::marge_spec_list};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_tracing(log_level: &str, json_format: bool) {
    // RUST_LOG takes precedence over the configured level, e.g.
    //   RUST_LOG=coworking_live::service=debug
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter).with_target(true).with_line_number(true);

    // A global subscriber may already be installed when several rockets are built in one process.
    let _ = if json_format {
        subscriber.json().try_init()
    } else {
        subscriber.try_init()
    };
}

fn build_cors(cors_config: &config::CorsConfig) -> Result<Cors, String> {
    let is_wildcard = cors_config.allowed_origins.len() == 1 && cors_config.allowed_origins[0] == "*";

    if is_wildcard && cors_config.allow_credentials {
        return Err("Cannot use wildcard origins (*) with credentials enabled. \
            Either set specific origins or disable credentials."
            .to_string());
    }

    let allowed_origins = if cors_config.allowed_origins.is_empty() {
        AllowedOrigins::some_exact::<&str>(&[])
    } else if is_wildcard {
        AllowedOrigins::all()
    } else {
        AllowedOrigins::some_exact(&cors_config.allowed_origins.iter().map(String::as_str).collect::<Vec<_>>())
    };

    CorsOptions {
        allowed_origins,
        allowed_methods: vec![Method::Get, Method::Post, Method::Options, Method::Head]
            .into_iter()
            .map(From::from)
            .collect(),
        allowed_headers: rocket_cors::AllowedHeaders::some(&["Content-Type", "Accept", "X-Request-Id"]),
        allow_credentials: cors_config.allow_credentials,
        ..Default::default()
    }
    .to_cors()
    .map_err(|e| e.to_string())
}

/// Invalid CORS settings abort ignition instead of panicking.
fn stage_cors(cors_config: config::CorsConfig) -> AdHoc {
    AdHoc::try_on_ignite("CORS", move |rocket| {
        Box::pin(async move {
            match build_cors(&cors_config) {
                Ok(cors) => Ok(rocket.attach(cors)),
                Err(message) => {
                    error!(%message, "invalid CORS configuration");
                    Err(rocket)
                }
            }
        })
    })
}

fn get_swagger_config(openapi_url: &str) -> SwaggerUIConfig {
    SwaggerUIConfig {
        url: openapi_url.to_string(),
        ..Default::default()
    }
}

fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return config::DEFAULT_API_BASE_PATH.to_string();
    }

    let mut normalized = if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    };

    while normalized.ends_with('/') && normalized.len() > 1 {
        normalized.pop();
    }

    normalized
}

fn join_base_path(base_path: &str, path: &str) -> String {
    let base = base_path.trim_end_matches('/');
    let suffix = path.trim_start_matches('/');

    if suffix.is_empty() {
        if base.is_empty() { "/".to_string() } else { base.to_string() }
    } else if base.is_empty() {
        format!("/{}", suffix)
    } else {
        format!("{}/{}", base, suffix)
    }
}

fn collect_base_paths(api_config: &config::ApiConfig) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::new();
    let mut push_unique = |path: String| {
        if !normalized.contains(&path) {
            normalized.push(path);
        }
    };

    push_unique(normalize_base_path(&api_config.base_path));

    for extra in &api_config.additional_base_paths {
        if !extra.trim().is_empty() {
            push_unique(normalize_base_path(extra));
        }
    }

    normalized
}

struct RouteSpec {
    path: &'static str,
    routes: Vec<rocket::Route>,
    openapi: rocket_okapi::okapi::openapi3::OpenApi,
}

fn collect_route_specs() -> Vec<RouteSpec> {
    let (session_routes, session_openapi) = app_routes::session::routes();
    let (location_routes, location_openapi) = app_routes::location::routes();
    let (overview_routes, overview_openapi) = app_routes::overview::routes();
    let (page_routes, page_openapi) = app_routes::page::routes();
    let (health_routes, health_openapi) = app_routes::health::routes();

    vec![
        RouteSpec {
            path: "/sessions",
            routes: session_routes,
            openapi: session_openapi,
        },
        RouteSpec {
            path: "/locations",
            routes: location_routes,
            openapi: location_openapi,
        },
        // Serves /overview and /tags directly under the base path.
        RouteSpec {
            path: "",
            routes: overview_routes,
            openapi: overview_openapi,
        },
        RouteSpec {
            path: "/pages",
            routes: page_routes,
            openapi: page_openapi,
        },
        RouteSpec {
            path: "/health",
            routes: health_routes,
            openapi: health_openapi,
        },
    ]
}

fn mount_api_routes(mut rocket: Rocket<Build>, base_path: &str, enable_swagger: bool) -> Rocket<Build> {
    let route_specs = collect_route_specs();

    if !enable_swagger {
        for spec in route_specs {
            rocket = rocket.mount(join_base_path(base_path, spec.path), spec.routes);
        }
        return rocket;
    }

    let mut openapi_list = Vec::new();
    for spec in route_specs {
        rocket = rocket.mount(join_base_path(base_path, spec.path), spec.routes);
        openapi_list.push((spec.path, spec.openapi));
    }

    match marge_spec_list(&openapi_list) {
        Ok(openapi_docs) => {
            let settings = rocket_okapi::settings::OpenApiSettings::default();
            rocket = rocket.mount(base_path, vec![get_openapi_route(openapi_docs, &settings)]);

            let docs_path = join_base_path(base_path, "docs");
            let openapi_url = join_base_path(base_path, "openapi.json");
            rocket = rocket.mount(docs_path, make_swagger_ui(&get_swagger_config(&openapi_url)));
        }
        Err(err) => error!(%err, base_path, "could not merge OpenAPI documents; docs disabled"),
    }

    rocket
}

fn stage_rate_limiter(rate_limit_config: config::RateLimitConfig) -> AdHoc {
    AdHoc::on_ignite("Rate Limiter", move |rocket| {
        let limiter = Arc::new(RateLimiter::new(rate_limit_config));
        limiter.clone().spawn_cleanup_task();

        Box::pin(async move { rocket.manage(limiter) })
    })
}

fn stage_store(seed_config: config::SeedConfig) -> AdHoc {
    AdHoc::on_ignite("Session Store", move |rocket| {
        let repository = if seed_config.load_demo_data {
            MemoryRepository::seeded()
        } else {
            info!("starting with an empty session store");
            MemoryRepository::default()
        };

        Box::pin(async move { rocket.manage(repository) })
    })
}

pub fn build_rocket(config: Config) -> Rocket<Build> {
    init_tracing(&config.logging.level, config.logging.json_format);

    let mut rocket = rocket::custom(config.rocket_figment())
        .attach(stage_rate_limiter(config.rate_limit.clone()))
        .attach(stage_cors(config.cors.clone()))
        .attach(RequestLogger)
        .attach(stage_store(config.seed.clone()));

    let enable_swagger = config.api.enable_swagger;
    for base_path in collect_base_paths(&config.api) {
        rocket = mount_api_routes(rocket, &base_path, enable_swagger);

        rocket = rocket.register(
            base_path.as_str(),
            catchers![
                app_routes::error::not_found,
                app_routes::error::unprocessable_entity,
                app_routes::error::too_many_requests
            ],
        );
    }

    rocket
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_config;
    use rocket::http::{Header, Status};
    use rocket::local::asynchronous::Client;

    #[test]
    fn normalize_base_path_adds_leading_and_strips_trailing_slash() {
        assert_eq!(normalize_base_path("api/v2/"), "/api/v2");
        assert_eq!(normalize_base_path("  /api//  "), "/api");
        assert_eq!(normalize_base_path(""), config::DEFAULT_API_BASE_PATH);
        assert_eq!(normalize_base_path("/"), "/");
    }

    #[test]
    fn join_base_path_handles_slashes() {
        assert_eq!(join_base_path("/api/v1", "/sessions"), "/api/v1/sessions");
        assert_eq!(join_base_path("/api/v1/", "docs"), "/api/v1/docs");
        assert_eq!(join_base_path("/api/v1", "/"), "/api/v1");
        assert_eq!(join_base_path("/", ""), "/");
        assert_eq!(join_base_path("/", "health"), "/health");
    }

    #[test]
    fn collect_base_paths_dedupes_and_skips_blank() {
        let api = config::ApiConfig {
            base_path: "/api/v1".to_string(),
            additional_base_paths: vec!["api/v1/".to_string(), "  ".to_string(), "/api".to_string()],
            enable_swagger: false,
        };
        assert_eq!(collect_base_paths(&api), vec!["/api/v1", "/api"]);
    }

    #[test]
    fn wildcard_cors_with_credentials_is_rejected() {
        let cors = config::CorsConfig {
            allowed_origins: vec!["*".to_string()],
            allow_credentials: true,
        };
        assert!(build_cors(&cors).is_err());

        let cors = config::CorsConfig {
            allowed_origins: vec!["*".to_string()],
            allow_credentials: false,
        };
        assert!(build_cors(&cors).is_ok());
    }

    #[rocket::async_test]
    async fn invalid_cors_aborts_ignition() {
        let mut config = test_config();
        config.cors.allowed_origins = vec!["*".to_string()];
        config.cors.allow_credentials = true;

        let err = Client::tracked(build_rocket(config)).await.err().expect("ignition should fail");
        assert!(matches!(err.kind(), rocket::error::ErrorKind::FailedFairings(_)));
    }

    #[rocket::async_test]
    async fn additional_base_paths_serve_the_same_api() {
        let mut config = test_config();
        config.api.additional_base_paths = vec!["/api".to_string()];
        let client = Client::tracked(build_rocket(config)).await.expect("valid rocket instance");

        assert_eq!(client.get("/api/v1/sessions").dispatch().await.status(), Status::Ok);
        assert_eq!(client.get("/api/sessions").dispatch().await.status(), Status::Ok);

        let response = client.get("/api/nothing-here").dispatch().await;
        assert_eq!(response.status(), Status::NotFound);
        let body = response.into_string().await.unwrap();
        assert!(body.contains("\"message\""));
    }

    #[rocket::async_test]
    async fn swagger_serves_openapi_document() {
        let mut config = test_config();
        config.api.enable_swagger = true;
        let client = Client::tracked(build_rocket(config)).await.expect("valid rocket instance");

        let response = client.get("/api/v1/openapi.json").dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        let body = response.into_string().await.unwrap();
        assert!(body.contains("/sessions/{id}/join"));
    }

    #[rocket::async_test]
    async fn mutation_bucket_is_rate_limited() {
        let mut config = test_config();
        config.rate_limit.mutation_limit = 1;
        let client = Client::tracked(build_rocket(config)).await.expect("valid rocket instance");

        let body = r#"{"display_name": "Robin"}"#;
        let first = client
            .post("/api/v1/sessions/1/join")
            .header(rocket::http::ContentType::JSON)
            .body(body)
            .dispatch()
            .await;
        assert_eq!(first.status(), Status::Ok);

        let second = client
            .post("/api/v1/sessions/1/join")
            .header(rocket::http::ContentType::JSON)
            .body(body)
            .dispatch()
            .await;
        assert_eq!(second.status(), Status::TooManyRequests);
        assert!(second.headers().get_one("Retry-After").is_some());

        // Reads use a separate bucket.
        assert_eq!(client.get("/api/v1/sessions").dispatch().await.status(), Status::Ok);
    }

    #[rocket::async_test]
    async fn cors_allows_configured_origin() {
        let client = Client::tracked(build_rocket(test_config())).await.expect("valid rocket instance");

        let response = client
            .get("/api/v1/health")
            .header(Header::new("Origin", "http://localhost:5173"))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.headers().get_one("Access-Control-Allow-Origin"), Some("http://localhost:5173"));
    }
}
