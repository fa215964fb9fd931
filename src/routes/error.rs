use crate::middleware::rate_limit::RateLimitRetryAfter;
use rocket::http::{ContentType, Header, Status};
use rocket::response::{self, Responder, Response};
use rocket::serde::Serialize;
use rocket::serde::json::Json;
use rocket::{Request, catch};

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct Error {
    pub message: String,
}

impl Error {
    fn new(message: &str) -> Json<Self> {
        Json(Error { message: message.to_string() })
    }
}

#[catch(404)]
pub fn not_found(_: &Request) -> Json<Error> {
    Error::new("Not found")
}

#[catch(422)]
pub fn unprocessable_entity(_: &Request) -> Json<Error> {
    Error::new("Request body could not be parsed")
}

pub struct TooManyRequests {
    retry_after: u64,
}

impl<'r> Responder<'r, 'static> for TooManyRequests {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        let body = Error::new("Too many requests").respond_to(req)?;
        Response::build_from(body)
            .status(Status::TooManyRequests)
            .header(ContentType::JSON)
            .header(Header::new("Retry-After", self.retry_after.to_string()))
            .ok()
    }
}

#[catch(429)]
pub fn too_many_requests(req: &Request) -> TooManyRequests {
    let retry_after = req.local_cache(|| None::<RateLimitRetryAfter>).as_ref().map(|r| r.0).unwrap_or(1);
    TooManyRequests { retry_after }
}
