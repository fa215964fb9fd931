use rocket::serde::Serialize;
use schemars::JsonSchema;

/// Landing-page counters and the tag chips offered as filters.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct OverviewResponse {
    pub tags: Vec<String>,
    pub live_count: usize,
    pub total_participants: u64,
    pub session_count: usize,
    pub location_count: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct TagListResponse(pub Vec<String>);
