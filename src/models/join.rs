use chrono::{DateTime, Utc};
use rocket::serde::{Deserialize, Serialize};
use schemars::JsonSchema;
use validator::Validate;

#[derive(Deserialize, Debug, Clone, Validate, JsonSchema)]
pub struct JoinRequest {
    #[validate(length(min = 1, max = 80), custom(function = "crate::models::session::validate_not_blank"))]
    pub display_name: String,
    #[validate(length(max = 1000))]
    pub message: Option<String>,
    #[serde(default)]
    pub mic_enabled: bool,
    #[serde(default)]
    pub video_enabled: bool,
    #[serde(default = "default_chat_enabled")]
    pub chat_enabled: bool,
}

fn default_chat_enabled() -> bool {
    true
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum JoinKind {
    /// Joins immediately.
    Join,
    /// Host approval required; the host sees the request first.
    Request,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, JsonSchema)]
pub struct JoinPreferences {
    pub mic_enabled: bool,
    pub video_enabled: bool,
    pub chat_enabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JoinIntent {
    pub session_id: String,
    pub kind: JoinKind,
    pub display_name: String,
    pub message: Option<String>,
    pub preferences: JoinPreferences,
    pub requested_at: DateTime<Utc>,
}

#[derive(Serialize, Debug, JsonSchema)]
pub struct JoinIntentResponse {
    pub session_id: String,
    pub kind: JoinKind,
    pub display_name: String,
    pub message: Option<String>,
    pub preferences: JoinPreferences,
    pub requested_at: DateTime<Utc>,
}

impl From<&JoinIntent> for JoinIntentResponse {
    fn from(intent: &JoinIntent) -> Self {
        Self {
            session_id: intent.session_id.clone(),
            kind: intent.kind,
            display_name: intent.display_name.clone(),
            message: intent.message.clone(),
            preferences: intent.preferences,
            requested_at: intent.requested_at,
        }
    }
}
