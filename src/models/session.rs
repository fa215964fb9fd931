use chrono::{DateTime, Utc};
use regex::Regex;
use rocket::serde::{Deserialize, Serialize};
use schemars::JsonSchema;
use std::sync::LazyLock;
use validator::{Validate, ValidationError};

/// Capacities offered by the create form.
pub const ALLOWED_MAX_PARTICIPANTS: [u32; 6] = [5, 10, 15, 20, 30, 50];

pub const DEFAULT_MAX_PARTICIPANTS: u32 = 10;
pub const DEFAULT_HOST: &str = "You";

/// Number of tags a card shows before collapsing the rest into a counter.
pub const CARD_VISIBLE_TAGS: usize = 3;

static TIME_OF_DAY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").expect("valid time-of-day regex"));

#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Default, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Visibility {
    /// Anyone can find and join.
    #[default]
    Public,
    /// Completely hidden.
    Private,
    /// Visible but requires an invite.
    InviteOnly,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Session {
    pub id: String,
    pub title: String,
    pub description: String,
    pub host: String,
    pub participants: u32,
    pub max_participants: u32,
    pub start_time: String,
    pub end_time: String,
    pub visibility: Visibility,
    pub tags: Vec<String>,
    pub host_approval: bool,
    pub is_live: bool,
    pub location_id: String,
    pub location_name: String,
    pub location_address: String,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn is_full(&self) -> bool {
        self.participants >= self.max_participants
    }

    /// Occupancy as a whole percentage, capped at 100.
    pub fn fill_percent(&self) -> u8 {
        if self.max_participants == 0 {
            return 100;
        }
        let percent = u64::from(self.participants) * 100 / u64::from(self.max_participants);
        percent.min(100) as u8
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            description: String::new(),
            host: DEFAULT_HOST.to_string(),
            participants: 1,
            max_participants: DEFAULT_MAX_PARTICIPANTS,
            start_time: "09:00".to_string(),
            end_time: "17:00".to_string(),
            visibility: Visibility::default(),
            tags: Vec::new(),
            host_approval: false,
            is_live: true,
            location_id: String::new(),
            location_name: String::new(),
            location_address: String::new(),
            created_at: DateTime::<Utc>::default(),
        }
    }
}

/// Payload of the "start a session" form. `tags` is the raw comma-separated input.
#[derive(Deserialize, Debug, Clone, Validate, JsonSchema)]
#[validate(schema(function = "validate_max_participants"))]
pub struct SessionRequest {
    #[validate(length(min = 1, max = 120), custom(function = "validate_not_blank"))]
    pub title: String,
    #[validate(length(min = 1, max = 2000), custom(function = "validate_not_blank"))]
    pub description: String,
    #[serde(default = "default_host")]
    #[validate(length(min = 1, max = 80), custom(function = "validate_not_blank"))]
    pub host: String,
    #[serde(default = "default_max_participants")]
    pub max_participants: u32,
    #[validate(custom(function = "validate_time_of_day"))]
    #[schemars(regex(pattern = r"^([01][0-9]|2[0-3]):[0-5][0-9]$"))]
    pub start_time: String,
    #[validate(custom(function = "validate_time_of_day"))]
    #[schemars(regex(pattern = r"^([01][0-9]|2[0-3]):[0-5][0-9]$"))]
    pub end_time: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub host_approval: bool,
    #[validate(length(min = 1))]
    pub location_id: String,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_max_participants() -> u32 {
    DEFAULT_MAX_PARTICIPANTS
}

/// Rejects text that is empty once trimmed.
pub(crate) fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("blank"))
    } else {
        Ok(())
    }
}

fn validate_time_of_day(value: &str) -> Result<(), ValidationError> {
    if TIME_OF_DAY.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_time_of_day"))
    }
}

fn validate_max_participants(request: &SessionRequest) -> Result<(), ValidationError> {
    if ALLOWED_MAX_PARTICIPANTS.contains(&request.max_participants) {
        Ok(())
    } else {
        Err(ValidationError::new("max_participants_not_allowed"))
    }
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CardAction {
    /// Live session: "Join Session".
    Join,
    /// Upcoming session: "Get Notified".
    Notify,
}

/// What the session card needs beyond the raw record.
#[derive(Serialize, Debug, Clone, JsonSchema)]
pub struct SessionCard {
    pub is_full: bool,
    pub fill_percent: u8,
    pub visible_tags: Vec<String>,
    pub hidden_tag_count: usize,
    pub action: CardAction,
    pub join_label: String,
}

impl From<&Session> for SessionCard {
    fn from(session: &Session) -> Self {
        let visible_tags: Vec<String> = session.tags.iter().take(CARD_VISIBLE_TAGS).cloned().collect();
        let action = if session.is_live { CardAction::Join } else { CardAction::Notify };
        let join_label = if session.host_approval { "Request to Join" } else { "Join Session" };

        Self {
            is_full: session.is_full(),
            fill_percent: session.fill_percent(),
            hidden_tag_count: session.tags.len() - visible_tags.len(),
            visible_tags,
            action,
            join_label: join_label.to_string(),
        }
    }
}

#[derive(Serialize, Debug, Clone, JsonSchema)]
pub struct SessionResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub host: String,
    pub participants: u32,
    pub max_participants: u32,
    pub start_time: String,
    pub end_time: String,
    pub visibility: Visibility,
    pub tags: Vec<String>,
    pub host_approval: bool,
    pub is_live: bool,
    pub location_id: String,
    pub location_name: String,
    pub location_address: String,
    pub created_at: DateTime<Utc>,
    pub card: SessionCard,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id.clone(),
            title: session.title.clone(),
            description: session.description.clone(),
            host: session.host.clone(),
            participants: session.participants,
            max_participants: session.max_participants,
            start_time: session.start_time.clone(),
            end_time: session.end_time.clone(),
            visibility: session.visibility,
            tags: session.tags.clone(),
            host_approval: session.host_approval,
            is_live: session.is_live,
            location_id: session.location_id.clone(),
            location_name: session.location_name.clone(),
            location_address: session.location_address.clone(),
            created_at: session.created_at,
            card: SessionCard::from(session),
        }
    }
}

/// Filtered sessions plus the "Live Now" / "Starting Soon" split of the same list.
#[derive(Serialize, Debug, JsonSchema)]
pub struct SessionListResponse {
    pub sessions: Vec<SessionResponse>,
    pub live: Vec<SessionResponse>,
    pub upcoming: Vec<SessionResponse>,
    pub live_count: usize,
    pub total: usize,
}
