use crate::error::app_error::AppError;
use crate::models::filter::SessionFilter;
use crate::models::join::{JoinIntent, JoinKind, JoinPreferences, JoinRequest};
use crate::models::location::Location;
use crate::models::overview::OverviewResponse;
use crate::models::session::{Session, SessionListResponse, SessionRequest, SessionResponse};
use crate::service::aggregation::{live_count, overview};
use crate::service::filter::{filter_sessions, partition_sessions};
use crate::store::location::LocationRepository;
use crate::store::session::SessionRepository;
use chrono::{DateTime, Utc};
use tracing::{debug, info};
use uuid::Uuid;

pub struct SessionService<'a, R> {
    repository: &'a R,
}

impl<'a, R> SessionService<'a, R>
where
    R: SessionRepository + LocationRepository + Sync,
{
    pub fn new(repository: &'a R) -> Self {
        SessionService { repository }
    }

    pub async fn list_sessions(&self, filter: &SessionFilter) -> Result<SessionListResponse, AppError> {
        let sessions = self.repository.list_sessions().await?;
        let filtered = filter_sessions(&sessions, filter);
        debug!(total = sessions.len(), matched = filtered.len(), ?filter, "sessions filtered");
        Ok(session_list_response(&filtered))
    }

    /// Input is expected to be validated; the only lookup is the location.
    pub async fn create_session(&self, request: &SessionRequest) -> Result<Session, AppError> {
        let location = self
            .repository
            .get_location_by_id(&request.location_id)
            .await?
            .ok_or_else(|| AppError::BadRequest(format!("Unknown location: {}", request.location_id)))?;

        let session = new_session(request, &location, Uuid::new_v4().to_string(), Utc::now());
        let session = self.repository.create_session(session).await?;

        info!(
            session_id = %session.id,
            location_id = %session.location_id,
            tags = session.tags.len(),
            "session created"
        );
        Ok(session)
    }

    /// Builds the join intent for a session. Nothing is stored and the
    /// participant count is left alone.
    pub async fn join_session(&self, session_id: &str, request: &JoinRequest) -> Result<JoinIntent, AppError> {
        let session = self
            .repository
            .get_session_by_id(session_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Session not found".to_string()))?;

        if session.is_full() {
            return Err(AppError::SessionFull(session.id));
        }

        let intent = join_intent(&session, request, Utc::now());
        info!(
            session_id = %intent.session_id,
            kind = ?intent.kind,
            display_name = %intent.display_name,
            mic = intent.preferences.mic_enabled,
            video = intent.preferences.video_enabled,
            chat = intent.preferences.chat_enabled,
            "join intent recorded"
        );
        Ok(intent)
    }

    pub async fn overview(&self) -> Result<OverviewResponse, AppError> {
        let sessions = self.repository.list_sessions().await?;
        let locations = self.repository.list_locations().await?;
        Ok(overview(&sessions, &locations))
    }
}

/// Splits the comma-separated tag input: segments are trimmed, empty ones
/// dropped and repeats kept only once. The web form's own split keeps
/// repeats; the stored list does not.
pub fn parse_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !tags.iter().any(|existing| existing == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

pub fn new_session(request: &SessionRequest, location: &Location, id: String, created_at: DateTime<Utc>) -> Session {
    Session {
        id,
        title: request.title.clone(),
        description: request.description.clone(),
        host: request.host.clone(),
        participants: 1,
        max_participants: request.max_participants,
        start_time: request.start_time.clone(),
        end_time: request.end_time.clone(),
        visibility: request.visibility,
        tags: parse_tags(&request.tags),
        host_approval: request.host_approval,
        is_live: true,
        location_id: location.id.clone(),
        location_name: location.name.clone(),
        location_address: location.address.clone(),
        created_at,
    }
}

pub fn join_intent(session: &Session, request: &JoinRequest, requested_at: DateTime<Utc>) -> JoinIntent {
    let kind = if session.host_approval { JoinKind::Request } else { JoinKind::Join };
    // The host message only travels with approval requests.
    let message = match kind {
        JoinKind::Request => request.message.as_ref().map(|m| m.trim().to_string()).filter(|m| !m.is_empty()),
        JoinKind::Join => None,
    };

    JoinIntent {
        session_id: session.id.clone(),
        kind,
        display_name: request.display_name.trim().to_string(),
        message,
        preferences: JoinPreferences {
            mic_enabled: request.mic_enabled,
            video_enabled: request.video_enabled,
            chat_enabled: request.chat_enabled,
        },
        requested_at,
    }
}

pub fn session_list_response(sessions: &[Session]) -> SessionListResponse {
    let (live, upcoming) = partition_sessions(sessions);

    SessionListResponse {
        sessions: sessions.iter().map(SessionResponse::from).collect(),
        live_count: live_count(sessions),
        live: live.iter().map(SessionResponse::from).collect(),
        upcoming: upcoming.iter().map(SessionResponse::from).collect(),
        total: sessions.len(),
    }
}
