use crate::error::app_error::AppError;
use crate::models::session::Session;
use crate::store::memory_repository::MemoryRepository;

#[async_trait::async_trait]
pub trait SessionRepository {
    /// Stores a fully built session ahead of all existing ones.
    async fn create_session(&self, session: Session) -> Result<Session, AppError>;
    async fn get_session_by_id(&self, id: &str) -> Result<Option<Session>, AppError>;
    /// All sessions, newest first.
    async fn list_sessions(&self) -> Result<Vec<Session>, AppError>;
}

#[async_trait::async_trait]
impl SessionRepository for MemoryRepository {
    async fn create_session(&self, session: Session) -> Result<Session, AppError> {
        let mut state = self.write().await;
        state.sessions.insert(0, session.clone());
        Ok(session)
    }

    async fn get_session_by_id(&self, id: &str) -> Result<Option<Session>, AppError> {
        let state = self.read().await;
        Ok(state.sessions.iter().find(|s| s.id == id).cloned())
    }

    async fn list_sessions(&self) -> Result<Vec<Session>, AppError> {
        Ok(self.read().await.sessions.clone())
    }
}
