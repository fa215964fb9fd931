use crate::models::location::Location;
use crate::models::session::Session;
use crate::store::seed;
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::info;

#[derive(Debug, Default)]
pub struct StoreState {
    /// Newest first.
    pub sessions: Vec<Session>,
    pub locations: Vec<Location>,
}

/// In-process store for sessions and locations. Cloning shares the same state.
#[derive(Clone, Debug, Default)]
pub struct MemoryRepository {
    state: Arc<RwLock<StoreState>>,
}

impl MemoryRepository {
    pub fn new(sessions: Vec<Session>, locations: Vec<Location>) -> Self {
        Self {
            state: Arc::new(RwLock::new(StoreState { sessions, locations })),
        }
    }

    /// Store preloaded with the demo locations and sessions.
    pub fn seeded() -> Self {
        let locations = seed::demo_locations();
        let sessions = seed::demo_sessions(&locations);
        info!(sessions = sessions.len(), locations = locations.len(), "session store seeded");
        Self::new(sessions, locations)
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().await
    }
}
