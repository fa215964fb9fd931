use crate::error::app_error::AppError;
use crate::models::location::{Location, LocationWithEvents};
use crate::service::aggregation::{location_events, locations_with_events};
use crate::store::memory_repository::MemoryRepository;

#[async_trait::async_trait]
pub trait LocationRepository {
    async fn get_location_by_id(&self, id: &str) -> Result<Option<Location>, AppError>;
    async fn list_locations(&self) -> Result<Vec<Location>, AppError>;
    /// Locations with event aggregates computed from the current sessions.
    async fn list_locations_with_events(&self) -> Result<Vec<LocationWithEvents>, AppError>;
    async fn get_location_with_events(&self, id: &str) -> Result<Option<LocationWithEvents>, AppError>;
}

#[async_trait::async_trait]
impl LocationRepository for MemoryRepository {
    async fn get_location_by_id(&self, id: &str) -> Result<Option<Location>, AppError> {
        let state = self.read().await;
        Ok(state.locations.iter().find(|l| l.id == id).cloned())
    }

    async fn list_locations(&self) -> Result<Vec<Location>, AppError> {
        Ok(self.read().await.locations.clone())
    }

    async fn list_locations_with_events(&self) -> Result<Vec<LocationWithEvents>, AppError> {
        // One guard for both collections so counts match the session list.
        let state = self.read().await;
        Ok(locations_with_events(&state.locations, &state.sessions))
    }

    async fn get_location_with_events(&self, id: &str) -> Result<Option<LocationWithEvents>, AppError> {
        let state = self.read().await;
        Ok(state.locations.iter().find(|l| l.id == id).map(|location| LocationWithEvents {
            location: location.clone(),
            events: location_events(id, &state.sessions),
        }))
    }
}
