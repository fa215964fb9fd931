use rocket::serde::{Deserialize, Serialize};
use schemars::JsonSchema;

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub address: String,
    /// `[longitude, latitude]`
    pub coordinates: [f64; 2],
}

/// Event aggregates for one location, derived from the sessions held there.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
pub struct LocationEvents {
    pub event_count: usize,
    pub has_live_events: bool,
    pub has_future_events: bool,
}

#[derive(Serialize, Debug, Clone)]
pub struct LocationWithEvents {
    #[serde(flatten)]
    pub location: Location,

    #[serde(flatten)]
    pub events: LocationEvents,
}

/// Map marker colouring: red for live, orange for upcoming, gray otherwise.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MarkerStatus {
    Live,
    Upcoming,
    Idle,
}

impl From<&LocationEvents> for MarkerStatus {
    fn from(events: &LocationEvents) -> Self {
        if events.has_live_events {
            MarkerStatus::Live
        } else if events.has_future_events {
            MarkerStatus::Upcoming
        } else {
            MarkerStatus::Idle
        }
    }
}

/// What the map collaborator consumes per marker.
#[derive(Serialize, Debug, Clone, JsonSchema)]
pub struct LocationResponse {
    pub id: String,
    pub name: String,
    pub address: String,
    pub coordinates: [f64; 2],
    #[serde(flatten)]
    pub events: LocationEvents,
    pub marker: MarkerStatus,
    pub event_label: String,
}

impl From<&LocationWithEvents> for LocationResponse {
    fn from(value: &LocationWithEvents) -> Self {
        Self {
            id: value.location.id.clone(),
            name: value.location.name.clone(),
            address: value.location.address.clone(),
            coordinates: value.location.coordinates,
            events: value.events,
            marker: MarkerStatus::from(&value.events),
            event_label: event_label(value.events.event_count),
        }
    }
}

/// Popup text, e.g. "1 event" or "3 events".
pub fn event_label(count: usize) -> String {
    if count == 1 { "1 event".to_string() } else { format!("{} events", count) }
}
