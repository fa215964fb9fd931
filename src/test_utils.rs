use crate::config::Config;
use crate::models::join::JoinRequest;
use crate::models::location::Location;
use crate::models::session::{Session, SessionRequest, Visibility};
use chrono::Utc;

pub fn sample_location() -> Location {
    Location {
        id: "loc-1".to_string(),
        name: "Hudson Commons".to_string(),
        address: "441 9th Ave, New York, NY 10001".to_string(),
        coordinates: [-73.9967, 40.7536],
    }
}

pub fn sample_session() -> Session {
    let location = sample_location();
    Session {
        id: "sample".to_string(),
        title: "Quiet Afternoon".to_string(),
        description: "Heads-down work with short check-ins.".to_string(),
        host: "Jordan Lee".to_string(),
        participants: 3,
        max_participants: 10,
        start_time: "13:00".to_string(),
        end_time: "16:00".to_string(),
        visibility: Visibility::Public,
        tags: vec!["Focus".to_string()],
        host_approval: false,
        is_live: true,
        location_id: location.id,
        location_name: location.name,
        location_address: location.address,
        created_at: Utc::now(),
    }
}

pub fn sample_session_request() -> SessionRequest {
    SessionRequest {
        title: "Evening Sprint".to_string(),
        description: "Finish the week's loose ends together.".to_string(),
        host: "You".to_string(),
        max_participants: 15,
        start_time: "18:00".to_string(),
        end_time: "20:30".to_string(),
        visibility: Visibility::Public,
        tags: "Development, Writing,  , Focus".to_string(),
        host_approval: false,
        location_id: "loc-1".to_string(),
    }
}

pub fn sample_join_request() -> JoinRequest {
    JoinRequest {
        display_name: "Robin".to_string(),
        message: None,
        mic_enabled: false,
        video_enabled: true,
        chat_enabled: true,
    }
}

/// Config for route tests: demo data on, swagger off, generous limits.
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.api.enable_swagger = false;
    config.rate_limit.read_limit = 10_000;
    config.rate_limit.mutation_limit = 10_000;
    config
}
