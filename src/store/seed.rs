use crate::models::location::Location;
use crate::models::session::{Session, Visibility};
use chrono::{Duration, Utc};

struct SeedSession {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    host: &'static str,
    participants: u32,
    max_participants: u32,
    is_live: bool,
    start_time: &'static str,
    end_time: &'static str,
    visibility: Visibility,
    tags: &'static [&'static str],
    host_approval: bool,
    location_id: &'static str,
}

const SEED_SESSIONS: [SeedSession; 4] = [
    SeedSession {
        id: "1",
        title: "Morning Focus Session",
        description: "Deep work session for developers and designers. No meetings, just pure focus time.",
        host: "Sarah Chen",
        participants: 12,
        max_participants: 20,
        is_live: true,
        start_time: "09:00",
        end_time: "12:00",
        visibility: Visibility::Public,
        tags: &["Development", "Design", "Focus"],
        host_approval: false,
        location_id: "loc-1",
    },
    SeedSession {
        id: "2",
        title: "Creative Writing Circle",
        description: "Writers working on their novels, articles, and creative projects together.",
        host: "Marcus Thompson",
        participants: 8,
        max_participants: 15,
        is_live: true,
        start_time: "10:00",
        end_time: "14:00",
        visibility: Visibility::Public,
        tags: &["Writing", "Creative", "Literature"],
        host_approval: true,
        location_id: "loc-2",
    },
    SeedSession {
        id: "3",
        title: "Startup Grind Session",
        description: "Entrepreneurs working on their ventures. Great for networking and accountability.",
        host: "Alex Rivera",
        participants: 6,
        max_participants: 10,
        is_live: false,
        start_time: "14:00",
        end_time: "18:00",
        visibility: Visibility::InviteOnly,
        tags: &["Startup", "Business", "Networking"],
        host_approval: true,
        location_id: "loc-3",
    },
    SeedSession {
        id: "4",
        title: "Study Together",
        description: "Students and lifelong learners studying various subjects. Pomodoro style breaks included.",
        host: "Emma Wilson",
        participants: 25,
        max_participants: 30,
        is_live: true,
        start_time: "13:00",
        end_time: "17:00",
        visibility: Visibility::Public,
        tags: &["Study", "Learning", "Pomodoro"],
        host_approval: false,
        location_id: "loc-4",
    },
];

pub fn demo_locations() -> Vec<Location> {
    [
        ("loc-1", "Hudson Commons", "441 9th Ave, New York, NY 10001", [-73.9967, 40.7536]),
        ("loc-2", "Bryant Park Reading Room", "40 W 42nd St, New York, NY 10036", [-73.9832, 40.7536]),
        ("loc-3", "Dumbo Loft", "55 Washington St, Brooklyn, NY 11201", [-73.9897, 40.7033]),
        ("loc-4", "Union Square Hub", "33 Union Sq W, New York, NY 10003", [-73.9911, 40.7359]),
        ("loc-5", "Battery Park Terrace", "1 Battery Pl, New York, NY 10004", [-74.0170, 40.7057]),
    ]
    .into_iter()
    .map(|(id, name, address, coordinates)| Location {
        id: id.to_string(),
        name: name.to_string(),
        address: address.to_string(),
        coordinates,
    })
    .collect()
}

/// Demo sessions, denormalized against `locations`. Sessions whose location is
/// missing from `locations` keep empty location name and address.
pub fn demo_sessions(locations: &[Location]) -> Vec<Session> {
    let now = Utc::now();

    SEED_SESSIONS
        .iter()
        .enumerate()
        .map(|(index, seed)| {
            let location = locations.iter().find(|l| l.id == seed.location_id);
            Session {
                id: seed.id.to_string(),
                title: seed.title.to_string(),
                description: seed.description.to_string(),
                host: seed.host.to_string(),
                participants: seed.participants,
                max_participants: seed.max_participants,
                start_time: seed.start_time.to_string(),
                end_time: seed.end_time.to_string(),
                visibility: seed.visibility,
                tags: seed.tags.iter().map(|t| t.to_string()).collect(),
                host_approval: seed.host_approval,
                is_live: seed.is_live,
                location_id: seed.location_id.to_string(),
                location_name: location.map(|l| l.name.clone()).unwrap_or_default(),
                location_address: location.map(|l| l.address.clone()).unwrap_or_default(),
                created_at: now - Duration::minutes(index as i64),
            }
        })
        .collect()
}
