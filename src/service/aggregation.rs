use crate::models::location::{Location, LocationEvents, LocationWithEvents};
use crate::models::overview::OverviewResponse;
use crate::models::session::Session;
use std::collections::{HashMap, HashSet};

/// Distinct tags in first-seen order, for stable filter chips.
pub fn all_tags(sessions: &[Session]) -> Vec<String> {
    let mut seen = HashSet::new();
    sessions
        .iter()
        .flat_map(|s| s.tags.iter())
        .filter(|tag| seen.insert(tag.as_str()))
        .cloned()
        .collect()
}

pub fn live_count(sessions: &[Session]) -> usize {
    sessions.iter().filter(|s| s.is_live).count()
}

pub fn total_participants(sessions: &[Session]) -> u64 {
    sessions.iter().map(|s| u64::from(s.participants)).sum()
}

/// Event aggregates keyed by location id, in one pass over `sessions`.
pub fn events_by_location(sessions: &[Session]) -> HashMap<&str, LocationEvents> {
    let mut events: HashMap<&str, LocationEvents> = HashMap::new();

    for session in sessions {
        let entry = events.entry(session.location_id.as_str()).or_default();
        entry.event_count += 1;
        entry.has_live_events |= session.is_live;
        entry.has_future_events |= !session.is_live;
    }

    events
}

pub fn location_events(location_id: &str, sessions: &[Session]) -> LocationEvents {
    events_by_location(sessions).remove(location_id).unwrap_or_default()
}

pub fn locations_with_events(locations: &[Location], sessions: &[Session]) -> Vec<LocationWithEvents> {
    let events = events_by_location(sessions);

    locations
        .iter()
        .map(|location| LocationWithEvents {
            location: location.clone(),
            events: events.get(location.id.as_str()).copied().unwrap_or_default(),
        })
        .collect()
}

pub fn overview(sessions: &[Session], locations: &[Location]) -> OverviewResponse {
    OverviewResponse {
        tags: all_tags(sessions),
        live_count: live_count(sessions),
        total_participants: total_participants(sessions),
        session_count: sessions.len(),
        location_count: locations.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::{demo_locations, demo_sessions};
    use crate::test_utils::sample_session;

    fn with_participants(participants: &[u32]) -> Vec<Session> {
        participants
            .iter()
            .map(|&p| Session {
                participants: p,
                max_participants: 50,
                ..sample_session()
            })
            .collect()
    }

    #[test]
    fn totals_over_demo_numbers() {
        assert_eq!(total_participants(&with_participants(&[12, 8, 6, 25])), 51);

        let sessions: Vec<Session> = [true, true, false, false]
            .into_iter()
            .map(|is_live| Session { is_live, ..sample_session() })
            .collect();
        assert_eq!(live_count(&sessions), 2);
    }

    #[test]
    fn empty_collection_aggregates_to_zero() {
        assert_eq!(total_participants(&[]), 0);
        assert_eq!(live_count(&[]), 0);
        assert!(all_tags(&[]).is_empty());
    }

    #[test]
    fn tags_are_distinct_in_first_seen_order() {
        let mut first = sample_session();
        first.tags = vec!["Focus".into(), "Design".into()];
        let mut second = sample_session();
        second.tags = vec!["Writing".into(), "Focus".into(), "Study".into()];

        assert_eq!(all_tags(&[first, second]), vec!["Focus", "Design", "Writing", "Study"]);
    }

    #[test]
    fn location_events_count_live_and_upcoming() {
        let sessions = vec![
            Session {
                location_id: "a".into(),
                is_live: true,
                ..sample_session()
            },
            Session {
                location_id: "a".into(),
                is_live: false,
                ..sample_session()
            },
            Session {
                location_id: "b".into(),
                is_live: false,
                ..sample_session()
            },
        ];

        assert_eq!(
            location_events("a", &sessions),
            LocationEvents {
                event_count: 2,
                has_live_events: true,
                has_future_events: true,
            }
        );
        assert_eq!(
            location_events("b", &sessions),
            LocationEvents {
                event_count: 1,
                has_live_events: false,
                has_future_events: true,
            }
        );
        assert_eq!(location_events("c", &sessions), LocationEvents::default());
    }

    #[test]
    fn locations_keep_order_and_include_idle_ones() {
        let locations = demo_locations();
        let sessions = demo_sessions(&locations);
        let result = locations_with_events(&locations, &sessions);

        let ids: Vec<&str> = result.iter().map(|l| l.location.id.as_str()).collect();
        assert_eq!(ids, vec!["loc-1", "loc-2", "loc-3", "loc-4", "loc-5"]);
        assert_eq!(result[4].events, LocationEvents::default());
        assert_eq!(result.iter().map(|l| l.events.event_count).sum::<usize>(), sessions.len());
    }

    #[test]
    fn overview_over_seed_data() {
        let locations = demo_locations();
        let sessions = demo_sessions(&locations);
        let overview = overview(&sessions, &locations);

        assert_eq!(overview.total_participants, 51);
        assert_eq!(overview.live_count, 3);
        assert_eq!(overview.session_count, 4);
        assert_eq!(overview.location_count, 5);
        assert_eq!(overview.tags.first().map(String::as_str), Some("Development"));
        assert_eq!(overview.tags.len(), 12);
    }
}
