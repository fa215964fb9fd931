use crate::models::filter::SessionFilter;
use crate::models::session::Session;

/// True when `session` passes every criterion in `filter`.
pub fn matches(session: &Session, filter: &SessionFilter) -> bool {
    let location_ok = filter.location_id.as_deref().is_none_or(|id| session.location_id == id);
    let tag_ok = filter.tag.as_deref().is_none_or(|tag| session.has_tag(tag));

    location_ok && tag_ok && filter.view.matches(session.is_live) && matches_search(session, &filter.search)
}

fn matches_search(session: &Session, term: &str) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return true;
    }

    let needle = term.to_lowercase();
    [&session.title, &session.description, &session.host]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Sessions passing `filter`, in their original order.
pub fn filter_sessions(sessions: &[Session], filter: &SessionFilter) -> Vec<Session> {
    sessions.iter().filter(|s| matches(s, filter)).cloned().collect()
}

/// Splits into (live, upcoming), keeping order within each half.
pub fn partition_sessions(sessions: &[Session]) -> (Vec<Session>, Vec<Session>) {
    sessions.iter().cloned().partition(|s| s.is_live)
}
