use rocket::FromFormField;
use rocket::serde::{Deserialize, Serialize};
use schemars::JsonSchema;

#[derive(FromFormField, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    #[field(value = "all")]
    All,
    #[field(value = "live")]
    Live,
    #[field(value = "upcoming")]
    Upcoming,
}

impl ViewMode {
    pub fn matches(self, is_live: bool) -> bool {
        match self {
            ViewMode::All => true,
            ViewMode::Live => is_live,
            ViewMode::Upcoming => !is_live,
        }
    }
}

/// Criteria for narrowing the session list. Every criterion left at its
/// default lets all sessions through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionFilter {
    pub location_id: Option<String>,
    pub search: String,
    pub tag: Option<String>,
    pub view: ViewMode,
}

impl SessionFilter {
    /// Builds criteria from raw query values; blank values count as absent.
    pub fn from_query(location_id: Option<String>, search: Option<String>, tag: Option<String>, view: Option<ViewMode>) -> Self {
        Self {
            location_id: location_id.filter(|id| !id.trim().is_empty()),
            search: search.map(|s| s.trim().to_string()).unwrap_or_default(),
            tag: tag.filter(|t| !t.is_empty()),
            view: view.unwrap_or_default(),
        }
    }

    #[cfg(test)]
    pub fn with_view(&self, view: ViewMode) -> Self {
        Self { view, ..self.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_mode_matches() {
        assert!(ViewMode::All.matches(true));
        assert!(ViewMode::All.matches(false));
        assert!(ViewMode::Live.matches(true));
        assert!(!ViewMode::Live.matches(false));
        assert!(ViewMode::Upcoming.matches(false));
        assert!(!ViewMode::Upcoming.matches(true));
    }

    #[test]
    fn from_query_treats_blank_values_as_absent() {
        let filter = SessionFilter::from_query(Some("  ".to_string()), Some("  focus ".to_string()), Some(String::new()), None);
        assert_eq!(filter.location_id, None);
        assert_eq!(filter.search, "focus");
        assert_eq!(filter.tag, None);
        assert_eq!(filter.view, ViewMode::All);
    }
}
