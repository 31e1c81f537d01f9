//! Search and limit rules for listing events.

use crate::event::{Event, EventSummary};

/// Options for [`crate::store::EventStore::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Case-insensitive substring of title, description or location
    pub search: Option<String>,
    /// Keep only the last `max` matches
    pub max: Option<usize>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    pub fn matches(&self, event: &Event) -> bool {
        match self.search.as_deref() {
            Some(needle) if !needle.is_empty() => event
                .searchable_text()
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            _ => true,
        }
    }

    /// Filter, then keep the trailing `max` in stored order, then project.
    pub fn apply(&self, events: &[Event]) -> Vec<EventSummary> {
        let matching: Vec<&Event> = events.iter().filter(|e| self.matches(e)).collect();

        let start = match self.max {
            Some(max) => matching.len().saturating_sub(max),
            None => 0,
        };

        matching[start..].iter().map(|e| e.summary()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventFields;

    fn event(id: &str, title: &str, description: &str, location: &str) -> Event {
        Event::new(
            id,
            EventFields {
                title: title.to_string(),
                description: description.to_string(),
                location: location.to_string(),
                date: "2024-01-01".to_string(),
                time: "10:00".to_string(),
                image: "img.png".to_string(),
                ..Default::default()
            },
        )
    }

    fn sample() -> Vec<Event> {
        vec![
            event("1", "Web Dev Meetup", "Talks about Rust", "Berlin"),
            event("2", "Cooking Class", "Pasta night", "Rome"),
            event("3", "City Hike", "Walk through the old town", "Berlin"),
            event("4", "Launch", "Kickoff event", "HQ"),
        ]
    }

    fn ids(summaries: &[EventSummary]) -> Vec<&str> {
        summaries.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_no_options_returns_everything_in_order() {
        let events = sample();
        let query = ListQuery::new();
        assert_eq!(ids(&query.apply(&events)), vec!["1", "2", "3", "4"]);
        assert_eq!(query.apply(&events), query.apply(&events));
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let events = sample();
        assert_eq!(ids(&ListQuery::new().search("berlin").apply(&events)), vec!["1", "3"]);
        assert_eq!(ids(&ListQuery::new().search("RUST").apply(&events)), vec!["1"]);
        assert_eq!(ids(&ListQuery::new().search("kickoff").apply(&events)), vec!["4"]);
        assert!(ListQuery::new().search("nomatch").apply(&events).is_empty());
    }

    #[test]
    fn test_search_ignores_other_fields() {
        let events = sample();
        assert!(ListQuery::new().search("img.png").apply(&events).is_empty());
        assert!(ListQuery::new().search("2024").apply(&events).is_empty());
    }

    #[test]
    fn test_empty_search_applies_no_filter() {
        let events = sample();
        assert_eq!(ListQuery::new().search("").apply(&events).len(), 4);
    }

    #[test]
    fn test_max_keeps_trailing_matches() {
        let events = sample();
        assert_eq!(ids(&ListQuery::new().max(2).apply(&events)), vec!["3", "4"]);
        assert_eq!(
            ids(&ListQuery::new().search("berlin").max(1).apply(&events)),
            vec!["3"]
        );
    }

    #[test]
    fn test_max_larger_than_matches_returns_all() {
        let events = sample();
        assert_eq!(ListQuery::new().max(100).apply(&events).len(), 4);
    }

    #[test]
    fn test_max_zero_returns_nothing() {
        let events = sample();
        assert!(ListQuery::new().max(0).apply(&events).is_empty());
    }

    #[test]
    fn test_empty_collection() {
        assert!(ListQuery::new().search("x").max(3).apply(&[]).is_empty());
    }
}
