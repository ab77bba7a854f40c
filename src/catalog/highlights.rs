use std::{collections::HashMap, sync::Arc};

/// Shown for routes that never got a tailored list of their own.
const DEFAULT_HIGHLIGHTS: [&str; 3] = [
    "Handpicked stops from a local creator",
    "Step-by-step directions for every leg",
    "Food and coffee breaks along the way",
];

/// Per-route "what you'll see" teasers, keyed by route id.
///
/// Lookups never come back empty: routes without a tailored entry share one
/// default list.
#[derive(Debug, Clone)]
pub struct Highlights {
    entries: HashMap<Arc<str>, Vec<Arc<str>>>,
    default: Vec<Arc<str>>,
}

impl Default for Highlights {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            default: DEFAULT_HIGHLIGHTS.iter().copied().map(Arc::from).collect(),
        }
    }
}

impl Highlights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one teaser to the route's tailored list, creating the list on
    /// first use.
    pub fn insert(&mut self, route_id: impl Into<Arc<str>>, highlight: impl Into<Arc<str>>) {
        self.entries
            .entry(route_id.into())
            .or_default()
            .push(highlight.into());
    }

    pub fn for_route(&self, route_id: &str) -> &[Arc<str>] {
        self.entries
            .get(route_id)
            .map(|highlights| highlights.as_slice())
            .unwrap_or(&self.default)
    }

    pub fn is_tailored(&self, route_id: &str) -> bool {
        self.entries.contains_key(route_id)
    }

    pub fn tailored_count(&self) -> usize {
        self.entries.len()
    }
}

#[test]
fn unknown_route_gets_default_list() {
    let highlights = Highlights::new();
    assert_eq!(highlights.for_route("nope"), highlights.for_route("also-nope"));
    assert!(!highlights.for_route("nope").is_empty());
    assert!(!highlights.is_tailored("nope"));
}

#[test]
fn tailored_entry_overrides_default() {
    let mut highlights = Highlights::new();
    highlights.insert("r1", "A mural only locals know about");
    highlights.insert("r1", "The best currywurst stand in town");

    let listed = highlights.for_route("r1");
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].as_ref(), "A mural only locals know about");
    assert!(highlights.is_tailored("r1"));
    assert_eq!(highlights.tailored_count(), 1);
}
