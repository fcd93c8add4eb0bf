use favhub_types::{Tab, User};

// NOTE: Single-owner state
//
// All fields are mutated exclusively by `reducer::reduce`, which runs one
// command at a time. The generation counter and the in-flight flag exist
// because the remote fetch is the only suspending operation: a response can
// arrive after a newer query superseded it, and overlapping load-more
// triggers could otherwise increment `page` twice for one visible scroll.

/// Everything the display derivation needs, in one place.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Currently selected view mode
    pub tab: Tab,

    /// Current search text ("" means: favorites unfiltered, no remote list)
    pub query: String,

    /// 1-based page of the most recently requested fetch
    pub page: u32,

    /// Token identifying the current query; responses carrying an older
    /// generation are discarded
    pub generation: u64,

    /// True while a fetch is outstanding; load-more is ignored meanwhile
    pub fetch_in_flight: bool,

    /// Accumulated remote results for the current query (pages appended)
    pub fetched: Vec<User>,

    /// Full persisted favorite set, used to annotate search rows
    pub favorites_all: Vec<User>,

    /// Favorites filtered by the current query, shown on the favorites tab
    pub favorites_filtered: Vec<User>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
