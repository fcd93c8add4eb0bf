use serde::{Deserialize, Serialize};

use crate::user::User;

/// One page of remote search results. Transient, one per fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchPage {
    /// Matches in the order the server returned them
    pub items: Vec<User>,

    /// Total matches across all pages, as reported by the server
    pub total_count: u64,

    /// 1-based page number this result corresponds to
    pub page: u32,
}

impl SearchPage {
    pub fn empty(page: u32) -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            page,
        }
    }
}
