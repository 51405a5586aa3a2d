use serde::{Deserialize, Serialize};

use crate::product::ProductDetail;

/// Observable pagination state of a browsing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationStatus {
    /// Highest page successfully merged so far (0 before the first merge).
    /// Never decreases within a session.
    pub pages_loaded: u32,
    /// False once the service has delivered an empty page; only an explicit
    /// reset makes it true again.
    pub has_more: bool,
    /// True while a page request is in flight. No second request is issued
    /// until the current one resolves.
    pub is_fetching: bool,
    /// Message from the most recent failed page fetch, cleared by the next
    /// successful fetch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
}

impl Default for PaginationStatus {
    fn default() -> Self {
        Self {
            pages_loaded: 0,
            has_more: true,
            is_fetching: false,
            last_error: None,
        }
    }
}

/// Lifecycle of the single-item detail fetch for the active selection.
///
/// A resolution whose selection has been superseded is discarded rather than
/// applied, so a slow fetch can never clobber a newer selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DetailState {
    Idle,
    Loading { id: u64 },
    Ready { detail: ProductDetail },
    Failed { id: u64, reason: String },
}

impl Default for DetailState {
    fn default() -> Self {
        Self::Idle
    }
}

impl DetailState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// The id this state refers to, if any.
    pub fn selected_id(&self) -> Option<u64> {
        match self {
            Self::Idle => None,
            Self::Loading { id } | Self::Failed { id, .. } => Some(*id),
            Self::Ready { detail } => Some(detail.id),
        }
    }
}
