use vitrine_types::{DetailState, PaginationStatus, ProductRecord};

/// Change notification published by a [`crate::BrowseSession`].
///
/// The presentation layer subscribes to these instead of polling; each event
/// carries the full new value, never a delta.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// The filtered, sorted display list was recomputed.
    DisplayChanged(Vec<ProductRecord>),
    /// Pagination status changed (fetch started/resolved, catalog exhausted,
    /// fetch failed).
    PageStatus(PaginationStatus),
    /// The detail-fetch lifecycle moved for the active selection.
    Detail(DetailState),
}
