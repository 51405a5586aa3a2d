use std::sync::{Arc, Mutex};

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use vitrine_client::CatalogSource;
use vitrine_core::{Accumulator, project};
use vitrine_types::{DetailState, FilterCriteria, PaginationStatus, ProductRecord, SortKey};

use crate::detail::DetailController;
use crate::driver::{PageDriver, PageResolution};
use crate::error::{Error, Result};
use crate::events::SessionEvent;

struct SessionState {
    accumulator: Accumulator,
    criteria: FilterCriteria,
    sort: SortKey,
    driver: PageDriver,
    detail: DetailController,
}

impl SessionState {
    fn new() -> Self {
        Self {
            accumulator: Accumulator::new(),
            criteria: FilterCriteria::default(),
            sort: SortKey::default(),
            driver: PageDriver::new(),
            detail: DetailController::new(),
        }
    }
}

/// One browsing session over a remote catalog.
///
/// Owns the accumulated catalog, the pagination and detail state machines,
/// and the active filter/sort criteria. Every state change is published as a
/// [`SessionEvent`] on the channel handed out by [`BrowseSession::new`].
///
/// All methods take `&self`; exclusivity comes from the state-machine guards,
/// not from blocking. A page fetch and a detail fetch may run concurrently,
/// two page fetches never do. The state lock is never held across an await.
pub struct BrowseSession {
    source: Arc<dyn CatalogSource>,
    state: Mutex<SessionState>,
    events: UnboundedSender<SessionEvent>,
}

impl BrowseSession {
    /// Create a session over `source` together with its event stream.
    pub fn new(source: Arc<dyn CatalogSource>) -> (Self, UnboundedReceiver<SessionEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let session = Self {
            source,
            state: Mutex::new(SessionState::new()),
            events,
        };
        (session, receiver)
    }

    /// Fetch and merge the next page.
    ///
    /// A no-op while a page fetch is already in flight or the catalog is
    /// exhausted. On failure the session stays retryable: accumulated data
    /// is kept, the same page is requested again next time, and the error
    /// message is surfaced through the pagination status.
    pub async fn load_next_page(&self) -> Result<()> {
        let request = {
            let mut state = self.state.lock().unwrap();
            let Some(request) = state.driver.begin() else {
                return Ok(());
            };
            self.publish(SessionEvent::PageStatus(state.driver.status()));
            request
        };

        let fetched = self.source.fetch_page(request.page).await;

        let mut state = self.state.lock().unwrap();
        let resolution = match &fetched {
            Ok(records) if records.is_empty() => PageResolution::EndOfCatalog,
            Ok(_) => PageResolution::Merged,
            Err(err) => PageResolution::Failed(err.to_string()),
        };
        if !state.driver.finish(request, resolution) {
            // The session was reset while this fetch was in flight.
            return Ok(());
        }

        match fetched {
            Ok(records) => {
                if !records.is_empty() {
                    state.accumulator.merge_page(records);
                    self.publish_display(&state);
                }
                self.publish(SessionEvent::PageStatus(state.driver.status()));
                Ok(())
            }
            Err(err) => {
                self.publish(SessionEvent::PageStatus(state.driver.status()));
                Err(Error::Catalog(err))
            }
        }
    }

    /// Scroll-proximity signal intake. Repeated `true` signals while a fetch
    /// is in flight collapse into that fetch.
    pub async fn notify_near_end(&self, near_end: bool) -> Result<()> {
        if near_end {
            self.load_next_page().await
        } else {
            Ok(())
        }
    }

    /// Replace the filter criteria and republish the display list.
    pub fn set_filter(&self, criteria: FilterCriteria) {
        let mut state = self.state.lock().unwrap();
        state.criteria = criteria;
        self.publish_display(&state);
    }

    /// Replace the sort key and republish the display list.
    pub fn set_sort(&self, sort: SortKey) {
        let mut state = self.state.lock().unwrap();
        state.sort = sort;
        self.publish_display(&state);
    }

    /// Select a product for the detail view and fetch its full record.
    ///
    /// If a newer selection or a deselection happens before this fetch
    /// resolves, the resolution is discarded and `Ok(())` is returned even
    /// when the fetch itself failed.
    pub async fn select(&self, id: u64) -> Result<()> {
        let issued = {
            let mut state = self.state.lock().unwrap();
            let issued = state.detail.begin(id);
            self.publish(SessionEvent::Detail(state.detail.state().clone()));
            issued
        };

        let fetched = self.source.fetch_by_id(id).await;

        let mut state = self.state.lock().unwrap();
        match fetched {
            Ok(detail) => {
                if state.detail.resolve_success(issued, detail) {
                    self.publish(SessionEvent::Detail(state.detail.state().clone()));
                }
                Ok(())
            }
            Err(err) => {
                if state.detail.resolve_failure(issued, id, err.to_string()) {
                    self.publish(SessionEvent::Detail(state.detail.state().clone()));
                    Err(Error::Catalog(err))
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Close the detail view. Anything still in flight for the prior
    /// selection resolves into the void.
    pub fn deselect(&self) {
        let mut state = self.state.lock().unwrap();
        state.detail.deselect();
        self.publish(SessionEvent::Detail(state.detail.state().clone()));
    }

    /// Full reload: clear the accumulated catalog and return pagination to
    /// its initial state. In-flight page fetches become stale. Filter, sort
    /// and the detail view are left alone.
    pub fn reset(&self) {
        let mut state = self.state.lock().unwrap();
        state.accumulator.clear();
        state.driver.reset();
        self.publish_display(&state);
        self.publish(SessionEvent::PageStatus(state.driver.status()));
    }

    /// Snapshot of the current display list.
    pub fn display_list(&self) -> Vec<ProductRecord> {
        let state = self.state.lock().unwrap();
        project(state.accumulator.records(), &state.criteria, state.sort)
    }

    /// Snapshot of the pagination status.
    pub fn pagination(&self) -> PaginationStatus {
        self.state.lock().unwrap().driver.status()
    }

    /// Snapshot of the detail-fetch state.
    pub fn detail(&self) -> DetailState {
        self.state.lock().unwrap().detail.state().clone()
    }

    /// Number of records accumulated across all merged pages.
    pub fn accumulated_len(&self) -> usize {
        self.state.lock().unwrap().accumulator.len()
    }

    fn publish_display(&self, state: &SessionState) {
        let display = project(state.accumulator.records(), &state.criteria, state.sort);
        self.publish(SessionEvent::DisplayChanged(display));
    }

    fn publish(&self, event: SessionEvent) {
        // The receiver side may be gone; the session keeps working.
        let _ = self.events.send(event);
    }
}
