use std::sync::Arc;

use vitrine_client::{CatalogConfig, CatalogSource, HttpCatalog};
use vitrine_runtime::BrowseSession;
use vitrine_types::{DetailState, FilterCriteria, PaginationStatus, ProductRecord, SortKey};

use crate::error::{Error, Result};
use crate::watch::LiveStream;

/// Entry point: a connection to one remote catalog service.
///
/// Cheap to clone the sources out of; each call to [`Client::browse`] opens
/// an independent browsing session over the same backend.
pub struct Client {
    source: Arc<dyn CatalogSource>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}

impl Client {
    /// Connect to a catalog service over HTTP.
    pub fn connect(config: CatalogConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(Error::InvalidConfig("base_url must not be empty".to_string()));
        }
        if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
            return Err(Error::InvalidConfig(format!(
                "base_url must be an http(s) endpoint, got '{}'",
                config.base_url
            )));
        }
        Ok(Self {
            source: Arc::new(HttpCatalog::new(config)),
        })
    }

    /// Build a client over a custom backend (tests, alternative transports).
    pub fn with_source(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    /// Open a browsing session together with its live event stream.
    pub fn browse(&self) -> (BrowseHandle, LiveStream) {
        let (session, events) = BrowseSession::new(self.source.clone());
        (
            BrowseHandle {
                inner: Arc::new(session),
            },
            LiveStream::new(events),
        )
    }
}

/// Handle to one browsing session.
///
/// Clones share the session, so the scroll sensor, the filter widgets, and
/// the detail view can each hold their own handle.
#[derive(Clone)]
pub struct BrowseHandle {
    inner: Arc<BrowseSession>,
}

impl BrowseHandle {
    /// Fetch and merge the next page; no-op while a fetch is in flight or
    /// the catalog is exhausted.
    pub async fn load_next_page(&self) -> Result<()> {
        self.inner.load_next_page().await.map_err(Error::from)
    }

    /// Feed a scroll-proximity observation into the session.
    pub async fn notify_near_end(&self, near_end: bool) -> Result<()> {
        self.inner.notify_near_end(near_end).await.map_err(Error::from)
    }

    pub fn set_filter(&self, criteria: FilterCriteria) {
        self.inner.set_filter(criteria);
    }

    pub fn set_sort(&self, sort: SortKey) {
        self.inner.set_sort(sort);
    }

    /// Open the detail view for a product.
    pub async fn select(&self, id: u64) -> Result<()> {
        self.inner.select(id).await.map_err(Error::from)
    }

    /// Close the detail view.
    pub fn deselect(&self) {
        self.inner.deselect();
    }

    /// Clear the accumulated catalog for a fresh load.
    pub fn reset(&self) {
        self.inner.reset();
    }

    /// The filtered, sorted list currently shown to the user.
    pub fn display_list(&self) -> Vec<ProductRecord> {
        self.inner.display_list()
    }

    pub fn pagination(&self) -> PaginationStatus {
        self.inner.pagination()
    }

    pub fn detail(&self) -> DetailState {
        self.inner.detail()
    }
}
