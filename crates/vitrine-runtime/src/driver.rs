use vitrine_types::PaginationStatus;

/// Ticket for one in-flight page fetch.
///
/// Carries the target page and the session epoch it was issued under; a
/// resolution presented with a stale epoch (the session was reset while the
/// fetch was in flight) is discarded.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub page: u32,
    epoch: u64,
}

/// How a page fetch resolved, from the driver's point of view.
#[derive(Debug)]
pub enum PageResolution {
    /// Non-empty page, merged into the accumulator by the caller.
    Merged,
    /// Empty page: the end-of-catalog sentinel.
    EndOfCatalog,
    /// Fetch failed; the message is surfaced, the page stays retryable.
    Failed(String),
}

/// State machine deciding when a next-page request may be issued.
///
/// Ready (not fetching, more pages) -> Fetching -> Ready again, or Exhausted
/// once an empty page arrives. While Fetching, further triggers are no-ops,
/// so no two page fetches are ever in flight together. The page counter only
/// advances on a successful merge: a failed fetch retries the same page, and
/// the counter never decreases.
#[derive(Debug, Default)]
pub struct PageDriver {
    pages_loaded: u32,
    exhausted: bool,
    fetching: bool,
    last_error: Option<String>,
    epoch: u64,
}

impl PageDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to start the next page fetch.
    ///
    /// Returns `None` while a fetch is already in flight or the catalog is
    /// exhausted; the caller must not issue a request in that case.
    pub fn begin(&mut self) -> Option<PageRequest> {
        if self.fetching || self.exhausted {
            return None;
        }
        self.fetching = true;
        Some(PageRequest {
            page: self.pages_loaded + 1,
            epoch: self.epoch,
        })
    }

    /// Apply a fetch resolution.
    ///
    /// Returns `false` if the request predates a reset; the resolution must
    /// then be dropped entirely and no state has changed.
    pub fn finish(&mut self, request: PageRequest, resolution: PageResolution) -> bool {
        if request.epoch != self.epoch {
            return false;
        }
        self.fetching = false;
        match resolution {
            PageResolution::Merged => {
                self.pages_loaded = request.page;
                self.last_error = None;
            }
            PageResolution::EndOfCatalog => {
                self.exhausted = true;
                self.last_error = None;
            }
            PageResolution::Failed(message) => {
                self.last_error = Some(message);
            }
        }
        true
    }

    /// Back to the initial state: page 1 next, more pages assumed, not
    /// fetching. Any in-flight request becomes stale.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.pages_loaded = 0;
        self.exhausted = false;
        self.fetching = false;
        self.last_error = None;
    }

    pub fn status(&self) -> PaginationStatus {
        PaginationStatus {
            pages_loaded: self.pages_loaded,
            has_more: !self.exhausted,
            is_fetching: self.fetching,
            last_error: self.last_error.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_request_targets_page_one() {
        let mut driver = PageDriver::new();
        let request = driver.begin().expect("ready driver starts a fetch");
        assert_eq!(request.page, 1);
        assert!(driver.status().is_fetching);
    }

    #[test]
    fn no_second_request_while_fetching() {
        let mut driver = PageDriver::new();
        let request = driver.begin().unwrap();
        assert!(driver.begin().is_none());
        assert!(driver.begin().is_none());

        driver.finish(request, PageResolution::Merged);
        assert!(driver.begin().is_some());
    }

    #[test]
    fn pages_advance_only_on_merge() {
        let mut driver = PageDriver::new();
        let request = driver.begin().unwrap();
        driver.finish(request, PageResolution::Merged);
        assert_eq!(driver.status().pages_loaded, 1);

        let request = driver.begin().unwrap();
        assert_eq!(request.page, 2);
        driver.finish(request, PageResolution::Failed("boom".to_string()));

        let status = driver.status();
        assert_eq!(status.pages_loaded, 1);
        assert_eq!(status.last_error.as_deref(), Some("boom"));
        assert!(status.has_more);

        // Retry targets the same page that failed.
        let retry = driver.begin().unwrap();
        assert_eq!(retry.page, 2);
    }

    #[test]
    fn empty_page_exhausts_the_driver() {
        let mut driver = PageDriver::new();
        let request = driver.begin().unwrap();
        driver.finish(request, PageResolution::EndOfCatalog);

        assert!(!driver.status().has_more);
        assert!(driver.begin().is_none(), "exhausted driver issues no fetch");
    }

    #[test]
    fn merge_clears_a_previous_error() {
        let mut driver = PageDriver::new();
        let request = driver.begin().unwrap();
        driver.finish(request, PageResolution::Failed("boom".to_string()));

        let request = driver.begin().unwrap();
        driver.finish(request, PageResolution::Merged);
        assert_eq!(driver.status().last_error, None);
    }

    #[test]
    fn reset_makes_in_flight_requests_stale() {
        let mut driver = PageDriver::new();
        let request = driver.begin().unwrap();
        driver.reset();

        assert!(!driver.finish(request, PageResolution::Merged));
        let status = driver.status();
        assert_eq!(status.pages_loaded, 0);
        assert!(status.has_more);
        assert!(!status.is_fetching);

        // The fresh epoch starts over at page 1.
        assert_eq!(driver.begin().unwrap().page, 1);
    }

    #[test]
    fn reset_revives_an_exhausted_driver() {
        let mut driver = PageDriver::new();
        let request = driver.begin().unwrap();
        driver.finish(request, PageResolution::EndOfCatalog);
        assert!(driver.begin().is_none());

        driver.reset();
        assert!(driver.begin().is_some());
    }
}
