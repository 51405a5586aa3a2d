//! Scripted in-memory catalog backend.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use vitrine_client::{CatalogSource, Error, Result};
use vitrine_types::{ProductDetail, ProductRecord};

enum PageScript {
    Page(Vec<ProductRecord>),
    Error(u16),
}

enum DetailScript {
    Detail(ProductDetail),
    Error(u16),
}

/// Handle that releases one held fetch. Releasing before the fetch arrives
/// is fine; the permit is stored.
pub struct Gate {
    notify: Arc<Notify>,
}

impl Gate {
    pub fn release(&self) {
        self.notify.notify_one();
    }
}

/// `CatalogSource` fake with scripted responses.
///
/// Page responses are consumed in call order; once the script runs out,
/// every further page fetch returns the empty end-of-catalog page. Detail
/// responses are keyed by id and reusable; an unscripted id fails with
/// status 404. Fetches can be held at a gate and released later to race a
/// slow resolution against a fast one.
#[derive(Default)]
pub struct ScriptedCatalog {
    pages: Mutex<VecDeque<PageScript>>,
    details: Mutex<HashMap<u64, DetailScript>>,
    page_gates: Mutex<VecDeque<Arc<Notify>>>,
    detail_gates: Mutex<HashMap<u64, Arc<Notify>>>,
    page_fetches: AtomicUsize,
    detail_fetches: AtomicUsize,
}

impl ScriptedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the next page fetch to return these records.
    pub fn page(self, records: Vec<ProductRecord>) -> Self {
        self.pages
            .lock()
            .unwrap()
            .push_back(PageScript::Page(records));
        self
    }

    /// Script the next page fetch to fail with this HTTP status.
    pub fn page_error(self, status: u16) -> Self {
        self.pages
            .lock()
            .unwrap()
            .push_back(PageScript::Error(status));
        self
    }

    /// Script the detail response for `detail.id`.
    pub fn detail(self, detail: ProductDetail) -> Self {
        self.details
            .lock()
            .unwrap()
            .insert(detail.id, DetailScript::Detail(detail));
        self
    }

    /// Script the detail fetch for `id` to fail with this HTTP status.
    pub fn detail_error(self, id: u64, status: u16) -> Self {
        self.details
            .lock()
            .unwrap()
            .insert(id, DetailScript::Error(status));
        self
    }

    /// Hold the next page fetch until the returned gate is released.
    pub fn stall_next_page(&self) -> Gate {
        let notify = Arc::new(Notify::new());
        self.page_gates.lock().unwrap().push_back(notify.clone());
        Gate { notify }
    }

    /// Hold the next detail fetch for `id` until the returned gate is
    /// released.
    pub fn stall_detail(&self, id: u64) -> Gate {
        let notify = Arc::new(Notify::new());
        self.detail_gates.lock().unwrap().insert(id, notify.clone());
        Gate { notify }
    }

    /// Number of page fetches issued so far.
    pub fn page_fetches(&self) -> usize {
        self.page_fetches.load(Ordering::SeqCst)
    }

    /// Number of detail fetches issued so far.
    pub fn detail_fetches(&self) -> usize {
        self.detail_fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for ScriptedCatalog {
    async fn fetch_page(&self, _page: u32) -> Result<Vec<ProductRecord>> {
        self.page_fetches.fetch_add(1, Ordering::SeqCst);

        let gate = self.page_gates.lock().unwrap().pop_front();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        let script = self.pages.lock().unwrap().pop_front();
        match script {
            Some(PageScript::Page(records)) => Ok(records),
            Some(PageScript::Error(status)) => Err(Error::Status(status)),
            None => Ok(Vec::new()),
        }
    }

    async fn fetch_by_id(&self, id: u64) -> Result<ProductDetail> {
        self.detail_fetches.fetch_add(1, Ordering::SeqCst);

        let gate = self.detail_gates.lock().unwrap().remove(&id);
        if let Some(gate) = gate {
            gate.notified().await;
        }

        let script = self.details.lock().unwrap();
        match script.get(&id) {
            Some(DetailScript::Detail(detail)) => Ok(detail.clone()),
            Some(DetailScript::Error(status)) => Err(Error::Status(*status)),
            None => Err(Error::Status(404)),
        }
    }
}
