/// Connection settings for the remote catalog service.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base endpoint, e.g. `https://fakestoreapi.com`.
    pub base_url: String,
    /// Records requested per page.
    pub page_size: u32,
}

const DEFAULT_PAGE_SIZE: u32 = 10;

impl CatalogConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }
}
