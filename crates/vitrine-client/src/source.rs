use async_trait::async_trait;

use vitrine_types::{ProductDetail, ProductRecord};

use crate::error::Result;

/// Capability contract the browsing core needs from a catalog backend:
/// fetch page N, fetch one record by id. Implemented over HTTP by
/// [`crate::HttpCatalog`] and by scripted fakes in tests.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch one page of records. An empty page is a valid result meaning
    /// end-of-catalog, not an error.
    async fn fetch_page(&self, page: u32) -> Result<Vec<ProductRecord>>;

    /// Fetch the full detail record for a single product.
    async fn fetch_by_id(&self, id: u64) -> Result<ProductDetail>;
}
