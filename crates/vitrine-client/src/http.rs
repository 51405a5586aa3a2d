use async_trait::async_trait;
use serde::de::DeserializeOwned;

use vitrine_types::{ProductDetail, ProductRecord};

use crate::config::CatalogConfig;
use crate::error::{Error, Result};
use crate::source::CatalogSource;

/// [`CatalogSource`] backed by the remote catalog's HTTP API.
///
/// Pages are requested as `GET {base}/products?limit={page_size}&page={n}`,
/// details as `GET {base}/products/{id}`.
pub struct HttpCatalog {
    http: reqwest::Client,
    config: CatalogConfig,
}

impl HttpCatalog {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Use an existing reqwest client (shared connection pool, custom
    /// timeouts set by the caller).
    pub fn with_client(http: reqwest::Client, config: CatalogConfig) -> Self {
        Self { http, config }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }

        response.json::<T>().await.map_err(Error::from)
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch_page(&self, page: u32) -> Result<Vec<ProductRecord>> {
        let url = format!(
            "{}/products?limit={}&page={}",
            self.config.base_url, self.config.page_size, page
        );
        self.get_json(url).await
    }

    async fn fetch_by_id(&self, id: u64) -> Result<ProductDetail> {
        let url = format!("{}/products/{}", self.config.base_url, id);
        self.get_json(url).await
    }
}
