pub mod config;
pub mod error;
pub mod http;
pub mod source;

pub use config::CatalogConfig;
pub use error::{Error, Result};
pub use http::HttpCatalog;
pub use source::CatalogSource;
