//! vitrine-sdk: client-side catalog browsing.
//!
//! # Overview
//!
//! `vitrine-sdk` is the public facade over the vitrine crates. It retrieves
//! product records page-by-page from a remote catalog service, accumulates
//! them into a growing in-memory list, derives the displayed subset from
//! user-controlled filter and sort criteria, advances pagination on
//! scroll-proximity signals, and fetches a single product's full detail
//! record on demand. Rendering is entirely the caller's business: the SDK
//! exposes snapshots and a change-notification stream, not widgets.
//!
//! # Quickstart
//!
//! ```no_run
//! use vitrine_sdk::{Client, types::{CatalogConfig, FilterCriteria, SortKey}};
//! use futures::stream::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::connect(CatalogConfig::new("https://fakestoreapi.com"))?;
//! let (browse, mut events) = client.browse();
//!
//! // Initial load, then narrow and reorder the view.
//! browse.load_next_page().await?;
//! browse.set_filter(FilterCriteria::new().category("clothing").min_price(10.0));
//! browse.set_sort(SortKey::PriceDescending);
//!
//! while let Some(event) = events.next().await {
//!     println!("session changed: {:?}", event);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! This SDK acts as a facade over:
//! - `vitrine-types`: domain models (ProductRecord, FilterCriteria, ...)
//! - `vitrine-client`: the CatalogSource contract and its HTTP implementation
//! - `vitrine-core`: pure accumulation and filter/sort projection
//! - `vitrine-runtime`: the pagination and detail-fetch state machines

pub mod client;
pub mod error;
pub mod watch;

// Public facade
pub use client::{BrowseHandle, Client};
pub use error::{Error, Result};
pub use watch::{LiveStream, SessionEvent};

/// Re-exported domain types used across the public API.
pub mod types {
    pub use vitrine_client::{CatalogConfig, CatalogSource};
    pub use vitrine_types::{
        DetailState, FilterCriteria, PaginationStatus, ProductDetail, ProductRecord, Rating,
        SortKey,
    };
}
