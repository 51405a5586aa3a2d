use serde::{Deserialize, Serialize};

/// Aggregated customer rating for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average score in [0, 5].
    pub rate: f64,
    /// Number of ratings the average is computed over.
    pub count: u64,
}

/// One catalog entry as delivered by a page fetch.
///
/// Records are immutable once fetched; a re-delivered id replaces the whole
/// record, it is never patched field by field. Field names follow the backing
/// service's wire format so serde can decode responses directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Stable, unique identifier.
    pub id: u64,
    pub title: String,
    pub category: String,
    /// Non-negative decimal price.
    pub price: f64,
    pub rating: Rating,
    /// Image reference/URI.
    pub image: String,
}

/// Full record for the focused detail view.
///
/// Superset of [`ProductRecord`]: adds the long-form description. Fetched
/// independently of the list and never merged back into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetail {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub price: f64,
    pub rating: Rating,
    pub image: String,
    pub description: String,
}

impl ProductDetail {
    /// The list-shaped view of this detail record.
    pub fn summary(&self) -> ProductRecord {
        ProductRecord {
            id: self.id,
            title: self.title.clone(),
            category: self.category.clone(),
            price: self.price,
            rating: self.rating.clone(),
            image: self.image.clone(),
        }
    }
}
