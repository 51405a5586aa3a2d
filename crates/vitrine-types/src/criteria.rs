use serde::{Deserialize, Serialize};

use crate::product::ProductRecord;

/// User-controlled narrowing of the accumulated catalog.
///
/// Every field is independently optional; an absent field imposes no
/// constraint on that dimension. A record must satisfy all present criteria
/// simultaneously (conjunctive filter).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against the record category.
    pub category: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<f64>,
    /// Inclusive upper price bound.
    pub max_price: Option<f64>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn min_price(mut self, min_price: f64) -> Self {
        self.min_price = Some(min_price);
        self
    }

    pub fn max_price(mut self, max_price: f64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    /// Build criteria from raw widget input.
    ///
    /// Empty strings and non-numeric price text normalize to "criterion
    /// absent". Malformed input is never an error here.
    pub fn from_inputs(category: &str, min_price: &str, max_price: &str) -> Self {
        Self {
            category: non_empty(category),
            min_price: parse_bound(min_price),
            max_price: parse_bound(max_price),
        }
    }

    /// Whether a record satisfies every active criterion.
    pub fn matches(&self, record: &ProductRecord) -> bool {
        if let Some(category) = &self.category {
            let needle = category.to_lowercase();
            if !record.category.to_lowercase().contains(&needle) {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if record.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if record.price > max {
                return false;
            }
        }
        true
    }

    /// True when no criterion is active (the full catalog passes).
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.min_price.is_none() && self.max_price.is_none()
    }
}

fn non_empty(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_bound(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok()
}

/// Ordering applied to the filtered candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    #[serde(rename = "price-asc")]
    PriceAscending,
    #[serde(rename = "price-desc")]
    PriceDescending,
    #[serde(rename = "rating-desc")]
    RatingDescending,
}

impl Default for SortKey {
    fn default() -> Self {
        Self::PriceAscending
    }
}

impl SortKey {
    /// Map a widget value to a sort key, falling back to the default for
    /// anything unrecognized.
    pub fn from_label(label: &str) -> Self {
        match label {
            "price-desc" => Self::PriceDescending,
            "rating-desc" => Self::RatingDescending,
            _ => Self::PriceAscending,
        }
    }
}
