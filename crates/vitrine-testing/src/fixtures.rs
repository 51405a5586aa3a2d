//! Deterministic product data for tests.

use vitrine_types::{ProductDetail, ProductRecord, Rating};

/// A record with the given id, category and price; rating fields are derived
/// from the id so assertions stay deterministic.
pub fn product(id: u64, category: &str, price: f64) -> ProductRecord {
    product_rated(id, category, price, 4.0)
}

/// Same as [`product`] with an explicit rating score.
pub fn product_rated(id: u64, category: &str, price: f64, rate: f64) -> ProductRecord {
    ProductRecord {
        id,
        title: format!("Product {id}"),
        category: category.to_string(),
        price,
        rating: Rating {
            rate,
            count: 100 + id,
        },
        image: format!("https://img.example.com/{id}.png"),
    }
}

/// The detail record the backend would serve for `record`.
pub fn detail_for(record: &ProductRecord) -> ProductDetail {
    let summary = record.clone();
    ProductDetail {
        id: summary.id,
        title: summary.title,
        category: summary.category,
        price: summary.price,
        rating: summary.rating,
        image: summary.image,
        description: format!("Long description for product {}", record.id),
    }
}

/// Shorthand for [`detail_for`] on a generated [`product`].
pub fn detail(id: u64) -> ProductDetail {
    detail_for(&product(id, "electronics", id as f64 * 7.5))
}

/// A deterministic storefront of `count` records: ids 1..=count, categories
/// alternating between clothing and electronics, price `id * 7.5`.
pub fn storefront(count: u64) -> Vec<ProductRecord> {
    (1..=count)
        .map(|id| {
            let category = if id % 2 == 0 {
                "electronics"
            } else {
                "men's clothing"
            };
            product(id, category, id as f64 * 7.5)
        })
        .collect()
}
