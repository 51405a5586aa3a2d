use vitrine_types::{FilterCriteria, ProductRecord, SortKey};

/// Derive the display list from the accumulated catalog.
///
/// Applies the conjunctive filter, then a stable sort by the sort key; tied
/// keys keep arrival order. This is a full recomputation from a snapshot
/// every time, never an incremental patch of the previous output.
pub fn project(
    records: &[ProductRecord],
    criteria: &FilterCriteria,
    sort: SortKey,
) -> Vec<ProductRecord> {
    let mut display: Vec<ProductRecord> = records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect();

    match sort {
        SortKey::PriceAscending => display.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDescending => display.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::RatingDescending => display.sort_by(|a, b| b.rating.rate.total_cmp(&a.rating.rate)),
    }

    display
}
