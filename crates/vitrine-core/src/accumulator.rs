use std::collections::HashMap;

use vitrine_types::ProductRecord;

/// The ordered, deduplicated-by-id collection of every record fetched so far
/// in a browsing session.
///
/// Insertion order is arrival order across pages. A page that re-delivers an
/// id already present never creates a second entry: the later record replaces
/// the earlier one in its original slot (last-arrival-wins). The collection
/// grows monotonically; only [`Accumulator::clear`] empties it.
#[derive(Debug, Default)]
pub struct Accumulator {
    records: Vec<ProductRecord>,
    slots: HashMap<u64, usize>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one fetched page into the accumulated catalog.
    pub fn merge_page(&mut self, page: Vec<ProductRecord>) {
        for record in page {
            match self.slots.get(&record.id) {
                Some(&slot) => self.records[slot] = record,
                None => {
                    self.slots.insert(record.id, self.records.len());
                    self.records.push(record);
                }
            }
        }
    }

    /// All accumulated records in arrival order.
    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop everything for a fresh load.
    pub fn clear(&mut self) {
        self.records.clear();
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_types::Rating;

    fn record(id: u64, price: f64) -> ProductRecord {
        ProductRecord {
            id,
            title: format!("product-{id}"),
            category: "electronics".to_string(),
            price,
            rating: Rating {
                rate: 4.0,
                count: 10,
            },
            image: format!("http://example.com/{id}.png"),
        }
    }

    #[test]
    fn pages_append_in_arrival_order() {
        let mut acc = Accumulator::new();
        acc.merge_page(vec![record(1, 10.0), record(2, 20.0)]);
        acc.merge_page(vec![record(3, 30.0)]);

        let ids: Vec<u64> = acc.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn duplicate_id_never_increases_distinct_count() {
        let mut acc = Accumulator::new();
        acc.merge_page(vec![record(1, 10.0), record(2, 20.0)]);
        acc.merge_page(vec![record(2, 20.0), record(3, 30.0)]);

        assert_eq!(acc.len(), 3);
        let ids: Vec<u64> = acc.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn re_delivered_id_replaces_in_place() {
        let mut acc = Accumulator::new();
        acc.merge_page(vec![record(1, 10.0), record(2, 20.0)]);
        acc.merge_page(vec![record(1, 99.0)]);

        assert_eq!(acc.len(), 2);
        assert_eq!(acc.records()[0].id, 1);
        assert_eq!(acc.records()[0].price, 99.0);
        assert_eq!(acc.records()[1].id, 2);
    }

    #[test]
    fn clear_empties_the_catalog() {
        let mut acc = Accumulator::new();
        acc.merge_page(vec![record(1, 10.0)]);
        acc.clear();

        assert!(acc.is_empty());
        acc.merge_page(vec![record(1, 12.0)]);
        assert_eq!(acc.len(), 1);
        assert_eq!(acc.records()[0].price, 12.0);
    }
}
