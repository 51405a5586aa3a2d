pub mod criteria;
pub mod product;
pub mod status;

pub use criteria::{FilterCriteria, SortKey};
pub use product::{ProductDetail, ProductRecord, Rating};
pub use status::{DetailState, PaginationStatus};
