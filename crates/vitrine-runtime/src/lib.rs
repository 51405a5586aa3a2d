pub mod detail;
pub mod driver;
pub mod error;
pub mod events;
pub mod session;

pub use detail::DetailController;
pub use driver::{PageDriver, PageRequest, PageResolution};
pub use error::{Error, Result};
pub use events::SessionEvent;
pub use session::BrowseSession;
