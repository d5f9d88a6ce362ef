pub mod category;
pub mod event;
pub mod store;

pub use category::{first_match_color, Categories};
pub use event::EventRecord;
pub use store::{EventSet, LoadResult, Store};
