pub mod sort;
pub mod timestamp;
pub mod validate;

pub use sort::{SortMode, UnknownSortMode};
pub use timestamp::format_timestamp;
pub use validate::{is_valid_identifier, is_valid_timestamp};
