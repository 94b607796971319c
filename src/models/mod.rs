pub mod catalog;
mod rating;
mod watch_entry;

pub use catalog::CATALOG;
pub use rating::Rating;
pub use watch_entry::{parse_watch_date, NewWatchEntry, WatchEntry, DATE_FORMAT};
