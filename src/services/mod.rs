pub mod recommendations;
pub mod stats;

pub use recommendations::{suggest, Recommendation};
