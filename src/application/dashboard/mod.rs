//! Dashboard aggregation.

mod summary;

pub use summary::SummaryHandler;
