//! Device health-data ingestion.

mod ingest;

pub use ingest::{IngestCommand, IngestHandler, IngestResult};
