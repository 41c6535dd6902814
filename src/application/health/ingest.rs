//! IngestHandler - one device payload in, three tables updated.
//!
//! Ordering matters: the device row is upserted first because the daily
//! row and the samples reference its id. Re-sending the same payload is
//! idempotent for the device and daily rows; samples are append-only
//! history and accumulate.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::health::{DailyAggregates, IncomingSample};
use crate::domain::DomainError;
use crate::ports::HealthRepository;

/// One ingest payload as submitted by a device.
#[derive(Debug, Clone)]
pub struct IngestCommand {
    pub user_id: i64,
    pub device_uuid: String,
    pub source: String,
    pub platform: Option<String>,
    pub model: Option<String>,
    pub date: NaiveDate,
    pub timezone: Option<String>,
    pub aggregates: DailyAggregates,
    pub samples: Vec<IncomingSample>,
}

#[derive(Debug, Clone, Copy)]
pub struct IngestResult {
    pub device_id: i64,
    pub samples_inserted: u64,
    pub samples_dropped: u64,
}

pub struct IngestHandler {
    health: Arc<dyn HealthRepository>,
}

impl IngestHandler {
    pub fn new(health: Arc<dyn HealthRepository>) -> Self {
        Self { health }
    }

    pub async fn handle(&self, cmd: IngestCommand) -> Result<IngestResult, DomainError> {
        if cmd.device_uuid.trim().is_empty() {
            return Err(DomainError::validation(
                "device_uuid",
                "Device UUID is required",
            ));
        }
        if cmd.source.trim().is_empty() {
            return Err(DomainError::validation("source", "Source is required"));
        }

        let device_id = self
            .health
            .upsert_device(
                cmd.user_id,
                &cmd.device_uuid,
                &cmd.source,
                cmd.platform.as_deref(),
                cmd.model.as_deref(),
            )
            .await?;

        self.health
            .upsert_daily(
                cmd.user_id,
                device_id,
                &cmd.source,
                cmd.date,
                cmd.timezone.as_deref(),
                &cmd.aggregates,
            )
            .await?;

        let total = cmd.samples.len() as u64;
        let valid: Vec<_> = cmd
            .samples
            .into_iter()
            .filter_map(IncomingSample::into_valid)
            .collect();
        let samples_inserted = if valid.is_empty() {
            0
        } else {
            self.health
                .insert_samples(cmd.user_id, device_id, &cmd.source, &valid)
                .await?
        };
        let samples_dropped = total - valid.len() as u64;
        if samples_dropped > 0 {
            debug!(
                user_id = cmd.user_id,
                device_id, samples_dropped, "incomplete samples dropped"
            );
        }

        Ok(IngestResult {
            device_id,
            samples_inserted,
            samples_dropped,
        })
    }
}
