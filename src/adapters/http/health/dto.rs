//! HTTP DTOs for health-data ingestion.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::health::IngestCommand;
use crate::domain::health::{DailyAggregates, IncomingSample};

#[derive(Debug, Clone, Deserialize)]
pub struct IngestRequest {
    pub device_uuid: String,
    pub source: String,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    /// Defaults to today when absent.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub aggregates: DailyAggregates,
    #[serde(default)]
    pub samples: Vec<IncomingSample>,
}

impl IngestRequest {
    pub fn into_command(self, user_id: i64) -> IngestCommand {
        IngestCommand {
            user_id,
            device_uuid: self.device_uuid,
            source: self.source,
            platform: self.platform,
            model: self.model,
            date: self
                .date
                .unwrap_or_else(|| chrono::Local::now().date_naive()),
            timezone: self.timezone,
            aggregates: self.aggregates,
            samples: self.samples,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyQuery {
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub struct IngestResponse {
    pub device_id: i64,
    pub samples_inserted: u64,
    pub samples_dropped: u64,
}
