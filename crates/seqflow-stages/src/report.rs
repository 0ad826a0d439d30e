//! Stage reports collected by the runner
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageReport {
    /// Position in the pipeline, zero-based
    pub index: usize,
    pub id: String,
    pub in_type: String,
    pub out_type: String,
    pub in_len: usize,
    pub out_len: usize,
    pub started_at: DateTime<Utc>,
    pub latency_us: u64,
}

impl StageReport {
    /// Elements removed (or added, when negative) by this stage.
    pub fn dropped(&self) -> i64 {
        self.in_len as i64 - self.out_len as i64
    }
}
