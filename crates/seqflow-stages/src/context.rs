//! Run Context: per-execution settings for the pipeline runner
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunContext {
    /// Correlates the log lines of one run
    pub trace_id: String,
    /// Optional human-readable name, echoed in logs
    pub label: Option<String>,
    /// Record a `StageReport` per executed stage
    pub collect_reports: bool,
}

impl Default for RunContext {
    fn default() -> Self {
        Self {
            trace_id: uuid::Uuid::new_v4().to_string(),
            label: None,
            collect_reports: false,
        }
    }
}

impl RunContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from JSON; missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = trace_id.into();
        self
    }

    pub fn collect_reports(mut self, enabled: bool) -> Self {
        self.collect_reports = enabled;
        self
    }

    pub(crate) fn label_or_default(&self) -> &str {
        self.label.as_deref().unwrap_or("pipeline")
    }
}
