//! Session reports with JSON persistence.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::session::StudyDeckResult;

/// A record of one finished study session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    /// Unique session identifier.
    pub session_id: Uuid,
    /// Title of the bank that was studied.
    pub deck: String,
    /// Name of the classifier that judged the replies.
    pub classifier: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub result: StudyDeckResult,
}

impl SessionReport {
    /// A report for a session that started at `started_at` and just ended.
    pub fn new(
        deck: impl Into<String>,
        classifier: impl Into<String>,
        started_at: DateTime<Utc>,
        result: StudyDeckResult,
    ) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            deck: deck.into(),
            classifier: classifier.into(),
            started_at,
            finished_at: Utc::now(),
            result,
        }
    }

    /// Share of attempts that were correct (1.0 when nothing was missed).
    pub fn first_try_rate(&self) -> f64 {
        if self.result.num_attempts == 0 {
            return 1.0;
        }
        self.result.num_questions as f64 / self.result.num_attempts as f64
    }

    /// `session-<id>.json`
    pub fn file_name(&self) -> String {
        format!("session-{}.json", self.session_id)
    }

    /// Save the report as JSON into `dir`, returning the written path.
    pub fn save_json(&self, dir: &Path) -> Result<PathBuf> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create report directory {}", dir.display()))?;
        let path = dir.join(self.file_name());
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(path)
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: SessionReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}
