mod store;

pub use store::{JsonFileStore, KeyValueStore, MemoryStore, StoreError};

use super::domain::Subject;
use super::recorder::AnswerMap;
use super::session::EvaluationSession;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Store key holding the saved-report list.
pub const ARCHIVE_KEY: &str = "rideAlongReports";
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// A finished report as kept in history. Never edited after it is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedReport {
    pub id: String,
    pub subjects: Vec<Subject>,
    pub created_at: DateTime<Utc>,
    pub catalog: String,
    pub report_text: String,
    pub answers: AnswerMap,
}

impl SavedReport {
    /// Subject names joined for list displays.
    pub fn subject_names(&self) -> String {
        if self.subjects.is_empty() {
            return "Not specified".to_string();
        }
        self.subjects
            .iter()
            .map(|subject| format!("{}: {}", subject.role.label(), subject.name))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("saved report history is unreadable: {0}")]
    Corrupt(#[source] serde_json::Error),
    #[error("failed to encode saved report history: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to export saved reports: {0}")]
    Export(#[from] csv::Error),
    #[error("failed to flush export: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    id: &'a str,
    created_at: String,
    catalog: &'a str,
    subjects: String,
    report_text: &'a str,
}

/// Capped, most-recent-first history of saved reports.
pub struct ReportArchive<S> {
    store: S,
    limit: usize,
}

impl<S> ReportArchive<S>
where
    S: KeyValueStore,
{
    pub fn new(store: S, limit: usize) -> Self {
        Self {
            store,
            limit: limit.max(1),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn save(&self, session: &EvaluationSession) -> Result<SavedReport, ArchiveError> {
        self.save_at(session, Utc::now())
    }

    /// Saves the session's current report, stamping it with `created_at`.
    pub fn save_at(
        &self,
        session: &EvaluationSession,
        created_at: DateTime<Utc>,
    ) -> Result<SavedReport, ArchiveError> {
        let mut reports = self.list()?;
        let report = SavedReport {
            id: next_id(&reports, created_at),
            subjects: session.subjects().to_vec(),
            created_at,
            catalog: session.catalog().name().to_string(),
            report_text: session.report_text(),
            answers: session.answers().clone(),
        };

        reports.insert(0, report.clone());
        reports.truncate(self.limit);
        self.write(&reports)?;

        tracing::info!(
            report_id = %report.id,
            catalog = %report.catalog,
            retained = reports.len(),
            "ride-along report saved"
        );
        Ok(report)
    }

    pub fn list(&self) -> Result<Vec<SavedReport>, ArchiveError> {
        match self.store.get(ARCHIVE_KEY)? {
            Some(value) => serde_json::from_value(value).map_err(ArchiveError::Corrupt),
            None => Ok(Vec::new()),
        }
    }

    pub fn get(&self, id: &str) -> Result<Option<SavedReport>, ArchiveError> {
        Ok(self.list()?.into_iter().find(|report| report.id == id))
    }

    /// Removes one report. Returns whether anything was deleted.
    pub fn delete(&self, id: &str) -> Result<bool, ArchiveError> {
        let mut reports = self.list()?;
        let before = reports.len();
        reports.retain(|report| report.id != id);
        if reports.len() == before {
            return Ok(false);
        }
        self.write(&reports)?;
        tracing::info!(report_id = %id, "ride-along report deleted");
        Ok(true)
    }

    pub fn clear(&self) -> Result<(), ArchiveError> {
        self.store.remove(ARCHIVE_KEY)?;
        Ok(())
    }

    /// Writes every saved report as CSV and returns how many rows were written.
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<usize, ArchiveError> {
        let reports = self.list()?;
        let mut csv_writer = csv::Writer::from_writer(writer);
        for report in &reports {
            csv_writer.serialize(ExportRow {
                id: &report.id,
                created_at: report.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
                catalog: &report.catalog,
                subjects: report.subject_names(),
                report_text: &report.report_text,
            })?;
        }
        csv_writer.flush()?;
        Ok(reports.len())
    }

    fn write(&self, reports: &[SavedReport]) -> Result<(), ArchiveError> {
        let value = serde_json::to_value(reports).map_err(ArchiveError::Encode)?;
        self.store.set(ARCHIVE_KEY, value)?;
        Ok(())
    }
}

/// Millisecond timestamp ids, bumped past any existing id so two saves in the
/// same millisecond stay distinct.
fn next_id(existing: &[SavedReport], created_at: DateTime<Utc>) -> String {
    let candidate = created_at.timestamp_millis();
    let newest = existing
        .iter()
        .filter_map(|report| report.id.parse::<i64>().ok())
        .max();
    match newest {
        Some(newest) if newest >= candidate => (newest + 1).to_string(),
        _ => candidate.to_string(),
    }
}
