use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use super::archive::{ArchiveError, KeyValueStore, ReportArchive, SavedReport};
use super::catalog::{CatalogVariant, QuestionCatalog};
use super::domain::{SessionError, Subject};
use super::recorder::RecordOutcome;
use super::report::EvaluationReport;
use super::scoring::ScoreSummary;
use super::session::{EvaluationSession, NavigationStep, SessionSnapshot};

/// Identifier for a live evaluation held by the service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Request to open a session. Falls back to the service's default catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct StartSession {
    #[serde(default)]
    pub catalog: Option<CatalogVariant>,
    pub subjects: Vec<Subject>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StartedSession {
    pub session_id: SessionId,
    #[serde(flatten)]
    pub snapshot: SessionSnapshot,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdvanceOutcome {
    #[serde(flatten)]
    pub step: NavigationStep,
    /// Set when finishing a history-keeping catalog stored the report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_report_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    pub report: EvaluationReport,
    pub text: String,
}

/// A registered session plus whether its current completion is archived.
struct LiveSession {
    evaluation: EvaluationSession,
    archived: bool,
}

impl LiveSession {
    fn new(evaluation: EvaluationSession) -> Self {
        Self {
            evaluation,
            archived: false,
        }
    }
}

/// Holds live sessions and the saved-report archive behind one lock each, so
/// handlers stay `Send + Sync`. Archive writes happen after the session lock
/// is released.
pub struct RideAlongService<S> {
    catalogs: HashMap<CatalogVariant, Arc<QuestionCatalog>>,
    default_catalog: CatalogVariant,
    sessions: Mutex<HashMap<SessionId, LiveSession>>,
    archive: ReportArchive<S>,
    sequence: AtomicU64,
}

impl<S> RideAlongService<S>
where
    S: KeyValueStore + 'static,
{
    pub fn new(store: S, default_catalog: CatalogVariant, history_limit: usize) -> Self {
        let catalogs = CatalogVariant::ALL
            .into_iter()
            .map(|variant| (variant, Arc::new(QuestionCatalog::for_variant(variant))))
            .collect();

        Self {
            catalogs,
            default_catalog,
            sessions: Mutex::new(HashMap::new()),
            archive: ReportArchive::new(store, history_limit),
            sequence: AtomicU64::new(1),
        }
    }

    pub fn default_catalog(&self) -> CatalogVariant {
        self.default_catalog
    }

    pub fn catalog(&self, variant: CatalogVariant) -> Arc<QuestionCatalog> {
        match self.catalogs.get(&variant) {
            Some(catalog) => Arc::clone(catalog),
            None => Arc::new(QuestionCatalog::for_variant(variant)),
        }
    }

    pub fn archive(&self) -> &ReportArchive<S> {
        &self.archive
    }

    /// Opens a session after validating the subjects the catalog requires.
    pub fn start(&self, request: StartSession) -> Result<StartedSession, ServiceError> {
        let variant = request.catalog.unwrap_or(self.default_catalog);
        let mut session = EvaluationSession::new(self.catalog(variant));
        session.start(request.subjects)?;

        let session_id = self.next_session_id();
        let snapshot = session.snapshot();
        self.lock()?
            .insert(session_id.clone(), LiveSession::new(session));

        Ok(StartedSession {
            session_id,
            snapshot,
        })
    }

    pub fn snapshot(&self, id: &SessionId) -> Result<SessionSnapshot, ServiceError> {
        self.with_session(id, |session| Ok(session.snapshot()))
    }

    pub fn select(
        &self,
        id: &SessionId,
        question_id: &str,
        value: &str,
        free_text: Option<&str>,
    ) -> Result<RecordOutcome, ServiceError> {
        self.with_session(id, |session| {
            Ok(session.record_answer(question_id, value, free_text)?)
        })
    }

    pub fn set_free_text(
        &self,
        id: &SessionId,
        question_id: &str,
        text: &str,
    ) -> Result<bool, ServiceError> {
        self.with_session(id, |session| Ok(session.set_free_text(question_id, text)?))
    }

    /// Moves forward. Completing a catalog that keeps history saves the report;
    /// if that save fails, the next advance on the complete session retries it.
    pub fn advance(&self, id: &SessionId) -> Result<AdvanceOutcome, ServiceError> {
        let (step, pending) = self.with_live(id, |live| {
            let step = live.evaluation.advance();
            let pending = if step.done && !live.archived && live.evaluation.catalog().keeps_history() {
                live.archived = true;
                Some(live.evaluation.clone())
            } else {
                None
            };
            Ok((step, pending))
        })?;

        let Some(finished) = pending else {
            return Ok(AdvanceOutcome {
                step,
                saved_report_id: None,
            });
        };

        match self.archive.save(&finished) {
            Ok(saved) => Ok(AdvanceOutcome {
                step,
                saved_report_id: Some(saved.id),
            }),
            Err(err) => {
                tracing::warn!(session_id = %id, error = %err, "completed report not archived");
                if let Ok(mut sessions) = self.lock() {
                    if let Some(live) = sessions.get_mut(id) {
                        live.archived = false;
                    }
                }
                Err(err.into())
            }
        }
    }

    pub fn retreat(&self, id: &SessionId) -> Result<SessionSnapshot, ServiceError> {
        self.with_live(id, |live| {
            if live.evaluation.is_complete() {
                live.archived = false;
            }
            live.evaluation.retreat();
            Ok(live.evaluation.snapshot())
        })
    }

    /// Discards answers and restarts on the first question for the same people.
    pub fn reset(&self, id: &SessionId) -> Result<SessionSnapshot, ServiceError> {
        self.with_live(id, |live| {
            let subjects = live.evaluation.subjects().to_vec();
            live.evaluation.start(subjects)?;
            live.archived = false;
            Ok(live.evaluation.snapshot())
        })
    }

    pub fn close(&self, id: &SessionId) -> Result<(), ServiceError> {
        self.lock()?
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| ServiceError::SessionNotFound(id.0.clone()))
    }

    pub fn report(&self, id: &SessionId) -> Result<ReportView, ServiceError> {
        self.with_session(id, |session| {
            let report = session.generate_report();
            let text = report.render();
            Ok(ReportView { report, text })
        })
    }

    pub fn score(&self, id: &SessionId) -> Result<ScoreSummary, ServiceError> {
        self.with_session(id, |session| {
            session
                .score_summary()
                .ok_or_else(|| ServiceError::ScoringDisabled(session.catalog().name().to_string()))
        })
    }

    pub fn save_report(&self, id: &SessionId) -> Result<SavedReport, ServiceError> {
        let session = self.with_session(id, |session| Ok(session.clone()))?;
        Ok(self.archive.save(&session)?)
    }

    pub fn saved_reports(&self) -> Result<Vec<SavedReport>, ServiceError> {
        Ok(self.archive.list()?)
    }

    pub fn saved_report(&self, report_id: &str) -> Result<SavedReport, ServiceError> {
        self.archive
            .get(report_id)?
            .ok_or_else(|| ServiceError::ReportNotFound(report_id.to_string()))
    }

    pub fn delete_report(&self, report_id: &str) -> Result<(), ServiceError> {
        if self.archive.delete(report_id)? {
            Ok(())
        } else {
            Err(ServiceError::ReportNotFound(report_id.to_string()))
        }
    }

    fn next_session_id(&self) -> SessionId {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        SessionId(format!("ride-{id:06}"))
    }

    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<SessionId, LiveSession>>, ServiceError> {
        self.sessions.lock().map_err(|_| ServiceError::Unavailable)
    }

    fn with_live<T>(
        &self,
        id: &SessionId,
        apply: impl FnOnce(&mut LiveSession) -> Result<T, ServiceError>,
    ) -> Result<T, ServiceError> {
        let mut guard = self.lock()?;
        let live = guard
            .get_mut(id)
            .ok_or_else(|| ServiceError::SessionNotFound(id.0.clone()))?;
        apply(live)
    }

    fn with_session<T>(
        &self,
        id: &SessionId,
        apply: impl FnOnce(&mut EvaluationSession) -> Result<T, ServiceError>,
    ) -> Result<T, ServiceError> {
        self.with_live(id, |live| apply(&mut live.evaluation))
    }
}

/// Error raised by the ride-along service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("session '{0}' not found")]
    SessionNotFound(String),
    #[error("saved report '{0}' not found")]
    ReportNotFound(String),
    #[error("catalog '{0}' does not score answers")]
    ScoringDisabled(String),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Archive(#[from] ArchiveError),
    #[error("session store unavailable")]
    Unavailable,
}
