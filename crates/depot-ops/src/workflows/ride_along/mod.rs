//! Ride-along evaluation: a trainer or driver walks through a catalog of
//! observation questions after a shared route, and the session turns the
//! answers into a plain-text feedback report (plus a score on catalogs that
//! grade).
//!
//! Catalogs are data. Everything the report generator does differently for a
//! question is decided by the question's [`ReportRole`], so sessions never
//! compare question ids.

pub mod archive;
pub mod catalog;
pub mod domain;
pub mod recorder;
pub mod report;
pub mod router;
pub mod scoring;
pub mod script;
pub mod service;
pub mod session;

#[cfg(test)]
mod tests;

pub use archive::{
    ArchiveError, JsonFileStore, KeyValueStore, MemoryStore, ReportArchive, SavedReport,
    StoreError, ARCHIVE_KEY, DEFAULT_HISTORY_LIMIT,
};
pub use catalog::{CatalogError, CatalogProfile, CatalogVariant, ExclusivePair, QuestionCatalog};
pub use domain::{
    Answer, AnswerKind, AnswerOption, FreeTextField, QuestionDefinition, ReportRole,
    SessionError, Subject, SubjectRole,
};
pub use recorder::{AnswerMap, RecordOutcome, SelectionChange};
pub use report::{EvaluationReport, ReportSection, ReportSummary, SectionKind, SubjectLine};
pub use router::ride_along_router;
pub use scoring::{PerformanceLevel, ScoreSummary};
pub use script::{AnswerScript, ScriptError, ScriptRow};
pub use service::{RideAlongService, ServiceError, SessionId, StartSession};
pub use session::{EvaluationSession, NavigationStep, SessionSnapshot};
