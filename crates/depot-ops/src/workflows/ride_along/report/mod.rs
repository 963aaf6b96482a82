mod generator;
pub mod views;

pub use generator::generate;
pub use views::{EvaluationReport, ReportSection, ReportSummary, SectionKind, SubjectLine};
