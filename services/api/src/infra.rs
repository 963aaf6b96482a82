use depot_ops::config::ArchiveConfig;
use depot_ops::workflows::ride_along::{
    CatalogVariant, JsonFileStore, ReportArchive, Subject, SubjectRole,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_variant(raw: &str) -> Result<CatalogVariant, String> {
    CatalogVariant::parse(raw).ok_or_else(|| {
        let known: Vec<&str> = CatalogVariant::ALL.iter().map(|v| v.as_str()).collect();
        format!("unknown catalog '{raw}' (expected one of {})", known.join(", "))
    })
}

pub(crate) fn open_archive(config: &ArchiveConfig) -> ReportArchive<JsonFileStore> {
    ReportArchive::new(JsonFileStore::new(&config.path), config.history_limit)
}

/// Collects whichever names were given; the session decides which are required.
pub(crate) fn subjects_from(
    trainee: Option<String>,
    driver: Option<String>,
    trainer: Option<String>,
) -> Vec<Subject> {
    [
        (SubjectRole::Trainee, trainee),
        (SubjectRole::Driver, driver),
        (SubjectRole::Trainer, trainer),
    ]
    .into_iter()
    .filter_map(|(role, name)| name.map(|name| Subject::new(role, name)))
    .collect()
}
