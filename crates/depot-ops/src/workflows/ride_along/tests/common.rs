use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::workflows::ride_along::domain::{AnswerOption, QuestionDefinition, ReportRole};
use crate::workflows::ride_along::{
    CatalogProfile, CatalogVariant, EvaluationSession, MemoryStore, QuestionCatalog,
    RideAlongService, Subject, SubjectRole,
};

pub(super) fn catalog(variant: CatalogVariant) -> Arc<QuestionCatalog> {
    Arc::new(QuestionCatalog::for_variant(variant))
}

pub(super) fn trainee(name: &str) -> Vec<Subject> {
    vec![Subject::new(SubjectRole::Trainee, name)]
}

pub(super) fn driver_and_trainer() -> Vec<Subject> {
    vec![
        Subject::new(SubjectRole::Driver, "Jordan"),
        Subject::new(SubjectRole::Trainer, "Sam"),
    ]
}

/// Standard-catalog session for trainee "Alex", positioned on the first question.
pub(super) fn standard_session() -> EvaluationSession {
    let mut session = EvaluationSession::new(catalog(CatalogVariant::Standard));
    session.start(trainee("Alex")).expect("trainee accepted");
    session
}

pub(super) fn driver_trainer_session() -> EvaluationSession {
    let mut session = EvaluationSession::new(catalog(CatalogVariant::DriverTrainer));
    session
        .start(driver_and_trainer())
        .expect("driver and trainer accepted");
    session
}

/// Small custom catalog exercising the note kind alongside a graded question.
pub(super) fn note_catalog() -> Arc<QuestionCatalog> {
    let profile = CatalogProfile {
        name: "route-notes".to_string(),
        subject_roles: vec![SubjectRole::Trainee],
        scoring: true,
        keeps_history: false,
    };
    let questions = vec![
        QuestionDefinition::single(
            "driving",
            "Driving Aptitudes",
            "Driving Aptitudes",
            ReportRole::Graded,
            vec![
                AnswerOption::new("good", "✅ Good driver.", 5),
                AnswerOption::new("bad", "❌ Weak driver.", 1),
            ],
        )
        .scored(),
        QuestionDefinition::note(
            "route_note",
            "Route Note",
            "Anything else worth passing on?",
            "Note",
            "route-note",
        ),
    ];
    Arc::new(QuestionCatalog::new(profile, questions, Vec::new()).expect("valid catalog"))
}

pub(super) fn build_service() -> RideAlongService<MemoryStore> {
    RideAlongService::new(MemoryStore::new(), CatalogVariant::Standard, 50)
}

pub(super) fn header(subjects: &[(&str, &str)]) -> String {
    let mut out = String::from("RIDE-ALONG FEEDBACK\n");
    for (role, name) in subjects {
        out.push_str(&format!("{role}: {name}\n"));
    }
    out.push_str(&"=".repeat(42));
    out
}

pub(super) fn rule() -> String {
    "-".repeat(57)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
