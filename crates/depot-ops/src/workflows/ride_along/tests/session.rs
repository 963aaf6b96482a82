use super::common::*;
use crate::workflows::ride_along::{
    CatalogVariant, EvaluationSession, SessionError, Subject, SubjectRole,
};

#[test]
fn start_requires_every_catalog_subject() {
    let mut session = EvaluationSession::new(catalog(CatalogVariant::Standard));
    let err = session.start(trainee("   ")).expect_err("blank name rejected");
    assert_eq!(err, SessionError::MissingIdentity(SubjectRole::Trainee));
    assert_eq!(err.to_string(), "Trainee name is required");

    let mut session = EvaluationSession::new(catalog(CatalogVariant::DriverTrainer));
    let err = session
        .start(vec![Subject::new(SubjectRole::Driver, "Jordan")])
        .expect_err("trainer missing");
    assert_eq!(err, SessionError::MissingIdentity(SubjectRole::Trainer));
}

#[test]
fn start_trims_names_and_ignores_unrequested_roles() {
    let mut session = EvaluationSession::new(catalog(CatalogVariant::Standard));
    session
        .start(vec![
            Subject::new(SubjectRole::Trainer, "Sam"),
            Subject::new(SubjectRole::Trainee, "  Alex "),
        ])
        .expect("trainee present");
    assert_eq!(
        session.subjects(),
        &[Subject::new(SubjectRole::Trainee, "Alex")]
    );
}

#[test]
fn start_clears_previous_progress() {
    let mut session = standard_session();
    session.select_option("driving", "good").expect("recorded");
    session.advance();
    session.advance();

    session.start(trainee("Riley")).expect("restart");
    assert_eq!(session.current_index(), 0);
    assert!(session.answers().is_empty());
    assert_eq!(session.subjects()[0].name, "Riley");
}

#[test]
fn navigation_stays_within_bounds() {
    let mut session = standard_session();
    let len = session.catalog().len();

    assert_eq!(session.retreat(), 0);
    assert_eq!(session.current_index(), 0);

    for expected in 1..len {
        let step = session.advance();
        assert_eq!(step.index, expected);
        assert!(!step.done);
    }

    let step = session.advance();
    assert!(step.done);
    assert_eq!(step.index, len);
    assert!(session.is_complete());
    assert!(session.current_question().is_none());

    let again = session.advance();
    assert!(again.done);
    assert_eq!(session.current_index(), len);

    assert_eq!(session.retreat(), len - 1);
    assert!(!session.is_complete());
    assert_eq!(
        session.current_question().map(|q| q.id),
        Some("more_details")
    );
}

#[test]
fn advance_never_requires_an_answer() {
    let mut session = standard_session();
    assert_eq!(session.current_question().map(|q| q.id), Some("coached"));
    session.advance();
    assert_eq!(session.current_question().map(|q| q.id), Some("driving"));
    assert!(session.answers().is_empty());
}

#[test]
fn reset_forgets_subjects_and_answers() {
    let mut session = standard_session();
    session.select_option("driving", "good").expect("recorded");
    session.advance();
    session.reset();

    assert!(session.subjects().is_empty());
    assert!(session.answers().is_empty());
    assert_eq!(session.current_index(), 0);
}

#[test]
fn snapshot_describes_the_current_question() {
    let mut session = standard_session();
    session
        .record_answer("coached", "yes", Some(" 14 "))
        .expect("recorded");

    let snapshot = session.snapshot();
    assert_eq!(snapshot.catalog, "standard");
    assert_eq!(snapshot.total_questions, 27);
    assert!(!snapshot.complete);

    let question = snapshot.current_question.expect("first question");
    assert_eq!(question.id, "coached");
    assert_eq!(
        question.instruction,
        "Was this an emergency interruption during the driver's route?"
    );
    assert_eq!(
        question
            .options
            .iter()
            .filter(|option| option.selected)
            .map(|option| option.value)
            .collect::<Vec<_>>(),
        vec!["yes"]
    );
    let field = question.free_text.expect("stops field");
    assert!(field.visible);
    assert_eq!(field.field_id, "stops-behind");
    assert_eq!(field.text.as_deref(), Some("14"));
}

#[test]
fn instruction_falls_back_to_kind_hint() {
    let session = standard_session();
    let driving = session.catalog().find("driving").expect("driving");
    assert_eq!(driving.instruction(), "Select the one that applies");
    let feedback = session
        .catalog()
        .find("trainer_compliments")
        .expect("feedback");
    assert_eq!(
        feedback.instruction(),
        "Trainer Feedback (Select all that apply)"
    );
}

#[test]
fn score_summary_only_on_scoring_catalogs() {
    let session = standard_session();
    assert!(session.score_summary().is_some());

    let mut legacy = driver_trainer_session();
    legacy.select_option("driving", "good").expect("recorded");
    assert!(legacy.score_summary().is_none());
}
