use super::common::*;
use crate::workflows::ride_along::{Answer, EvaluationSession, SelectionChange, SessionError};

#[test]
fn single_choice_toggles_off_on_repeat() {
    let mut session = standard_session();

    let first = session.select_option("driving", "good").expect("selected");
    assert_eq!(first.change, SelectionChange::Selected);
    assert_eq!(
        session.answers().get("driving").and_then(Answer::value),
        Some("good")
    );

    let second = session.select_option("driving", "good").expect("toggled");
    assert_eq!(second.change, SelectionChange::Deselected);
    assert!(session.answers().get("driving").is_none());
}

#[test]
fn single_choice_keeps_exactly_one_value() {
    let mut session = standard_session();
    session.select_option("driving", "good").expect("good");
    session.select_option("driving", "bad").expect("bad");

    let answer = session.answers().get("driving").expect("answered");
    assert_eq!(answer.value(), Some("bad"));
    assert_eq!(answer.points(), 1);
    assert!(!answer.is_selected("good"));
}

#[test]
fn unknown_ids_are_rejected() {
    let mut session = standard_session();
    assert_eq!(
        session.select_option("parking_lot", "good"),
        Err(SessionError::UnknownQuestion("parking_lot".to_string()))
    );
    assert_eq!(
        session.select_option("driving", "great"),
        Err(SessionError::UnknownOption {
            question: "driving".to_string(),
            value: "great".to_string(),
        })
    );
    assert!(session.answers().is_empty());
}

#[test]
fn trigger_value_captures_free_text() {
    let mut session = standard_session();
    let outcome = session
        .record_answer("coached", "yes", Some("  9 "))
        .expect("recorded");
    assert!(outcome.free_text_visible);
    assert_eq!(
        session.answers().get("coached").and_then(Answer::free_text),
        Some("9")
    );

    let outcome = session
        .record_answer("coached", "no", Some("9"))
        .expect("switched");
    assert!(!outcome.free_text_visible);
    assert_eq!(
        session.answers().get("coached").and_then(Answer::free_text),
        None
    );
}

#[test]
fn exclusive_pair_drops_the_counterpart() {
    let mut session = standard_session();
    session
        .select_option("trainer_compliments", "slow_learner")
        .expect("slow");
    session
        .select_option("trainer_compliments", "reliable")
        .expect("reliable");

    let outcome = session
        .select_option("trainer_compliments", "quick_learner")
        .expect("quick");
    assert_eq!(outcome.change, SelectionChange::ConflictResolved);
    assert_eq!(outcome.removed, Some("slow_learner"));

    let answer = session
        .answers()
        .get("trainer_compliments")
        .expect("answered");
    assert!(answer.is_selected("quick_learner"));
    assert!(answer.is_selected("reliable"));
    assert!(!answer.is_selected("slow_learner"));
}

#[test]
fn multi_select_removes_answer_when_emptied() {
    let mut session = standard_session();
    session
        .select_option("first_day_issues", "route_issues")
        .expect("selected");
    let outcome = session
        .select_option("first_day_issues", "route_issues")
        .expect("deselected");
    assert_eq!(outcome.change, SelectionChange::Deselected);
    assert!(session.answers().get("first_day_issues").is_none());
}

#[test]
fn multi_select_keeps_free_text_across_toggles() {
    let mut session = standard_session();
    session
        .record_answer("first_day_issues", "custom_issue", Some("van broke down"))
        .expect("custom");
    session
        .record_answer("first_day_issues", "route_issues", None)
        .expect("route");
    session
        .record_answer("first_day_issues", "custom_issue", None)
        .expect("custom off");
    assert!(!session.free_text_visible("first_day_issues"));

    session
        .record_answer("first_day_issues", "custom_issue", Some(""))
        .expect("custom on");
    assert!(session.free_text_visible("first_day_issues"));
    assert_eq!(
        session
            .answers()
            .get("first_day_issues")
            .and_then(Answer::free_text),
        Some("van broke down")
    );
}

#[test]
fn free_text_edits_need_an_answer() {
    let mut session = standard_session();
    assert_eq!(session.set_free_text("coached", "12"), Ok(false));
    assert!(session.answers().is_empty());

    session.select_option("coached", "yes").expect("yes");
    assert_eq!(session.set_free_text("coached", " 12 "), Ok(true));
    assert_eq!(
        session.answers().get("coached").and_then(Answer::free_text),
        Some("12")
    );

    assert_eq!(session.set_free_text("coached", "   "), Ok(true));
    assert_eq!(
        session.answers().get("coached").and_then(Answer::free_text),
        None
    );

    assert_eq!(
        session.set_free_text("driving", "fast"),
        Err(SessionError::NoFreeTextField("driving".to_string()))
    );
}

#[test]
fn note_questions_toggle_include() {
    let mut session = EvaluationSession::new(note_catalog());
    session.start(trainee("Alex")).expect("started");

    let outcome = session
        .record_answer("route_note", "include", Some("Gate code changed"))
        .expect("included");
    assert_eq!(outcome.change, SelectionChange::Selected);
    assert!(outcome.free_text_visible);
    let answer = session.answers().get("route_note").expect("note stored");
    assert_eq!(answer.points(), 0);
    assert_eq!(answer.free_text(), Some("Gate code changed"));

    let outcome = session
        .select_option("route_note", "include")
        .expect("excluded");
    assert_eq!(outcome.change, SelectionChange::Deselected);
    assert!(session.answers().is_empty());
}

#[test]
fn free_text_edits_need_the_trigger_selected() {
    let mut session = standard_session();
    session.select_option("coached", "no").expect("no");
    assert_eq!(session.set_free_text("coached", "9"), Ok(false));
    assert_eq!(
        session.answers().get("coached").and_then(Answer::free_text),
        None
    );

    session
        .record_answer("coached", "yes", Some("9"))
        .expect("yes");
    assert_eq!(
        session.answers().get("coached").and_then(Answer::free_text),
        Some("9")
    );

    session
        .select_option("first_day_issues", "route_issues")
        .expect("route");
    assert_eq!(session.set_free_text("first_day_issues", "flat tire"), Ok(false));
    session
        .select_option("first_day_issues", "custom_issue")
        .expect("custom");
    assert_eq!(session.set_free_text("first_day_issues", "flat tire"), Ok(true));
}
