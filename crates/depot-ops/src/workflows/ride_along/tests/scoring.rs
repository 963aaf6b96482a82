use super::common::*;
use crate::workflows::ride_along::{PerformanceLevel, ScoreSummary};

#[test]
fn empty_session_scores_zero() {
    let session = standard_session();
    let summary = session.score_summary().expect("standard scores");
    assert_eq!(summary.total, 0);
    assert_eq!(summary.max, 110);
    assert_eq!(summary.percentage, 0);
    assert_eq!(summary.level, PerformanceLevel::Unsatisfactory);
    assert!(summary.attention_areas.is_empty());
}

#[test]
fn scored_single_answers_sum_their_points() {
    let mut session = standard_session();
    session.select_option("driving", "good").expect("driving");
    session.select_option("language", "bad").expect("language");

    let summary = session.score_summary().expect("summary");
    assert_eq!(summary.total, 6);
    assert_eq!(summary.percentage, 5);
    assert_eq!(summary.attention_areas, vec!["Language Challenges"]);
    assert_eq!(
        summary.recommendations()[0],
        "Areas requiring immediate attention: Language Challenges"
    );
}

#[test]
fn selections_and_unscored_questions_never_count() {
    let mut session = standard_session();
    session.select_option("driving", "good").expect("driving");
    let before = session.score_summary().expect("summary").total;

    session
        .select_option("trainer_compliments", "quick_learner")
        .expect("feedback");
    session
        .select_option("handled_challenges", "good")
        .expect("special deliveries");
    session.select_option("more_details", "yes").expect("accuracy");
    session.select_option("coached", "yes").expect("emergency");

    assert_eq!(session.score_summary().expect("summary").total, before);
}

#[test]
fn perfect_session_is_outstanding() {
    let mut session = standard_session();
    let scored: Vec<(&'static str, &'static str)> = session
        .catalog()
        .scored_questions()
        .map(|question| {
            let best = question
                .options
                .iter()
                .max_by_key(|option| option.points)
                .expect("scored question has options");
            (question.id, best.value)
        })
        .collect();
    for (question_id, value) in scored {
        session.select_option(question_id, value).expect("answered");
    }

    let summary = session.score_summary().expect("summary");
    assert_eq!(summary.total, 110);
    assert_eq!(summary.percentage, 100);
    assert_eq!(summary.level, PerformanceLevel::Outstanding);
    assert_eq!(summary.level_label, "Outstanding");
}

#[test]
fn percentage_stays_in_range_while_answering() {
    let mut session = standard_session();
    let ids: Vec<&'static str> = session
        .catalog()
        .questions()
        .iter()
        .map(|question| question.id)
        .collect();
    for id in ids {
        let value = session
            .catalog()
            .find(id)
            .and_then(|question| question.options.first())
            .map(|option| option.value)
            .expect("option");
        session.select_option(id, value).expect("answered");
        let ScoreSummary {
            total,
            max,
            percentage,
            ..
        } = session.score_summary().expect("summary");
        assert!(total <= max);
        assert!(percentage <= 100);
    }
}

#[test]
fn two_point_answers_need_attention() {
    let mut session = standard_session();
    session
        .select_option("overall_comment", "struggled")
        .expect("overall");
    session.select_option("driving", "mid").expect("driving");

    let summary = session.score_summary().expect("summary");
    assert_eq!(summary.total, 5);
    assert_eq!(summary.attention_areas, vec!["Overall Comment"]);
}
