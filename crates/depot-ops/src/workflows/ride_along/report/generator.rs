use super::super::catalog::QuestionCatalog;
use super::super::domain::{
    Answer, QuestionDefinition, ReportRole, Subject, NOTE_INCLUDE, READY_VALUE,
};
use super::super::recorder::AnswerMap;
use super::views::{EvaluationReport, ReportSection, ReportSummary, SectionKind, SubjectLine};

const EMERGENCY_NOTICE: &str = "🚨 EMERGENCY RIDE-ALONG: This was an emergency interruption during the driver's route due to falling excessively behind on deliveries.";
const COMPLIMENT_FALLBACK: &str = "The trainer likes the new hire";
const ISSUE_FALLBACK: &str = "⚠️ Other issue (not specified)";
const MORE_DETAILS: &str = "More details available upon request.";
const BOTH_READY: &str = "Both driver and trainer assess trainee as ready to go solo.";

/// Outcome bucket for a graded answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Bucket {
    Strength,
    Improvement,
    Critical,
}

pub(crate) fn classify(value: &str, points: u8) -> Option<Bucket> {
    if matches!(value, "good" | "yes") || points >= 4 {
        Some(Bucket::Strength)
    } else if matches!(value, "mid" | "no") || (2..4).contains(&points) {
        Some(Bucket::Improvement)
    } else if matches!(value, "bad" | "one_more" | "multiple_more") || points >= 1 {
        Some(Bucket::Critical)
    } else {
        None
    }
}

/// Builds the report from the catalog and the session's answers. Pure: the
/// same inputs always yield the same report.
pub fn generate(
    catalog: &QuestionCatalog,
    subjects: &[Subject],
    answers: &AnswerMap,
) -> EvaluationReport {
    let subject_lines = catalog
        .subject_roles()
        .iter()
        .map(|role| SubjectLine {
            role: *role,
            name: subjects
                .iter()
                .find(|subject| subject.role == *role)
                .map(|subject| subject.name.clone()),
        })
        .collect();

    let mut strengths = Vec::new();
    let mut improvements = Vec::new();
    let mut critical = Vec::new();
    for question in catalog.questions().iter().filter(|q| q.role.is_graded()) {
        let Some((answer, label)) = chosen(question, answers) else {
            continue;
        };
        let Some(value) = answer.value() else {
            continue;
        };
        match classify(value, answer.points()) {
            Some(Bucket::Strength) => strengths.push(label.to_string()),
            Some(Bucket::Improvement) => improvements.push(label.to_string()),
            Some(Bucket::Critical) => critical.push(label.to_string()),
            None => {}
        }
    }

    let graded_answered =
        !(strengths.is_empty() && improvements.is_empty() && critical.is_empty());
    let summary = build_summary(catalog, answers);
    let summary = if graded_answered || summary != ReportSummary::default() {
        Some(summary)
    } else {
        None
    };

    let mut sections = Vec::new();
    push_section(&mut sections, SectionKind::Strengths, strengths);
    push_section(&mut sections, SectionKind::Improvement, improvements);
    push_section(&mut sections, SectionKind::Critical, critical);
    push_section(
        &mut sections,
        SectionKind::TrainerFeedback,
        trainer_feedback(catalog, answers),
    );
    push_section(
        &mut sections,
        SectionKind::SpecialNotes,
        special_notes(catalog, answers),
    );
    push_section(
        &mut sections,
        SectionKind::Recommendations,
        recommendations(catalog, answers),
    );

    EvaluationReport {
        subjects: subject_lines,
        summary,
        sections,
    }
}

fn push_section(sections: &mut Vec<ReportSection>, kind: SectionKind, lines: Vec<String>) {
    if !lines.is_empty() {
        sections.push(ReportSection::new(kind, lines));
    }
}

/// The stored answer and the label of its chosen option, for single answers.
fn chosen<'a>(
    question: &QuestionDefinition,
    answers: &'a AnswerMap,
) -> Option<(&'a Answer, &'static str)> {
    let answer = answers.get(question.id)?;
    let label = question.label_for(answer.value()?)?;
    Some((answer, label))
}

fn answers_for_role<'a>(
    catalog: &'a QuestionCatalog,
    answers: &'a AnswerMap,
    role: ReportRole,
) -> impl Iterator<Item = (&'a QuestionDefinition, &'a Answer)> {
    catalog
        .questions()
        .iter()
        .filter(move |question| question.role == role)
        .filter_map(move |question| answers.get(question.id).map(|answer| (question, answer)))
}

fn first_label(
    catalog: &QuestionCatalog,
    answers: &AnswerMap,
    role: ReportRole,
) -> Option<&'static str> {
    catalog
        .questions()
        .iter()
        .filter(|question| question.role == role)
        .find_map(|question| chosen(question, answers).map(|(_, label)| label))
}

fn build_summary(catalog: &QuestionCatalog, answers: &AnswerMap) -> ReportSummary {
    let emergency = answers_for_role(catalog, answers, ReportRole::EmergencyFlag)
        .find(|(question, answer)| {
            question
                .trigger()
                .is_some_and(|trigger| answer.is_selected(trigger))
        })
        .map(|(_, answer)| match answer.free_text() {
            Some(stops) => format!("{EMERGENCY_NOTICE} The driver was {stops} stops behind."),
            None => EMERGENCY_NOTICE.to_string(),
        });

    ReportSummary {
        emergency,
        overall: first_label(catalog, answers, ReportRole::OverallComment),
        driver_feeling: first_label(catalog, answers, ReportRole::DriverFeeling),
        readiness: readiness(catalog, answers),
    }
}

struct Readiness {
    text: &'static str,
    positive: bool,
}

fn readiness_answer(
    catalog: &QuestionCatalog,
    answers: &AnswerMap,
    role: ReportRole,
) -> Option<Readiness> {
    catalog
        .questions()
        .iter()
        .filter(|question| question.role == role)
        .find_map(|question| {
            let answer = answers.get(question.id)?;
            let value = answer.value()?;
            let option = question.option(value)?;
            Some(Readiness {
                text: option.narrative.unwrap_or(option.label),
                positive: value == READY_VALUE,
            })
        })
}

fn readiness(catalog: &QuestionCatalog, answers: &AnswerMap) -> Vec<String> {
    let driver = readiness_answer(catalog, answers, ReportRole::DriverReadiness);
    let trainer = readiness_answer(catalog, answers, ReportRole::TrainerReadiness);

    match (driver, trainer) {
        (Some(driver), Some(trainer)) => match (driver.positive, trainer.positive) {
            (true, true) => vec![BOTH_READY.to_string()],
            (true, false) => vec![format!(
                "{} However, {}",
                driver.text,
                trainer.text.to_lowercase()
            )],
            (false, true) => vec![format!(
                "{} However, {}",
                trainer.text,
                driver.text.to_lowercase()
            )],
            (false, false) => vec![driver.text.to_string(), trainer.text.to_string()],
        },
        (Some(only), None) | (None, Some(only)) => vec![only.text.to_string()],
        (None, None) => Vec::new(),
    }
}

/// Selected options in catalog order, with the trigger replaced by `custom`.
fn selection_lines(
    question: &QuestionDefinition,
    answer: &Answer,
    custom: impl Fn(Option<&str>) -> String,
) -> Vec<String> {
    question
        .options
        .iter()
        .filter(|option| answer.is_selected(option.value))
        .map(|option| {
            if question.trigger() == Some(option.value) {
                custom(answer.free_text())
            } else {
                option.label.to_string()
            }
        })
        .collect()
}

fn trainer_feedback(catalog: &QuestionCatalog, answers: &AnswerMap) -> Vec<String> {
    answers_for_role(catalog, answers, ReportRole::TrainerFeedback)
        .flat_map(|(question, answer)| {
            selection_lines(question, answer, |text| {
                format!("🦋 {}", text.unwrap_or(COMPLIMENT_FALLBACK))
            })
        })
        .collect()
}

fn special_notes(catalog: &QuestionCatalog, answers: &AnswerMap) -> Vec<String> {
    let mut notes: Vec<String> = answers_for_role(catalog, answers, ReportRole::DayIssues)
        .flat_map(|(question, answer)| {
            selection_lines(question, answer, |text| match text {
                Some(text) => format!("⚠️ Trainer reports: {text}"),
                None => ISSUE_FALLBACK.to_string(),
            })
        })
        .collect();

    notes.extend(
        answers_for_role(catalog, answers, ReportRole::Note)
            .filter(|(_, answer)| answer.is_selected(NOTE_INCLUDE))
            .map(|(question, answer)| {
                format!("📝 {}", answer.free_text().unwrap_or(question.title))
            }),
    );

    if answers_for_role(catalog, answers, ReportRole::ReportAccuracy)
        .any(|(_, answer)| answer.value() == Some("no"))
    {
        notes.push(MORE_DETAILS.to_string());
    }

    notes
}

fn recommendations(catalog: &QuestionCatalog, answers: &AnswerMap) -> Vec<String> {
    catalog
        .questions()
        .iter()
        .filter_map(|question| {
            let coaching = question.coaching?;
            let value = answers.get(question.id)?.value()?;
            matches!(value, "mid" | "bad").then(|| coaching.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_prefers_value_names_then_points() {
        assert_eq!(classify("good", 0), Some(Bucket::Strength));
        assert_eq!(classify("yes", 0), Some(Bucket::Strength));
        assert_eq!(classify("happy", 5), Some(Bucket::Strength));
        assert_eq!(classify("mid", 0), Some(Bucket::Improvement));
        assert_eq!(classify("no", 3), Some(Bucket::Improvement));
        assert_eq!(classify("struggled", 2), Some(Bucket::Improvement));
        assert_eq!(classify("bad", 0), Some(Bucket::Critical));
        assert_eq!(classify("one_more", 3), Some(Bucket::Improvement));
        assert_eq!(classify("multiple_more", 0), Some(Bucket::Critical));
        assert_eq!(classify("overwhelmed", 1), Some(Bucket::Critical));
        assert_eq!(classify("unlisted", 0), None);
    }
}
