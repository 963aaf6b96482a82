use super::catalog::QuestionCatalog;
use super::domain::{Answer, AnswerKind, QuestionDefinition, SessionError, NOTE_INCLUDE};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

pub type AnswerMap = BTreeMap<String, Answer>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionChange {
    Selected,
    Deselected,
    /// The value was added after its exclusive counterpart was dropped.
    ConflictResolved,
    Ignored,
}

/// What a single click did to the stored answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordOutcome {
    pub question_id: &'static str,
    pub change: SelectionChange,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed: Option<&'static str>,
    pub free_text_visible: bool,
}

/// Applies one option click to `answers`. `field_text` is whatever currently
/// sits in the question's free-text input.
pub fn record(
    catalog: &QuestionCatalog,
    answers: &mut AnswerMap,
    question_id: &str,
    value: &str,
    field_text: Option<&str>,
) -> Result<RecordOutcome, SessionError> {
    let question = catalog
        .find(question_id)
        .ok_or_else(|| SessionError::UnknownQuestion(question_id.to_string()))?;
    let option = question
        .option(value)
        .ok_or_else(|| SessionError::UnknownOption {
            question: question_id.to_string(),
            value: value.to_string(),
        })?;

    let (change, removed) = match question.kind {
        AnswerKind::Single => (
            record_single(question, answers, option.value, option.points, field_text),
            None,
        ),
        AnswerKind::Multiple => {
            record_multiple(catalog, question, answers, option.value, field_text)
        }
        AnswerKind::Note => (
            record_note(question, answers, option.value, field_text),
            None,
        ),
    };

    Ok(RecordOutcome {
        question_id: question.id,
        change,
        removed,
        free_text_visible: free_text_visible(question, answers),
    })
}

/// Replaces the free text on an existing answer. Returns `false` when there is
/// no answer to attach the text to, or its trigger option is not selected.
pub fn set_free_text(
    catalog: &QuestionCatalog,
    answers: &mut AnswerMap,
    question_id: &str,
    text: &str,
) -> Result<bool, SessionError> {
    let question = catalog
        .find(question_id)
        .ok_or_else(|| SessionError::UnknownQuestion(question_id.to_string()))?;
    let Some(trigger) = question.trigger() else {
        return Err(SessionError::NoFreeTextField(question_id.to_string()));
    };

    match answers.get_mut(question.id) {
        Some(answer) if answer.is_selected(trigger) => {
            *answer.free_text_mut() = clean(Some(text));
            Ok(true)
        }
        Some(_) => {
            tracing::warn!(
                question_id = question.id,
                trigger,
                "free-text edit dropped because the trigger is not selected"
            );
            Ok(false)
        }
        None => {
            tracing::warn!(
                question_id = question.id,
                "free-text edit dropped because the question has no answer"
            );
            Ok(false)
        }
    }
}

/// The free-text input is shown and enabled iff its trigger is selected.
pub fn free_text_visible(question: &QuestionDefinition, answers: &AnswerMap) -> bool {
    match (question.trigger(), answers.get(question.id)) {
        (Some(trigger), Some(answer)) => answer.is_selected(trigger),
        _ => false,
    }
}

fn record_single(
    question: &QuestionDefinition,
    answers: &mut AnswerMap,
    value: &'static str,
    points: u8,
    field_text: Option<&str>,
) -> SelectionChange {
    if answers
        .get(question.id)
        .is_some_and(|answer| answer.is_selected(value))
    {
        answers.remove(question.id);
        return SelectionChange::Deselected;
    }

    let free_text = if question.trigger() == Some(value) {
        clean(field_text)
    } else {
        None
    };
    answers.insert(
        question.id.to_string(),
        Answer::Single {
            value: value.to_string(),
            points,
            free_text,
        },
    );
    SelectionChange::Selected
}

fn record_multiple(
    catalog: &QuestionCatalog,
    question: &QuestionDefinition,
    answers: &mut AnswerMap,
    value: &'static str,
    field_text: Option<&str>,
) -> (SelectionChange, Option<&'static str>) {
    let (mut selections, mut free_text) = match answers.remove(question.id) {
        Some(Answer::Multiple {
            selections,
            free_text,
        }) => (selections, free_text),
        _ => (BTreeSet::new(), None),
    };

    let (change, removed) = if selections.remove(value) {
        (SelectionChange::Deselected, None)
    } else {
        let removed = catalog
            .exclusive_counterpart(question.id, value)
            .filter(|counterpart| selections.remove(*counterpart));
        selections.insert(value.to_string());
        if question.trigger() == Some(value) {
            if let Some(text) = clean(field_text) {
                free_text = Some(text);
            }
        }
        match removed {
            Some(_) => (SelectionChange::ConflictResolved, removed),
            None => (SelectionChange::Selected, None),
        }
    };

    if !selections.is_empty() {
        answers.insert(
            question.id.to_string(),
            Answer::Multiple {
                selections,
                free_text,
            },
        );
    }

    (change, removed)
}

fn record_note(
    question: &QuestionDefinition,
    answers: &mut AnswerMap,
    value: &'static str,
    field_text: Option<&str>,
) -> SelectionChange {
    if value != NOTE_INCLUDE {
        return SelectionChange::Ignored;
    }

    if answers.remove(question.id).is_some() {
        return SelectionChange::Deselected;
    }

    answers.insert(
        question.id.to_string(),
        Answer::Note {
            value: value.to_string(),
            points: 0,
            free_text: clean(field_text),
        },
    );
    SelectionChange::Selected
}

fn clean(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
