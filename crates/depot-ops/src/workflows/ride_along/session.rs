use super::catalog::QuestionCatalog;
use super::domain::{AnswerKind, QuestionDefinition, SessionError, Subject};
use super::recorder::{self, AnswerMap, RecordOutcome};
use super::report::{self, EvaluationReport};
use super::scoring::{self, ScoreSummary};
use serde::Serialize;
use std::sync::Arc;

/// Result of moving forward through the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationStep {
    pub index: usize,
    pub done: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub index: usize,
    pub id: &'static str,
    pub title: &'static str,
    pub instruction: &'static str,
    pub kind: AnswerKind,
    pub options: Vec<OptionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_text: Option<FreeTextView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionView {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FreeTextView {
    pub label: &'static str,
    pub field_id: &'static str,
    pub visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Everything a host UI needs to draw the current step.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub catalog: String,
    pub subjects: Vec<Subject>,
    pub current_index: usize,
    pub total_questions: usize,
    pub complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_question: Option<QuestionView>,
    pub answers: AnswerMap,
}

/// One evaluator's pass through a catalog.
#[derive(Debug, Clone)]
pub struct EvaluationSession {
    catalog: Arc<QuestionCatalog>,
    subjects: Vec<Subject>,
    current_index: usize,
    answers: AnswerMap,
}

impl EvaluationSession {
    pub fn new(catalog: Arc<QuestionCatalog>) -> Self {
        Self {
            catalog,
            subjects: Vec::new(),
            current_index: 0,
            answers: AnswerMap::new(),
        }
    }

    /// Clears prior progress and stores the catalog's required identities.
    /// Subjects for roles the catalog does not ask for are ignored.
    pub fn start(&mut self, subjects: Vec<Subject>) -> Result<(), SessionError> {
        let mut accepted = Vec::with_capacity(self.catalog.subject_roles().len());
        for role in self.catalog.subject_roles() {
            let name = subjects
                .iter()
                .find(|subject| subject.role == *role)
                .map(|subject| subject.name.trim())
                .filter(|name| !name.is_empty())
                .ok_or(SessionError::MissingIdentity(*role))?;
            accepted.push(Subject::new(*role, name));
        }

        self.subjects = accepted;
        self.current_index = 0;
        self.answers.clear();

        tracing::info!(
            catalog = self.catalog.name(),
            subjects = ?self.subjects.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
            "ride-along session started"
        );
        Ok(())
    }

    pub fn reset(&mut self) {
        self.subjects.clear();
        self.current_index = 0;
        self.answers.clear();
    }

    /// Moves to the next question. Never blocked by missing answers.
    pub fn advance(&mut self) -> NavigationStep {
        let len = self.catalog.len();
        if self.current_index + 1 < len {
            self.current_index += 1;
            return NavigationStep {
                index: self.current_index,
                done: false,
            };
        }

        if self.current_index < len {
            tracing::info!(
                catalog = self.catalog.name(),
                answered = self.answers.len(),
                "ride-along session complete"
            );
        }
        self.current_index = len;
        NavigationStep {
            index: self.current_index,
            done: true,
        }
    }

    pub fn retreat(&mut self) -> usize {
        if self.current_index > 0 {
            self.current_index -= 1;
        }
        self.current_index
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> Option<&QuestionDefinition> {
        self.catalog.get(self.current_index)
    }

    pub fn is_complete(&self) -> bool {
        self.current_index >= self.catalog.len()
    }

    pub fn catalog(&self) -> &Arc<QuestionCatalog> {
        &self.catalog
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    pub fn record_answer(
        &mut self,
        question_id: &str,
        value: &str,
        field_text: Option<&str>,
    ) -> Result<RecordOutcome, SessionError> {
        recorder::record(
            &self.catalog,
            &mut self.answers,
            question_id,
            value,
            field_text,
        )
    }

    /// Click without any pending free text.
    pub fn select_option(
        &mut self,
        question_id: &str,
        value: &str,
    ) -> Result<RecordOutcome, SessionError> {
        self.record_answer(question_id, value, None)
    }

    pub fn set_free_text(&mut self, question_id: &str, text: &str) -> Result<bool, SessionError> {
        recorder::set_free_text(&self.catalog, &mut self.answers, question_id, text)
    }

    pub fn free_text_visible(&self, question_id: &str) -> bool {
        self.catalog
            .find(question_id)
            .is_some_and(|question| recorder::free_text_visible(question, &self.answers))
    }

    pub fn generate_report(&self) -> EvaluationReport {
        report::generate(&self.catalog, &self.subjects, &self.answers)
    }

    pub fn report_text(&self) -> String {
        self.generate_report().render()
    }

    /// `None` for catalogs that do not score.
    pub fn score_summary(&self) -> Option<ScoreSummary> {
        self.catalog
            .is_scoring()
            .then(|| scoring::score(&self.catalog, &self.answers))
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            catalog: self.catalog.name().to_string(),
            subjects: self.subjects.clone(),
            current_index: self.current_index,
            total_questions: self.catalog.len(),
            complete: self.is_complete(),
            current_question: self
                .current_question()
                .map(|question| self.question_view(self.current_index, question)),
            answers: self.answers.clone(),
        }
    }

    fn question_view(&self, index: usize, question: &QuestionDefinition) -> QuestionView {
        let answer = self.answers.get(question.id);
        QuestionView {
            index,
            id: question.id,
            title: question.title,
            instruction: question.instruction(),
            kind: question.kind,
            options: question
                .options
                .iter()
                .map(|option| OptionView {
                    value: option.value,
                    label: option.label,
                    selected: answer.is_some_and(|answer| answer.is_selected(option.value)),
                })
                .collect(),
            free_text: question
                .free_text
                .as_ref()
                .map(|field| FreeTextView {
                    label: field.label,
                    field_id: field.field_id,
                    visible: recorder::free_text_visible(question, &self.answers),
                    text: answer.and_then(|answer| answer.free_text()).map(str::to_string),
                }),
        }
    }
}
