use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Highest weight a single option may carry.
pub const MAX_OPTION_POINTS: u8 = 5;

/// Value a note question toggles on and off.
pub const NOTE_INCLUDE: &str = "include";

/// Readiness answers count as positive only when they carry this value.
pub const READY_VALUE: &str = "yes";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerKind {
    Single,
    Multiple,
    Note,
}

impl AnswerKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Single => "Single choice",
            Self::Multiple => "Select all that apply",
            Self::Note => "Note",
        }
    }
}

/// How the report generator treats a question. Decided once when the catalog
/// is authored so no call site compares question ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportRole {
    /// Bucketed into strengths, improvement areas, or critical issues.
    Graded,
    EmergencyFlag,
    OverallComment,
    DriverFeeling,
    DriverReadiness,
    TrainerReadiness,
    TrainerFeedback,
    DayIssues,
    ReportAccuracy,
    Note,
}

impl ReportRole {
    pub const fn is_graded(self) -> bool {
        matches!(self, Self::Graded)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectRole {
    Trainee,
    Driver,
    Trainer,
}

impl SubjectRole {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Trainee => "Trainee",
            Self::Driver => "Driver",
            Self::Trainer => "Trainer",
        }
    }

    pub const fn header(self) -> &'static str {
        match self {
            Self::Trainee => "TRAINEE",
            Self::Driver => "DRIVER",
            Self::Trainer => "TRAINER",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "trainee" => Some(Self::Trainee),
            "driver" => Some(Self::Driver),
            "trainer" => Some(Self::Trainer),
            _ => None,
        }
    }
}

/// One person the evaluation is about (or conducted by).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub role: SubjectRole,
    pub name: String,
}

impl Subject {
    pub fn new(role: SubjectRole, name: impl Into<String>) -> Self {
        Self {
            role,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub value: &'static str,
    pub label: &'static str,
    pub points: u8,
    /// Sentence used when the answer is woven into the readiness assessment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative: Option<&'static str>,
}

impl AnswerOption {
    pub const fn new(value: &'static str, label: &'static str, points: u8) -> Self {
        Self {
            value,
            label,
            points,
            narrative: None,
        }
    }

    pub const fn with_narrative(mut self, narrative: &'static str) -> Self {
        self.narrative = Some(narrative);
        self
    }
}

/// Conditional text input revealed while `trigger` is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FreeTextField {
    pub label: &'static str,
    pub field_id: &'static str,
    pub trigger: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionDefinition {
    pub id: &'static str,
    pub title: &'static str,
    pub prompt: &'static str,
    pub kind: AnswerKind,
    pub options: Vec<AnswerOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_text: Option<FreeTextField>,
    pub role: ReportRole,
    /// Recommendation emitted when the answer lands on `mid` or `bad`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coaching: Option<&'static str>,
    pub scored: bool,
}

impl QuestionDefinition {
    pub fn single(
        id: &'static str,
        title: &'static str,
        prompt: &'static str,
        role: ReportRole,
        options: Vec<AnswerOption>,
    ) -> Self {
        Self {
            id,
            title,
            prompt,
            kind: AnswerKind::Single,
            options,
            free_text: None,
            role,
            coaching: None,
            scored: false,
        }
    }

    pub fn multiple(
        id: &'static str,
        title: &'static str,
        prompt: &'static str,
        role: ReportRole,
        options: Vec<AnswerOption>,
    ) -> Self {
        Self {
            kind: AnswerKind::Multiple,
            ..Self::single(id, title, prompt, role, options)
        }
    }

    /// A toggleable note carrying a single `include` option and a text field.
    pub fn note(
        id: &'static str,
        title: &'static str,
        prompt: &'static str,
        field_label: &'static str,
        field_id: &'static str,
    ) -> Self {
        Self {
            kind: AnswerKind::Note,
            ..Self::single(
                id,
                title,
                prompt,
                ReportRole::Note,
                vec![AnswerOption::new(NOTE_INCLUDE, "📝 Include note", 0)],
            )
        }
        .with_free_text(field_label, field_id, NOTE_INCLUDE)
    }

    pub fn with_free_text(
        mut self,
        label: &'static str,
        field_id: &'static str,
        trigger: &'static str,
    ) -> Self {
        self.free_text = Some(FreeTextField {
            label,
            field_id,
            trigger,
        });
        self
    }

    pub fn with_coaching(mut self, sentence: &'static str) -> Self {
        self.coaching = Some(sentence);
        self
    }

    pub fn scored(mut self) -> Self {
        self.scored = true;
        self
    }

    /// Instruction shown under the title; falls back to a kind hint when the
    /// prompt merely repeats the title.
    pub fn instruction(&self) -> &'static str {
        if self.prompt != self.title {
            return self.prompt;
        }
        match self.kind {
            AnswerKind::Multiple => "Select all that apply",
            AnswerKind::Single | AnswerKind::Note => "Select the one that applies",
        }
    }

    pub fn option(&self, value: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.value == value)
    }

    pub fn label_for(&self, value: &str) -> Option<&'static str> {
        self.option(value).map(|option| option.label)
    }

    pub fn trigger(&self) -> Option<&'static str> {
        self.free_text.as_ref().map(|field| field.trigger)
    }
}

/// Stored response for one question, shaped by the question's [`AnswerKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Answer {
    Single {
        value: String,
        points: u8,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        free_text: Option<String>,
    },
    Multiple {
        selections: BTreeSet<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        free_text: Option<String>,
    },
    Note {
        value: String,
        points: u8,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        free_text: Option<String>,
    },
}

impl Answer {
    pub const fn kind(&self) -> AnswerKind {
        match self {
            Answer::Single { .. } => AnswerKind::Single,
            Answer::Multiple { .. } => AnswerKind::Multiple,
            Answer::Note { .. } => AnswerKind::Note,
        }
    }

    /// The chosen value for single and note answers.
    pub fn value(&self) -> Option<&str> {
        match self {
            Answer::Single { value, .. } | Answer::Note { value, .. } => Some(value),
            Answer::Multiple { .. } => None,
        }
    }

    pub fn points(&self) -> u8 {
        match self {
            Answer::Single { points, .. } | Answer::Note { points, .. } => *points,
            Answer::Multiple { .. } => 0,
        }
    }

    pub fn free_text(&self) -> Option<&str> {
        match self {
            Answer::Single { free_text, .. }
            | Answer::Multiple { free_text, .. }
            | Answer::Note { free_text, .. } => free_text.as_deref(),
        }
    }

    pub(crate) fn free_text_mut(&mut self) -> &mut Option<String> {
        match self {
            Answer::Single { free_text, .. }
            | Answer::Multiple { free_text, .. }
            | Answer::Note { free_text, .. } => free_text,
        }
    }

    pub fn is_selected(&self, value: &str) -> bool {
        match self {
            Answer::Single { value: stored, .. } | Answer::Note { value: stored, .. } => {
                stored == value
            }
            Answer::Multiple { selections, .. } => selections.contains(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("{} name is required", .0.label())]
    MissingIdentity(SubjectRole),
    #[error("unknown question '{0}'")]
    UnknownQuestion(String),
    #[error("question '{question}' has no option '{value}'")]
    UnknownOption { question: String, value: String },
    #[error("question '{0}' has no free-text field")]
    NoFreeTextField(String),
}
