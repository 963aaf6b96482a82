mod legacy;
mod standard;

use super::domain::{AnswerKind, QuestionDefinition, SubjectRole, MAX_OPTION_POINTS, NOTE_INCLUDE};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Built-in question sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogVariant {
    /// Scored trainee evaluation with trainer feedback and the emergency flag.
    Standard,
    /// Unscored driver and trainer report that keeps a saved history.
    DriverTrainer,
    TraineeBasic,
}

impl CatalogVariant {
    pub const ALL: [CatalogVariant; 3] = [
        CatalogVariant::Standard,
        CatalogVariant::DriverTrainer,
        CatalogVariant::TraineeBasic,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::DriverTrainer => "driver-trainer",
            Self::TraineeBasic => "trainee-basic",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "standard" => Some(Self::Standard),
            "driver-trainer" => Some(Self::DriverTrainer),
            "trainee-basic" => Some(Self::TraineeBasic),
            _ => None,
        }
    }
}

/// Two options of a multi-select question that may not be selected together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExclusivePair {
    pub question_id: &'static str,
    pub a: &'static str,
    pub b: &'static str,
}

impl ExclusivePair {
    pub const fn new(question_id: &'static str, a: &'static str, b: &'static str) -> Self {
        Self { question_id, a, b }
    }
}

/// Catalog-wide behavior that is not tied to a single question.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogProfile {
    pub name: String,
    pub subject_roles: Vec<SubjectRole>,
    pub scoring: bool,
    pub keeps_history: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionCatalog {
    #[serde(flatten)]
    profile: CatalogProfile,
    questions: Vec<QuestionDefinition>,
    exclusive_pairs: Vec<ExclusivePair>,
}

impl QuestionCatalog {
    /// Builds a validated catalog from caller-provided definitions.
    pub fn new(
        profile: CatalogProfile,
        questions: Vec<QuestionDefinition>,
        exclusive_pairs: Vec<ExclusivePair>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            profile,
            questions,
            exclusive_pairs,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn for_variant(variant: CatalogVariant) -> Self {
        match variant {
            CatalogVariant::Standard => standard::catalog(),
            CatalogVariant::DriverTrainer => legacy::driver_trainer(),
            CatalogVariant::TraineeBasic => legacy::trainee_basic(),
        }
    }

    pub fn standard() -> Self {
        Self::for_variant(CatalogVariant::Standard)
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }

    pub fn subject_roles(&self) -> &[SubjectRole] {
        &self.profile.subject_roles
    }

    pub fn is_scoring(&self) -> bool {
        self.profile.scoring
    }

    pub fn keeps_history(&self) -> bool {
        self.profile.keeps_history
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&QuestionDefinition> {
        self.questions.get(index)
    }

    pub fn find(&self, id: &str) -> Option<&QuestionDefinition> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.questions.iter().position(|question| question.id == id)
    }

    pub fn questions(&self) -> &[QuestionDefinition] {
        &self.questions
    }

    pub fn exclusive_pairs(&self) -> &[ExclusivePair] {
        &self.exclusive_pairs
    }

    /// The option that must be dropped when `value` is selected on `question_id`.
    pub fn exclusive_counterpart(&self, question_id: &str, value: &str) -> Option<&'static str> {
        self.exclusive_pairs
            .iter()
            .filter(|pair| pair.question_id == question_id)
            .find_map(|pair| {
                if pair.a == value {
                    Some(pair.b)
                } else if pair.b == value {
                    Some(pair.a)
                } else {
                    None
                }
            })
    }

    pub fn scored_questions(&self) -> impl Iterator<Item = &QuestionDefinition> {
        self.questions.iter().filter(|question| question.scored)
    }

    pub fn max_score(&self) -> u32 {
        self.scored_questions().count() as u32 * u32::from(MAX_OPTION_POINTS)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.questions.is_empty() {
            return Err(CatalogError::Empty);
        }
        if self.profile.subject_roles.is_empty() {
            return Err(CatalogError::MissingSubjectRoles(self.profile.name.clone()));
        }

        let mut seen = HashSet::new();
        for question in &self.questions {
            if !seen.insert(question.id) {
                return Err(CatalogError::DuplicateQuestion(question.id.to_string()));
            }
            validate_question(question)?;
        }

        for pair in &self.exclusive_pairs {
            let question = self
                .find(pair.question_id)
                .filter(|question| question.kind == AnswerKind::Multiple)
                .ok_or_else(|| CatalogError::UnknownPairQuestion(pair.question_id.to_string()))?;
            for value in [pair.a, pair.b] {
                if question.option(value).is_none() {
                    return Err(CatalogError::UnknownPairValue {
                        question: question.id.to_string(),
                        value: value.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

fn validate_question(question: &QuestionDefinition) -> Result<(), CatalogError> {
    let mut values = HashSet::new();
    for option in &question.options {
        if !values.insert(option.value) {
            return Err(CatalogError::DuplicateOption {
                question: question.id.to_string(),
                value: option.value.to_string(),
            });
        }
        if option.points > MAX_OPTION_POINTS {
            return Err(CatalogError::PointsOutOfRange {
                question: question.id.to_string(),
                value: option.value.to_string(),
                points: option.points,
            });
        }
    }

    if let Some(trigger) = question.trigger() {
        if question.option(trigger).is_none() {
            return Err(CatalogError::UnknownTrigger {
                question: question.id.to_string(),
                trigger: trigger.to_string(),
            });
        }
    }

    match question.kind {
        AnswerKind::Note if question.option(NOTE_INCLUDE).is_none() => {
            Err(CatalogError::NoteWithoutInclude(question.id.to_string()))
        }
        AnswerKind::Multiple | AnswerKind::Note if question.scored => {
            Err(CatalogError::ScoredSelection(question.id.to_string()))
        }
        _ => Ok(()),
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog has no questions")]
    Empty,
    #[error("catalog '{0}' does not name any subject roles")]
    MissingSubjectRoles(String),
    #[error("question '{0}' is defined more than once")]
    DuplicateQuestion(String),
    #[error("question '{question}' repeats option '{value}'")]
    DuplicateOption { question: String, value: String },
    #[error("option '{value}' on question '{question}' carries {points} points (max 5)")]
    PointsOutOfRange {
        question: String,
        value: String,
        points: u8,
    },
    #[error("question '{question}' reveals free text on unknown option '{trigger}'")]
    UnknownTrigger { question: String, trigger: String },
    #[error("note question '{0}' must offer the include option")]
    NoteWithoutInclude(String),
    #[error("question '{0}' cannot be scored because it is not single choice")]
    ScoredSelection(String),
    #[error("exclusive pair references unknown multi-select question '{0}'")]
    UnknownPairQuestion(String),
    #[error("exclusive pair on '{question}' references unknown option '{value}'")]
    UnknownPairValue { question: String, value: String },
}
