mod levels;

pub use levels::PerformanceLevel;

use super::catalog::QuestionCatalog;
use super::domain::{Answer, MAX_OPTION_POINTS};
use super::recorder::AnswerMap;
use serde::Serialize;

/// Answers at or below this weight are flagged for immediate attention.
const ATTENTION_POINTS: u8 = 2;

/// Point totals for a session on a scoring catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreSummary {
    pub total: u32,
    pub max: u32,
    pub percentage: u8,
    pub level: PerformanceLevel,
    pub level_label: &'static str,
    pub guidance: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attention_areas: Vec<&'static str>,
}

impl ScoreSummary {
    /// Coaching lines in the order the evaluator reads them.
    pub fn recommendations(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(2);
        if !self.attention_areas.is_empty() {
            lines.push(format!(
                "Areas requiring immediate attention: {}",
                self.attention_areas.join(", ")
            ));
        }
        lines.push(self.guidance.to_string());
        lines
    }
}

/// Sums single-choice points over the catalog's scored questions. Multi-select
/// and note answers never contribute, whatever their option weights say.
pub fn score(catalog: &QuestionCatalog, answers: &AnswerMap) -> ScoreSummary {
    let mut total = 0u32;
    let mut attention_areas = Vec::new();

    for question in catalog.scored_questions() {
        let Some(Answer::Single { points, .. }) = answers.get(question.id) else {
            continue;
        };
        let points = (*points).min(MAX_OPTION_POINTS);
        total += u32::from(points);
        if points <= ATTENTION_POINTS {
            attention_areas.push(question.title);
        }
    }

    let max = catalog.max_score();
    let percentage = percentage(total, max);
    let level = PerformanceLevel::from_percentage(percentage);

    ScoreSummary {
        total,
        max,
        percentage,
        level,
        level_label: level.label(),
        guidance: level.guidance(),
        attention_areas,
    }
}

/// Rounds half up; zero when nothing is scored.
fn percentage(total: u32, max: u32) -> u8 {
    if max == 0 {
        return 0;
    }
    let rounded = (200 * u64::from(total) + u64::from(max)) / (2 * u64::from(max));
    rounded.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(0, 110), 0);
        assert_eq!(percentage(110, 110), 100);
        // 99 / 110 = 90.0
        assert_eq!(percentage(99, 110), 90);
        // 1 / 8 = 12.5
        assert_eq!(percentage(1, 8), 13);
        // 1 / 3 = 33.3
        assert_eq!(percentage(1, 3), 33);
    }

    #[test]
    fn recommendations_list_attention_before_guidance() {
        let summary = ScoreSummary {
            total: 2,
            max: 10,
            percentage: 20,
            level: PerformanceLevel::Unsatisfactory,
            level_label: "Unsatisfactory",
            guidance: PerformanceLevel::Unsatisfactory.guidance(),
            attention_areas: vec!["Driving Aptitudes", "Language Challenges"],
        };
        assert_eq!(
            summary.recommendations(),
            vec![
                "Areas requiring immediate attention: Driving Aptitudes, Language Challenges"
                    .to_string(),
                "Performance below acceptable standards. Immediate corrective action required."
                    .to_string(),
            ]
        );
    }
}
