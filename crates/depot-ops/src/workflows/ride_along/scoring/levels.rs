use serde::{Deserialize, Serialize};

/// Qualitative band for a score percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceLevel {
    Outstanding,
    Excellent,
    Good,
    Satisfactory,
    NeedsImprovement,
    Unsatisfactory,
}

impl PerformanceLevel {
    pub const fn from_percentage(percentage: u8) -> Self {
        match percentage {
            90.. => Self::Outstanding,
            80..=89 => Self::Excellent,
            70..=79 => Self::Good,
            60..=69 => Self::Satisfactory,
            50..=59 => Self::NeedsImprovement,
            _ => Self::Unsatisfactory,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Outstanding => "Outstanding",
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Satisfactory => "Satisfactory",
            Self::NeedsImprovement => "Needs Improvement",
            Self::Unsatisfactory => "Unsatisfactory",
        }
    }

    pub const fn guidance(self) -> &'static str {
        match self {
            Self::Outstanding => "Continue excellent performance. Consider mentoring other trainees.",
            Self::Excellent => {
                "Maintain high standards. Minor refinements in weak areas recommended."
            }
            Self::Good => "Good performance overall. Focus on areas identified for improvement.",
            Self::Satisfactory => {
                "Performance meets minimum standards. Additional training recommended in identified areas."
            }
            Self::NeedsImprovement => {
                "Significant improvement needed. Consider additional training and supervision."
            }
            Self::Unsatisfactory => {
                "Performance below acceptable standards. Immediate corrective action required."
            }
        }
    }
}
