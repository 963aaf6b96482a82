use super::super::domain::SubjectRole;
use serde::Serialize;

pub const REPORT_TITLE: &str = "RIDE-ALONG FEEDBACK";
const HEADER_RULE_WIDTH: usize = 42;
const SECTION_RULE_WIDTH: usize = 57;
const MISSING_NAME: &str = "Not specified";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Strengths,
    Improvement,
    Critical,
    TrainerFeedback,
    SpecialNotes,
    Recommendations,
}

impl SectionKind {
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Strengths => "STRENGTHS",
            Self::Improvement => "AREAS FOR IMPROVEMENT",
            Self::Critical => "CRITICAL ISSUES",
            Self::TrainerFeedback => "TRAINER FEEDBACK",
            Self::SpecialNotes => "SPECIAL NOTES",
            Self::Recommendations => "RECOMMENDATIONS",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectLine {
    pub role: SubjectRole,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_feeling: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub readiness: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSection {
    pub kind: SectionKind,
    pub heading: &'static str,
    pub lines: Vec<String>,
}

impl ReportSection {
    pub fn new(kind: SectionKind, lines: Vec<String>) -> Self {
        Self {
            kind,
            heading: kind.heading(),
            lines,
        }
    }
}

/// Structured ride-along report. [`EvaluationReport::render`] produces the
/// plain-text form operators paste into chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationReport {
    pub subjects: Vec<SubjectLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ReportSummary>,
    pub sections: Vec<ReportSection>,
}

impl EvaluationReport {
    pub fn section(&self, kind: SectionKind) -> Option<&ReportSection> {
        self.sections.iter().find(|section| section.kind == kind)
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(REPORT_TITLE);
        out.push('\n');
        for subject in &self.subjects {
            let name = subject.name.as_deref().unwrap_or(MISSING_NAME);
            out.push_str(&format!("{}: {}\n", subject.role.header(), name));
        }
        out.push_str(&"=".repeat(HEADER_RULE_WIDTH));
        out.push_str("\n\n");

        if let Some(summary) = &self.summary {
            push_heading(&mut out, "SUMMARY");
            if let Some(emergency) = &summary.emergency {
                out.push_str(emergency);
                out.push_str("\n\n");
            }
            if let Some(overall) = summary.overall {
                out.push_str(&format!("Overall: {overall}\n"));
            }
            if let Some(feeling) = summary.driver_feeling {
                out.push_str(&format!("Driver feelings: {feeling}\n"));
            }
            for line in &summary.readiness {
                out.push_str(line);
                out.push('\n');
            }
            out.push('\n');
        }

        for section in &self.sections {
            push_heading(&mut out, section.heading);
            out.push_str(&section.lines.join("\n"));
            out.push_str("\n\n");
        }

        out.truncate(out.trim_end().len());
        out
    }
}

fn push_heading(out: &mut String, heading: &str) {
    out.push_str(heading);
    out.push('\n');
    out.push_str(&"-".repeat(SECTION_RULE_WIDTH));
    out.push('\n');
}
