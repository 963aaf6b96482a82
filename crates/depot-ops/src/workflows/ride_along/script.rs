use super::domain::SessionError;
use super::session::EvaluationSession;
use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::Path;

/// One scripted click: `question_id,value,free_text`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScriptRow {
    pub question_id: String,
    pub value: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub free_text: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("failed to read answer script: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid answer script CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("answer script line {line}: {source}")]
    Row {
        line: u64,
        #[source]
        source: SessionError,
    },
}

/// Parsed rows paired with their 1-based line numbers.
#[derive(Debug, Clone, Default)]
pub struct AnswerScript {
    rows: Vec<(u64, ScriptRow)>,
}

impl AnswerScript {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ScriptError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ScriptError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        let mut rows = Vec::new();

        for record in csv_reader.records() {
            let record = record?;
            let line = record.position().map(|pos| pos.line()).unwrap_or_default();
            let row: ScriptRow = record.deserialize(Some(&headers))?;
            rows.push((line, row));
        }

        Ok(Self { rows })
    }

    pub fn rows(&self) -> impl Iterator<Item = &ScriptRow> {
        self.rows.iter().map(|(_, row)| row)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Replays every row through `record_answer`, stopping at the first row
    /// the catalog rejects.
    pub fn apply(&self, session: &mut EvaluationSession) -> Result<usize, ScriptError> {
        for (line, row) in &self.rows {
            session
                .record_answer(&row.question_id, &row.value, row.free_text.as_deref())
                .map_err(|source| ScriptError::Row {
                    line: *line,
                    source,
                })?;
        }
        Ok(self.rows.len())
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
