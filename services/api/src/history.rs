use crate::infra::open_archive;
use clap::Subcommand;
use depot_ops::config::AppConfig;
use depot_ops::error::AppError;
use depot_ops::workflows::ride_along::SavedReport;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub(crate) enum HistoryCommand {
    /// List saved reports, newest first
    List {
        /// Show at most this many reports
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print one saved report
    Show { id: String },
    /// Delete one saved report
    Delete { id: String },
    /// Write every saved report as CSV
    Export {
        /// Destination file (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

pub(crate) fn run_history(command: HistoryCommand) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let archive = open_archive(&config.archive);

    match command {
        HistoryCommand::List { limit } => {
            let reports = archive.list()?;
            if reports.is_empty() {
                println!("No saved reports in {}", config.archive.path.display());
                return Ok(());
            }
            let shown = limit.unwrap_or(reports.len());
            for report in reports.iter().take(shown) {
                println!("{}", list_line(report));
            }
        }
        HistoryCommand::Show { id } => {
            let report = archive
                .get(&id)?
                .ok_or_else(|| AppError::NotFound(format!("saved report '{id}'")))?;
            println!("{}", report.report_text);
        }
        HistoryCommand::Delete { id } => {
            if !archive.delete(&id)? {
                return Err(AppError::NotFound(format!("saved report '{id}'")));
            }
            println!("Deleted report {}", id);
        }
        HistoryCommand::Export { output } => {
            let written = match &output {
                Some(path) => archive.export_csv(File::create(path)?)?,
                None => {
                    let stdout = io::stdout();
                    let mut handle = stdout.lock();
                    let written = archive.export_csv(&mut handle)?;
                    handle.flush()?;
                    written
                }
            };
            if let Some(path) = output {
                println!("Exported {} reports to {}", written, path.display());
            }
        }
    }

    Ok(())
}

fn list_line(report: &SavedReport) -> String {
    format!(
        "{}  {}  {:<14}  {}",
        report.id,
        report.created_at.format("%Y-%m-%d %H:%M"),
        report.catalog,
        report.subject_names()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use depot_ops::workflows::ride_along::{Subject, SubjectRole};
    use std::collections::BTreeMap;

    #[test]
    fn list_line_shows_id_time_catalog_and_names() {
        let report = SavedReport {
            id: "1717318800000".to_string(),
            subjects: vec![
                Subject::new(SubjectRole::Driver, "Jordan"),
                Subject::new(SubjectRole::Trainer, "Sam"),
            ],
            created_at: Utc
                .with_ymd_and_hms(2024, 6, 2, 9, 0, 0)
                .single()
                .expect("valid timestamp"),
            catalog: "driver-trainer".to_string(),
            report_text: "RIDE-ALONG FEEDBACK".to_string(),
            answers: BTreeMap::new(),
        };
        assert_eq!(
            list_line(&report),
            "1717318800000  2024-06-02 09:00  driver-trainer  Driver: Jordan, Trainer: Sam"
        );
    }
}
