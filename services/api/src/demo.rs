use crate::evaluate::render_score;
use clap::Args;
use depot_ops::error::AppError;
use depot_ops::workflows::ride_along::{
    AnswerScript, CatalogVariant, EvaluationSession, MemoryStore, QuestionCatalog, ReportArchive,
    Subject, SubjectRole, DEFAULT_HISTORY_LIMIT,
};
use std::sync::Arc;

const STANDARD_ANSWERS: &str = "question_id,value,free_text
coached,yes,6
driving,good,
organize_van,mid,
bag_overflow,good,
flex,mid,
photos,good,
customer_instructions,good,
gps,bad,
polite,good,
trainer_compliments,quick_learner,
trainer_compliments,positive_attitude,
driver_feeling,challenged,
overall_comment,pushed_through,
first_day_issues,custom_issue,Scanner kept rebooting
experienced,no,
feels_ready,no,
training_needed,one_more,
more_details,yes,
";

const DRIVER_TRAINER_ANSWERS: &str = "question_id,value,free_text
driving,good,
polite,mid,
delivery_speed,bad,
overall_comment,had_fun,
feels_ready,yes,
training_needed,yes,
";

const TRAINEE_BASIC_ANSWERS: &str = "question_id,value,free_text
driving,mid,
photos,good,
polite,bad,
first_day_issues,route_issues,
feels_ready,no,
training_needed,multiple_more,
";

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Only run the demo for this catalog
    #[arg(long, value_parser = crate::infra::parse_variant)]
    pub(crate) variant: Option<CatalogVariant>,
    /// Skip the saved-history portion of the demo
    #[arg(long)]
    pub(crate) skip_history: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        variant,
        skip_history,
    } = args;

    println!("Ride-along evaluation demo");
    let archive = ReportArchive::new(MemoryStore::new(), DEFAULT_HISTORY_LIMIT);

    let variants: Vec<CatalogVariant> = match variant {
        Some(variant) => vec![variant],
        None => vec![CatalogVariant::Standard, CatalogVariant::DriverTrainer],
    };

    for variant in variants {
        let session = demo_session(variant)?;
        println!(
            "\n--- {} catalog ({} of {} questions answered) ---\n",
            variant.as_str(),
            session.answers().len(),
            session.catalog().len()
        );
        println!("{}", session.report_text());

        if let Some(summary) = session.score_summary() {
            print!("\n{}", render_score(&summary));
        }

        if !skip_history {
            let saved = archive.save(&session)?;
            println!("\nSaved to in-memory history as {}", saved.id);
        }
    }

    if skip_history {
        return Ok(());
    }

    println!("\nHistory (newest first)");
    for report in archive.list()? {
        println!("- {} | {} | {}", report.id, report.catalog, report.subject_names());
    }

    Ok(())
}

fn demo_session(variant: CatalogVariant) -> Result<EvaluationSession, AppError> {
    let catalog = Arc::new(QuestionCatalog::for_variant(variant));
    let mut session = EvaluationSession::new(catalog);

    let (subjects, script) = match variant {
        CatalogVariant::DriverTrainer => (
            vec![
                Subject::new(SubjectRole::Driver, "Jordan"),
                Subject::new(SubjectRole::Trainer, "Sam"),
            ],
            DRIVER_TRAINER_ANSWERS,
        ),
        CatalogVariant::Standard => (
            vec![Subject::new(SubjectRole::Trainee, "Alex")],
            STANDARD_ANSWERS,
        ),
        CatalogVariant::TraineeBasic => (
            vec![Subject::new(SubjectRole::Trainee, "Riley")],
            TRAINEE_BASIC_ANSWERS,
        ),
    };

    session.start(subjects)?;
    let script = AnswerScript::from_reader(script.as_bytes())?;
    script.apply(&mut session)?;
    Ok(session)
}
