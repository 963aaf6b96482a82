use crate::infra::{open_archive, parse_variant, subjects_from};
use clap::Args;
use depot_ops::config::AppConfig;
use depot_ops::error::AppError;
use depot_ops::workflows::ride_along::{
    AnswerKind, AnswerScript, CatalogVariant, EvaluationSession, QuestionCatalog,
    QuestionDefinition, ScoreSummary,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Catalog to print (defaults to DEPOT_RIDE_ALONG_CATALOG)
    #[arg(long, value_parser = parse_variant)]
    pub(crate) variant: Option<CatalogVariant>,
    /// Print the catalog as JSON instead of a numbered listing
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct EvaluateArgs {
    /// Catalog to evaluate against (defaults to DEPOT_RIDE_ALONG_CATALOG)
    #[arg(long, value_parser = parse_variant)]
    pub(crate) variant: Option<CatalogVariant>,
    /// Trainee name (standard and trainee-basic catalogs)
    #[arg(long)]
    pub(crate) trainee: Option<String>,
    /// Driver name (driver-trainer catalog)
    #[arg(long)]
    pub(crate) driver: Option<String>,
    /// Trainer name (driver-trainer catalog)
    #[arg(long)]
    pub(crate) trainer: Option<String>,
    /// CSV answer script with columns question_id,value,free_text
    #[arg(long)]
    pub(crate) answers: Option<PathBuf>,
    /// Prompt for each question on stdin after the script (if any) is applied
    #[arg(long)]
    pub(crate) interactive: bool,
    /// Store the finished report in the archive
    #[arg(long)]
    pub(crate) save: bool,
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let variant = match args.variant {
        Some(variant) => variant,
        None => AppConfig::load()?.evaluation.catalog,
    };
    let catalog = QuestionCatalog::for_variant(variant);

    if args.json {
        match serde_json::to_string_pretty(&catalog) {
            Ok(json) => println!("{}", json),
            Err(err) => println!("Catalog JSON unavailable: {}", err),
        }
        return Ok(());
    }

    print!("{}", render_catalog(&catalog));
    Ok(())
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let variant = args.variant.unwrap_or(config.evaluation.catalog);
    let catalog = Arc::new(QuestionCatalog::for_variant(variant));

    let mut session = EvaluationSession::new(catalog.clone());
    session.start(subjects_from(args.trainee, args.driver, args.trainer))?;

    if let Some(path) = args.answers {
        let script = AnswerScript::from_path(&path)?;
        let applied = script.apply(&mut session)?;
        eprintln!("Applied {} scripted answers from {}", applied, path.display());
    }

    if args.interactive {
        let stdin = io::stdin();
        let stdout = io::stdout();
        run_interactive(&mut session, stdin.lock(), stdout.lock())?;
    }

    println!("{}", session.report_text());
    if let Some(summary) = session.score_summary() {
        print!("\n{}", render_score(&summary));
    }

    if args.save || catalog.keeps_history() {
        let archive = open_archive(&config.archive);
        let saved = archive.save(&session)?;
        println!(
            "\nSaved report {} to {}",
            saved.id,
            config.archive.path.display()
        );
    }

    Ok(())
}

pub(crate) fn render_catalog(catalog: &QuestionCatalog) -> String {
    let mut out = format!(
        "Catalog {} ({} questions",
        catalog.name(),
        catalog.len()
    );
    if catalog.is_scoring() {
        out.push_str(&format!(", max score {}", catalog.max_score()));
    }
    out.push_str(")\n");

    for (index, question) in catalog.questions().iter().enumerate() {
        out.push_str(&format!(
            "\n{:>2}. {} [{}]{}\n",
            index + 1,
            question.title,
            question.id,
            if question.scored { " (scored)" } else { "" }
        ));
        for option in &question.options {
            out.push_str(&format!("    - {} = {}", option.value, option.label));
            if catalog.is_scoring() && question.scored {
                out.push_str(&format!(" ({} pts)", option.points));
            }
            out.push('\n');
        }
        if let Some(field) = &question.free_text {
            out.push_str(&format!(
                "    * \"{}\" when {} is selected\n",
                field.label, field.trigger
            ));
        }
    }
    out
}

pub(crate) fn render_score(summary: &ScoreSummary) -> String {
    let mut out = format!(
        "Score: {}/{} ({}%) - {}\n",
        summary.total, summary.max, summary.percentage, summary.level_label
    );
    for line in summary.recommendations() {
        out.push_str(&format!("- {}\n", line));
    }
    out
}

/// Prompts for every question from the session's current position. Blank input
/// moves on, `b` steps back, `q` stops early.
pub(crate) fn run_interactive<R, W>(
    session: &mut EvaluationSession,
    mut input: R,
    mut output: W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    while let Some(question) = session.current_question().cloned() {
        write_question(&mut output, session, &question)?;
        let Some(line) = read_line(&mut input)? else {
            break;
        };

        match line.as_str() {
            "" => {
                session.advance();
            }
            "b" => {
                session.retreat();
            }
            "q" => break,
            choices => {
                for choice in choices.split(',').map(str::trim) {
                    apply_choice(session, &question, choice, &mut input, &mut output)?;
                }
                if question.kind != AnswerKind::Multiple {
                    session.advance();
                }
            }
        }
    }
    output.flush()
}

fn write_question<W: Write>(
    output: &mut W,
    session: &EvaluationSession,
    question: &QuestionDefinition,
) -> io::Result<()> {
    let answer = session.answers().get(question.id);
    writeln!(
        output,
        "\n[{}/{}] {}",
        session.current_index() + 1,
        session.catalog().len(),
        question.title
    )?;
    writeln!(output, "{}", question.instruction())?;
    for (index, option) in question.options.iter().enumerate() {
        let marker = if answer.is_some_and(|answer| answer.is_selected(option.value)) {
            "*"
        } else {
            " "
        };
        writeln!(output, " {marker}{:>2}) {}", index + 1, option.label)?;
    }
    write!(output, "> ")?;
    output.flush()
}

fn apply_choice<R, W>(
    session: &mut EvaluationSession,
    question: &QuestionDefinition,
    choice: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let option = choice
        .parse::<usize>()
        .ok()
        .and_then(|number| number.checked_sub(1))
        .and_then(|index| question.options.get(index));
    let Some(option) = option else {
        writeln!(output, "Unknown choice '{}'", choice)?;
        return Ok(());
    };

    let field_text = match &question.free_text {
        Some(field) if field.trigger == option.value => {
            write!(output, "{}: ", field.label)?;
            output.flush()?;
            read_line(input)?
        }
        _ => None,
    };

    if let Err(err) = session.record_answer(question.id, option.value, field_text.as_deref()) {
        writeln!(output, "{}", err)?;
    }
    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
