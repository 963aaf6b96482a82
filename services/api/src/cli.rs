use crate::demo::{run_demo, DemoArgs};
use crate::evaluate::{run_catalog, run_evaluate, CatalogArgs, EvaluateArgs};
use crate::history::{run_history, HistoryCommand};
use crate::server;
use clap::{Args, Parser, Subcommand};
use depot_ops::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Depot Ride-Along",
    about = "Run ride-along evaluations and serve the evaluation API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the questions and options of a catalog
    Catalog(CatalogArgs),
    /// Run one evaluation from an answer script or interactively and print the report
    Evaluate(EvaluateArgs),
    /// Inspect, delete, or export saved reports
    History {
        #[command(subcommand)]
        command: HistoryCommand,
    },
    /// Walk through a sample evaluation on every built-in catalog
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Catalog(args) => run_catalog(args),
        Command::Evaluate(args) => run_evaluate(args),
        Command::History { command } => run_history(command),
        Command::Demo(args) => run_demo(args),
    }
}
