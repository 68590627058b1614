use crate::console::{run_estimate, run_quiz, EstimateArgs, QuizArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use portfolio_pricing::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Portfolio Pricing",
    about = "Serve or run the hire page estimator and plan quiz from the command line",
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
    /// Price a build with the estimator
    Estimate(EstimateArgs),
    /// Answer the plan quiz and print the recommendation
    Quiz(QuizArgs),
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
        Command::Estimate(args) => run_estimate(args),
        Command::Quiz(args) => run_quiz(args),
    }
}
