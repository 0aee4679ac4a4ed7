use clap::Parser;
use quiztime::app::{handle_fatal_error, init_logging, run_quiz, AppConfig};
use quiztime::cli::Cli;
use quiztime::quiz::StdinAnswers;
use tracing::debug;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    init_logging(&AppConfig::new(verbose));

    if let Err(e) = run(cli).await {
        handle_fatal_error(e, verbose);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = cli.into_settings()?;
    let result = run_quiz(&settings, std::io::stdout(), StdinAnswers::new()).await?;
    debug!("Session result: {:?}", result);
    Ok(())
}
