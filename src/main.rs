use clap::Parser;
use firestore_peek::cli::{Cli, run};
use firestore_peek::utils::setup_logger;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logger(cli.debug);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if cli.debug {
                eprintln!("{e:#?}");
            }
            ExitCode::FAILURE
        }
    }
}
