//! Command-line entry point.

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let cli = facelens_app::Cli::parse();
    let result = cli.resolve().and_then(|(job, config)| {
        log::info!("Rendering {} at {}x{}", job.response.display(), config.width, config.height);
        facelens_app::run(&job, &config)
    });

    match result {
        Ok(summary) => {
            println!("{} faces drawn from {} responses", summary.faces, summary.responses);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("facelens: {}", e);
            ExitCode::FAILURE
        }
    }
}
