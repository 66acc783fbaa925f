use clap::Parser;
use std::process::ExitCode;

use pwd_evaluator::server::{self, ServerConfig, logging};

#[tokio::main]
async fn main() -> ExitCode {
    let config = ServerConfig::parse();
    logging::init_logging(config.verbose);

    match server::run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
