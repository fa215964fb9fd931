use coworking_live::{AppError, Config, build_rocket};
use std::process::ExitCode;

#[rocket::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let config = match Config::load().map_err(AppError::from) {
        Ok(config) => config,
        Err(AppError::ConfigurationError { message, source }) => {
            eprintln!("{message}: {source}");
            return ExitCode::FAILURE;
        }
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match build_rocket(config).launch().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "server terminated");
            ExitCode::FAILURE
        }
    }
}
