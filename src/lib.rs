pub mod commands;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

use std::io::Read;
use std::path::PathBuf;

use crate::commands::CommandError;
use crate::error::{AppError, AppResult};
use crate::services::schedule_service::ScheduleService;
use crate::services::settings_service::SettingsService;

const ENV_LOG_DIR: &str = "CHRONOFORGE_LOG_DIR";

#[derive(Debug, Default, Clone, PartialEq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub request: Option<PathBuf>,
}

impl CliArgs {
    /// `[--config <settings.yaml>] [request.json]`
    pub fn parse<I>(args: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = CliArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => {
                    let path = args
                        .next()
                        .ok_or_else(|| AppError::validation("--config requires a path"))?;
                    parsed.config = Some(PathBuf::from(path));
                }
                flag if flag.starts_with('-') && flag != "-" => {
                    return Err(AppError::validation(format!("unknown option `{flag}`")));
                }
                path => {
                    if parsed.request.is_some() {
                        return Err(AppError::validation("only one request file may be given"));
                    }
                    if path != "-" {
                        parsed.request = Some(PathBuf::from(path));
                    }
                }
            }
        }

        Ok(parsed)
    }
}

pub fn run() {
    if let Err(error) = try_run() {
        match serde_json::to_string_pretty(&error) {
            Ok(rendered) => eprintln!("{rendered}"),
            Err(_) => eprintln!("{}: {}", error.code, error.message),
        }
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), CommandError> {
    let log_dir = std::env::var_os(ENV_LOG_DIR).map(PathBuf::from);
    crate::utils::logger::init_logging(log_dir.as_deref())?;

    let args = CliArgs::parse(std::env::args().skip(1))?;
    let settings = SettingsService::load(args.config.as_deref())?;
    let service = ScheduleService::new(settings);

    let raw = match &args.request {
        Some(path) => std::fs::read_to_string(path).map_err(AppError::from)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(AppError::from)?;
            buffer
        }
    };

    let response = crate::commands::planning::planning_handle_json(&service, &raw)?;
    let rendered = serde_json::to_string_pretty(&response).map_err(AppError::from)?;
    println!("{rendered}");

    Ok(())
}
