use std::fs::OpenOptions;
use std::process::ExitCode;
use std::sync::Mutex;

use orthodox_calendar_bot::cli::{self, Command};
use orthodox_calendar_bot::config::Config;
use orthodox_calendar_bot::discord::Discord;
use orthodox_calendar_bot::handler;
use orthodox_calendar_bot::orthocal::Orthocal;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

const LOG_FILE: &str = "orthodox_calendar_bot.log";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = match cli::parse(&args) {
        Ok(Command::Run(args)) => args,
        Ok(Command::Help(usage)) => {
            println!("{}", usage);
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging();

    let config = match Config::load(&args.config_path) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };
    let orthocal = Orthocal::new(config.api_base_url.as_str());

    if args.preview {
        return match handler::prepare(&orthocal, config.calendar_type) {
            Ok(embed) => {
                println!("{}", embed.preview());
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!(error = %e, "Failed to fetch calendar data");
                ExitCode::FAILURE
            }
        };
    }

    let hook_url = match config.require_webhook_url() {
        Ok(url) => url,
        Err(e) => {
            error!(error = %e, "Configuration error");
            return ExitCode::FAILURE;
        }
    };
    let discord = Discord::new(hook_url);

    if handler::run(&orthocal, config.calendar_type, &discord) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Log to stdout and append to the log file; console only if the file can't be opened.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match OpenOptions::new().create(true).append(true).open(LOG_FILE) {
        Ok(file) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(std::io::stdout.and(Mutex::new(file)))
                .try_init();
        }
        Err(e) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .try_init();
            warn!(error = %e, path = LOG_FILE, "Could not open log file; logging to console only");
        }
    }
}
