use KiMKM::cli::cli_main::{parse_command, run_command};
use KiMKM::logging::setup_logging;
use KiMKM::settings::{SETTINGS_FILE, Settings};
use log::error;
use std::path::Path;
use std::process::ExitCode;

pub fn main() -> ExitCode {
    let settings = match Settings::load(SETTINGS_FILE) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("cannot read {}: {}", SETTINGS_FILE, e);
            return ExitCode::FAILURE;
        }
    };
    let level = match settings.level_filter() {
        Ok(level) => level,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = setup_logging(level, settings.log_file.as_deref().map(Path::new)) {
        eprintln!("logging is not available: {}", e);
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match parse_command(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    match run_command(command, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
