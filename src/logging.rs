use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use std::error::Error;
use std::fs::File;
use std::path::Path;

/// terminal logger, plus a file logger when `log_file` is given
pub fn build_loggers(
    level: LevelFilter,
    log_file: Option<&Path>,
) -> Result<Vec<Box<dyn SharedLogger>>, std::io::Error> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if let Some(path) = log_file {
        let file = File::create(path)?;
        loggers.push(WriteLogger::new(level, Config::default(), file));
    }
    Ok(loggers)
}

/// installs the global logger, must be called once by the binary
pub fn setup_logging(level: LevelFilter, log_file: Option<&Path>) -> Result<(), Box<dyn Error>> {
    CombinedLogger::init(build_loggers(level, log_file)?)?;
    Ok(())
}
