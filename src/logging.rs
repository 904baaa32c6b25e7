// src/logging.rs
//! Logger setup for the command-line drivers.
//!
//! The library itself only emits through the `log` facade.

use log::LevelFilter;
use std::path::Path;

/// Install a `fern` logger writing `[timestamp][target][level] message` to
/// stderr and, optionally, to `log_file` (truncated on open).
pub fn init_logging(level: LevelFilter, log_file: Option<&Path>) -> Result<(), fern::InitError> {
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}][{}] {}",
                chrono::Local::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, false),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr());

    if let Some(path) = log_file {
        let file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        dispatch = dispatch.chain(file);
    }

    dispatch.apply()?;
    Ok(())
}

/// Map a verbosity count (`-v` repetitions) to a level filter
pub fn level_from_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
