use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Where the bar logs to unless told otherwise: `$HOME/.groupbox.log`.
#[must_use]
pub fn default_log_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".groupbox.log"))
}

/// Send all log output to `log_file`, and log panics before they unwind.
///
/// # Errors
///
/// Returns an error if the log file can not be created or a logger is
/// already installed.
pub fn setup_logger(log_file: impl AsRef<Path>, level: simplelog::LevelFilter) -> Result<()> {
    simplelog::WriteLogger::init(
        level,
        simplelog::Config::default(),
        std::fs::File::create(log_file)?,
    )
    .map_err(|e| Error::Logger(e.to_string()))?;

    std::panic::set_hook(Box::new(|info| {
        tracing::error!("{}", info);
    }));

    Ok(())
}
