use crate::config::Settings;
use crate::error::{Error, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*};

/// Maps the numeric `LOG_LEVEL` onto a tracing filter.
/// A message of level `n` is written when `n <= LOG_LEVEL`.
pub fn level_filter(log_level: i64) -> LevelFilter {
    match log_level {
        i64::MIN..=0 => LevelFilter::OFF,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Truncates the log file, creating it and its parent directories if needed.
pub fn init_log_file(path: &Path) -> Result<File> {
    let to_err = |source| Error::LogFile {
        path: path.to_owned(),
        source,
    };
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(to_err)?;
    }
    File::create(path).map_err(to_err)
}

/// Installs the global subscriber. Without `LOG_FILE` nothing is installed
/// and every event is dropped.
pub fn init(settings: &Settings) -> Result<()> {
    let Some(path) = &settings.log_file else {
        return Ok(());
    };
    let file = init_log_file(path)?;
    let filter = level_filter(settings.log_level);
    if filter == LevelFilter::OFF {
        return Ok(());
    }
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(filter)
        .try_init()
        .map_err(|_| Error::Logger)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_map_to_filters() {
        assert_eq!(level_filter(-3), LevelFilter::OFF);
        assert_eq!(level_filter(0), LevelFilter::OFF);
        assert_eq!(level_filter(1), LevelFilter::INFO);
        assert_eq!(level_filter(2), LevelFilter::DEBUG);
        assert_eq!(level_filter(3), LevelFilter::TRACE);
        assert_eq!(level_filter(42), LevelFilter::TRACE);
    }

    #[test]
    fn log_file_is_created_and_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("tester.log");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "stale").unwrap();
        init_log_file(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");

        let fresh = dir.path().join("a").join("b").join("new.log");
        init_log_file(&fresh).unwrap();
        assert!(fresh.exists());
    }
}
