//! Logger utility for application-wide logging
//!
//! Provides a `log` backend that mirrors records to stderr and a log file.
//! Stdout is reserved for the JSON document, so nothing here writes to it.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Metadata, LevelFilter};

/// File-backed logger
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
    /// Most verbose level that is recorded
    level: LevelFilter,
}

impl Logger {
    /// Creates a new logger writing to `log_file`
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    /// * `level` - Most verbose level to record
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: &str, level: LevelFilter) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            level,
        })
    }

    /// Appends a line to the log file
    pub fn write_line(&self, message: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Install the global logger
    ///
    /// With a log file, records go to that file and to stderr. Without one,
    /// `env_logger` handles stderr output and still honours `RUST_LOG`.
    pub fn init_global_logger(log_file: Option<&str>, level: LevelFilter) -> io::Result<()> {
        match log_file {
            Some(path) => {
                let global_logger = Logger::new(path, level)?;
                if log::set_boxed_logger(Box::new(global_logger)).is_err() {
                    eprintln!("Warning: Global logger was already initialized");
                }
                log::set_max_level(level);
            }
            None => {
                let result = env_logger::Builder::new()
                    .filter_level(level)
                    .parse_default_env()
                    .target(env_logger::Target::Stderr)
                    .try_init();
                if result.is_err() {
                    eprintln!("Warning: Global logger was already initialized");
                }
            }
        }
        Ok(())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = self.write_line(&message);
            eprintln!("{}", message);
        }
    }

    fn flush(&self) {
        // Already flushing in write_line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn test_logger_writes_enabled_records() {
        let name = format!("image_to_entities_logger_{}.log", std::process::id());
        let path = std::env::temp_dir().join(name);
        let path_str = path.to_string_lossy().to_string();
        let logger = Logger::new(&path_str, LevelFilter::Info).unwrap();

        logger.log(&Record::builder().level(Level::Info).args(format_args!("kept")).build());
        logger.log(&Record::builder().level(Level::Debug).args(format_args!("dropped")).build());

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "[INFO] kept\n");
        let _ = std::fs::remove_file(&path);
    }
}
