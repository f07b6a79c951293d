use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, OnceLock, PoisonError};

use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();
static WARNED_UNINITIALIZED: AtomicBool = AtomicBool::new(false);

/// Where log lines go. The terminal runner draws the board on stdout, so it
/// logs to stderr or a file.
#[derive(Clone, Debug)]
pub enum LogTarget {
    Stdout,
    Stderr,
    File(PathBuf),
}

enum Sink {
    Stdout,
    Stderr,
    File(File),
}

pub struct Logger {
    prefix: Option<String>,
    sink: Mutex<Sink>,
}

impl Logger {
    fn new(prefix: Option<String>, target: LogTarget) -> Result<Self, String> {
        let sink = match target {
            LogTarget::Stdout => Sink::Stdout,
            LogTarget::Stderr => Sink::Stderr,
            LogTarget::File(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&path)
                    .map_err(|e| format!("Failed to open log file {}: {}", path.display(), e))?;
                Sink::File(file)
            }
        };

        Ok(Self {
            prefix,
            sink: Mutex::new(sink),
        })
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        let formatted = match self.prefix {
            Some(ref prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        };

        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        match &mut *sink {
            Sink::Stdout => println!("{}", formatted),
            Sink::Stderr => eprintln!("{}", formatted),
            Sink::File(file) => {
                let _ = writeln!(file, "{}", formatted);
            }
        }
    }
}

/// Installs the process-wide logger. Later calls are ignored.
pub fn init_logger(prefix: Option<String>, target: LogTarget) -> Result<(), String> {
    if LOGGER.get().is_some() {
        return Ok(());
    }
    let logger = Logger::new(prefix, target)?;
    let _ = LOGGER.set(logger);
    Ok(())
}

pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    } else if !WARNED_UNINITIALIZED.swap(true, Ordering::Relaxed) {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}
