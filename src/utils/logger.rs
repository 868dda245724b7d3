//! File-backed logging
//!
//! The toolkit logs through the standard log crate facade; this module
//! supplies the backend, a logger that mirrors every record to a file so
//! conversion runs leave a reviewable trace.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Logger writing to a file alongside the console
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
}

impl Logger {
    /// Open a logger on the given file path
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: &str) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
        })
    }

    /// Write one line to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        if let Some(file) = &mut *self.file.lock().unwrap() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Record the outcome of a conversion run
    ///
    /// # Arguments
    ///
    /// * `from` - Source CRS description
    /// * `to` - Target CRS description
    /// * `count` - Number of points converted
    pub fn print_conversion_summary(&self, from: &str, to: &str, count: usize) -> io::Result<()> {
        self.log("Conversion summary:")?;
        self.log(&format!("  From: {}", from))?;
        self.log(&format!("  To: {}", to))?;
        self.log(&format!("  Points: {}", count))?;
        Ok(())
    }

    /// Install a logger instance as the log crate's global backend
    pub fn init_global_logger(log_file: &str) -> io::Result<()> {
        let global_logger = Logger::new(log_file)?;

        // set_boxed_logger only succeeds once per process; a second call
        // means something already installed a backend, which we report but
        // do not treat as fatal.
        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(LevelFilter::Debug);
        Ok(())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = self.log(&message);

            // Records go to the console as well as the file
            println!("{}", message);
        }
    }

    fn flush(&self) {
        // Every write already flushes
    }
}
