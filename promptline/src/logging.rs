//! # Leveled Logging
//!
//! A small leveled logger that fans tagged messages out to pluggable
//! destinations: the console (styled per level), a plain-text file, or a
//! JSON-lines file. Loggers live in an explicitly constructed
//! [`LoggerRegistry`] keyed by name — created at startup, dropped at
//! shutdown, never a process-global.
//!
//! Log lines share one format: `(LEVEL)[tag][tag]: message`.
//!
//! ## Example
//! ```rust,no_run
//! use promptline::logging::{LogLevel, LoggerRegistry};
//!
//! let mut registry = LoggerRegistry::new();
//! let logger = registry.request("scanner");
//! logger.info("starting up", &["boot"]);
//! logger.log(LogLevel::Warning, "low disk space", &["env"]);
//! ```

use std::collections::HashMap;
use std::fmt::{self, Display};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;

use crate::style::{Color, TextStyle, paint};

/// Severity of a log message, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    pub fn name(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Renders the shared `(LEVEL)[tag][tag]: message` line format.
pub fn format_message(level: LogLevel, message: &str, tags: &[&str]) -> String {
    let tag_list: String = tags.iter().map(|tag| format!("[{tag}]")).collect();
    format!("({}){}: {}", level.name(), tag_list, message)
}

/// A sink log messages fan out to.
pub trait LogDestination {
    fn write(&mut self, level: LogLevel, message: &str, tags: &[&str]);
}

/// Writes styled log lines to stdout, one color per level.
pub struct ConsoleLog {
    styles: HashMap<LogLevel, TextStyle>,
}

impl ConsoleLog {
    pub fn new() -> Self {
        let mut styles = HashMap::new();
        styles.insert(LogLevel::Debug, TextStyle::new(Color::Cyan));
        styles.insert(LogLevel::Info, TextStyle::new(Color::Blue));
        styles.insert(LogLevel::Warning, TextStyle::new(Color::Yellow));
        styles.insert(LogLevel::Error, TextStyle::new(Color::Red));
        styles.insert(LogLevel::Critical, TextStyle::bold(Color::Red));
        Self { styles }
    }

    /// Overrides the style for one level.
    pub fn with_style(mut self, level: LogLevel, style: TextStyle) -> Self {
        self.styles.insert(level, style);
        self
    }
}

impl Default for ConsoleLog {
    fn default() -> Self {
        Self::new()
    }
}

impl LogDestination for ConsoleLog {
    fn write(&mut self, level: LogLevel, message: &str, tags: &[&str]) {
        let formatted = format_message(level, message, tags);
        match self.styles.get(&level) {
            Some(style) => println!("{}", paint(&formatted, style)),
            None => println!("{formatted}"),
        }
    }
}

/// Appends plain log lines to a file.
pub struct FileLog {
    path: PathBuf,
}

impl FileLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn append(&self, line: &str) {
        let opened = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path);
        match opened {
            Ok(mut file) => {
                if let Err(error) = writeln!(file, "{line}") {
                    eprintln!("Couldn't write log to {}: {error}", self.path.display());
                }
            }
            Err(error) => {
                eprintln!("Couldn't open log file {}: {error}", self.path.display());
            }
        }
    }
}

impl LogDestination for FileLog {
    fn write(&mut self, level: LogLevel, message: &str, tags: &[&str]) {
        self.append(&format_message(level, message, tags));
    }
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    level: &'a str,
    tags: &'a [&'a str],
    message: &'a str,
}

/// Appends one JSON object per log line to a file.
pub struct JsonFileLog {
    inner: FileLog,
}

impl JsonFileLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            inner: FileLog::new(path),
        }
    }
}

impl LogDestination for JsonFileLog {
    fn write(&mut self, level: LogLevel, message: &str, tags: &[&str]) {
        let record = JsonRecord {
            level: level.name(),
            tags,
            message,
        };
        match serde_json::to_string(&record) {
            Ok(line) => self.inner.append(&line),
            Err(error) => eprintln!("Couldn't encode log record: {error}"),
        }
    }
}

/// One destination plus the least severe level it accepts.
pub struct LogRoute {
    pub destination: Box<dyn LogDestination>,
    pub minimum: LogLevel,
}

impl LogRoute {
    pub fn new(destination: impl LogDestination + 'static, minimum: LogLevel) -> Self {
        Self {
            destination: Box::new(destination),
            minimum,
        }
    }
}

/// A named logger fanning messages out to its routes.
pub struct Logger {
    name: String,
    routes: Vec<LogRoute>,
}

impl Logger {
    /// A logger with the default console route accepting every level.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_routes(name, vec![LogRoute::new(ConsoleLog::new(), LogLevel::Debug)])
    }

    pub fn with_routes(name: impl Into<String>, routes: Vec<LogRoute>) -> Self {
        Self {
            name: name.into(),
            routes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_route(&mut self, route: LogRoute) {
        self.routes.push(route);
    }

    /// Fans `message` out to every route whose minimum level admits it.
    pub fn log(&mut self, level: LogLevel, message: &str, tags: &[&str]) {
        for route in &mut self.routes {
            if level >= route.minimum {
                route.destination.write(level, message, tags);
            }
        }
    }

    pub fn debug(&mut self, message: &str, tags: &[&str]) {
        self.log(LogLevel::Debug, message, tags);
    }

    pub fn info(&mut self, message: &str, tags: &[&str]) {
        self.log(LogLevel::Info, message, tags);
    }

    pub fn warning(&mut self, message: &str, tags: &[&str]) {
        self.log(LogLevel::Warning, message, tags);
    }

    pub fn error(&mut self, message: &str, tags: &[&str]) {
        self.log(LogLevel::Error, message, tags);
    }

    pub fn critical(&mut self, message: &str, tags: &[&str]) {
        self.log(LogLevel::Critical, message, tags);
    }
}

/// An explicitly owned collection of named loggers.
///
/// Construct one at startup and pass it to whoever needs it; dropping it
/// drops every logger.
#[derive(Default)]
pub struct LoggerRegistry {
    loggers: HashMap<String, Logger>,
}

impl LoggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the logger registered under `name`, creating a
    /// console-backed one if absent.
    pub fn request(&mut self, name: &str) -> &mut Logger {
        self.loggers
            .entry(name.to_string())
            .or_insert_with(|| Logger::new(name))
    }

    /// Registers `logger` under its own name, replacing any previous entry.
    pub fn insert(&mut self, logger: Logger) {
        self.loggers.insert(logger.name().to_string(), logger);
    }

    pub fn unregister(&mut self, name: &str) -> Option<Logger> {
        self.loggers.remove(name)
    }

    pub fn clear(&mut self) {
        self.loggers.clear();
    }

    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Test destination recording formatted lines into a shared buffer.
    struct SharedLog(Rc<RefCell<Vec<String>>>);

    impl LogDestination for SharedLog {
        fn write(&mut self, level: LogLevel, message: &str, tags: &[&str]) {
            self.0.borrow_mut().push(format_message(level, message, tags));
        }
    }

    #[test]
    fn test_format_message_with_tags() {
        assert_eq!(
            format_message(LogLevel::Warning, "low disk", &["env", "disk"]),
            "(WARNING)[env][disk]: low disk"
        );
    }

    #[test]
    fn test_format_message_without_tags() {
        assert_eq!(format_message(LogLevel::Debug, "hi", &[]), "(DEBUG): hi");
    }

    #[test]
    fn test_logger_respects_route_minimum() {
        let lines = Rc::new(RefCell::new(Vec::new()));
        let mut logger = Logger::with_routes(
            "test",
            vec![LogRoute::new(SharedLog(Rc::clone(&lines)), LogLevel::Warning)],
        );
        logger.debug("quiet", &[]);
        logger.info("quiet", &[]);
        logger.warning("loud", &[]);
        logger.critical("louder", &[]);
        assert_eq!(
            *lines.borrow(),
            vec!["(WARNING): loud", "(CRITICAL): louder"]
        );
    }

    #[test]
    fn test_logger_fans_out_to_all_admitting_routes() {
        let first = Rc::new(RefCell::new(Vec::new()));
        let second = Rc::new(RefCell::new(Vec::new()));
        let mut logger = Logger::with_routes(
            "test",
            vec![
                LogRoute::new(SharedLog(Rc::clone(&first)), LogLevel::Debug),
                LogRoute::new(SharedLog(Rc::clone(&second)), LogLevel::Error),
            ],
        );
        logger.info("hello", &["a"]);
        assert_eq!(*first.borrow(), vec!["(INFO)[a]: hello"]);
        assert!(second.borrow().is_empty());
    }

    #[test]
    fn test_file_log_appends_lines() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("app.log");
        let mut destination = FileLog::new(&path);
        destination.write(LogLevel::Info, "first", &[]);
        destination.write(LogLevel::Error, "second", &["io"]);
        let contents = std::fs::read_to_string(&path).expect("read log");
        assert_eq!(contents, "(INFO): first\n(ERROR)[io]: second\n");
    }

    #[test]
    fn test_json_file_log_encodes_records() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("app.jsonl");
        let mut destination = JsonFileLog::new(&path);
        destination.write(LogLevel::Warning, "low disk", &["env"]);
        let contents = std::fs::read_to_string(&path).expect("read log");
        let value: serde_json::Value =
            serde_json::from_str(contents.trim()).expect("valid json");
        assert_eq!(value["level"], "WARNING");
        assert_eq!(value["message"], "low disk");
        assert_eq!(value["tags"][0], "env");
    }

    #[test]
    fn test_registry_reuses_and_unregisters() {
        let mut registry = LoggerRegistry::new();
        assert!(registry.is_empty());
        registry.request("scanner");
        registry.request("scanner");
        assert_eq!(registry.len(), 1);
        assert!(registry.unregister("scanner").is_some());
        assert!(registry.unregister("scanner").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_registry_clear() {
        let mut registry = LoggerRegistry::new();
        registry.request("a");
        registry.request("b");
        registry.clear();
        assert!(registry.is_empty());
    }
}
