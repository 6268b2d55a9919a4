//! # Promptline
//!
//! A small library of terminal-interaction helpers for building interactive
//! CLI applications: validated input prompts with retry/cancel semantics,
//! a selection adapter and list accumulator, a thin form builder, a menu
//! dispatcher, a leveled logger with pluggable destinations, ANSI styling,
//! and English formatting utilities.
//!
//! Everything is single-threaded and synchronous: one active prompt at a
//! time, blocking on each line of operator input. There is no scheduler, no
//! persistence beyond the file log destinations, and no network code.
//!
//! ## Features
//!
//! - **Validated prompts** — string, numeric, boolean, and file-path
//!   prompts sharing one retry/cancel/error loop with configurable
//!   error-message tables
//! - **Selection & lists** — pick from an ordered choice list by number, or
//!   accumulate a bounded, optionally duplicate-free list of values
//! - **Forms & menus** — thin wrappers composing prompts into multi-field
//!   forms and labeled-callback menus
//! - **Leveled logging** — console, file, and JSON-lines destinations
//!   behind an explicitly owned logger registry
//! - **ANSI styling** — the 4-bit palette, bold/high-intensity variants,
//!   and an in-place progress bar
//! - **Deterministic testing** — every prompt accepts an injected console,
//!   so validation flows run against a fixed input script
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! promptline = "0.1"
//! ```
//!
//! ## Usage Examples
//!
//! ### Basic Input & Range Validation
//!
//! ```rust,no_run
//! use promptline::prompt::{NumericOptions, NumericPrompt, PromptOutcome};
//!
//! let prompt = NumericPrompt::with_options(NumericOptions {
//!     minimum: Some(1.0),
//!     maximum: Some(16.0),
//!     allow_floats: false,
//!     ..NumericOptions::default()
//! });
//!
//! match prompt.ask("Enter scan threads (1-16)") {
//!     PromptOutcome::Success(threads) => println!("Threads: {threads}"),
//!     PromptOutcome::Cancel => println!("Cancelled"),
//!     PromptOutcome::Error => println!("No valid answer"),
//! }
//! ```
//!
//! ### Selecting From a List
//!
//! ```rust,no_run
//! use promptline::prompt::{PromptOutcome, SelectionPrompt};
//!
//! let colors = ["red", "orange", "yellow", "green", "blue", "purple"];
//! if let PromptOutcome::Success(index) = SelectionPrompt::new().ask("Select a color", &colors) {
//!     println!("You picked {}", colors[index]);
//! }
//! ```
//!
//! ### Deterministic Testing
//!
//! Every prompt accepts an injected console, so tests replay a fixed
//! script instead of touching stdin:
//!
//! ```rust
//! use promptline::prompt::{PromptOutcome, ScriptedConsole, StringPrompt};
//!
//! let mut console = ScriptedConsole::new(["", "hello"]);
//! let outcome = StringPrompt::new().ask_with("Say something", &mut console);
//! assert_eq!(outcome, PromptOutcome::Success("hello".to_string()));
//! assert_eq!(console.reads(), 2);
//! ```
//!
//! ### Logging
//!
//! ```rust,no_run
//! use promptline::logging::{FileLog, LogLevel, LogRoute, Logger, LoggerRegistry};
//!
//! let mut registry = LoggerRegistry::new();
//! let mut logger = Logger::new("scanner");
//! logger.add_route(LogRoute::new(FileLog::new("scan.log"), LogLevel::Warning));
//! registry.insert(logger);
//!
//! registry.request("scanner").info("starting up", &["boot"]);
//! ```
//!
//! ## Architecture
//!
//! The library is designed around one shared contract:
//!
//! - **`prompt`** — the validation loop and every prompt kind built on it
//! - **`form`** / **`menu`** — composition layers over `prompt`
//! - **`logging`** — leveled logging with pluggable destinations
//! - **`style`** — ANSI escape-sequence helpers
//! - **`english`** — pluralization and capitalization utilities
//!
//! ## Error Handling
//!
//! Validation failures are recoverable by design: they stay inside the
//! prompt loop and surface to the operator as configured messages, never to
//! the caller. A prompt invocation always resolves to exactly one of
//! `Success(value)`, `Cancel`, or `Error` — the latter two are distinct
//! "no value" states and must not be conflated with a falsy success value.

pub mod english;
pub mod form;
pub mod logging;
pub mod menu;
pub mod prompt;
pub mod style;
