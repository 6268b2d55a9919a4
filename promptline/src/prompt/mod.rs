//! # Validated Input Prompts
//!
//! Interactive prompts built around one shared validation loop: display the
//! prompt, read a line, classify it. A raw line matching a cancel code
//! aborts the prompt; a validation failure either re-prompts (`recurring`)
//! or terminates with an error outcome; a valid line is sanitized into its
//! typed value.
//!
//! ## Features
//! - String, numeric, boolean, and file-path prompts with per-kind
//!   constraints ([`StringPrompt`], [`NumericPrompt`], [`BooleanPrompt`],
//!   [`FilePrompt`])
//! - A selection adapter over any choice list ([`SelectionPrompt`])
//! - A list accumulator with stop token, bounds, and duplicate control
//!   ([`ListPrompt`])
//! - Configurable error-message tables with `{name}` interpolation
//!   ([`MessageTable`])
//! - Explicit console injection for deterministic tests
//!   ([`ConsoleIo`], [`ScriptedConsole`])
//!
//! ## Example
//! ```rust,no_run
//! use promptline::prompt::{NumericOptions, NumericPrompt, PromptOutcome};
//!
//! let prompt = NumericPrompt::with_options(NumericOptions {
//!     minimum: Some(1.0),
//!     maximum: Some(16.0),
//!     allow_floats: false,
//!     ..NumericOptions::default()
//! });
//! match prompt.ask("Scan threads (1-16)") {
//!     PromptOutcome::Success(threads) => println!("Using {threads} threads"),
//!     PromptOutcome::Cancel => println!("Cancelled"),
//!     PromptOutcome::Error => println!("No valid answer"),
//! }
//! ```

mod core;
mod io;
mod kinds;
mod list;
mod messages;
mod options;
mod outcome;
mod selection;

pub use io::{ConsoleIo, ScriptedConsole, StdConsole};
pub use kinds::{BooleanPrompt, FilePrompt, Number, NumericPrompt, StringPrompt};
pub use list::ListPrompt;
pub use messages::{MessageCode, MessageTable, UNKNOWN_ERROR, ValidationFailure};
pub use options::{
    BaseOptions, BooleanOptions, ExistencePolicy, FileOptions, ListOptions, NumericOptions,
    PermissionKind, SelectionOptions, StringOptions, StyleSet,
};
pub use outcome::PromptOutcome;
pub use selection::{SelectionPrompt, default_item_format};
