//! # Validation Failures & Message Tables
//!
//! A failed validation step raises a [`ValidationFailure`]: a condition code
//! plus named formatting parameters. The failure is resolved against the
//! prompt's [`MessageTable`] to produce the user-visible text; codes missing
//! from the table fall back to a generic message.
//!
//! ## Example
//! ```rust
//! use promptline::prompt::{MessageCode, MessageTable, ValidationFailure};
//!
//! let table = MessageTable::numeric_defaults();
//! let failure = ValidationFailure::new(MessageCode::TooBig).param("max", 10);
//! assert_eq!(table.resolve(&failure), "Must be less than or equal to 10");
//! ```

use std::collections::HashMap;
use std::error::Error;
use std::fmt::{self, Display};

/// Shown when a failure's code has no entry in the message table.
pub const UNKNOWN_ERROR: &str = "Unknown Error";

/// Condition codes a validator can raise, used as message-table keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageCode {
    /// Input was empty (or shorter than a minimum length of one).
    Empty,
    /// Shorter than the configured minimum length.
    TooShort,
    /// Longer than the configured maximum length.
    TooLong,
    /// Length differs from an exact (minimum == maximum) requirement.
    WrongLength,
    /// Could not be parsed as a number.
    NotNumeric,
    /// A fractional value where only whole numbers are allowed.
    NotWhole,
    /// Magnitude overflow with no configured maximum.
    Overflow,
    /// Below the configured minimum value.
    TooSmall,
    /// Above the configured maximum value.
    TooBig,
    /// Not one of the recognized tokens or choices.
    Invalid,
    /// Value already present in a duplicate-free list.
    Duplicate,
    /// Stop token entered before the list reached its minimum count.
    TooFewItems,
    /// Path required to exist does not.
    MissingPath,
    /// Path required to be fresh already exists.
    PathTaken,
    /// Path exists but lacks the required permission.
    PermissionDenied,
}

/// A recoverable validation error: a [`MessageCode`] plus the named
/// parameters its message template interpolates.
///
/// Constructed and consumed within a single loop iteration; never
/// propagated to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationFailure {
    pub code: MessageCode,
    params: Vec<(&'static str, String)>,
}

impl ValidationFailure {
    pub fn new(code: MessageCode) -> Self {
        Self {
            code,
            params: Vec::new(),
        }
    }

    /// Attaches a named formatting parameter, e.g. `{min}` or `{max}`.
    pub fn param(mut self, name: &'static str, value: impl Display) -> Self {
        self.params.push((name, value.to_string()));
        self
    }
}

impl Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed ({:?})", self.code)
    }
}

impl Error for ValidationFailure {}

/// Per-prompt table mapping condition codes to message templates.
///
/// Templates interpolate `{name}` placeholders from the failure's
/// parameters. Unlisted codes resolve to [`UNKNOWN_ERROR`].
#[derive(Debug, Clone, Default)]
pub struct MessageTable {
    entries: HashMap<MessageCode, String>,
}

impl MessageTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults for string prompts.
    pub fn string_defaults() -> Self {
        let mut table = Self::new();
        table.insert(MessageCode::TooLong, "Must be at most {max} characters");
        table.insert(MessageCode::TooShort, "Must be at least {min} characters");
        table.insert(MessageCode::Empty, "Value cannot be empty");
        table.insert(MessageCode::WrongLength, "Must have {amount} characters");
        table
    }

    /// Defaults for numeric prompts: the string defaults plus the numeric
    /// condition codes.
    pub fn numeric_defaults() -> Self {
        let mut table = Self::string_defaults();
        table.insert(MessageCode::Overflow, "Number is too big");
        table.insert(MessageCode::TooBig, "Must be less than or equal to {max}");
        table.insert(
            MessageCode::TooSmall,
            "Must be greater than or equal to {min}",
        );
        table.insert(MessageCode::NotNumeric, "Must be numeric");
        table.insert(MessageCode::NotWhole, "Must be a whole number");
        table
    }

    /// Defaults for boolean prompts.
    pub fn boolean_defaults() -> Self {
        let mut table = Self::new();
        table.insert(MessageCode::Invalid, "Invalid choice");
        table.insert(MessageCode::Empty, "Please enter a value");
        table
    }

    /// Defaults for selection prompts.
    pub fn selection_defaults() -> Self {
        let mut table = Self::new();
        table.insert(MessageCode::Invalid, "Invalid choice");
        table.insert(MessageCode::Empty, "Please select an option");
        table
    }

    /// Defaults for list prompts: the string defaults per item plus the
    /// list-level condition codes.
    pub fn list_defaults() -> Self {
        let mut table = Self::string_defaults();
        table.insert(MessageCode::Duplicate, "Already in the list");
        table.insert(MessageCode::TooFewItems, "Must enter at least {min} items");
        table
    }

    /// Defaults for file prompts.
    pub fn file_defaults() -> Self {
        let mut table = Self::new();
        table.insert(MessageCode::Empty, "Please enter a path");
        table.insert(MessageCode::MissingPath, "No such path: {path}");
        table.insert(MessageCode::PathTaken, "{path} already exists");
        table.insert(MessageCode::PermissionDenied, "{path} is not {perm}");
        table
    }

    pub fn insert(&mut self, code: MessageCode, template: impl Into<String>) {
        self.entries.insert(code, template.into());
    }

    pub fn get(&self, code: MessageCode) -> Option<&str> {
        self.entries.get(&code).map(String::as_str)
    }

    /// Resolves a failure to user-visible text: looks up the code's template
    /// (falling back to [`UNKNOWN_ERROR`]) and interpolates the parameters.
    pub fn resolve(&self, failure: &ValidationFailure) -> String {
        let template = self
            .entries
            .get(&failure.code)
            .map_or(UNKNOWN_ERROR, String::as_str);
        let mut text = template.to_string();
        for (name, value) in &failure.params {
            text = text.replace(&format!("{{{name}}}"), value);
        }
        text
    }

    /// Replaces the template of every entry except [`MessageCode::Empty`]
    /// with the template registered for `code`. Used by prompt kinds that
    /// collapse all failure conditions into a single message.
    pub fn collapse_to(&mut self, code: MessageCode) {
        let replacement = self
            .entries
            .get(&code)
            .cloned()
            .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
        for (key, template) in &mut self.entries {
            if *key != MessageCode::Empty {
                *template = replacement.clone();
            }
        }
    }
}
