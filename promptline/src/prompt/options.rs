//! # Prompt Configuration
//!
//! Immutable option sets for each prompt kind. A prompt instance owns its
//! configuration exclusively and never mutates it while running.
//!
//! Every kind embeds [`BaseOptions`] (message table, styles, suffix,
//! retry flag, cancel codes) and adds its own constraints on top, mirroring
//! how the kinds themselves compose over the shared validation loop.

use crate::prompt::messages::MessageTable;
use crate::style::{Color, TextStyle};

/// Logical styles a prompt can render with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSet {
    /// Applied to the rendered prompt text.
    pub prompt: TextStyle,
    /// Applied to resolved validation-error messages.
    pub error: TextStyle,
    /// Applied to a selection prompt's choice listing.
    pub list: TextStyle,
}

impl Default for StyleSet {
    fn default() -> Self {
        Self {
            prompt: TextStyle::bold(Color::Blue),
            error: TextStyle::bold(Color::Red),
            list: TextStyle::new(Color::Blue),
        }
    }
}

/// Options shared by every prompt kind.
#[derive(Debug, Clone)]
pub struct BaseOptions {
    /// Error-message templates keyed by condition code.
    pub messages: MessageTable,
    pub styles: StyleSet,
    /// Appended to the prompt text before reading, e.g. `": "`.
    pub suffix: String,
    /// Re-prompt on a failed validation (`true`) or terminate with an
    /// error outcome after the first failure (`false`).
    pub recurring: bool,
    /// Literal lines that unconditionally abort the prompt.
    pub cancel_codes: Vec<String>,
}

impl BaseOptions {
    pub fn with_messages(messages: MessageTable) -> Self {
        Self {
            messages,
            ..Self::default()
        }
    }
}

impl Default for BaseOptions {
    fn default() -> Self {
        Self {
            messages: MessageTable::new(),
            styles: StyleSet::default(),
            suffix: ": ".to_string(),
            recurring: true,
            cancel_codes: vec!["!".to_string(), "~".to_string()],
        }
    }
}

/// Options for a [`StringPrompt`](crate::prompt::StringPrompt).
///
/// Either length bound may be `None` for unbounded.
#[derive(Debug, Clone)]
pub struct StringOptions {
    pub base: BaseOptions,
    pub minimum_length: Option<usize>,
    pub maximum_length: Option<usize>,
}

impl Default for StringOptions {
    fn default() -> Self {
        Self {
            base: BaseOptions::with_messages(MessageTable::string_defaults()),
            minimum_length: Some(1),
            maximum_length: None,
        }
    }
}

/// Options for a [`NumericPrompt`](crate::prompt::NumericPrompt).
///
/// The length bounds of the embedded [`StringOptions`] apply to the textual
/// representation before any numeric parsing.
#[derive(Debug, Clone)]
pub struct NumericOptions {
    pub string: StringOptions,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    /// When `false`, fractional input is rejected and sanitization yields
    /// an integer.
    pub allow_floats: bool,
}

impl Default for NumericOptions {
    fn default() -> Self {
        Self {
            string: StringOptions {
                base: BaseOptions::with_messages(MessageTable::numeric_defaults()),
                ..StringOptions::default()
            },
            minimum: None,
            maximum: None,
            allow_floats: true,
        }
    }
}

/// Options for a [`BooleanPrompt`](crate::prompt::BooleanPrompt).
#[derive(Debug, Clone)]
pub struct BooleanOptions {
    pub string: StringOptions,
    /// Token meaning "yes", compared case-insensitively.
    pub affirmative: String,
    /// Token meaning "no", compared case-insensitively.
    pub negative: String,
    /// Hint appended to the prompt text; interpolates `{affirmative}` and
    /// `{negative}`.
    pub hint_format: String,
}

impl Default for BooleanOptions {
    fn default() -> Self {
        Self {
            string: StringOptions {
                base: BaseOptions::with_messages(MessageTable::boolean_defaults()),
                ..StringOptions::default()
            },
            affirmative: "Y".to_string(),
            negative: "N".to_string(),
            hint_format: " ({affirmative}/{negative})".to_string(),
        }
    }
}

/// Options for a [`SelectionPrompt`](crate::prompt::SelectionPrompt).
#[derive(Debug, Clone)]
pub struct SelectionOptions {
    pub base: BaseOptions,
    /// Formats one choice for the listing; receives the zero-based index
    /// and the choice rendered as a string.
    pub item_formatter: fn(usize, &str) -> String,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            base: BaseOptions::with_messages(MessageTable::selection_defaults()),
            item_formatter: crate::prompt::selection::default_item_format,
        }
    }
}

/// Options for a [`ListPrompt`](crate::prompt::ListPrompt).
///
/// The embedded [`StringOptions`] validate each individual item.
#[derive(Debug, Clone)]
pub struct ListOptions {
    pub item: StringOptions,
    /// Entering this token (case-insensitively) finishes the list, provided
    /// the minimum count is met.
    pub stop_token: String,
    /// Minimum number of items, enforced only when the stop token arrives.
    pub minimum_amount: usize,
    /// Maximum number of items; reaching it finalizes the list immediately.
    pub maximum_amount: Option<usize>,
    pub allow_duplicates: bool,
    /// Per-item prompt template; interpolates `{count}` (1-based, the item
    /// being entered) and `{max}`.
    pub item_template: String,
    /// Shown for `{max}` when no maximum is configured.
    pub unbounded_marker: String,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            item: StringOptions {
                base: BaseOptions::with_messages(MessageTable::list_defaults()),
                ..StringOptions::default()
            },
            stop_token: "done".to_string(),
            minimum_amount: 0,
            maximum_amount: None,
            allow_duplicates: true,
            item_template: "Item {count} of {max}".to_string(),
            unbounded_marker: "unlimited".to_string(),
        }
    }
}

/// Whether a file prompt requires its path to exist or to be fresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExistencePolicy {
    MustExist,
    MustNotExist,
}

/// An explicit permission requirement for a file prompt.
///
/// Deliberately an enumerated kind rather than raw platform access-mode
/// bits, which are implementation-defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionKind {
    Exists,
    Read,
    Write,
    Execute,
}

impl std::fmt::Display for PermissionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exists => write!(f, "present"),
            Self::Read => write!(f, "readable"),
            Self::Write => write!(f, "writable"),
            Self::Execute => write!(f, "executable"),
        }
    }
}

/// Options for a [`FilePrompt`](crate::prompt::FilePrompt).
#[derive(Debug, Clone)]
pub struct FileOptions {
    pub base: BaseOptions,
    pub existence: ExistencePolicy,
    /// Checked against the target, or against its parent directory for a
    /// not-yet-existing writable target.
    pub permission: Option<PermissionKind>,
}

impl Default for FileOptions {
    fn default() -> Self {
        Self {
            base: BaseOptions::with_messages(MessageTable::file_defaults()),
            existence: ExistencePolicy::MustExist,
            permission: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::messages::MessageCode;

    #[test]
    fn test_base_defaults() {
        let base = BaseOptions::default();
        assert_eq!(base.suffix, ": ");
        assert!(base.recurring);
        assert_eq!(base.cancel_codes, vec!["!", "~"]);
    }

    #[test]
    fn test_string_defaults_have_min_length_one() {
        let options = StringOptions::default();
        assert_eq!(options.minimum_length, Some(1));
        assert_eq!(options.maximum_length, None);
        assert!(options.base.messages.get(MessageCode::Empty).is_some());
    }

    #[test]
    fn test_numeric_defaults_allow_floats() {
        let options = NumericOptions::default();
        assert!(options.allow_floats);
        assert!(
            options
                .string
                .base
                .messages
                .get(MessageCode::NotWhole)
                .is_some()
        );
    }
}
