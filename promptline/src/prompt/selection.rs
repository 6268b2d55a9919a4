//! # Selection Adapter
//!
//! Turns a bounded integer prompt into a zero-based index over a
//! caller-supplied choice list. The list is rendered first (1-based, via
//! the configured item formatter), then a whole-number prompt bounded to
//! `[1, N]` runs; an accepted answer is translated back by subtracting one.
//! The caller's list and its order are never touched.
//!
//! ## Example
//! ```rust
//! use promptline::prompt::{PromptOutcome, ScriptedConsole, SelectionPrompt};
//!
//! let prompt = SelectionPrompt::new();
//! let mut console = ScriptedConsole::new(["2"]);
//! let outcome = prompt.ask_with("Pick a color", &["red", "green", "blue"], &mut console);
//! assert_eq!(outcome, PromptOutcome::Success(1));
//! ```

use std::fmt::Display;

use crate::english::cap_first;
use crate::prompt::io::{ConsoleIo, StdConsole};
use crate::prompt::kinds::NumericPrompt;
use crate::prompt::messages::{MessageCode, MessageTable};
use crate::prompt::options::{BaseOptions, NumericOptions, SelectionOptions, StringOptions};
use crate::prompt::outcome::PromptOutcome;

/// The default listing format: 1-based position, first letter capitalized.
pub fn default_item_format(index: usize, item: &str) -> String {
    format!("{}. {}", index + 1, cap_first(item))
}

/// Prompts the operator to pick one entry from an ordered list.
#[derive(Debug, Clone)]
pub struct SelectionPrompt {
    pub options: SelectionOptions,
}

impl SelectionPrompt {
    pub fn new() -> Self {
        Self::with_options(SelectionOptions::default())
    }

    pub fn with_options(options: SelectionOptions) -> Self {
        Self { options }
    }

    /// Prompts on the standard console; yields the zero-based index of the
    /// chosen entry.
    pub fn ask<T: Display>(&self, prompt: &str, choices: &[T]) -> PromptOutcome<usize> {
        self.ask_with(prompt, choices, &mut StdConsole)
    }

    /// Prompts through an injected console.
    pub fn ask_with<T: Display>(
        &self,
        prompt: &str,
        choices: &[T],
        io: &mut dyn ConsoleIo,
    ) -> PromptOutcome<usize> {
        if choices.is_empty() {
            return PromptOutcome::Error;
        }

        let listing = choices
            .iter()
            .enumerate()
            .map(|(index, choice)| (self.options.item_formatter)(index, &choice.to_string()))
            .collect::<Vec<_>>()
            .join("\n");
        io.write_line(&listing, Some(&self.options.base.styles.list));

        let numeric = NumericPrompt::with_options(self.numeric_options(choices.len()));
        numeric
            .ask_with(prompt, io)
            .map(|number| (number.as_i64() - 1) as usize)
    }

    /// Builds the bounded whole-number configuration backing the selection:
    /// every numeric condition collapses to the invalid-choice text while
    /// empty keeps its own message.
    fn numeric_options(&self, count: usize) -> NumericOptions {
        let mut messages = MessageTable::numeric_defaults();
        let invalid = self
            .options
            .base
            .messages
            .get(MessageCode::Invalid)
            .unwrap_or("Invalid choice")
            .to_string();
        messages.insert(MessageCode::Invalid, invalid);
        messages.collapse_to(MessageCode::Invalid);
        if let Some(empty) = self.options.base.messages.get(MessageCode::Empty) {
            messages.insert(MessageCode::Empty, empty.to_string());
        }

        NumericOptions {
            string: StringOptions {
                base: BaseOptions {
                    messages,
                    styles: self.options.base.styles,
                    suffix: self.options.base.suffix.clone(),
                    recurring: self.options.base.recurring,
                    cancel_codes: self.options.base.cancel_codes.clone(),
                },
                minimum_length: Some(1),
                maximum_length: None,
            },
            minimum: Some(1.0),
            maximum: Some(count as f64),
            allow_floats: false,
        }
    }
}

impl Default for SelectionPrompt {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::io::ScriptedConsole;
    use pretty_assertions::assert_eq;

    const COLORS: [&str; 3] = ["red", "green", "blue"];

    #[test]
    fn test_selection_returns_zero_based_index() {
        let prompt = SelectionPrompt::new();
        let mut console = ScriptedConsole::new(["2"]);
        assert_eq!(
            prompt.ask_with("Pick", &COLORS, &mut console),
            PromptOutcome::Success(1)
        );
    }

    #[test]
    fn test_selection_renders_numbered_capitalized_listing() {
        let prompt = SelectionPrompt::new();
        let mut console = ScriptedConsole::new(["1"]);
        prompt.ask_with("Pick", &COLORS, &mut console);
        assert_eq!(console.written[0], "1. Red\n2. Green\n3. Blue");
    }

    #[test]
    fn test_selection_out_of_range_is_invalid_choice() {
        let prompt = SelectionPrompt::new();
        let mut console = ScriptedConsole::new(["5", "0", "3"]);
        assert_eq!(
            prompt.ask_with("Pick", &COLORS, &mut console),
            PromptOutcome::Success(2)
        );
        assert_eq!(console.written[1], "Invalid choice");
        assert_eq!(console.written[2], "Invalid choice");
    }

    #[test]
    fn test_selection_non_numeric_is_invalid_choice() {
        let prompt = SelectionPrompt::new();
        let mut console = ScriptedConsole::new(["red", "1"]);
        assert_eq!(
            prompt.ask_with("Pick", &COLORS, &mut console),
            PromptOutcome::Success(0)
        );
        assert_eq!(console.written[1], "Invalid choice");
    }

    #[test]
    fn test_selection_empty_keeps_own_message() {
        let prompt = SelectionPrompt::new();
        let mut console = ScriptedConsole::new(["", "1"]);
        prompt.ask_with("Pick", &COLORS, &mut console);
        assert_eq!(console.written[1], "Please select an option");
    }

    #[test]
    fn test_selection_cancel_yields_no_index() {
        let prompt = SelectionPrompt::new();
        let mut console = ScriptedConsole::new(["!"]);
        assert_eq!(
            prompt.ask_with("Pick", &COLORS, &mut console),
            PromptOutcome::Cancel
        );
    }

    #[test]
    fn test_selection_leaves_choices_untouched() {
        let choices = vec!["b".to_string(), "a".to_string()];
        let prompt = SelectionPrompt::new();
        let mut console = ScriptedConsole::new(["1"]);
        prompt.ask_with("Pick", &choices, &mut console);
        assert_eq!(choices, vec!["b", "a"]);
    }

    #[test]
    fn test_selection_custom_formatter() {
        let prompt = SelectionPrompt::with_options(SelectionOptions {
            item_formatter: |index, item| format!("[{index}] {item}"),
            ..SelectionOptions::default()
        });
        let mut console = ScriptedConsole::new(["1"]);
        prompt.ask_with("Pick", &COLORS, &mut console);
        assert_eq!(console.written[0], "[0] red\n[1] green\n[2] blue");
    }

    #[test]
    fn test_selection_empty_choice_list_errors() {
        let prompt = SelectionPrompt::new();
        let mut console = ScriptedConsole::new(["1"]);
        assert_eq!(
            prompt.ask_with("Pick", &Vec::<String>::new(), &mut console),
            PromptOutcome::Error
        );
        assert_eq!(console.reads(), 0);
    }
}
