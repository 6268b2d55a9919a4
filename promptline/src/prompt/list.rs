//! # List Accumulator
//!
//! Repeats the single-line validation loop to build an ordered collection
//! of accepted values. Accumulation ends when the stop token arrives with
//! the minimum count met, when the maximum count is reached, or when the
//! operator cancels (discarding the partial list).
//!
//! ## Example
//! ```rust
//! use promptline::prompt::{ListOptions, ListPrompt, PromptOutcome, ScriptedConsole};
//!
//! let prompt = ListPrompt::with_options(ListOptions {
//!     stop_token: "stop".to_string(),
//!     ..ListOptions::default()
//! });
//! let mut console = ScriptedConsole::new(["alpha", "beta", "stop"]);
//! let outcome = prompt.ask_with("Targets", &mut console);
//! assert_eq!(
//!     outcome,
//!     PromptOutcome::Success(vec!["alpha".to_string(), "beta".to_string()])
//! );
//! ```

use crate::prompt::core::{drive, report_and_continue};
use crate::prompt::io::{ConsoleIo, StdConsole};
use crate::prompt::kinds::validate_length;
use crate::prompt::messages::{MessageCode, ValidationFailure};
use crate::prompt::options::ListOptions;
use crate::prompt::outcome::PromptOutcome;

/// Prompts for an ordered, optionally duplicate-free list of values.
pub struct ListPrompt {
    pub options: ListOptions,
}

impl ListPrompt {
    pub fn new() -> Self {
        Self::with_options(ListOptions::default())
    }

    pub fn with_options(options: ListOptions) -> Self {
        Self { options }
    }

    /// Prompts on the standard console.
    pub fn ask(&self, prompt: &str) -> PromptOutcome<Vec<String>> {
        self.ask_with(prompt, &mut StdConsole)
    }

    /// Prompts through an injected console.
    pub fn ask_with(&self, prompt: &str, io: &mut dyn ConsoleIo) -> PromptOutcome<Vec<String>> {
        let base = &self.options.item.base;
        io.write_line(prompt, Some(&base.styles.prompt));

        let mut items: Vec<String> = Vec::new();
        loop {
            let item_prompt = self.item_prompt(items.len() + 1);
            let outcome = drive(base, &item_prompt, io, &mut |raw| {
                validate_length(raw, &self.options.item)?;
                Ok(raw.to_string())
            });

            let value = match outcome {
                PromptOutcome::Success(value) => value,
                PromptOutcome::Cancel => return PromptOutcome::Cancel,
                PromptOutcome::Error => return PromptOutcome::Error,
            };

            if value.to_lowercase() == self.options.stop_token.to_lowercase() {
                if items.len() < self.options.minimum_amount {
                    let failure = ValidationFailure::new(MessageCode::TooFewItems)
                        .param("min", self.options.minimum_amount);
                    if report_and_continue(base, io, &failure) {
                        continue;
                    }
                    return PromptOutcome::Error;
                }
                return PromptOutcome::Success(items);
            }

            if !self.options.allow_duplicates && items.contains(&value) {
                let failure = ValidationFailure::new(MessageCode::Duplicate);
                if report_and_continue(base, io, &failure) {
                    continue;
                }
                return PromptOutcome::Error;
            }

            items.push(value);
            if self
                .options
                .maximum_amount
                .is_some_and(|max| items.len() >= max)
            {
                return PromptOutcome::Success(items);
            }
        }
    }

    fn item_prompt(&self, count: usize) -> String {
        let max_display = match self.options.maximum_amount {
            Some(max) => max.to_string(),
            None => self.options.unbounded_marker.clone(),
        };
        self.options
            .item_template
            .replace("{count}", &count.to_string())
            .replace("{max}", &max_display)
    }
}

impl Default for ListPrompt {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::io::ScriptedConsole;
    use pretty_assertions::assert_eq;

    fn bounded(minimum: usize, maximum: Option<usize>) -> ListPrompt {
        ListPrompt::with_options(ListOptions {
            stop_token: "stop".to_string(),
            minimum_amount: minimum,
            maximum_amount: maximum,
            ..ListOptions::default()
        })
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_stop_token_finalizes_list() {
        let prompt = bounded(0, None);
        let mut console = ScriptedConsole::new(["a", "b", "stop"]);
        assert_eq!(
            prompt.ask_with("Items", &mut console),
            PromptOutcome::Success(strings(&["a", "b"]))
        );
    }

    #[test]
    fn test_stop_token_is_case_insensitive() {
        let prompt = bounded(0, None);
        let mut console = ScriptedConsole::new(["a", "STOP"]);
        assert_eq!(
            prompt.ask_with("Items", &mut console),
            PromptOutcome::Success(strings(&["a"]))
        );
    }

    #[test]
    fn test_early_stop_rejected_below_minimum() {
        let prompt = bounded(2, Some(3));
        let mut console = ScriptedConsole::new(["a", "stop", "b", "stop"]);
        assert_eq!(
            prompt.ask_with("Items", &mut console),
            PromptOutcome::Success(strings(&["a", "b"]))
        );
        assert_eq!(console.written[1], "Must enter at least 2 items");
    }

    #[test]
    fn test_maximum_finalizes_without_stop_token() {
        let prompt = bounded(2, Some(3));
        let mut console = ScriptedConsole::new(["a", "b", "c"]);
        assert_eq!(
            prompt.ask_with("Items", &mut console),
            PromptOutcome::Success(strings(&["a", "b", "c"]))
        );
        assert_eq!(console.reads(), 3);
    }

    #[test]
    fn test_duplicates_rejected_once() {
        let prompt = ListPrompt::with_options(ListOptions {
            stop_token: "stop".to_string(),
            allow_duplicates: false,
            ..ListOptions::default()
        });
        let mut console = ScriptedConsole::new(["x", "x", "stop"]);
        assert_eq!(
            prompt.ask_with("Items", &mut console),
            PromptOutcome::Success(strings(&["x"]))
        );
        assert_eq!(console.written[1], "Already in the list");
    }

    #[test]
    fn test_cancel_discards_partial_list() {
        let prompt = bounded(0, None);
        let mut console = ScriptedConsole::new(["a", "b", "!"]);
        assert_eq!(
            prompt.ask_with("Items", &mut console),
            PromptOutcome::Cancel
        );
    }

    #[test]
    fn test_overall_prompt_written_once_then_item_prompts() {
        let prompt = bounded(0, Some(5));
        let mut console = ScriptedConsole::new(["a", "stop"]);
        prompt.ask_with("Enter your targets", &mut console);
        assert_eq!(console.written[0], "Enter your targets");
        assert!(console.prompts[0].contains("Item 1 of 5"));
        assert!(console.prompts[1].contains("Item 2 of 5"));
    }

    #[test]
    fn test_unbounded_marker_in_item_prompt() {
        let prompt = bounded(0, None);
        let mut console = ScriptedConsole::new(["a", "stop"]);
        prompt.ask_with("Items", &mut console);
        assert!(console.prompts[0].contains("Item 1 of unlimited"));
    }

    #[test]
    fn test_invalid_item_retries_within_line_loop() {
        let prompt = bounded(0, None);
        let mut console = ScriptedConsole::new(["", "a", "stop"]);
        assert_eq!(
            prompt.ask_with("Items", &mut console),
            PromptOutcome::Success(strings(&["a"]))
        );
        assert_eq!(console.written[1], "Value cannot be empty");
    }

    #[test]
    fn test_minimum_zero_allows_immediate_stop() {
        let prompt = bounded(0, None);
        let mut console = ScriptedConsole::new(["stop"]);
        assert_eq!(
            prompt.ask_with("Items", &mut console),
            PromptOutcome::Success(Vec::new())
        );
    }
}
