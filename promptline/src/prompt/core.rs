//! # The Validation Loop
//!
//! The retry/cancel/error state machine every prompt kind drives:
//!
//! ```text
//! Prompting ──▶ Cancel            (raw line matches a cancel code)
//!     │   ▲
//!     │   └── Continue            (failure, recurring, input remains)
//!     ├─────▶ Error               (failure, non-recurring or exhausted)
//!     └─────▶ Success(value)      (validated and sanitized)
//! ```
//!
//! Exactly one terminal outcome is produced per invocation; the internal
//! `Continue` state never escapes the loop. Retries are unbounded unless
//! `recurring` is off or the input source reports itself exhausted.

use crate::prompt::io::ConsoleIo;
use crate::prompt::messages::ValidationFailure;
use crate::prompt::options::BaseOptions;
use crate::prompt::outcome::PromptOutcome;
use crate::style::paint;

/// Why one loop iteration rejected the raw line.
pub(crate) enum Rejection {
    /// A validator failure, resolved through the message table.
    Coded(ValidationFailure),
    /// A caller-supplied second-pass check failure with free-form text.
    Text(String),
}

impl From<ValidationFailure> for Rejection {
    fn from(failure: ValidationFailure) -> Self {
        Self::Coded(failure)
    }
}

/// Where `value` sits relative to an optional inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Bound {
    Below,
    Above,
    Within,
}

pub(crate) fn check_range<T: PartialOrd>(
    value: T,
    minimum: Option<T>,
    maximum: Option<T>,
) -> Bound {
    if let Some(lo) = minimum {
        if value < lo {
            return Bound::Below;
        }
    }
    if let Some(hi) = maximum {
        if value > hi {
            return Bound::Above;
        }
    }
    Bound::Within
}

/// Runs the validation loop for one prompt invocation.
///
/// `check` classifies one raw line: it validates, applies any second-pass
/// check, and sanitizes to the typed value. Cancel codes are tested first
/// and win over validation.
pub(crate) fn drive<T>(
    base: &BaseOptions,
    prompt_text: &str,
    io: &mut dyn ConsoleIo,
    check: &mut dyn FnMut(&str) -> Result<T, Rejection>,
) -> PromptOutcome<T> {
    let rendered = paint(
        &format!("{}{}", prompt_text, base.suffix),
        &base.styles.prompt,
    );

    loop {
        let raw = io.read_line(&rendered);
        if base.cancel_codes.iter().any(|code| code == &raw) {
            return PromptOutcome::Cancel;
        }
        match check(&raw) {
            Ok(value) => return PromptOutcome::Success(value),
            Err(rejection) => {
                if !base.recurring || io.exhausted() {
                    return PromptOutcome::Error;
                }
                let message = match rejection {
                    Rejection::Coded(failure) => base.messages.resolve(&failure),
                    Rejection::Text(message) => message,
                };
                io.write_line(&message, Some(&base.styles.error));
            }
        }
    }
}

/// Applies the same recurring/exhausted branching as [`drive`] to a failure
/// raised outside the single-line loop (list-level conditions). Returns
/// `true` when the caller should keep prompting, `false` for an error
/// outcome.
pub(crate) fn report_and_continue(
    base: &BaseOptions,
    io: &mut dyn ConsoleIo,
    failure: &ValidationFailure,
) -> bool {
    if !base.recurring || io.exhausted() {
        return false;
    }
    let message = base.messages.resolve(failure);
    io.write_line(&message, Some(&base.styles.error));
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::io::ScriptedConsole;
    use crate::prompt::messages::{MessageCode, MessageTable};

    fn reject_odd(raw: &str) -> Result<i32, Rejection> {
        let value: i32 = raw
            .parse()
            .map_err(|_| Rejection::Coded(ValidationFailure::new(MessageCode::NotNumeric)))?;
        if value % 2 != 0 {
            Err(Rejection::Text("must be even".to_string()))
        } else {
            Ok(value)
        }
    }

    fn base() -> BaseOptions {
        BaseOptions::with_messages(MessageTable::numeric_defaults())
    }

    #[test]
    fn test_success_on_first_valid_line() {
        let mut console = ScriptedConsole::new(["4"]);
        let outcome = drive(&base(), "n", &mut console, &mut reject_odd);
        assert_eq!(outcome, PromptOutcome::Success(4));
        assert_eq!(console.reads(), 1);
        assert!(console.written.is_empty());
    }

    #[test]
    fn test_recurring_retries_after_one_failure() {
        let mut console = ScriptedConsole::new(["x", "4"]);
        let outcome = drive(&base(), "n", &mut console, &mut reject_odd);
        assert_eq!(outcome, PromptOutcome::Success(4));
        assert_eq!(console.reads(), 2);
        assert_eq!(console.written, vec!["Must be numeric"]);
    }

    #[test]
    fn test_non_recurring_errors_without_message() {
        let mut options = base();
        options.recurring = false;
        let mut console = ScriptedConsole::new(["x", "4"]);
        let outcome = drive(&options, "n", &mut console, &mut reject_odd);
        assert_eq!(outcome, PromptOutcome::Error);
        assert_eq!(console.reads(), 1);
        assert!(console.written.is_empty());
    }

    #[test]
    fn test_exhausted_script_cannot_loop_forever() {
        let mut console = ScriptedConsole::new(["x"]);
        let outcome = drive(&base(), "n", &mut console, &mut reject_odd);
        assert_eq!(outcome, PromptOutcome::Error);
        assert_eq!(console.reads(), 1);
    }

    #[test]
    fn test_cancel_code_beats_validation() {
        // "!" would also fail validation; cancel must win.
        let mut console = ScriptedConsole::new(["!"]);
        let outcome = drive(&base(), "n", &mut console, &mut reject_odd);
        assert_eq!(outcome, PromptOutcome::Cancel);
    }

    #[test]
    fn test_free_form_rejection_text() {
        let mut console = ScriptedConsole::new(["3", "4"]);
        let outcome = drive(&base(), "n", &mut console, &mut reject_odd);
        assert_eq!(outcome, PromptOutcome::Success(4));
        assert_eq!(console.written, vec!["must be even"]);
    }

    #[test]
    fn test_prompt_rendered_with_suffix() {
        let mut console = ScriptedConsole::new(["4"]);
        drive(&base(), "Count", &mut console, &mut reject_odd);
        assert!(console.prompts[0].contains("Count: "));
    }

    #[test]
    fn test_check_range_bounds() {
        assert_eq!(check_range(5, Some(1), Some(10)), Bound::Within);
        assert_eq!(check_range(0, Some(1), Some(10)), Bound::Below);
        assert_eq!(check_range(11, Some(1), Some(10)), Bound::Above);
        assert_eq!(check_range(11, None, None), Bound::Within);
    }
}
