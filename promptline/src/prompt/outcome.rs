//! Terminal outcomes of a prompt invocation.

/// The result of running a prompt to completion.
///
/// Every invocation produces exactly one of these. The internal retry state
/// is never surfaced: by the time a caller sees an outcome, the loop is over.
///
/// `Error` and `Cancel` are distinct "no value" states — callers must not
/// conflate them with each other or with a legitimately falsy `Success`
/// value (`false`, `0`, an empty list).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome<T> {
    /// The operator entered a valid value.
    Success(T),
    /// The operator entered a cancel code.
    Cancel,
    /// Validation failed and retrying was disabled (or the input script
    /// ran out under test).
    Error,
}

impl<T> PromptOutcome<T> {
    /// Extracts the accepted value, if any.
    pub fn value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Cancel | Self::Error => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_cancel(&self) -> bool {
        matches!(self, Self::Cancel)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Maps the success value, leaving `Cancel` and `Error` untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> PromptOutcome<U> {
        match self {
            Self::Success(value) => PromptOutcome::Success(f(value)),
            Self::Cancel => PromptOutcome::Cancel,
            Self::Error => PromptOutcome::Error,
        }
    }
}
