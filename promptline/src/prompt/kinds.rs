//! # Prompt Kinds
//!
//! The four base prompts — string, numeric, boolean, file — each pair a
//! validator (`raw line -> Result<(), ValidationFailure>`) with a sanitizer
//! (`raw line -> typed value`) and hand both to the shared validation loop.
//! Composite prompts (selection, list) wrap these rather than subclassing.
//!
//! ## Example
//! ```rust
//! use promptline::prompt::{NumericOptions, NumericPrompt, Number, PromptOutcome, ScriptedConsole};
//!
//! let prompt = NumericPrompt::with_options(NumericOptions {
//!     allow_floats: false,
//!     ..NumericOptions::default()
//! });
//! let mut console = ScriptedConsole::new(["2"]);
//! let outcome = prompt.ask_with("How many", &mut console);
//! assert_eq!(outcome, PromptOutcome::Success(Number::Int(2)));
//! ```

use std::fmt::{self, Display};
use std::path::{Path, PathBuf};

use crate::prompt::core::{Bound, Rejection, check_range, drive};
use crate::prompt::io::{ConsoleIo, StdConsole};
use crate::prompt::messages::{MessageCode, ValidationFailure};
use crate::prompt::options::{
    BooleanOptions, ExistencePolicy, FileOptions, NumericOptions, PermissionKind, StringOptions,
};
use crate::prompt::outcome::PromptOutcome;

/// A caller-supplied second-pass check with a free-form failure message.
type SecondPassCheck = Box<dyn Fn(&str) -> Result<(), String>>;

/// Length validation shared by the string, numeric, boolean, and list
/// prompts.
///
/// Error selection: equal bounds report the exact-length message; a length
/// below the minimum reports empty when the minimum is one, too-short
/// otherwise; a length above the maximum reports too-long.
pub(crate) fn validate_length(raw: &str, options: &StringOptions) -> Result<(), ValidationFailure> {
    let length = raw.chars().count();
    let bound = check_range(length, options.minimum_length, options.maximum_length);
    if bound == Bound::Within {
        return Ok(());
    }
    if let (Some(lo), Some(hi)) = (options.minimum_length, options.maximum_length) {
        if lo == hi {
            return Err(ValidationFailure::new(MessageCode::WrongLength).param("amount", lo));
        }
    }
    if bound == Bound::Below {
        let lo = options.minimum_length.unwrap_or(1);
        if lo == 1 {
            Err(ValidationFailure::new(MessageCode::Empty))
        } else {
            Err(ValidationFailure::new(MessageCode::TooShort).param("min", lo))
        }
    } else {
        let hi = options.maximum_length.unwrap_or(length);
        Err(ValidationFailure::new(MessageCode::TooLong).param("max", hi))
    }
}

/// Prompts for a string whose length falls within the configured bounds.
pub struct StringPrompt {
    pub options: StringOptions,
    check: Option<SecondPassCheck>,
}

impl StringPrompt {
    pub fn new() -> Self {
        Self::with_options(StringOptions::default())
    }

    pub fn with_options(options: StringOptions) -> Self {
        Self {
            options,
            check: None,
        }
    }

    /// Adds a second-pass check run after length validation succeeds; its
    /// `Err` text is shown verbatim.
    pub fn with_check(mut self, check: impl Fn(&str) -> Result<(), String> + 'static) -> Self {
        self.check = Some(Box::new(check));
        self
    }

    /// Prompts on the standard console.
    pub fn ask(&self, prompt: &str) -> PromptOutcome<String> {
        self.ask_with(prompt, &mut StdConsole)
    }

    /// Prompts through an injected console.
    pub fn ask_with(&self, prompt: &str, io: &mut dyn ConsoleIo) -> PromptOutcome<String> {
        drive(&self.options.base, prompt, io, &mut |raw| {
            validate_length(raw, &self.options)?;
            if let Some(check) = &self.check {
                check(raw).map_err(Rejection::Text)?;
            }
            Ok(raw.to_string())
        })
    }
}

impl Default for StringPrompt {
    fn default() -> Self {
        Self::new()
    }
}

/// A sanitized numeric answer: integer when floats are disallowed, float
/// otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(value) => value as f64,
            Self::Float(value) => value,
        }
    }

    /// The integer value, truncating a float.
    pub fn as_i64(self) -> i64 {
        match self {
            Self::Int(value) => value,
            Self::Float(value) => value as i64,
        }
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}

/// Prompts for a number within the configured range.
///
/// The textual representation passes the embedded length check first, then
/// parses as a float. Unparseable input reports not-numeric; a non-finite
/// magnitude reports overflow (or too-big when a maximum is configured);
/// fractional input reports not-whole when floats are disallowed.
pub struct NumericPrompt {
    pub options: NumericOptions,
    check: Option<SecondPassCheck>,
}

impl NumericPrompt {
    pub fn new() -> Self {
        Self::with_options(NumericOptions::default())
    }

    pub fn with_options(options: NumericOptions) -> Self {
        Self {
            options,
            check: None,
        }
    }

    pub fn with_check(mut self, check: impl Fn(&str) -> Result<(), String> + 'static) -> Self {
        self.check = Some(Box::new(check));
        self
    }

    pub fn ask(&self, prompt: &str) -> PromptOutcome<Number> {
        self.ask_with(prompt, &mut StdConsole)
    }

    pub fn ask_with(&self, prompt: &str, io: &mut dyn ConsoleIo) -> PromptOutcome<Number> {
        drive(&self.options.string.base, prompt, io, &mut |raw| {
            let number = parse_number(raw, &self.options)?;
            if let Some(check) = &self.check {
                check(raw).map_err(Rejection::Text)?;
            }
            Ok(number)
        })
    }
}

impl Default for NumericPrompt {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_number(raw: &str, options: &NumericOptions) -> Result<Number, ValidationFailure> {
    validate_length(raw, &options.string)?;

    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationFailure::new(MessageCode::NotNumeric))?;

    if !value.is_finite() {
        return Err(match options.maximum {
            Some(hi) => ValidationFailure::new(MessageCode::TooBig).param("max", hi),
            None => ValidationFailure::new(MessageCode::Overflow),
        });
    }
    if !options.allow_floats && value.fract() != 0.0 {
        return Err(ValidationFailure::new(MessageCode::NotWhole));
    }
    match check_range(value, options.minimum, options.maximum) {
        Bound::Below => Err(ValidationFailure::new(MessageCode::TooSmall)
            .param("min", options.minimum.unwrap_or_default())),
        Bound::Above => Err(ValidationFailure::new(MessageCode::TooBig)
            .param("max", options.maximum.unwrap_or_default())),
        Bound::Within => Ok(if options.allow_floats {
            Number::Float(value)
        } else {
            Number::Int(value as i64)
        }),
    }
}

/// Prompts for a yes/no answer against configured affirmative and negative
/// tokens.
///
/// At construction every message code except empty collapses to the
/// invalid-choice text, and the rendered prompt gains a token hint.
pub struct BooleanPrompt {
    pub options: BooleanOptions,
    check: Option<SecondPassCheck>,
}

impl BooleanPrompt {
    pub fn new() -> Self {
        Self::with_options(BooleanOptions::default())
    }

    pub fn with_options(mut options: BooleanOptions) -> Self {
        options.string.base.messages.collapse_to(MessageCode::Invalid);
        Self {
            options,
            check: None,
        }
    }

    pub fn with_check(mut self, check: impl Fn(&str) -> Result<(), String> + 'static) -> Self {
        self.check = Some(Box::new(check));
        self
    }

    pub fn ask(&self, prompt: &str) -> PromptOutcome<bool> {
        self.ask_with(prompt, &mut StdConsole)
    }

    pub fn ask_with(&self, prompt: &str, io: &mut dyn ConsoleIo) -> PromptOutcome<bool> {
        let hint = self
            .options
            .hint_format
            .replace("{affirmative}", &self.options.affirmative)
            .replace("{negative}", &self.options.negative);
        let full_prompt = format!("{prompt}{hint}");

        drive(&self.options.string.base, &full_prompt, io, &mut |raw| {
            self.validate(raw)?;
            if let Some(check) = &self.check {
                check(raw).map_err(Rejection::Text)?;
            }
            Ok(raw.to_lowercase() == self.options.affirmative.to_lowercase())
        })
    }

    fn validate(&self, raw: &str) -> Result<(), ValidationFailure> {
        validate_length(raw, &self.options.string)?;
        let lowered = raw.to_lowercase();
        if lowered != self.options.affirmative.to_lowercase()
            && lowered != self.options.negative.to_lowercase()
        {
            return Err(ValidationFailure::new(MessageCode::Invalid));
        }
        Ok(())
    }
}

impl Default for BooleanPrompt {
    fn default() -> Self {
        Self::new()
    }
}

/// Prompts for a filesystem path matching an existence policy and an
/// optional permission requirement.
pub struct FilePrompt {
    pub options: FileOptions,
    check: Option<SecondPassCheck>,
}

impl FilePrompt {
    pub fn new() -> Self {
        Self::with_options(FileOptions::default())
    }

    pub fn with_options(options: FileOptions) -> Self {
        Self {
            options,
            check: None,
        }
    }

    pub fn with_check(mut self, check: impl Fn(&str) -> Result<(), String> + 'static) -> Self {
        self.check = Some(Box::new(check));
        self
    }

    pub fn ask(&self, prompt: &str) -> PromptOutcome<PathBuf> {
        self.ask_with(prompt, &mut StdConsole)
    }

    pub fn ask_with(&self, prompt: &str, io: &mut dyn ConsoleIo) -> PromptOutcome<PathBuf> {
        drive(&self.options.base, prompt, io, &mut |raw| {
            let path = classify_path(raw, &self.options)?;
            if let Some(check) = &self.check {
                check(raw).map_err(Rejection::Text)?;
            }
            Ok(path)
        })
    }
}

impl Default for FilePrompt {
    fn default() -> Self {
        Self::new()
    }
}

fn classify_path(raw: &str, options: &FileOptions) -> Result<PathBuf, ValidationFailure> {
    if raw.is_empty() {
        return Err(ValidationFailure::new(MessageCode::Empty));
    }
    let path = PathBuf::from(raw);
    let exists = path.exists();
    match (options.existence, exists) {
        (ExistencePolicy::MustExist, false) => {
            return Err(ValidationFailure::new(MessageCode::MissingPath).param("path", raw));
        }
        (ExistencePolicy::MustNotExist, true) => {
            return Err(ValidationFailure::new(MessageCode::PathTaken).param("path", raw));
        }
        _ => {}
    }
    if let Some(perm) = options.permission {
        // A not-yet-existing writable target is judged by the directory
        // that will hold it.
        let target = if exists {
            path.as_path()
        } else {
            match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            }
        };
        if !has_permission(target, perm) {
            return Err(ValidationFailure::new(MessageCode::PermissionDenied)
                .param("path", raw)
                .param("perm", perm));
        }
    }
    Ok(path)
}

fn has_permission(path: &Path, perm: PermissionKind) -> bool {
    match perm {
        PermissionKind::Exists => path.exists(),
        PermissionKind::Read => {
            cfg_if::cfg_if! {
                if #[cfg(unix)] {
                    use std::os::unix::fs::PermissionsExt;
                    std::fs::metadata(path)
                        .map(|meta| meta.permissions().mode() & 0o444 != 0)
                        .unwrap_or(false)
                } else {
                    path.exists()
                }
            }
        }
        PermissionKind::Write => std::fs::metadata(path)
            .map(|meta| !meta.permissions().readonly())
            .unwrap_or(false),
        PermissionKind::Execute => {
            cfg_if::cfg_if! {
                if #[cfg(unix)] {
                    use std::os::unix::fs::PermissionsExt;
                    std::fs::metadata(path)
                        .map(|meta| meta.permissions().mode() & 0o111 != 0)
                        .unwrap_or(false)
                } else {
                    path.exists()
                }
            }
        }
    }
}
