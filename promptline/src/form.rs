//! # Form Builder
//!
//! A thin wrapper running a sequence of prompts and collecting their typed
//! answers by field name. Fields are enumerated explicitly as data — there
//! is no reflection over declaration order; what you list is what runs.
//!
//! A cancelled optional field substitutes its default; a cancelled required
//! field cancels the whole form. The form adds no validation semantics of
//! its own.
//!
//! ## Example
//! ```rust,no_run
//! use promptline::form::{FieldValue, Form, FormField};
//!
//! let form = Form::new()
//!     .field(FormField::text("host", "Target host"))
//!     .field(FormField::number("port", "Port"))
//!     .field(FormField::toggle("verbose", "Verbose output").optional(FieldValue::Toggle(false)));
//!
//! if let Some(answers) = form.run().value() {
//!     println!("host = {:?}", answers["host"]);
//! }
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

use crate::prompt::{
    BooleanPrompt, ConsoleIo, FilePrompt, ListPrompt, Number, NumericPrompt, PromptOutcome,
    SelectionPrompt, StdConsole, StringPrompt,
};

/// A typed answer collected by a form.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(Number),
    Toggle(bool),
    /// Zero-based index into the field's choice list.
    Index(usize),
    Path(PathBuf),
    Items(Vec<String>),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_toggle(&self) -> Option<bool> {
        match self {
            Self::Toggle(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Index(value) => Some(*value),
            _ => None,
        }
    }
}

/// The prompt a field binds to.
pub enum FieldPrompt {
    Text(StringPrompt),
    Number(NumericPrompt),
    Toggle(BooleanPrompt),
    Choice(SelectionPrompt, Vec<String>),
    Items(ListPrompt),
    Path(FilePrompt),
}

/// One named entry in a form.
pub struct FormField {
    pub name: String,
    pub message: String,
    pub prompt: FieldPrompt,
    pub optional: bool,
    pub default: Option<FieldValue>,
}

impl FormField {
    /// A field bound to an explicit prompt.
    pub fn new(name: impl Into<String>, message: impl Into<String>, prompt: FieldPrompt) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            prompt,
            optional: false,
            default: None,
        }
    }

    pub fn text(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, message, FieldPrompt::Text(StringPrompt::new()))
    }

    pub fn number(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, message, FieldPrompt::Number(NumericPrompt::new()))
    }

    pub fn toggle(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, message, FieldPrompt::Toggle(BooleanPrompt::new()))
    }

    pub fn choice(
        name: impl Into<String>,
        message: impl Into<String>,
        choices: Vec<String>,
    ) -> Self {
        Self::new(
            name,
            message,
            FieldPrompt::Choice(SelectionPrompt::new(), choices),
        )
    }

    pub fn items(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, message, FieldPrompt::Items(ListPrompt::new()))
    }

    pub fn path(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, message, FieldPrompt::Path(FilePrompt::new()))
    }

    /// Marks the field optional: cancelling it substitutes `default`
    /// instead of cancelling the form.
    pub fn optional(mut self, default: FieldValue) -> Self {
        self.optional = true;
        self.default = Some(default);
        self
    }

    fn ask_with(&self, io: &mut dyn ConsoleIo) -> PromptOutcome<FieldValue> {
        match &self.prompt {
            FieldPrompt::Text(prompt) => {
                prompt.ask_with(&self.message, io).map(FieldValue::Text)
            }
            FieldPrompt::Number(prompt) => {
                prompt.ask_with(&self.message, io).map(FieldValue::Number)
            }
            FieldPrompt::Toggle(prompt) => {
                prompt.ask_with(&self.message, io).map(FieldValue::Toggle)
            }
            FieldPrompt::Choice(prompt, choices) => prompt
                .ask_with(&self.message, choices, io)
                .map(FieldValue::Index),
            FieldPrompt::Items(prompt) => {
                prompt.ask_with(&self.message, io).map(FieldValue::Items)
            }
            FieldPrompt::Path(prompt) => {
                prompt.ask_with(&self.message, io).map(FieldValue::Path)
            }
        }
    }
}

/// An ordered sequence of [`FormField`]s run as one unit.
#[derive(Default)]
pub struct Form {
    fields: Vec<FormField>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: FormField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Runs every field on the standard console.
    pub fn run(&self) -> PromptOutcome<HashMap<String, FieldValue>> {
        self.run_with(&mut StdConsole)
    }

    /// Runs every field through an injected console, in declaration order.
    pub fn run_with(&self, io: &mut dyn ConsoleIo) -> PromptOutcome<HashMap<String, FieldValue>> {
        let mut answers = HashMap::new();
        for field in &self.fields {
            match field.ask_with(io) {
                PromptOutcome::Success(value) => {
                    answers.insert(field.name.clone(), value);
                }
                PromptOutcome::Cancel => {
                    if !field.optional {
                        return PromptOutcome::Cancel;
                    }
                    if let Some(default) = &field.default {
                        answers.insert(field.name.clone(), default.clone());
                    }
                }
                PromptOutcome::Error => return PromptOutcome::Error,
            }
        }
        PromptOutcome::Success(answers)
    }
}
