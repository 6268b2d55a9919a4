//! # Interactive Menus
//!
//! A menu maps labeled entries to callbacks and dispatches through the
//! selection adapter: the entries are listed, the operator picks one by
//! number, and the matching callback runs with a caller-supplied context.
//!
//! Menus keep prompting on an invalid choice and, unlike plain prompts,
//! default to no cancel codes — a menu can only be left through one of its
//! entries unless cancel codes are configured explicitly.
//!
//! ## Example
//! ```rust,no_run
//! use promptline::menu::Menu;
//!
//! struct AppState {
//!     scans: u32,
//! }
//!
//! let menu = Menu::new()
//!     .entry("run scan", |state: &mut AppState| state.scans += 1)
//!     .entry("show totals", |state: &mut AppState| {
//!         println!("{} scans so far", state.scans);
//!     });
//!
//! let mut state = AppState { scans: 0 };
//! menu.run("Main menu", &mut state);
//! ```

use crate::prompt::{ConsoleIo, PromptOutcome, SelectionOptions, SelectionPrompt, StdConsole};

/// One labeled menu entry and its callback.
pub struct MenuEntry<C> {
    pub label: String,
    action: Box<dyn Fn(&mut C)>,
}

/// A labeled-callback dispatcher over the selection adapter.
pub struct Menu<C> {
    pub options: SelectionOptions,
    entries: Vec<MenuEntry<C>>,
}

impl<C> Menu<C> {
    /// A menu with the default selection options minus cancel codes.
    pub fn new() -> Self {
        let mut options = SelectionOptions::default();
        options.base.cancel_codes.clear();
        Self::with_options(options)
    }

    pub fn with_options(options: SelectionOptions) -> Self {
        Self {
            options,
            entries: Vec::new(),
        }
    }

    pub fn entry(mut self, label: impl Into<String>, action: impl Fn(&mut C) + 'static) -> Self {
        self.entries.push(MenuEntry {
            label: label.into(),
            action: Box::new(action),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Prompts on the standard console; on success the chosen entry's
    /// callback has already run against `context`.
    pub fn run(&self, prompt: &str, context: &mut C) -> PromptOutcome<usize> {
        self.run_with(prompt, context, &mut StdConsole)
    }

    /// Prompts through an injected console.
    pub fn run_with(
        &self,
        prompt: &str,
        context: &mut C,
        io: &mut dyn ConsoleIo,
    ) -> PromptOutcome<usize> {
        let labels: Vec<&str> = self.entries.iter().map(|entry| entry.label.as_str()).collect();
        let selection = SelectionPrompt::with_options(self.options.clone());
        let outcome = selection.ask_with(prompt, &labels, io);
        if let PromptOutcome::Success(index) = &outcome {
            (self.entries[*index].action)(context);
        }
        outcome
    }
}

impl<C> Default for Menu<C> {
    fn default() -> Self {
        Self::new()
    }
}
