//! # Console I/O Seam
//!
//! The validation loop talks to the operator through two hooks: read one
//! line against a rendered prompt, and write one styled line. [`StdConsole`]
//! binds them to the process's standard streams; [`ScriptedConsole`] replays
//! a fixed script for deterministic tests.
//!
//! A scripted run can never loop forever: once the script is exhausted the
//! loop refuses to retry and terminates with an error outcome instead.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::style::{TextStyle, paint};

/// Input source and output sink for one prompt invocation.
///
/// Injected explicitly (never a process-global override), so independent
/// prompt runs cannot cross-talk.
pub trait ConsoleIo {
    /// Displays `rendered_prompt` (styling already applied) and reads one
    /// raw line, without its trailing newline.
    fn read_line(&mut self, rendered_prompt: &str) -> String;

    /// Writes one line, applying `style` if the sink supports it.
    fn write_line(&mut self, text: &str, style: Option<&TextStyle>);

    /// Whether the source has no further input to offer. The validation
    /// loop checks this before retrying so a finite script terminates with
    /// an error outcome rather than spinning.
    fn exhausted(&self) -> bool {
        false
    }
}

/// The default console: prompts on stdout, reads from stdin.
#[derive(Debug, Default)]
pub struct StdConsole;

impl ConsoleIo for StdConsole {
    fn read_line(&mut self, rendered_prompt: &str) -> String {
        let mut out = io::stdout();
        let _ = write!(out, "{rendered_prompt}");
        let _ = out.flush();

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(_) => line.trim_end_matches(['\r', '\n']).to_string(),
            Err(_) => {
                eprintln!("Couldn't read line..");
                String::new()
            }
        }
    }

    fn write_line(&mut self, text: &str, style: Option<&TextStyle>) {
        match style {
            Some(style) => println!("{}", paint(text, style)),
            None => println!("{text}"),
        }
    }
}

/// A deterministic console for tests: reads come from a fixed script,
/// writes are recorded.
///
/// # Example
/// ```rust
/// use promptline::prompt::{ConsoleIo, ScriptedConsole};
///
/// let mut console = ScriptedConsole::new(["first", "second"]);
/// assert_eq!(console.read_line("? "), "first");
/// assert_eq!(console.read_line("? "), "second");
/// assert!(console.exhausted());
/// ```
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    /// Every rendered prompt passed to [`ConsoleIo::read_line`], in order.
    pub prompts: Vec<String>,
    /// Every line passed to [`ConsoleIo::write_line`], unstyled, in order.
    pub written: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            written: Vec::new(),
        }
    }

    /// How many read cycles the loop performed.
    pub fn reads(&self) -> usize {
        self.prompts.len()
    }
}

impl ConsoleIo for ScriptedConsole {
    fn read_line(&mut self, rendered_prompt: &str) -> String {
        self.prompts.push(rendered_prompt.to_string());
        self.inputs.pop_front().unwrap_or_default()
    }

    fn write_line(&mut self, text: &str, _style: Option<&TextStyle>) {
        self.written.push(text.to_string());
    }

    fn exhausted(&self) -> bool {
        self.inputs.is_empty()
    }
}
