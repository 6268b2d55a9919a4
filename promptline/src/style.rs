//! # ANSI Text Styling
//!
//! Helpers for coloring terminal output with 4-bit ANSI escape sequences.
//!
//! ## Features
//! - The classic 8-color palette via [`Color`]
//! - Bold and high-intensity variants via [`TextStyle`]
//! - [`paint`] to wrap a string in the matching escape sequence
//! - [`progress`], an iterator adapter drawing an in-place progress bar
//!
//! ## Example
//! ```rust
//! use promptline::style::{Color, TextStyle, paint};
//!
//! let style = TextStyle::bold(Color::Blue);
//! let colored = paint("hello", &style);
//! assert!(colored.starts_with("\x1b[1;34m"));
//! assert!(colored.ends_with("\x1b[0m"));
//! ```

use std::io::{self, Write};

/// The 4-bit ANSI color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Cyan,
    White,
}

impl Color {
    /// The palette offset used in escape sequences (`30 + code` for normal,
    /// `90 + code` for high intensity).
    pub fn code(self) -> u8 {
        match self {
            Self::Black => 0,
            Self::Red => 1,
            Self::Green => 2,
            Self::Yellow => 3,
            Self::Blue => 4,
            Self::Purple => 5,
            Self::Cyan => 6,
            Self::White => 7,
        }
    }
}

/// A logical text style: a [`Color`] plus bold and high-intensity flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub color: Color,
    pub bold: bool,
    pub high_intensity: bool,
}

impl TextStyle {
    /// A plain (non-bold, normal-intensity) style in the given color.
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            bold: false,
            high_intensity: false,
        }
    }

    /// A bold style in the given color.
    pub const fn bold(color: Color) -> Self {
        Self {
            color,
            bold: true,
            high_intensity: false,
        }
    }

    /// Switches the style to the high-intensity palette.
    pub const fn high_intensity(mut self) -> Self {
        self.high_intensity = true;
        self
    }
}

/// Wraps `text` in the ANSI escape sequence for `style`, resetting at the end.
pub fn paint(text: &str, style: &TextStyle) -> String {
    format!(
        "\x1b[{};{}{}m{}\x1b[0m",
        if style.bold { 1 } else { 0 },
        if style.high_intensity { 9 } else { 3 },
        style.color.code(),
        text
    )
}

/// An iterator adapter that redraws a `[###...] i/n` bar on stdout as items
/// are consumed. Created by [`progress`].
pub struct Progress<I> {
    inner: I,
    total: usize,
    consumed: usize,
    prefix: String,
    width: usize,
    finished: bool,
}

/// Wraps an exact-size iterator in a [`Progress`] bar with the given prefix
/// and bar width (in characters).
///
/// # Example
/// ```rust,no_run
/// use promptline::style::progress;
///
/// for _item in progress(0..100, "scanning ", 40) {
///     // work
/// }
/// ```
pub fn progress<I>(iter: I, prefix: &str, width: usize) -> Progress<I::IntoIter>
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
{
    let inner = iter.into_iter();
    let total = inner.len();
    let bar = Progress {
        inner,
        total,
        consumed: 0,
        prefix: prefix.to_string(),
        width,
        finished: false,
    };
    bar.draw();
    bar
}

impl<I> Progress<I> {
    fn draw(&self) {
        let filled = if self.total == 0 {
            self.width
        } else {
            self.width * self.consumed / self.total
        };
        let mut out = io::stdout();
        let _ = write!(
            out,
            "\r{}[{}{}] {}/{}",
            self.prefix,
            "#".repeat(filled),
            ".".repeat(self.width - filled),
            self.consumed,
            self.total
        );
        let _ = out.flush();
    }
}

impl<I: Iterator> Iterator for Progress<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        match self.inner.next() {
            Some(item) => {
                self.consumed += 1;
                self.draw();
                Some(item)
            }
            None => {
                if !self.finished {
                    self.finished = true;
                    let mut out = io::stdout();
                    let _ = writeln!(out);
                    let _ = out.flush();
                }
                None
            }
        }
    }
}
