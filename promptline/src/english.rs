//! # English Formatting Helpers
//!
//! Small string utilities for producing readable prompt and log text:
//! pluralization, article selection, capitalization, and list joining.
//!
//! ## Example
//! ```rust
//! use promptline::english::{auto_plural, list_items, a_or_an};
//!
//! assert_eq!(auto_plural("scan", 3), "scans");
//! assert_eq!(list_items(&["red", "green", "blue"]), "red, green, and blue");
//! assert_eq!(a_or_an("error", false), "an error");
//! ```

use std::fmt::Display;

const VOWELS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];
const TRUE_VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

const ARTICLES: [&str; 3] = ["a", "an", "the"];
const COORD_CONJUNCTIONS: [&str; 6] = ["for", "and", "nor", "but", "or", "yet"];

/// Pluralizes `word` with the default suffixes: `y` becomes `ies`, other
/// trailing vowels take `es`, everything else takes `s`.
pub fn pluralize(word: &str) -> String {
    pluralize_with(word, "s", "es", "ies")
}

/// Pluralizes `word` with caller-chosen suffixes for the consonant, vowel,
/// and trailing-`y` cases.
pub fn pluralize_with(word: &str, plural: &str, vowel_plural: &str, y_plural: &str) -> String {
    let Some(last) = word.chars().last() else {
        return String::new();
    };
    let lowered = last.to_ascii_lowercase();
    if VOWELS.contains(&lowered) {
        if lowered == 'y' {
            let stem: String = word.chars().take(word.chars().count() - 1).collect();
            format!("{stem}{y_plural}")
        } else {
            format!("{word}{vowel_plural}")
        }
    } else {
        format!("{word}{plural}")
    }
}

/// Pluralizes `word` only when `num` calls for it.
pub fn auto_plural(word: &str, num: usize) -> String {
    if num > 1 {
        pluralize(word)
    } else {
        word.to_string()
    }
}

/// Renders a count and its pluralized noun, e.g. `3 errors`.
pub fn number_of<T>(items: &[T], name: &str) -> String {
    format!("{} {}", items.len(), auto_plural(name, items.len()))
}

/// Joins items into a readable English list: `a`, `a and b`, or
/// `a, b, and c`.
pub fn list_items<T: Display>(items: &[T]) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{first} and {second}"),
        _ => {
            let mut parts: Vec<String> = items.iter().map(ToString::to_string).collect();
            let last_index = parts.len() - 1;
            parts[last_index] = format!("and {}", parts[last_index]);
            parts.join(", ")
        }
    }
}

/// Prefixes `word` with `a` or `an`. When `consider_acronyms` is set,
/// all-uppercase words always get `a` (pronounced letter by letter or not,
/// the safer default).
pub fn a_or_an(word: &str, consider_acronyms: bool) -> String {
    let starts_with_vowel = word
        .chars()
        .next()
        .is_some_and(|c| TRUE_VOWELS.contains(&c.to_ascii_lowercase()));
    let acronym = consider_acronyms && !word.is_empty() && word.chars().all(|c| c.is_uppercase());
    if starts_with_vowel && !acronym {
        format!("an {word}")
    } else {
        format!("a {word}")
    }
}

/// Uppercases the first character of `word`.
pub fn cap_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Title-case rule for a single word: articles and coordinating conjunctions
/// stay lowercase, everything else gets a capital.
pub fn cap_first_title(word: &str) -> String {
    let lowered = word.to_lowercase();
    if ARTICLES.contains(&lowered.as_str()) || COORD_CONJUNCTIONS.contains(&lowered.as_str()) {
        lowered
    } else {
        cap_first(word)
    }
}

/// Uppercases the first character of every word in `phrase`.
pub fn cap_first_all(phrase: &str) -> String {
    phrase
        .split(' ')
        .map(cap_first)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Title-cases `phrase`: every word through [`cap_first_title`], with the
/// first word always capitalized.
pub fn title(phrase: &str) -> String {
    phrase
        .split(' ')
        .enumerate()
        .map(|(index, word)| {
            let lowered = word.to_lowercase();
            if index == 0 {
                cap_first(&lowered)
            } else {
                cap_first_title(&lowered)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize_consonant() {
        assert_eq!(pluralize("scan"), "scans");
    }

    #[test]
    fn test_pluralize_trailing_y() {
        assert_eq!(pluralize("query"), "queries");
    }

    #[test]
    fn test_pluralize_trailing_vowel() {
        assert_eq!(pluralize("potato"), "potatoes");
    }

    #[test]
    fn test_pluralize_empty_word() {
        assert_eq!(pluralize(""), "");
    }

    #[test]
    fn test_auto_plural_singular_and_plural() {
        assert_eq!(auto_plural("item", 1), "item");
        assert_eq!(auto_plural("item", 2), "items");
        assert_eq!(auto_plural("item", 0), "item");
    }

    #[test]
    fn test_number_of() {
        assert_eq!(number_of(&[1, 2, 3], "error"), "3 errors");
        assert_eq!(number_of(&[1], "error"), "1 error");
    }

    #[test]
    fn test_list_items_lengths() {
        assert_eq!(list_items::<&str>(&[]), "");
        assert_eq!(list_items(&["a"]), "a");
        assert_eq!(list_items(&["a", "b"]), "a and b");
        assert_eq!(list_items(&["a", "b", "c"]), "a, b, and c");
    }

    #[test]
    fn test_a_or_an() {
        assert_eq!(a_or_an("error", false), "an error");
        assert_eq!(a_or_an("prompt", false), "a prompt");
        assert_eq!(a_or_an("URL", true), "a URL");
        assert_eq!(a_or_an("URL", false), "an URL");
    }

    #[test]
    fn test_cap_first() {
        assert_eq!(cap_first("hello"), "Hello");
        assert_eq!(cap_first(""), "");
    }

    #[test]
    fn test_title_keeps_articles_lowercase() {
        assert_eq!(title("the lord of the rings"), "The Lord Of the Rings");
    }

    #[test]
    fn test_cap_first_all() {
        assert_eq!(cap_first_all("hello there world"), "Hello There World");
    }
}
