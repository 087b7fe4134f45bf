//! Display names derived from folder and file names.
//!
//! Every entry in the manifests carries a human-readable `name` next to its
//! `id`. Names are never stored anywhere: they are recomputed from the
//! filesystem on every run by [`format_name`], so renaming a folder is the
//! only way to rename a tierlist.
//!
//! ## Formatting Rules
//!
//! 1. A space is inserted where a lowercase ASCII letter is directly followed
//!    by an uppercase one (`demoChars` → `demo Chars`).
//! 2. The result is split on runs of `-`, `_` and whitespace.
//! 3. Each word is capitalized: first character upper-cased, the rest
//!    lower-cased. When the upper-case form of the first character is
//!    several characters, only the first stays upper-case (`ß` → "Ss").
//! 4. Words are joined with single spaces.
//!
//! Examples:
//! - `demoChars` → "Demo Chars"
//! - `my-cool_folder Name` → "My Cool Folder Name"
//! - `categoryA` → "Category A"
//! - `zeus.png` → "Zeus" (file names lose their extension first)
//!
//! Input with no words at all (`""`, `"--"`) is passed through unchanged.
//!
//! ## Folders vs. Files
//!
//! Folder names are formatted whole; a dot in them is just another
//! character (`v1.5` → "V1.5", `ice.giant` → "Ice.giant"). Image file names
//! lose their final extension first, via [`file_display_name`]. The same
//! string can therefore format differently as a folder and as a file.

use std::path::Path;

/// Format a folder name or file stem as a display name.
///
/// Deterministic and idempotent on its own output.
pub fn format_name(name: &str) -> String {
    let spaced = split_camel_case(name);
    let words: Vec<String> = spaced
        .split(is_separator)
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect();

    if words.is_empty() {
        return name.to_string();
    }
    words.join(" ")
}

/// Format an image file name: the extension is dropped, the stem formatted.
///
/// - `thor.jpg` → "Thor"
/// - `ice_giant.final.png` → "Ice Giant.final"
pub fn file_display_name(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_else(|| filename.into());
    format_name(&stem)
}

fn is_separator(c: char) -> bool {
    c == '-' || c == '_' || c.is_whitespace()
}

fn split_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;
    for c in name.chars() {
        if let Some(p) = prev
            && p.is_ascii_lowercase()
            && c.is_ascii_uppercase()
        {
            out.push(' ');
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

/// Upper-case the first character, lower-case the rest.
///
/// A first character whose upper-case form is several characters (`ß` →
/// `SS`) keeps only the first of them upper-cased: `ß` → "Ss", so a second
/// pass leaves the word alone.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut upper = first.to_uppercase();
    upper
        .next()
        .into_iter()
        .chain(upper.flat_map(char::to_lowercase))
        .chain(chars.flat_map(char::to_lowercase))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_is_split() {
        assert_eq!(format_name("demoChars"), "Demo Chars");
    }

    #[test]
    fn mixed_separators_collapse_to_single_spaces() {
        assert_eq!(format_name("my-cool_folder Name"), "My Cool Folder Name");
    }

    #[test]
    fn single_trailing_capital() {
        assert_eq!(format_name("categoryA"), "Category A");
    }

    #[test]
    fn runs_of_separators() {
        assert_eq!(format_name("fire--and__ice  age"), "Fire And Ice Age");
    }

    #[test]
    fn leading_and_trailing_separators_dropped() {
        assert_eq!(format_name("-heroes_"), "Heroes");
    }

    #[test]
    fn words_are_lowercased_after_first_letter() {
        assert_eq!(format_name("BOSS-fights"), "Boss Fights");
        assert_eq!(format_name("HTTPServer"), "Httpserver");
    }

    #[test]
    fn digits_pass_through() {
        assert_eq!(format_name("season-2"), "Season 2");
        assert_eq!(format_name("2024"), "2024");
    }

    #[test]
    fn separator_only_input_unchanged() {
        assert_eq!(format_name("---"), "---");
        assert_eq!(format_name("_ _"), "_ _");
        assert_eq!(format_name(""), "");
    }

    #[test]
    fn non_ascii_words_capitalized() {
        assert_eq!(format_name("élan-vital"), "Élan Vital");
    }

    #[test]
    fn multi_char_uppercase_keeps_one_capital() {
        assert_eq!(format_name("ß"), "Ss");
        assert_eq!(format_name("straße"), "Straße");
        assert_eq!(format_name("ßig-fish"), "Ssig Fish");
        assert_eq!(format_name("ŉ"), "ʼn");
    }

    #[test]
    fn multi_char_uppercase_is_idempotent() {
        for input in ["ß", "ßig-fish", "ŉ", "ﬃ"] {
            let once = format_name(input);
            assert_eq!(format_name(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn folder_names_keep_dots() {
        assert_eq!(format_name("v1.5"), "V1.5");
        assert_eq!(format_name("ice.giant"), "Ice.giant");
        assert_eq!(file_display_name("ice.giant"), "Ice");
    }

    #[test]
    fn already_formatted_is_stable() {
        for input in ["Demo Chars", "My Cool Folder Name", "Category A", "Zeus"] {
            assert_eq!(format_name(input), input);
        }
    }

    #[test]
    fn reapplying_is_idempotent() {
        for input in ["demoChars", "my-cool_folder Name", "aBcDeF", "x__Y--z"] {
            let once = format_name(input);
            assert_eq!(format_name(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn file_extension_is_removed() {
        assert_eq!(file_display_name("thor.jpg"), "Thor");
        assert_eq!(file_display_name("iceGiant.PNG"), "Ice Giant");
    }

    #[test]
    fn only_last_extension_is_removed() {
        assert_eq!(file_display_name("ice_giant.final.png"), "Ice Giant.final");
    }

    #[test]
    fn file_without_extension() {
        assert_eq!(file_display_name("README"), "Readme");
    }
}
