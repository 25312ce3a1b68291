//! Name casing rules.
//!
//! Every derived class name, directory and namespace segment goes through
//! [`to_studly_segments`]. `/`, `\`, `_` and `-` are all segment boundaries;
//! inside a segment, whitespace-separated words are capitalized and joined.
//!
//! | Input | Separator | Output |
//! |-------|-----------|--------|
//! | `"blog"` | `""` | `"Blog"` |
//! | `"user_profile"` | `""` | `"UserProfile"` |
//! | `"domain/entities"` | `"\\"` | `"Domain\\Entities"` |
//! | `"APIController"` | `""` | `"APIController"` |

const SEGMENT_SEPARATORS: [char; 4] = ['/', '\\', '_', '-'];

/// Convert `input` to studly-cased segments joined with `separator`.
///
/// Empty segments (leading, trailing or doubled separators) are dropped.
/// Only the first letter of each word is touched; the rest keeps its case.
pub fn to_studly_segments(input: &str, separator: &str) -> String {
    input
        .split(SEGMENT_SEPARATORS)
        .map(studly_word_group)
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Studly case with no separator: `"user-profile"` → `"UserProfile"`.
pub fn studly(input: &str) -> String {
    to_studly_segments(input, "")
}

/// `"UserProfile"` → `"userProfile"`.
pub fn camel(input: &str) -> String {
    lcfirst(&studly(input))
}

/// `"UserProfile"` → `"user_profile"`.
///
/// An underscore goes before every upper-case letter that follows a
/// lower-case letter or digit, so acronyms stay together (`"APIKey"` →
/// `"apikey"`).
pub fn snake(input: &str) -> String {
    let studly = studly(input);
    let mut out = String::with_capacity(studly.len() + 4);
    let mut prev: Option<char> = None;

    for ch in studly.chars() {
        if ch.is_uppercase() && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
            out.push('_');
        }
        out.extend(ch.to_lowercase());
        prev = Some(ch);
    }

    out
}

/// Lower-case the first character.
pub fn lcfirst(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn studly_word_group(segment: &str) -> String {
    segment.split_whitespace().map(ucfirst).collect()
}

fn ucfirst(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
