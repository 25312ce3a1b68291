//! Placeholder substitution for stub files.
//!
//! A stub author can write a placeholder in any of the common casings and
//! with or without inner spaces; all of them resolve to the same value:
//!
//! | Semantic key | Accepted tokens (each also as `{{x}}`) |
//! |--------------|-----------------------------------------|
//! | `module_namespace` | `{{ module_namespace }}`, `{{ MODULE_NAMESPACE }}`, `{{ ModuleNamespace }}`, `{{ moduleNamespace }}` |
//!
//! Substitution is literal. There are no loops, conditionals or escapes.

use cruet::case::{camel::to_camel_case, pascal::to_pascal_case, snake::to_snake_case};

/// Ordered token → value map.
///
/// Insertion order decides which token wins when two tokens could match at
/// the same position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementMap {
    entries: Vec<(String, String)>,
}

impl ReplacementMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a literal token. A token that is already present keeps its first value.
    pub fn insert(&mut self, token: impl Into<String>, value: impl Into<String>) {
        let token = token.into();
        if token.is_empty() || self.entries.iter().any(|(t, _)| *t == token) {
            return;
        }
        self.entries.push((token, value.into()));
    }

    /// Add every placeholder variant of a semantic key.
    pub fn insert_key(&mut self, key: &str, value: &str) {
        for token in placeholder_tokens(key) {
            self.insert(token, value);
        }
    }

    /// Builder-style [`Self::insert_key`].
    pub fn with_key(mut self, key: &str, value: impl AsRef<str>) -> Self {
        self.insert_key(key, value.as_ref());
        self
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(t, _)| t == token)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(t, v)| (t.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn render(&self, template: &str) -> String {
        render(template, self)
    }
}

impl<K, V> FromIterator<(K, V)> for ReplacementMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (token, value) in iter {
            map.insert(token, value);
        }
        map
    }
}

/// All tokens derived from one semantic key, duplicates removed.
pub fn placeholder_tokens(key: &str) -> Vec<String> {
    let variants = [
        key.to_string(),
        key.to_uppercase(),
        key.to_lowercase(),
        to_pascal_case(key),
        to_camel_case(key),
        to_snake_case(key),
    ];

    let mut tokens: Vec<String> = Vec::with_capacity(variants.len() * 2);
    for variant in variants.iter().filter(|v| !v.is_empty()) {
        for token in [format!("{{{{ {variant} }}}}"), format!("{{{{{variant}}}}}")] {
            if !tokens.contains(&token) {
                tokens.push(token);
            }
        }
    }
    tokens
}

/// Replace every token occurrence in `template` with its value.
///
/// Single left-to-right scan: replaced text is never scanned again, so a
/// value that itself looks like a placeholder stays literal.
pub fn render(template: &str, replacements: &ReplacementMap) -> String {
    if replacements.is_empty() {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    'scan: while !rest.is_empty() {
        for (token, value) in &replacements.entries {
            if rest.starts_with(token.as_str()) {
                out.push_str(value);
                rest = &rest[token.len()..];
                continue 'scan;
            }
        }

        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            out.push(ch);
        }
        rest = chars.as_str();
    }

    out
}
