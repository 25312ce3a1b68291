//! Domain value objects: ModuleName, ComponentName, ComponentKind.
//!
//! # Design
//!
//! These are pure value types with equality by value and no identity. Names
//! are validated on the raw user input and normalized to studly case once,
//! at construction; every derived path and namespace uses the normalized
//! form.

use crate::domain::{error::DomainError, naming};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// `true` when `name` starts with an ASCII letter and contains only ASCII
/// letters and digits.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}

fn check_identifier(input: &str) -> Result<(), DomainError> {
    if input.is_empty() {
        return Err(DomainError::invalid_name(input, "name cannot be empty"));
    }
    if !input.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return Err(DomainError::invalid_name(input, "name must start with a letter"));
    }
    if !is_valid_identifier(input) {
        return Err(DomainError::invalid_name(
            input,
            "name may only contain letters and digits",
        ));
    }
    Ok(())
}

// ── ModuleName ───────────────────────────────────────────────────────────────

/// A validated, studly-cased module name (`"blog"` → `"Blog"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ModuleName(String);

impl ModuleName {
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let input = input.trim();
        check_identifier(input)?;
        Ok(Self(naming::studly(input)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `"UserProfile"` → `"user_profile"`.
    pub fn snake(&self) -> String {
        naming::snake(&self.0)
    }
}

impl FromStr for ModuleName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ModuleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── ComponentName ────────────────────────────────────────────────────────────

/// A component name, optionally nested: `"Admin/Post"`.
///
/// Leading segments become sub-directories and sub-namespaces below the
/// component type's configured path; the last segment is the class name
/// (before suffixing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentName {
    parents: Vec<String>,
    class: String,
}

impl ComponentName {
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        let mut segments: Vec<String> = Vec::new();

        for segment in trimmed.split(['/', '\\']).filter(|s| !s.is_empty()) {
            check_identifier(segment).map_err(|_| {
                DomainError::invalid_name(
                    input,
                    format!("segment '{segment}' must start with a letter and contain only letters and digits"),
                )
            })?;
            segments.push(naming::studly(segment));
        }

        let class = segments
            .pop()
            .ok_or_else(|| DomainError::invalid_name(input, "name cannot be empty"))?;

        Ok(Self {
            parents: segments,
            class,
        })
    }

    /// Class name before any suffix is applied.
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Parent segments as a `/`-joined path (empty when not nested).
    pub fn parent_path(&self) -> String {
        self.parents.join("/")
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.parents.is_empty() {
            f.write_str(&self.class)
        } else {
            write!(f, "{}/{}", self.parent_path(), self.class)
        }
    }
}

// ── ComponentKind ────────────────────────────────────────────────────────────

/// Component types with a dedicated generator.
///
/// Each kind is only a configuration key; its path, suffix and stub come
/// from `ModulesConfig`. Arbitrary keys go through the custom generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    Controller,
    Request,
    Resource,
    Middleware,
    Entity,
    ValueObject,
    RepositoryInterface,
    Event,
    Service,
    Dto,
    Listener,
    Model,
    Repository,
    Seeder,
    Factory,
    UnitTest,
    FeatureTest,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 17] = [
        Self::Controller,
        Self::Request,
        Self::Resource,
        Self::Middleware,
        Self::Entity,
        Self::ValueObject,
        Self::RepositoryInterface,
        Self::Event,
        Self::Service,
        Self::Dto,
        Self::Listener,
        Self::Model,
        Self::Repository,
        Self::Seeder,
        Self::Factory,
        Self::UnitTest,
        Self::FeatureTest,
    ];

    /// Configuration key for this kind.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Controller => "controller",
            Self::Request => "request",
            Self::Resource => "resource",
            Self::Middleware => "middleware",
            Self::Entity => "entity",
            Self::ValueObject => "value_object",
            Self::RepositoryInterface => "repository_interface",
            Self::Event => "event",
            Self::Service => "service",
            Self::Dto => "dto",
            Self::Listener => "listener",
            Self::Model => "model",
            Self::Repository => "repository",
            Self::Seeder => "seeder",
            Self::Factory => "factory",
            Self::UnitTest => "unit",
            Self::FeatureTest => "feature",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ComponentKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == needle)
            .ok_or_else(|| DomainError::UnknownComponentType {
                key: s.to_string(),
                available: Self::ALL.iter().map(|k| k.key().to_string()).collect(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_names_accepted() {
        for name in ["Blog", "UserProfile", "APIController"] {
            assert!(ModuleName::parse(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn module_names_rejected() {
        for name in ["123Blog", "user_profile", "User-Profile", "", "Blog Post"] {
            assert!(
                matches!(ModuleName::parse(name), Err(DomainError::InvalidName { .. })),
                "{name}"
            );
        }
    }

    #[test]
    fn module_name_is_studly() {
        assert_eq!(ModuleName::parse("blog").unwrap().as_str(), "Blog");
        assert_eq!(ModuleName::parse("APIController").unwrap().as_str(), "APIController");
        assert_eq!(ModuleName::parse("userProfile").unwrap().snake(), "user_profile");
    }

    #[test]
    fn component_name_splits_nesting() {
        let name = ComponentName::parse("admin/post").unwrap();
        assert_eq!(name.class(), "Post");
        assert_eq!(name.parent_path(), "Admin");
        assert_eq!(name.to_string(), "Admin/Post");

        let flat = ComponentName::parse("PostController").unwrap();
        assert_eq!(flat.parent_path(), "");
    }

    #[test]
    fn component_name_rejects_bad_segments() {
        assert!(ComponentName::parse("admin/2fa").is_err());
        assert!(ComponentName::parse("post_controller").is_err());
        assert!(ComponentName::parse("///").is_err());
    }

    #[test]
    fn component_kind_parses_keys() {
        assert_eq!("controller".parse::<ComponentKind>().unwrap(), ComponentKind::Controller);
        assert_eq!(
            "value-object".parse::<ComponentKind>().unwrap(),
            ComponentKind::ValueObject
        );
        assert_eq!(ComponentKind::UnitTest.key(), "unit");
        assert!(matches!(
            "widget".parse::<ComponentKind>(),
            Err(DomainError::UnknownComponentType { .. })
        ));
    }
}
