//! Folder classification for module introspection.
//!
//! Existing folders are attributed to the first matching reference list in a
//! fixed priority order: scaffold, generated, paths, test paths. A folder that
//! is configured in two lists is therefore always reported under the
//! higher-priority one. Missing folders are computed per list, independently
//! of that attribution.

use std::collections::BTreeSet;

use serde::Serialize;

/// Buckets produced by [`classify`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FolderClassification {
    pub scaffold: Vec<String>,
    pub generated: Vec<String>,
    pub paths: Vec<String>,
    pub test_paths: Vec<String>,
    pub additional: Vec<String>,
    pub missing_scaffold: Vec<String>,
    pub missing_generated: Vec<String>,
    pub missing_paths: Vec<String>,
    pub missing_test_paths: Vec<String>,
}

impl FolderClassification {
    pub fn has_missing(&self) -> bool {
        !(self.missing_scaffold.is_empty()
            && self.missing_generated.is_empty()
            && self.missing_paths.is_empty()
            && self.missing_test_paths.is_empty())
    }
}

/// Reference lists a module is checked against.
#[derive(Debug, Clone, Copy)]
pub struct FolderReferences<'a> {
    pub scaffold: &'a [String],
    pub generated: &'a [String],
    pub paths: &'a [String],
    pub test_paths: &'a [String],
}

/// Classify `existing` folders against the reference lists.
///
/// `existing` is treated as an ordered set: buckets come out in lexicographic
/// (byte) order without duplicates. Missing lists keep the order of their
/// reference list.
pub fn classify<S: AsRef<str>>(existing: &[S], refs: FolderReferences<'_>) -> FolderClassification {
    let existing: BTreeSet<&str> = existing.iter().map(AsRef::as_ref).collect();
    let mut result = FolderClassification::default();

    for folder in &existing {
        let bucket = if contains(refs.scaffold, folder) {
            &mut result.scaffold
        } else if contains(refs.generated, folder) {
            &mut result.generated
        } else if contains(refs.paths, folder) {
            &mut result.paths
        } else if contains(refs.test_paths, folder) {
            &mut result.test_paths
        } else {
            &mut result.additional
        };
        bucket.push((*folder).to_string());
    }

    result.missing_scaffold = missing(refs.scaffold, &existing);
    result.missing_generated = missing(refs.generated, &existing);
    result.missing_paths = missing(refs.paths, &existing);
    result.missing_test_paths = missing(refs.test_paths, &existing);

    result
}

fn contains(list: &[String], folder: &str) -> bool {
    list.iter().any(|entry| entry == folder)
}

fn missing(reference: &[String], existing: &BTreeSet<&str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for entry in reference {
        if !existing.contains(entry.as_str()) && !out.contains(entry) {
            out.push(entry.clone());
        }
    }
    out
}
