//! Filesystem adapters.

use std::path::{Component, Path};

mod local;
mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;

/// `a/b/c` for a non-empty relative path, `None` for the empty path.
fn relative_slash_path(path: &Path) -> Option<String> {
    let segments: Vec<String> = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    (!segments.is_empty()).then(|| segments.join("/"))
}
