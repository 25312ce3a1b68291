//! Published stub overrides with built-in fallback.

use std::path::PathBuf;

use strata_core::{
    application::ports::{Filesystem, StubStore},
    domain::RelativePath,
    error::StrataResult,
};
use tracing::debug;

use super::BuiltinStubs;

/// Looks for `{root}/{id}` first, then falls back to [`BuiltinStubs`].
///
/// `root` is usually the configured `stubs_path`, filled by `strata publish`.
pub struct OverlayStubStore {
    root: PathBuf,
    filesystem: Box<dyn Filesystem>,
    fallback: BuiltinStubs,
}

impl OverlayStubStore {
    pub fn new(root: impl Into<PathBuf>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            root: root.into(),
            filesystem,
            fallback: BuiltinStubs,
        }
    }
}

impl StubStore for OverlayStubStore {
    fn get(&self, id: &str) -> StrataResult<String> {
        let relative = RelativePath::try_new(id)?;
        let path = self.root.join(relative.as_path());

        if self.filesystem.is_file(&path) {
            debug!(path = %path.display(), "Using published stub");
            return self.filesystem.read_file(&path);
        }

        self.fallback.get(id)
    }

    fn ids(&self) -> Vec<String> {
        self.fallback.ids()
    }
}
