//! Publish Service - writes the default configuration and stubs into the
//! project so they can be customized.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    application::{
        ports::{Filesystem, StubStore},
        services::support::{self, WriteStatus},
    },
    domain::ModulesConfig,
    error::StrataResult,
};

#[derive(Debug, Clone, Default)]
pub struct PublishRequest {
    /// Where the configuration file goes.
    pub config_path: PathBuf,
    /// Serialized configuration to write there.
    pub config_contents: String,
    pub force: bool,
    pub config_only: bool,
    pub templates_only: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PublishReport {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

impl PublishReport {
    fn record(&mut self, path: PathBuf, status: WriteStatus) {
        match status {
            WriteStatus::Written => self.written.push(path),
            WriteStatus::Skipped => self.skipped.push(path),
        }
    }
}

pub struct PublishService {
    config: ModulesConfig,
    stubs: Box<dyn StubStore>,
    filesystem: Box<dyn Filesystem>,
}

impl PublishService {
    pub fn new(
        config: ModulesConfig,
        stubs: Box<dyn StubStore>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            config,
            stubs,
            filesystem,
        }
    }

    #[instrument(skip_all, fields(force = request.force))]
    pub fn publish(&self, request: &PublishRequest) -> StrataResult<PublishReport> {
        let mut report = PublishReport::default();

        if !request.templates_only {
            let status = support::write_if_absent(
                self.filesystem.as_ref(),
                &request.config_path,
                &request.config_contents,
                request.force,
            )?;
            report.record(request.config_path.clone(), status);
        }

        if !request.config_only {
            let root = Path::new(&self.config.stubs_path);
            for id in self.stubs.ids() {
                let path = root.join(support::relative_dir(&id));
                let content = self.stubs.get(&id)?;
                let status = support::write_if_absent(
                    self.filesystem.as_ref(),
                    &path,
                    &content,
                    request.force,
                )?;
                report.record(path, status);
            }
        }

        info!(
            written = report.written.len(),
            skipped = report.skipped.len(),
            "Publish completed"
        );
        Ok(report)
    }
}
