//! Locations of the files the checker inspects.

use std::path::{Path, PathBuf};

use crate::paths;

/// File-system locations of the four checked artifacts.
///
/// Defaults to the legacy file names resolved against the current working
/// directory. Every path is injectable so the checker can run against
/// synthetic fixtures.
#[derive(Debug, Clone)]
pub struct ArtifactSet {
    /// The benchmark source artifact.
    pub artifact: PathBuf,
    /// The declarative build descriptor.
    pub primary_manifest: PathBuf,
    /// The task-runner file.
    pub secondary_manifest: PathBuf,
    /// The benchmark documentation.
    pub docs: PathBuf,
}

impl Default for ArtifactSet {
    fn default() -> Self {
        Self {
            artifact: PathBuf::from(paths::ARTIFACT_FILE),
            primary_manifest: PathBuf::from(paths::PRIMARY_MANIFEST),
            secondary_manifest: PathBuf::from(paths::SECONDARY_MANIFEST),
            docs: PathBuf::from(paths::DOCS_FILE),
        }
    }
}

impl ArtifactSet {
    /// The legacy file names resolved against `dir` instead of the current
    /// working directory.
    pub fn rooted_at(dir: &Path) -> Self {
        Self {
            artifact: dir.join(paths::ARTIFACT_FILE),
            primary_manifest: dir.join(paths::PRIMARY_MANIFEST),
            secondary_manifest: dir.join(paths::SECONDARY_MANIFEST),
            docs: dir.join(paths::DOCS_FILE),
        }
    }

    /// File name of the target artifact, as the primary manifest must spell
    /// it.
    pub fn artifact_name(&self) -> String {
        self.artifact
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
