use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::core::error::{LauncherError, LauncherResult};

use super::version_file::VersionDescriptor;

/// Source of parsed version descriptors.
#[async_trait]
pub trait DescriptorLoader: Send + Sync {
    async fn load(&self, path: &Path) -> LauncherResult<VersionDescriptor>;
}

/// Reads descriptors as UTF-8 JSON from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDescriptorLoader;

#[async_trait]
impl DescriptorLoader for FsDescriptorLoader {
    async fn load(&self, path: &Path) -> LauncherResult<VersionDescriptor> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| match source.kind() {
                std::io::ErrorKind::NotFound => LauncherError::DescriptorNotFound(path.to_path_buf()),
                _ => LauncherError::Io {
                    path: path.to_path_buf(),
                    source,
                },
            })?;

        let descriptor = parse_descriptor(path, &raw)?;
        debug!(
            "Loaded descriptor {} ({} libraries) from {:?}",
            descriptor.id,
            descriptor.libraries.len(),
            path
        );
        Ok(descriptor)
    }
}

pub fn parse_descriptor(path: &Path, raw: &str) -> LauncherResult<VersionDescriptor> {
    serde_json::from_str(raw).map_err(|source| LauncherError::MalformedDescriptor {
        path: path.to_path_buf(),
        source,
    })
}

/// `<root>/versions/<id>/<id>.json`
pub fn descriptor_path(root: &Path, version_id: &str) -> PathBuf {
    root.join("versions")
        .join(version_id)
        .join(format!("{}.json", version_id))
}
