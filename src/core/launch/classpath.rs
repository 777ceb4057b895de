// ─── Classpath Builder ───
// Version jar first, then every applicable, present library in descriptor order.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::error::LauncherResult;
use crate::core::platform::Platform;
use crate::core::version::{include_library, VersionDescriptor};

use super::library_path::resolve_library_path;

/// `<root>/versions/<id>/<id>.jar`
pub fn version_jar_path(root: &Path, version_id: &str) -> PathBuf {
    root.join("versions")
        .join(version_id)
        .join(format!("{}.jar", version_id))
}

/// Ordered classpath entries for `descriptor`.
///
/// The version jar is always first and never existence-checked. Libraries
/// rejected by their rules or missing on disk are skipped; duplicates are kept.
pub fn build_classpath(
    root: &Path,
    descriptor: &VersionDescriptor,
    platform: &Platform,
) -> LauncherResult<Vec<PathBuf>> {
    let mut entries = Vec::with_capacity(descriptor.libraries.len() + 1);
    entries.push(version_jar_path(root, &descriptor.id));

    for lib in &descriptor.libraries {
        if !include_library(lib, platform) {
            debug!("Skipping library (OS rule): {}", lib.name);
            continue;
        }

        if let Some(path) = resolve_library_path(root, lib, platform)? {
            entries.push(path);
        }
    }

    debug!(
        "Classpath for {}: {} entries from {} libraries",
        descriptor.id,
        entries.len(),
        descriptor.libraries.len()
    );
    Ok(entries)
}

/// Join entries with the platform's path-list separator.
pub fn join_classpath(entries: &[PathBuf], platform: &Platform) -> String {
    entries
        .iter()
        .map(|entry| safe_path_str(entry))
        .collect::<Vec<_>>()
        .join(platform.classpath_separator())
}

pub fn safe_path_str(path: &Path) -> String {
    let text = path.to_string_lossy().to_string();

    #[cfg(target_os = "windows")]
    {
        // Java rejects extended-length paths (`\\?\C:\...`) on the classpath.
        if let Some(stripped) = text.strip_prefix(r"\\?\") {
            return stripped.to_string();
        }
    }

    text
}
