// ─── Library Path Resolver ───
// Maps an applicable library entry to its jar under `<root>/libraries`.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::error::LauncherResult;
use crate::core::maven::MavenArtifact;
use crate::core::platform::Platform;
use crate::core::version::LibraryEntry;

impl LibraryEntry {
    /// Native classifier declared for `platform`, with `${arch}` substituted.
    pub fn native_classifier_for(&self, platform: &Platform) -> Option<String> {
        let natives = self.natives.as_ref()?;
        natives
            .get(platform.os_name())
            .map(|classifier| classifier.replace("${arch}", platform.arch_bits()))
    }
}

/// Resolve the on-disk jar for `entry`.
///
/// The native classifier variant wins when declared and present, then the
/// plain jar. `Ok(None)` means neither exists and the library is skipped;
/// a malformed coordinate is an error.
pub fn resolve_library_path(
    root: &Path,
    entry: &LibraryEntry,
    platform: &Platform,
) -> LauncherResult<Option<PathBuf>> {
    let artifact = MavenArtifact::parse(&entry.name)?;
    let libs_dir = root.join("libraries");

    if let Some(classifier) = entry.native_classifier_for(platform) {
        let native_path = artifact.jar_path(&libs_dir, Some(&classifier));
        if native_path.is_file() {
            return Ok(Some(native_path));
        }
        debug!("Native jar missing for {}: {:?}", artifact, native_path);
    }

    let jar_path = artifact.jar_path(&libs_dir, None);
    if jar_path.is_file() {
        return Ok(Some(jar_path));
    }

    debug!("Library jar missing, skipping {}: {:?}", artifact, jar_path);
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::LauncherError;

    fn scratch_root(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "library-path-test-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn touch(path: &Path) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, b"jar").unwrap();
    }

    #[test]
    fn resolves_existing_plain_jar() {
        let root = scratch_root("plain");
        let expected = root
            .join("libraries")
            .join("org")
            .join("example")
            .join("foo")
            .join("1.0")
            .join("foo-1.0.jar");
        touch(&expected);

        let entry = LibraryEntry::new("org.example:foo:1.0");
        let resolved = resolve_library_path(&root, &entry, &Platform::windows_x64()).unwrap();
        assert_eq!(resolved, Some(expected));

        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn missing_jar_is_none() {
        let root = scratch_root("missing");
        let entry = LibraryEntry::new("org.example:foo:1.0");
        let resolved = resolve_library_path(&root, &entry, &Platform::windows_x64()).unwrap();
        assert_eq!(resolved, None);
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn malformed_coordinate_is_an_error() {
        let root = scratch_root("malformed");
        let entry = LibraryEntry::new("org.example:foo");
        let err = resolve_library_path(&root, &entry, &Platform::windows_x64()).unwrap_err();
        assert!(matches!(err, LauncherError::InvalidMavenCoordinate(_)));
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn prefers_native_classifier_with_arch_substituted() {
        let root = scratch_root("native");
        let base = root
            .join("libraries")
            .join("org")
            .join("lwjgl")
            .join("lwjgl")
            .join("2.9.4");
        let native = base.join("lwjgl-2.9.4-natives-windows-64.jar");
        touch(&native);
        touch(&base.join("lwjgl-2.9.4.jar"));

        let entry = LibraryEntry::new("org.lwjgl:lwjgl:2.9.4")
            .with_native("windows", "natives-windows-${arch}");
        let resolved = resolve_library_path(&root, &entry, &Platform::windows_x64()).unwrap();
        assert_eq!(resolved, Some(native));

        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn falls_back_to_plain_jar_when_native_missing() {
        let root = scratch_root("native-fallback");
        let plain = root
            .join("libraries")
            .join("org")
            .join("lwjgl")
            .join("lwjgl")
            .join("2.9.4")
            .join("lwjgl-2.9.4.jar");
        touch(&plain);

        let entry = LibraryEntry::new("org.lwjgl:lwjgl:2.9.4")
            .with_native("windows", "natives-windows-${arch}");
        let resolved = resolve_library_path(&root, &entry, &Platform::windows_x64()).unwrap();
        assert_eq!(resolved, Some(plain));

        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn natives_for_other_os_are_ignored() {
        let entry = LibraryEntry::new("org.lwjgl:lwjgl:2.9.4").with_native("osx", "natives-osx");
        assert_eq!(entry.native_classifier_for(&Platform::windows_x64()), None);
        assert_eq!(
            entry.native_classifier_for(&Platform::new("osx", "x86_64")),
            Some("natives-osx".to_string())
        );
    }
}
