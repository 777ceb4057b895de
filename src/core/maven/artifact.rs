use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::error::{LauncherError, LauncherResult};

/// A parsed library coordinate, `groupId:artifactId:version`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MavenArtifact {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl MavenArtifact {
    /// Parse a coordinate string. Anything other than exactly three
    /// colon-separated parts is rejected.
    ///
    /// # Examples
    /// ```
    /// use mclaunch_lib::core::maven::MavenArtifact;
    ///
    /// let a = MavenArtifact::parse("net.sf.jopt-simple:jopt-simple:5.0.4").unwrap();
    /// assert_eq!(a.group_id, "net.sf.jopt-simple");
    /// ```
    pub fn parse(coord: &str) -> LauncherResult<Self> {
        let parts: Vec<&str> = coord.split(':').collect();

        match parts.as_slice() {
            [group, artifact, version] => Ok(Self {
                group_id: group.to_string(),
                artifact_id: artifact.to_string(),
                version: version.to_string(),
            }),
            _ => Err(LauncherError::InvalidMavenCoordinate(coord.to_string())),
        }
    }

    /// Group path with dots turned into directory levels (`net/sf/jopt-simple`).
    pub fn group_path(&self) -> PathBuf {
        self.group_id.split('.').collect()
    }

    /// `<group_path>/<artifact_id>/<version>`, relative to a libraries directory.
    pub fn base_dir(&self) -> PathBuf {
        self.group_path().join(&self.artifact_id).join(&self.version)
    }

    /// Build the artifact filename.
    ///
    /// `artifactId-version[-classifier].jar`
    pub fn filename(&self, classifier: Option<&str>) -> String {
        match classifier {
            Some(c) => format!("{}-{}-{}.jar", self.artifact_id, self.version, c),
            None => format!("{}-{}.jar", self.artifact_id, self.version),
        }
    }

    /// Full jar path under `libs_dir`.
    pub fn jar_path(&self, libs_dir: &Path, classifier: Option<&str>) -> PathBuf {
        libs_dir.join(self.base_dir()).join(self.filename(classifier))
    }
}

impl fmt::Display for MavenArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}
