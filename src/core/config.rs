use std::path::PathBuf;

use serde::Deserialize;

use crate::core::error::{LauncherError, LauncherResult};
use crate::core::launch::LaunchOptions;

pub const ENV_ROOT: &str = "MCLAUNCH_ROOT";
pub const ENV_VERSION: &str = "MCLAUNCH_VERSION";
pub const ENV_PLAYER: &str = "MCLAUNCH_PLAYER";
pub const ENV_JAVA: &str = "MCLAUNCH_JAVA";
pub const ENV_MEMORY_MB: &str = "MCLAUNCH_MEMORY_MB";
pub const ENV_SYSTEM_MEMORY: &str = "MCLAUNCH_SYSTEM_MEMORY";

/// Everything one launch needs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LaunchRequest {
    pub root: PathBuf,
    pub version_id: String,
    pub player_name: String,
    pub options: LaunchOptions,
}

impl Default for LaunchRequest {
    fn default() -> Self {
        Self {
            root: PathBuf::from(".minecraft"),
            version_id: "1.20.1".into(),
            player_name: "Player123".into(),
            options: LaunchOptions::default(),
        }
    }
}

impl LaunchRequest {
    /// Defaults overlaid with `MCLAUNCH_*` environment variables.
    pub fn from_env() -> LauncherResult<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    pub fn with_overrides<F>(mut self, lookup: F) -> LauncherResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(root) = value(ENV_ROOT) {
            self.root = PathBuf::from(root);
        }
        if let Some(version) = value(ENV_VERSION) {
            self.version_id = version.trim().to_string();
        }
        if let Some(player) = value(ENV_PLAYER) {
            self.player_name = player.trim().to_string();
        }
        if let Some(java) = value(ENV_JAVA) {
            self.options.java_path = PathBuf::from(java);
        }
        if let Some(raw) = lookup(ENV_MEMORY_MB) {
            self.options.memory_mb = parse_memory(&raw)?;
        }
        if let Some(raw) = value(ENV_SYSTEM_MEMORY) {
            self.options.use_system_memory = parse_flag(ENV_SYSTEM_MEMORY, &raw)?;
        }

        Ok(self)
    }
}

fn parse_memory(raw: &str) -> LauncherResult<Option<u32>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<u32>() {
        Ok(0) => Ok(None),
        Ok(mb) => Ok(Some(mb)),
        Err(_) => Err(LauncherError::Config(format!(
            "{} must be a whole number of megabytes, got {:?}",
            ENV_MEMORY_MB, raw
        ))),
    }
}

fn parse_flag(key: &str, raw: &str) -> LauncherResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(LauncherError::Config(format!(
            "{} must be a boolean, got {:?}",
            key, raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn overrides(pairs: &[(&str, &str)]) -> LauncherResult<LaunchRequest> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        LaunchRequest::default().with_overrides(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_without_overrides() {
        let request = overrides(&[]).unwrap();
        assert_eq!(request, LaunchRequest::default());
        assert_eq!(request.options.memory_mb, Some(4096));
        assert_eq!(request.options.java_path, PathBuf::from("java"));
    }

    #[test]
    fn environment_overrides_apply() {
        let request = overrides(&[
            (ENV_ROOT, "/srv/mc"),
            (ENV_VERSION, "1.8.9"),
            (ENV_PLAYER, "Alice"),
            (ENV_JAVA, "/opt/jdk/bin/java"),
            (ENV_MEMORY_MB, "2048"),
            (ENV_SYSTEM_MEMORY, "yes"),
        ])
        .unwrap();

        assert_eq!(request.root, PathBuf::from("/srv/mc"));
        assert_eq!(request.version_id, "1.8.9");
        assert_eq!(request.player_name, "Alice");
        assert_eq!(request.options.java_path, PathBuf::from("/opt/jdk/bin/java"));
        assert_eq!(request.options.memory_mb, Some(2048));
        assert!(request.options.use_system_memory);
    }

    #[test]
    fn zero_or_empty_memory_clears_value() {
        assert_eq!(overrides(&[(ENV_MEMORY_MB, "0")]).unwrap().options.memory_mb, None);
        assert_eq!(overrides(&[(ENV_MEMORY_MB, "")]).unwrap().options.memory_mb, None);
    }

    #[test]
    fn invalid_values_are_config_errors() {
        let err = overrides(&[(ENV_MEMORY_MB, "lots")]).unwrap_err();
        assert!(matches!(err, LauncherError::Config(_)));

        let err = overrides(&[(ENV_SYSTEM_MEMORY, "maybe")]).unwrap_err();
        assert!(matches!(err, LauncherError::Config(_)));
    }

    #[test]
    fn request_deserializes_partial_json() {
        let request: LaunchRequest = serde_json::from_value(serde_json::json!({
            "version_id": "1.16.5",
            "options": {"use_system_memory": true}
        }))
        .unwrap();
        assert_eq!(request.version_id, "1.16.5");
        assert_eq!(request.root, PathBuf::from(".minecraft"));
        assert!(request.options.use_system_memory);
        assert_eq!(request.options.memory_mb, Some(4096));
    }
}
