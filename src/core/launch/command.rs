// ─── Command Synthesizer ───
// Assembles the Java argument vector: memory, fixed JVM block, classpath,
// main class, game arguments.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::platform::Platform;

use super::classpath::safe_path_str;

pub const LAUNCHER_BRAND: &str = "WMML";
pub const LAUNCHER_VERSION: &str = "0.1.26";
pub const DEFAULT_MEMORY_MB: u32 = 4096;

/// Per-launch JVM options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LaunchOptions {
    pub java_path: PathBuf,
    /// Heap size in megabytes, used for both `-Xmx` and `-Xms`.
    pub memory_mb: Option<u32>,
    /// Leave heap sizing to the JVM; no memory flags are emitted.
    pub use_system_memory: bool,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            java_path: PathBuf::from("java"),
            memory_mb: Some(DEFAULT_MEMORY_MB),
            use_system_memory: false,
        }
    }
}

impl LaunchOptions {
    fn memory_flags(&self) -> Option<[String; 2]> {
        if self.use_system_memory {
            return None;
        }
        match self.memory_mb {
            Some(mb) if mb > 0 => Some([format!("-Xmx{}M", mb), format!("-Xms{}M", mb)]),
            _ => None,
        }
    }
}

/// Fixed JVM properties and tuning flags. Only the embedded paths vary.
pub fn common_jvm_args(root: &Path, version_id: &str, platform: &Platform) -> Vec<String> {
    let version_dir = root.join("versions").join(version_id);
    let natives = safe_path_str(&version_dir.join(platform.natives_tag()));
    let log4j_config = safe_path_str(&version_dir.join("log4j2.xml"));
    let client_jar = safe_path_str(&version_dir.join(format!("{}.jar", version_id)));

    vec![
        "-Dfile.encoding=GB18030".into(),
        "-Dsun.stdout.encoding=GB18030".into(),
        "-Dsun.stderr.encoding=GB18030".into(),
        "-Djava.rmi.server.useCodebaseOnly=true".into(),
        "-Dcom.sun.jndi.rmi.object.trustURLCodebase=false".into(),
        "-Dcom.sun.jndi.cosnaming.object.trustURLCodebase=false".into(),
        "-Dlog4j2.formatMsgNoLookups=true".into(),
        format!("-Dlog4j.configurationFile={}", log4j_config),
        format!("-Dminecraft.client.jar={}", client_jar),
        "-XX:+UnlockExperimentalVMOptions".into(),
        "-XX:+UseG1GC".into(),
        "-XX:G1NewSizePercent=20".into(),
        "-XX:G1ReservePercent=20".into(),
        "-XX:MaxGCPauseMillis=50".into(),
        "-XX:G1HeapRegionSize=32m".into(),
        "-XX:-UseAdaptiveSizePolicy".into(),
        "-XX:-OmitStackTraceInFastThrow".into(),
        "-XX:-DontCompileHugeMethods".into(),
        "-Dfml.ignoreInvalidMinecraftCertificates=true".into(),
        "-Dfml.ignorePatchDiscrepancies=true".into(),
        "-XX:HeapDumpPath=MojangTricksIntelDriversForPerformance_javaw.exe_minecraft.exe.heapdump"
            .into(),
        format!("-Djava.library.path={}", natives),
        format!("-Djna.tmpdir={}", natives),
        format!("-Dorg.lwjgl.system.SharedLibraryExtractPath={}", natives),
        format!("-Dio.netty.native.workdir={}", natives),
        format!("-Dminecraft.launcher.brand={}", LAUNCHER_BRAND),
        format!("-Dminecraft.launcher.version={}", LAUNCHER_VERSION),
    ]
}

/// Build the full argument vector. Token 0 is the Java executable.
pub fn build_command(
    root: &Path,
    version_id: &str,
    main_class: &str,
    classpath: &str,
    game_args: &str,
    options: &LaunchOptions,
    platform: &Platform,
) -> Vec<String> {
    let mut command = vec![safe_path_str(&options.java_path)];

    if let Some(flags) = options.memory_flags() {
        command.extend(flags);
    }

    command.extend(common_jvm_args(root, version_id, platform));
    command.push("-cp".into());
    command.push(classpath.to_string());
    command.push(main_class.to_string());
    command.extend(game_args.split_whitespace().map(str::to_string));

    command
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(options: &LaunchOptions, game_args: &str) -> Vec<String> {
        build_command(
            Path::new("/games/mc"),
            "1.20.1",
            "net.minecraft.client.main.Main",
            "a.jar;b.jar",
            game_args,
            options,
            &Platform::windows_x64(),
        )
    }

    #[test]
    fn default_options_emit_equal_memory_bounds() {
        let command = build(&LaunchOptions::default(), "");
        assert_eq!(command[0], "java");
        assert_eq!(command[1], "-Xmx4096M");
        assert_eq!(command[2], "-Xms4096M");
    }

    #[test]
    fn system_memory_omits_memory_flags() {
        let options = LaunchOptions {
            use_system_memory: true,
            ..LaunchOptions::default()
        };
        let command = build(&options, "");
        assert!(!command.iter().any(|t| t.starts_with("-Xmx") || t.starts_with("-Xms")));
        assert_eq!(command[1], "-Dfile.encoding=GB18030");
    }

    #[test]
    fn absent_or_zero_memory_omits_memory_flags() {
        for memory_mb in [None, Some(0)] {
            let options = LaunchOptions {
                memory_mb,
                ..LaunchOptions::default()
            };
            let command = build(&options, "");
            assert!(!command.iter().any(|t| t.starts_with("-Xm")));
        }
    }

    #[test]
    fn classpath_main_class_and_game_args_close_the_command() {
        let command = build(&LaunchOptions::default(), "--username Alice  --version 1.20.1");
        let cp = command.iter().position(|t| t == "-cp").unwrap();
        assert_eq!(command[cp + 1], "a.jar;b.jar");
        assert_eq!(command[cp + 2], "net.minecraft.client.main.Main");
        assert_eq!(
            &command[cp + 3..],
            &["--username", "Alice", "--version", "1.20.1"]
        );
    }

    #[test]
    fn natives_properties_use_platform_tag() {
        let command = build(&LaunchOptions::default(), "");
        let natives = Path::new("/games/mc")
            .join("versions")
            .join("1.20.1")
            .join("natives-windows-x86_64");
        let expected = format!("-Djava.library.path={}", natives.to_string_lossy());
        assert!(command.contains(&expected));
        assert!(command.contains(&"-Dminecraft.launcher.brand=WMML".to_string()));
        assert!(command.contains(&"-Dminecraft.launcher.version=0.1.26".to_string()));
    }

    #[test]
    fn fixed_block_has_stable_length() {
        let command = build(&LaunchOptions::default(), "");
        // java + 2 memory flags + 27 fixed + -cp + classpath + main class
        assert_eq!(command.len(), 1 + 2 + 27 + 3);
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: LaunchOptions =
            serde_json::from_value(serde_json::json!({"java_path": "/opt/jdk/bin/java"})).unwrap();
        assert_eq!(options.java_path, PathBuf::from("/opt/jdk/bin/java"));
        assert_eq!(options.memory_mb, Some(4096));
        assert!(!options.use_system_memory);
    }
}
