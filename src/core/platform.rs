// ─── Platform Identity ───
// OS name + architecture used for library rules and native classifiers.

/// Platform identity injected into rule evaluation and path resolution.
///
/// Defaults to the build target. Tests and cross-platform tooling construct
/// their own with [`Platform::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    os_name: String,
    arch: String,
}

impl Platform {
    pub fn new(os_name: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os_name: os_name.into(),
            arch: arch.into(),
        }
    }

    /// The build target, in Mojang naming (`windows`/`osx`/`linux`, `x86_64`/`x86`).
    pub fn current() -> Self {
        Self::new(current_os_name(), current_arch())
    }

    pub fn windows_x64() -> Self {
        Self::new("windows", "x86_64")
    }

    pub fn os_name(&self) -> &str {
        &self.os_name
    }

    pub fn arch(&self) -> &str {
        &self.arch
    }

    /// Value substituted for `${arch}` in native classifiers.
    pub fn arch_bits(&self) -> &'static str {
        if self.arch.ends_with("64") {
            "64"
        } else {
            "32"
        }
    }

    /// Directory suffix for extracted natives, e.g. `natives-windows-x86_64`.
    pub fn natives_tag(&self) -> String {
        format!("natives-{}-{}", self.os_name, self.arch)
    }

    pub fn classpath_separator(&self) -> &'static str {
        if self.os_name == "windows" {
            ";"
        } else {
            ":"
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

/// Get the Mojang OS name for the current platform.
fn current_os_name() -> &'static str {
    if cfg!(target_os = "windows") {
        "windows"
    } else if cfg!(target_os = "macos") {
        "osx"
    } else {
        "linux"
    }
}

// Every 64-bit target reports `x86_64`, matching how descriptors tag 64-bit natives.
fn current_arch() -> &'static str {
    if cfg!(target_pointer_width = "64") {
        "x86_64"
    } else {
        "x86"
    }
}
