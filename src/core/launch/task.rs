// ─── Launch Task ───
// Loads the descriptor, assembles the command and spawns the game process.

use std::path::{Path, PathBuf, MAIN_SEPARATOR};
use std::process::{ExitStatus, Stdio};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::{Child, Command};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::core::error::{LauncherError, LauncherResult};
use crate::core::platform::Platform;
use crate::core::version::{descriptor_path, DescriptorLoader, FsDescriptorLoader};

use super::arguments::build_game_arguments;
use super::classpath::{build_classpath, join_classpath};
use super::command::{build_command, LaunchOptions};

/// A fully resolved launch, not yet started.
///
/// Only built by [`prepare_launch`], so `command` always starts with the executable.
#[derive(Debug, Clone)]
pub struct LaunchPlan {
    root: PathBuf,
    classpath: Vec<PathBuf>,
    command: Vec<String>,
}

impl LaunchPlan {
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn classpath(&self) -> &[PathBuf] {
        &self.classpath
    }

    pub fn command(&self) -> &[String] {
        &self.command
    }

    pub fn program(&self) -> &str {
        self.command.first().map(String::as_str).unwrap_or_default()
    }

    pub fn args(&self) -> &[String] {
        self.command.split_first().map(|(_, args)| args).unwrap_or_default()
    }
}

/// Absolute root with a trailing separator.
pub fn normalize_root(root: &Path) -> LauncherResult<PathBuf> {
    let absolute = std::path::absolute(root).map_err(|source| LauncherError::Io {
        path: root.to_path_buf(),
        source,
    })?;

    let mut text = absolute.into_os_string();
    if !text.to_string_lossy().ends_with(MAIN_SEPARATOR) {
        text.push(MAIN_SEPARATOR.to_string());
    }
    Ok(PathBuf::from(text))
}

/// Resolve everything needed to launch `version_id` without spawning.
pub async fn prepare_launch(
    root: &Path,
    version_id: &str,
    player_name: &str,
    options: &LaunchOptions,
    loader: &dyn DescriptorLoader,
    platform: &Platform,
) -> LauncherResult<LaunchPlan> {
    let root = normalize_root(root)?;
    let descriptor = loader.load(&descriptor_path(&root, version_id)).await?;

    let classpath = build_classpath(&root, &descriptor, platform)?;
    let game_args = build_game_arguments(&root, version_id, player_name, &descriptor);
    let command = build_command(
        &root,
        version_id,
        &descriptor.main_class,
        &join_classpath(&classpath, platform),
        &game_args,
        options,
        platform,
    );

    Ok(LaunchPlan {
        root,
        classpath,
        command,
    })
}

/// Launch `version_id` from the installation at `root`.
///
/// Returns as soon as the process is running; its output is forwarded to the
/// log by background readers owned by the returned handle.
pub async fn launch(
    root: &Path,
    version_id: &str,
    player_name: &str,
    options: &LaunchOptions,
) -> LauncherResult<GameProcess> {
    launch_with(
        root,
        version_id,
        player_name,
        options,
        &FsDescriptorLoader,
        &Platform::current(),
    )
    .await
}

pub async fn launch_with(
    root: &Path,
    version_id: &str,
    player_name: &str,
    options: &LaunchOptions,
    loader: &dyn DescriptorLoader,
    platform: &Platform,
) -> LauncherResult<GameProcess> {
    let result: LauncherResult<GameProcess> = async {
        let plan =
            prepare_launch(root, version_id, player_name, options, loader, platform).await?;
        spawn_plan(&plan)
    }
    .await;

    if let Err(err) = &result {
        error!("Error launching {}: {}", version_id, err);
    }
    result
}

/// Spawn the plan's command directly, without a shell.
pub fn spawn_plan(plan: &LaunchPlan) -> LauncherResult<GameProcess> {
    info!("Launching with command: {}", format_command_for_logs(plan.command()));
    debug!("Classpath entries: {}", plan.classpath().len());

    let mut child = Command::new(plan.program())
        .args(plan.args())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| LauncherError::Spawn {
            program: plan.program().to_string(),
            source,
        })?;

    let pid = child.id();
    info!("Game process started (PID {:?})", pid);

    let stdout_reader = child
        .stdout
        .take()
        .map(|stdout| tokio::spawn(forward_lines(stdout, OutputStream::Stdout)));
    let stderr_reader = child
        .stderr
        .take()
        .map(|stderr| tokio::spawn(forward_lines(stderr, OutputStream::Stderr)));

    Ok(GameProcess {
        child,
        pid,
        readers: [stdout_reader, stderr_reader],
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputStream {
    Stdout,
    Stderr,
}

async fn forward_lines<R>(stream: R, kind: OutputStream)
where
    R: AsyncRead + Unpin,
{
    read_lossy_lines(BufReader::new(stream), |line| match kind {
        OutputStream::Stdout => info!("{}", line),
        OutputStream::Stderr => warn!("stderr: {}", line),
    })
    .await;
}

/// Feed every line to `on_line` until EOF.
///
/// The game writes GB18030, so bytes are decoded lossily instead of failing the
/// stream on the first non-UTF-8 line.
async fn read_lossy_lines<R, F>(mut reader: R, mut on_line: F)
where
    R: AsyncBufRead + Unpin,
    F: FnMut(&str),
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                on_line(line.trim_end_matches(['\n', '\r']));
            }
            Err(err) => {
                debug!("output reader stopped: {}", err);
                break;
            }
        }
    }
}

/// Handle to a running game process and its output readers.
///
/// Dropping the handle aborts the readers but leaves the process running.
#[derive(Debug)]
pub struct GameProcess {
    child: Child,
    pid: Option<u32>,
    readers: [Option<JoinHandle<()>>; 2],
}

impl GameProcess {
    pub fn pid(&self) -> Option<u32> {
        self.pid
    }

    /// Wait for the process to exit, then drain both readers.
    pub async fn wait(mut self) -> LauncherResult<ExitStatus> {
        let status = self.child.wait().await?;
        for reader in self.readers.iter_mut().filter_map(Option::take) {
            let _ = reader.await;
        }
        info!("Game process {:?} exited with {}", self.pid, status);
        Ok(status)
    }

    pub async fn kill(&mut self) -> LauncherResult<()> {
        self.child.kill().await?;
        Ok(())
    }
}

impl Drop for GameProcess {
    fn drop(&mut self) {
        for reader in self.readers.iter_mut().filter_map(Option::take) {
            reader.abort();
        }
    }
}

/// Render a command for logs in a copy/paste-able form.
pub fn format_command_for_logs(command: &[String]) -> String {
    command
        .iter()
        .map(|arg| shell_escape(arg))
        .collect::<Vec<_>>()
        .join(" ")
}

fn shell_escape(raw: &str) -> String {
    if raw.is_empty() {
        return "\"\"".to_string();
    }

    if raw.chars().all(|ch| {
        ch.is_ascii_alphanumeric()
            || matches!(ch, '-' | '_' | '.' | '/' | ':' | ';' | '\\' | '=' | '+' | ',')
    }) {
        return raw.to_string();
    }

    format!("\"{}\"", raw.replace('"', "\\\""))
}
