pub mod core;

use std::process::ExitStatus;

use tracing_subscriber::EnvFilter;

use crate::core::config::LaunchRequest;
use crate::core::error::LauncherResult;

pub use crate::core::error::{ErrorKind, LauncherError};
pub use crate::core::launch::{launch, GameProcess, LaunchOptions};
pub use crate::core::platform::Platform;

/// Install the structured log subscriber. `RUST_LOG` overrides the default filter.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,mclaunch_lib=debug")),
        )
        .try_init();
}

/// Launch the version described by the environment and wait for it to exit.
pub async fn run() -> LauncherResult<ExitStatus> {
    let request = LaunchRequest::from_env()?;
    tracing::info!(
        "Launching {} for {} from {:?}",
        request.version_id,
        request.player_name,
        request.root
    );

    let process = launch(
        &request.root,
        &request.version_id,
        &request.player_name,
        &request.options,
    )
    .await?;
    tracing::info!("Game launched with PID {:?}", process.pid());

    process.wait().await
}
