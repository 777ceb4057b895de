#[tokio::main]
async fn main() {
    mclaunch_lib::init_logging();

    match mclaunch_lib::run().await {
        Ok(status) => std::process::exit(status.code().unwrap_or(1)),
        Err(err) => {
            tracing::error!("Failed to launch: {}", err);
            std::process::exit(1);
        }
    }
}
