pub mod arguments;
pub mod classpath;
pub mod command;
pub mod library_path;
pub mod task;

pub use arguments::build_game_arguments;
pub use classpath::{build_classpath, join_classpath};
pub use command::{build_command, LaunchOptions};
pub use library_path::resolve_library_path;
pub use task::{launch, launch_with, prepare_launch, GameProcess, LaunchPlan};
