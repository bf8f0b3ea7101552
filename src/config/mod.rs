// Core configuration types
mod core;
mod layout;
mod loader;
mod parallel;

pub use self::core::{SmellmapConfig, SystemMetricsSource, MAX_PRECISION};
pub use layout::ArtifactLayout;
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use parallel::ParallelConfig;
