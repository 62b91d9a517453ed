//! CLI command handlers. Each command is in its own file.

mod catalog;
mod config_path;
mod srcset;
mod transform;
mod upload;

pub use catalog::run_catalog;
pub use config_path::run_config_path;
pub use srcset::run_srcset;
pub use transform::run_transform;
pub use upload::run_upload;
