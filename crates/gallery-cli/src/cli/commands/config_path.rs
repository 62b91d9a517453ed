//! `gallery config-path` – print where the config lives.

use anyhow::Result;
use gallery_core::config;

pub fn run_config_path() -> Result<()> {
    println!("{}", config::config_path()?.display());
    Ok(())
}
