pub mod config;
pub mod logging;

pub mod catalog;
pub mod transform;
pub mod upload;
