//! Configuration module for jobcost
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::JobCostPaths;
pub use settings::Settings;
