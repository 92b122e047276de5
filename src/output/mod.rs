//! Tree formatting and display
//!
//! This module provides formatters for a walked `Item` tree:
//! - Console tree view with colors, or plain text
//! - JSON output
//! - Filesystem usage summary printed ahead of the tree
//!
//! # Module Structure
//!
//! - `config` - Filter and styling options for the tree view
//! - `tree` - Filtered tree renderer
//! - `json` - JSON output
//! - `disk` - Filesystem capacity report

mod config;
mod disk;
mod json;
mod tree;

// Re-export public types and functions
pub use config::RenderConfig;
pub use disk::{DiskUsage, print_disk_usage, write_disk_usage};
pub use json::{print_json, write_json};
pub use tree::TreeRenderer;
