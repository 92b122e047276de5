//! memspace - disk usage of a directory tree, rendered as an annotated tree

pub mod config;
pub mod error;
pub mod output;
pub mod size;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::Config;
pub use error::{Error, Result};
pub use output::{DiskUsage, RenderConfig, TreeRenderer, print_disk_usage, print_json};
pub use size::{Size, SizeError, Unit};
pub use tree::{Item, ItemType, TreeWalker, WalkStats, walk};
