//! Validated run configuration

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::output::RenderConfig;
use crate::size::Size;

/// Everything a run needs, as produced by the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_path: PathBuf,
    pub directory_only: bool,
    pub recursive: bool,
    /// `None` means unlimited depth.
    pub depth: Option<usize>,
    /// `None` means no threshold, which differs from a zero-byte threshold.
    pub threshold: Option<Size>,
    pub show_memory: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("."),
            directory_only: false,
            recursive: false,
            depth: None,
            threshold: None,
            show_memory: false,
        }
    }
}

impl Config {
    /// Check that the base path is set and exists.
    pub fn validate(&self) -> Result<()> {
        if self.base_path.as_os_str().is_empty() {
            return Err(Error::EmptyBasePath);
        }
        if !self.base_path.exists() {
            return Err(Error::MissingBasePath(self.base_path.clone()));
        }
        Ok(())
    }

    pub fn render_config(&self, use_color: bool) -> RenderConfig {
        RenderConfig {
            recursive: self.recursive,
            dirs_only: self.directory_only,
            depth: self.depth,
            threshold: self.threshold,
            use_color,
        }
    }
}
