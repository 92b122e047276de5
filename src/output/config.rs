//! Output configuration types

use crate::size::Size;

/// Filters and styling for the tree view.
///
/// The three filter dimensions (`recursive`, `depth`, `threshold`) are applied
/// together; `dirs_only` only affects file lines.
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Descend past the root's direct children.
    pub recursive: bool,
    pub dirs_only: bool,
    /// Deepest level at which lines are still printed. `None` is unlimited.
    pub depth: Option<usize>,
    /// Minimum size for a line to be printed. `None` prints everything.
    pub threshold: Option<Size>,
    pub use_color: bool,
}

impl RenderConfig {
    /// Whether a node of `size` clears the threshold.
    pub fn passes_threshold(&self, size: Size) -> bool {
        self.threshold.is_none_or(|min| size >= min)
    }

    /// Whether lines at `current_depth` are within the depth bound.
    pub fn within_depth(&self, current_depth: usize) -> bool {
        self.depth.is_none_or(|max| current_depth <= max)
    }
}
