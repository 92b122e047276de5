//! Nodes of the scanned filesystem tree

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::size::Size;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    File,
    Directory,
}

/// A file or directory in the scanned hierarchy.
///
/// Directories own their children in directory-read order. `size` stays
/// `None` until the walk over the item's subtree completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub root: bool,
    pub name: String,
    pub path: PathBuf,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub size: Option<Size>,
    pub children: Vec<Item>,
}

impl Item {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, item_type: ItemType) -> Self {
        Self {
            root: false,
            name: name.into(),
            path: path.into(),
            item_type,
            size: None,
            children: Vec::new(),
        }
    }

    pub fn with_size(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        item_type: ItemType,
        size: Size,
    ) -> Self {
        Self {
            size: Some(size),
            ..Self::new(name, path, item_type)
        }
    }

    /// Create the root directory item for a walk starting at `path`.
    pub fn root(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            root: true,
            ..Self::new(base_name(&path), path, ItemType::Directory)
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.item_type, ItemType::Directory)
    }

    /// The item's size, treating a not-yet-computed size as zero.
    pub fn size_or_zero(&self) -> Size {
        self.size.unwrap_or(Size::ZERO)
    }
}

/// Last element of `path`, ignoring trailing separators.
///
/// `/` stays `/` and an empty path becomes `.`.
pub fn base_name(path: &Path) -> String {
    if let Some(name) = path.file_name() {
        return name.to_string_lossy().to_string();
    }

    let text = path.to_string_lossy();
    if text.is_empty() {
        return ".".to_string();
    }
    let trimmed = text.trim_end_matches(std::path::MAIN_SEPARATOR);
    if trimmed.is_empty() {
        return std::path::MAIN_SEPARATOR.to_string();
    }
    trimmed
        .rsplit(std::path::MAIN_SEPARATOR)
        .next()
        .unwrap_or(trimmed)
        .to_string()
}
