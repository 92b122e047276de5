//! TreeWalker - builds the full item tree and aggregates sizes bottom-up

use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::size::Size;

use super::item::{Item, ItemType};

/// Counts gathered during a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    pub directories: usize,
    pub files: usize,
}

/// Exhaustive, single-threaded directory walker.
///
/// The walk always visits the whole subtree; depth limits and thresholds are
/// applied later by the renderer. Any I/O failure aborts the walk.
#[derive(Debug, Default)]
pub struct TreeWalker {
    stats: WalkStats,
}

impl TreeWalker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> WalkStats {
        self.stats
    }

    /// Populate `parent` with the entries under `path` and return the total size.
    pub fn walk(&mut self, parent: &mut Item, path: &Path) -> Result<Size> {
        let total = self.walk_dir(parent, path, 0)?;
        debug!(
            path = %path.display(),
            total = %total,
            directories = self.stats.directories,
            files = self.stats.files,
            "walk finished"
        );
        Ok(total)
    }

    fn walk_dir(&mut self, parent: &mut Item, path: &Path, depth: usize) -> Result<Size> {
        debug!(path = %path.display(), depth, "reading directory");

        let read_error = |source| Error::DirectoryRead {
            path: path.to_path_buf(),
            source,
        };

        let mut total = Size::ZERO;
        for entry in fs::read_dir(path).map_err(read_error)? {
            let entry = entry.map_err(read_error)?;
            let file_type = entry.file_type().map_err(read_error)?;
            let name = entry.file_name().to_string_lossy().to_string();
            let entry_path = path.join(entry.file_name());

            let kind = if file_type.is_dir() {
                ItemType::Directory
            } else {
                ItemType::File
            };

            match kind {
                ItemType::Directory => {
                    self.stats.directories += 1;
                    let mut child = Item::new(name, &entry_path, ItemType::Directory);
                    let size = self.walk_dir(&mut child, &entry_path, depth + 1)?;
                    child.size = Some(size);
                    parent.children.push(child);
                    total += size;
                }
                ItemType::File => {
                    self.stats.files += 1;
                    let size = file_size(&entry_path)?;
                    trace!(path = %entry_path.display(), bytes = size.bytes(), "file");
                    parent
                        .children
                        .push(Item::with_size(name, entry_path, ItemType::File, size));
                    total += size;
                }
            }
        }

        parent.size = Some(total);
        Ok(total)
    }
}

/// Walk `path` into `root`, returning the aggregated size of everything below it.
pub fn walk(root: &mut Item, path: &Path) -> Result<Size> {
    TreeWalker::new().walk(root, path)
}

/// Byte length of the file at `path`, following symlinks.
pub fn file_size(path: &Path) -> Result<Size> {
    let meta = fs::metadata(path).map_err(|source| Error::FileStat {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Size::from(meta.len()))
}
