//! Directory tree model and walking logic
//!
//! `TreeWalker` materializes the whole subtree as `Item`s before anything is
//! rendered, so every directory carries the full aggregated size of its
//! descendants regardless of what is later displayed.

mod item;
mod walker;

// Re-export public types
pub use item::{Item, ItemType, base_name};
pub use walker::{TreeWalker, WalkStats, file_size, walk};
