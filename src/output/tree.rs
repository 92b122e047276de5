//! Tree formatter for walked item trees
//!
//! This module provides `TreeRenderer` which writes an `Item` tree as
//! indented, size-annotated lines, either colored to stdout or as plain text.
//!
//! Line grammar (non-root lines):
//!
//! ```text
//! {"│ " x depth}{"└-" | "│-"}{glyph}{name} [{size}]
//! ```

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

use crate::size::Size;
use crate::tree::{Item, ItemType};

use super::config::RenderConfig;

const DIR_GLYPH: &str = "📁";
const FILE_GLYPH: &str = "📄";
const INDENT: &str = "│ ";
const BRANCH: &str = "│-";
const LAST_BRANCH: &str = "└-";

/// Formatter for walked trees.
pub struct TreeRenderer {
    config: RenderConfig,
}

impl TreeRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render the tree as plain text.
    pub fn format(&self, root: &Item) -> io::Result<String> {
        let mut out = NoColor::new(Vec::new());
        self.render(root, &mut out)?;
        Ok(String::from_utf8_lossy(&out.into_inner()).into_owned())
    }

    /// Print the tree to stdout.
    pub fn print(&self, root: &Item) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.render(root, &mut stdout)?;
        stdout.flush()
    }

    /// Write the tree to any color-capable writer.
    pub fn render<W: WriteColor>(&self, root: &Item, out: &mut W) -> io::Result<()> {
        self.render_node(root, out, 0)
    }

    fn render_node<W: WriteColor>(
        &self,
        item: &Item,
        out: &mut W,
        current_depth: usize,
    ) -> io::Result<()> {
        if item.root {
            self.write_root(out, item)?;
        }

        // Non-recursive mode shows exactly one level below the root.
        if (!self.config.recursive && current_depth > 0) || !self.config.within_depth(current_depth)
        {
            return Ok(());
        }

        let count = item.children.len();
        for (i, child) in item.children.iter().enumerate() {
            let is_last = i == count - 1;
            let shown = self.config.passes_threshold(child.size_or_zero())
                && self.config.within_depth(current_depth);

            match child.item_type {
                ItemType::Directory => {
                    if shown {
                        self.write_child(out, child, current_depth, is_last)?;
                    }
                    // A directory hidden by the threshold is still descended,
                    // so large entries inside it can show up.
                    self.render_node(child, out, current_depth + 1)?;
                }
                ItemType::File => {
                    if shown && !self.config.dirs_only {
                        self.write_child(out, child, current_depth, is_last)?;
                    }
                }
            }
        }

        Ok(())
    }

    fn write_root<W: WriteColor>(&self, out: &mut W, item: &Item) -> io::Result<()> {
        write!(out, "{}", DIR_GLYPH)?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
        write!(out, "{}", item.name)?;
        out.reset()?;
        self.write_size(out, item.size_or_zero())
    }

    fn write_child<W: WriteColor>(
        &self,
        out: &mut W,
        item: &Item,
        current_depth: usize,
        is_last: bool,
    ) -> io::Result<()> {
        let connector = if is_last { LAST_BRANCH } else { BRANCH };
        write!(out, "{}{}", INDENT.repeat(current_depth), connector)?;

        let (glyph, color) = match item.item_type {
            ItemType::Directory => (DIR_GLYPH, ColorSpec::new().set_fg(Some(Color::Green)).clone()),
            ItemType::File => (FILE_GLYPH, ColorSpec::new().set_fg(Some(Color::Blue)).clone()),
        };
        write!(out, "{}", glyph)?;
        out.set_color(&color)?;
        write!(out, "{}", item.name)?;
        out.reset()?;
        self.write_size(out, item.size_or_zero())
    }

    fn write_size<W: WriteColor>(&self, out: &mut W, size: Size) -> io::Result<()> {
        write!(out, " [")?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        write!(out, "{}", size)?;
        out.reset()?;
        writeln!(out, "]")
    }
}
