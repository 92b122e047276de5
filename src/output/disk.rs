//! Filesystem usage report for the volume holding a path

use std::io::{self, Write};
use std::path::Path;

use nix::sys::statvfs::statvfs;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::error::{Error, Result};
use crate::size::Size;

/// Capacity figures for one filesystem, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskUsage {
    pub total: u64,
    pub free: u64,
    /// Free space usable by unprivileged users.
    pub available: u64,
    pub used: u64,
}

impl DiskUsage {
    /// Read filesystem statistics for the volume containing `path`.
    pub fn for_path(path: &Path) -> Result<Self> {
        let stat = statvfs(path).map_err(|source| Error::DiskStats {
            path: path.to_path_buf(),
            source,
        })?;

        let fragment = stat.fragment_size() as u64;
        Ok(Self::from_blocks(
            stat.blocks() as u64,
            stat.blocks_free() as u64,
            stat.blocks_available() as u64,
            fragment,
        ))
    }

    pub fn from_blocks(blocks: u64, free: u64, available: u64, block_size: u64) -> Self {
        let total = blocks.saturating_mul(block_size);
        let free = free.saturating_mul(block_size);
        Self {
            total,
            free,
            available: available.saturating_mul(block_size),
            used: total.saturating_sub(free),
        }
    }

    /// `part` as a percentage of the total, 0 for an empty filesystem.
    pub fn percent_of_total(&self, part: u64) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            part as f64 / self.total as f64 * 100.0
        }
    }
}

/// Write the four-line usage summary.
pub fn write_disk_usage<W: WriteColor>(usage: &DiskUsage, out: &mut W) -> io::Result<()> {
    write!(out, "Size:      ")?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
    write!(out, "{}", Size::from(usage.total))?;
    out.reset()?;
    writeln!(out)?;

    let rows = [
        ("Free:      ", usage.free, Color::Green),
        ("Available: ", usage.available, Color::Green),
        ("Used:      ", usage.used, Color::Red),
    ];
    for (label, bytes, color) in rows {
        write!(out, "{}", label)?;
        out.set_color(ColorSpec::new().set_fg(Some(color)))?;
        write!(out, "{}", Size::from(bytes))?;
        out.reset()?;
        writeln!(out, " - {:.2}%", usage.percent_of_total(bytes))?;
    }
    Ok(())
}

/// Print the usage summary to stdout.
pub fn print_disk_usage(usage: &DiskUsage, use_color: bool) -> io::Result<()> {
    let choice = if use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    write_disk_usage(usage, &mut stdout)?;
    stdout.flush()
}
