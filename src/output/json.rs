//! JSON output formatting

use std::io::{self, Write};

use crate::error::Result;
use crate::tree::Item;

/// Write the complete item tree as pretty-printed JSON.
pub fn write_json<W: Write>(root: &Item, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, root)?;
    writeln!(out)?;
    Ok(())
}

/// Print the complete item tree as pretty-printed JSON to stdout.
pub fn print_json(root: &Item) -> Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_json(root, &mut lock)
}
