//! JSON output formatting

use std::io::{self, Write};

use crate::tree::TreeNode;

/// Write tree node as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(out: &mut W, node: &TreeNode) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, node).map_err(io::Error::other)?;
    writeln!(out)
}
