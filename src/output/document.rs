//! Document assembly
//!
//! Wraps the rendered tree in the selected output format. The context
//! format looks like:
//!
//! ```text
//! Project: my-app
//!
//! <filetree>
//! my-app/
//!   main.py
//! </filetree>
//!
//! ---
//! Included files:
//!
//! `*.py`
//! ```

use std::io;

use termcolor::{NoColor, WriteColor};

use crate::tree::TreeNode;

use super::config::{OutputConfig, OutputFormat};
use super::json::write_json;
use super::tree::TreeRenderer;

/// Everything that goes into one output document.
#[derive(Debug, Clone, Copy)]
pub struct Document<'a> {
    pub title: &'a str,
    pub root: &'a TreeNode,
    pub root_label: &'a str,
    /// Include patterns as given by the user, listed in the footer.
    pub included: &'a [String],
}

/// Writes a `Document` in the configured format.
pub struct DocumentFormatter {
    config: OutputConfig,
}

impl DocumentFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    pub fn write<W: WriteColor>(&self, out: &mut W, doc: &Document<'_>) -> io::Result<()> {
        match self.config.format {
            OutputFormat::Json => write_json(out, doc.root),
            OutputFormat::Plain => self.write_tree(out, doc),
            OutputFormat::Context => {
                writeln!(out, "Project: {}", doc.title)?;
                writeln!(out)?;
                writeln!(out, "<filetree>")?;
                self.write_tree(out, doc)?;
                writeln!(out, "</filetree>")?;

                if !doc.included.is_empty() {
                    writeln!(out)?;
                    writeln!(out, "---")?;
                    writeln!(out, "Included files:")?;
                    writeln!(out)?;
                    for pattern in doc.included {
                        writeln!(out, "`{}`", pattern)?;
                    }
                }
                Ok(())
            }
        }
    }

    /// Format without color into a string.
    pub fn format(&self, doc: &Document<'_>) -> String {
        let mut out = NoColor::new(Vec::new());
        self.write(&mut out, doc).expect("writing to a Vec cannot fail");
        String::from_utf8_lossy(&out.into_inner()).into_owned()
    }

    fn write_tree<W: WriteColor>(&self, out: &mut W, doc: &Document<'_>) -> io::Result<()> {
        for line in TreeRenderer::lines(doc.root, doc.root_label) {
            if self.config.use_color {
                line.write_colored(out)?;
            } else {
                writeln!(out, "{}", line)?;
            }
        }
        Ok(())
    }
}
