//! Indented tree rendering
//!
//! `TreeRenderer` flattens a `TreeNode` into one line per entry in
//! pre-order. Each level is indented by `INDENT_UNIT` and directory names
//! carry a trailing `/`.

use std::fmt;
use std::io;

use termcolor::{Color, ColorSpec, WriteColor};

use crate::tree::TreeNode;

/// Indentation added per tree level.
pub const INDENT_UNIT: &str = "  ";

/// One rendered entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    pub depth: usize,
    pub name: String,
    pub is_dir: bool,
}

impl TreeLine {
    fn indent(&self) -> String {
        INDENT_UNIT.repeat(self.depth)
    }

    fn suffix(&self) -> &'static str {
        if self.is_dir && !self.name.ends_with('/') {
            "/"
        } else {
            ""
        }
    }

    /// Write the line with the directory name in color.
    pub fn write_colored<W: WriteColor>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self.indent())?;
        if self.is_dir {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            write!(out, "{}{}", self.name, self.suffix())?;
            out.reset()?;
        } else {
            write!(out, "{}", self.name)?;
        }
        writeln!(out)
    }
}

impl fmt::Display for TreeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.indent(), self.name, self.suffix())
    }
}

pub struct TreeRenderer;

impl TreeRenderer {
    /// Render `root` as text lines, with `root_label` as the unindented
    /// first line.
    pub fn render(root: &TreeNode, root_label: &str) -> Vec<String> {
        Self::lines(root, root_label)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    pub fn render_to_string(root: &TreeNode, root_label: &str) -> String {
        Self::render(root, root_label).join("\n")
    }

    /// Structured form of `render`.
    pub fn lines(root: &TreeNode, root_label: &str) -> Vec<TreeLine> {
        let mut lines = vec![TreeLine {
            depth: 0,
            name: root_label.to_string(),
            is_dir: true,
        }];
        for child in root.children() {
            push_lines(child, 1, &mut lines);
        }
        lines
    }
}

fn push_lines(node: &TreeNode, depth: usize, lines: &mut Vec<TreeLine>) {
    lines.push(TreeLine {
        depth,
        name: node.name().to_string(),
        is_dir: node.is_dir(),
    });
    for child in node.children() {
        push_lines(child, depth + 1, lines);
    }
}

/// Convenience wrapper for `TreeRenderer::render`.
pub fn render(root: &TreeNode, root_label: &str) -> Vec<String> {
    TreeRenderer::render(root, root_label)
}
