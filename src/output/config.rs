//! Output configuration types

/// Shape of the emitted document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Project header, `<filetree>` block and included-pattern footer.
    #[default]
    Context,
    /// The rendered tree lines only.
    Plain,
    /// The node tree as pretty-printed JSON.
    Json,
}

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Colorize directory names. Only takes effect on color-capable writers.
    pub use_color: bool,
}
