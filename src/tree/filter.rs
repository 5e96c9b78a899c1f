//! Entry visibility rules

use glob::Pattern;

use crate::error::PatternError;

use super::config::FilterConfig;

/// A compiled name pattern.
pub trait Matcher {
    fn matches(&self, name: &str) -> bool;
}

impl Matcher for Pattern {
    fn matches(&self, name: &str) -> bool {
        Pattern::matches(self, name)
    }
}

/// Hidden entries start with a dot and are never shown.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Decide whether an entry appears in the tree.
///
/// Hidden entries are always dropped. Exclude patterns apply to files and
/// directories alike, so an excluded directory takes its subtree with it.
/// Include patterns only ever apply to files.
pub fn is_visible(name: &str, is_dir: bool, config: &FilterConfig) -> bool {
    if is_hidden(name) {
        return false;
    }
    if any_match(config.exclude(), name) {
        return false;
    }
    if is_dir {
        return true;
    }
    config.include().is_empty() || any_match(config.include(), name)
}

fn any_match<M: Matcher>(matchers: &[M], name: &str) -> bool {
    matchers.iter().any(|m| m.matches(name))
}

/// Compile a user pattern.
///
/// A bare extension such as `.py` is shorthand for `*.py`.
pub fn compile_pattern(raw: &str) -> Result<Pattern, PatternError> {
    let expanded = if is_extension_shorthand(raw) {
        format!("*{}", raw)
    } else {
        raw.to_string()
    };
    Pattern::new(&expanded).map_err(|source| PatternError {
        pattern: raw.to_string(),
        source,
    })
}

fn is_extension_shorthand(raw: &str) -> bool {
    raw.len() > 1 && raw.starts_with('.') && !raw.contains(['*', '?', '[', ']'])
}
