//! Configuration types for tree walking

use glob::Pattern;

use crate::error::PatternError;

use super::filter::compile_pattern;

/// Include/exclude patterns and depth bound for one traversal.
///
/// Built once per invocation and never mutated; the walker borrows it for
/// the whole traversal.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    include: Vec<Pattern>,
    exclude: Vec<Pattern>,
    max_depth: Option<usize>,
}

impl FilterConfig {
    /// Compile include and exclude patterns.
    ///
    /// Fails on the first pattern that does not compile, before any
    /// filesystem access happens.
    pub fn new<I, E>(include: I, exclude: E, max_depth: Option<usize>) -> Result<Self, PatternError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        Ok(Self {
            include: compile_all(include)?,
            exclude: compile_all(exclude)?,
            max_depth,
        })
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn include(&self) -> &[Pattern] {
        &self.include
    }

    pub fn exclude(&self) -> &[Pattern] {
        &self.exclude
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Check if entries at `depth` are listed but not descended into.
    pub fn at_max_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth >= max)
    }
}

fn compile_all<P>(patterns: P) -> Result<Vec<Pattern>, PatternError>
where
    P: IntoIterator,
    P::Item: AsRef<str>,
{
    patterns
        .into_iter()
        .map(|p| compile_pattern(p.as_ref()))
        .collect()
}
