//! Project title detection
//!
//! The title shown in the document header is taken from the first source
//! that yields one:
//!
//! 1. the `origin` git remote URL (or the first remote)
//! 2. `[project].name` in `pyproject.toml`
//! 3. a `# Heading` on the first line of the README
//! 4. the directory name

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use git2::Repository;
use regex::Regex;
use serde::Deserialize;

use crate::tree::root_name;

static README_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^README(\.\w+)?$").expect("README_NAME regex is invalid")
});

#[derive(Debug, Deserialize)]
struct PyProject {
    project: Option<ProjectTable>,
}

#[derive(Debug, Deserialize)]
struct ProjectTable {
    name: Option<String>,
}

/// Detect a human-readable title for the project at `root`.
pub fn project_title(root: &Path) -> String {
    git_repo_name(root)
        .or_else(|| pyproject_name(root))
        .or_else(|| readme_heading(root))
        .unwrap_or_else(|| root_name(root))
}

/// Repository name from the remote URL of a repository rooted at `root`.
///
/// Parent directories are not searched.
pub fn git_repo_name(root: &Path) -> Option<String> {
    let repo = Repository::open(root).ok()?;
    let remote = match repo.find_remote("origin") {
        Ok(remote) => remote,
        Err(_) => {
            let names = repo.remotes().ok()?;
            let first = names.iter().flatten().next()?.to_string();
            repo.find_remote(&first).ok()?
        }
    };
    remote.url().and_then(repo_name_from_url)
}

/// Last path segment of a remote URL without the `.git` suffix.
pub fn repo_name_from_url(url: &str) -> Option<String> {
    let last = url
        .trim()
        .trim_end_matches('/')
        .rsplit(['/', ':'])
        .next()?;
    let name = last.strip_suffix(".git").unwrap_or(last);
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

fn pyproject_name(root: &Path) -> Option<String> {
    let path = root.join("pyproject.toml");
    let content = fs::read_to_string(&path).ok()?;
    match toml::from_str::<PyProject>(&content) {
        Ok(pyproject) => pyproject.project?.name,
        Err(e) => {
            log::warn!("could not parse {}: {}", path.display(), e);
            None
        }
    }
}

fn readme_heading(root: &Path) -> Option<String> {
    let mut readmes: Vec<String> = fs::read_dir(root)
        .ok()?
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| README_NAME.is_match(name))
        .collect();
    readmes.sort();

    let file = File::open(root.join(readmes.first()?)).ok()?;
    let mut first_line = String::new();
    BufReader::new(file).read_line(&mut first_line).ok()?;

    let heading = first_line.trim().strip_prefix("# ")?.trim();
    if heading.is_empty() {
        None
    } else {
        Some(heading.to_string())
    }
}
