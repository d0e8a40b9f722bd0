use crate::app::models::{BundleConfig, FileEntry};
use glob::{MatchOptions, Pattern, PatternError};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

// `*` stays inside one path segment, `**` crosses them, dotfiles match.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

pub struct Scanner {
    root: PathBuf,
    entry: Vec<String>,
    excluded: HashSet<PathBuf>,
    bundle: PathBuf,
}

impl Scanner {
    /// Expands the exclude patterns up front; entry patterns are expanded by `scan`.
    pub fn new(root: PathBuf, config: &BundleConfig) -> Self {
        let mut excluded = HashSet::new();
        for pattern in &config.exclude {
            match expand(&root, pattern) {
                Ok(matches) => excluded.extend(matches),
                Err(err) => log::warn!("Invalid pattern in exclude: {} ({})", pattern, err),
            }
        }

        let bundle = relative_to(&root, root.join(&config.output));

        Self {
            root,
            entry: config.entry.clone(),
            excluded,
            bundle,
        }
    }

    /// Files matched by the entry patterns, minus exclusions and directories,
    /// in pattern order then match order. Each file appears once, at its first match.
    pub fn scan(&self) -> Vec<FileEntry> {
        let mut visited = HashSet::new();
        let mut entries = Vec::new();

        for pattern in &self.entry {
            let matches = match expand(&self.root, pattern) {
                Ok(matches) => matches,
                Err(err) => {
                    log::warn!("Invalid pattern in entry: {} ({})", pattern, err);
                    continue;
                }
            };

            for relative in matches {
                if let Some(entry) = self.process_match(relative, &visited) {
                    visited.insert(entry.relative_path.clone());
                    entries.push(entry);
                }
            }
        }

        entries
    }

    fn process_match(&self, relative: PathBuf, visited: &HashSet<PathBuf>) -> Option<FileEntry> {
        if visited.contains(&relative) || self.excluded.contains(&relative) {
            return None;
        }

        if relative == self.bundle {
            log::debug!("Skipping the bundle itself: {}", relative.display());
            return None;
        }

        let path = self.root.join(&relative);
        match fs::metadata(&path) {
            Ok(meta) if meta.is_dir() => None,
            Ok(_) => Some(FileEntry {
                path,
                relative_path: relative,
            }),
            Err(err) => {
                log::warn!("Error accessing the path {}: {}", relative.display(), err);
                None
            }
        }
    }
}

/// Expands `pattern` against `root`, yielding paths relative to `root`.
fn expand(root: &Path, pattern: &str) -> Result<Vec<PathBuf>, PatternError> {
    let escaped_root = Pattern::escape(&root.to_string_lossy());
    let anchored = Path::new(&escaped_root).join(pattern);

    let mut matches = Vec::new();
    for result in glob::glob_with(&anchored.to_string_lossy(), MATCH_OPTIONS)? {
        match result {
            Ok(path) => matches.push(relative_to(root, path)),
            Err(err) => log::warn!(
                "Error accessing the path {}: {}",
                err.path().display(),
                err.error()
            ),
        }
    }
    Ok(matches)
}

fn relative_to(root: &Path, path: PathBuf) -> PathBuf {
    match path.strip_prefix(root) {
        Ok(relative) => relative.to_path_buf(),
        Err(_) => path,
    }
}
