use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Extension every config file carries.
pub const CONFIG_EXT: &str = ".file_bundle_rc";

/// Output file used when neither the config nor `-o` names one.
pub const DEFAULT_OUTPUT: &str = "bundle.bundle";

/// Contents of a `*.file_bundle_rc` file, after CLI overrides are applied.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct BundleConfig {
    pub entry: Vec<String>,
    pub exclude: Vec<String>,
    pub output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl BundleConfig {
    /// The starter config written by `--touch`.
    pub fn starter() -> Self {
        Self {
            entry: vec!["./*".to_string()],
            exclude: vec![".bundle".to_string()],
            output: DEFAULT_OUTPUT.to_string(),
            description: None,
        }
    }
}

/// A file that survived pattern resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub relative_path: PathBuf,
}

/// Counters accumulated while the bundle is written.
#[derive(Debug, Clone)]
pub struct RunStats {
    pub files: usize,
    pub lines: usize,
    pub chars: usize,
    started: Instant,
}

impl RunStats {
    /// Fresh counters whose clock began at `started`.
    pub fn since(started: Instant) -> Self {
        Self {
            files: 0,
            lines: 0,
            chars: 0,
            started,
        }
    }

    /// Accounts for one file whose (possibly shrunk) content was written.
    pub fn record(&mut self, content: &str) {
        self.files += 1;
        self.lines += content.split('\n').count();
        self.chars += content.len();
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_counts_newline_segments_and_bytes() {
        let mut stats = RunStats::since(Instant::now());
        stats.record("a\nb\n");
        stats.record("xyz");

        assert_eq!(stats.files, 2);
        assert_eq!(stats.lines, 4);
        assert_eq!(stats.chars, 7);
    }

    #[test]
    fn elapsed_counts_from_the_given_start() {
        let started = Instant::now() - Duration::from_millis(250);
        let stats = RunStats::since(started);
        assert!(stats.elapsed() >= Duration::from_millis(250));
    }

    #[test]
    fn empty_content_still_counts_one_line() {
        let mut stats = RunStats::since(Instant::now());
        stats.record("");
        assert_eq!(stats.lines, 1);
        assert_eq!(stats.chars, 0);
    }
}
