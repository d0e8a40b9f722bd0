use crate::app::error::BundleError;
use crate::app::models::{FileEntry, RunStats};
use chrono::{DateTime, Local};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

const SEPARATOR: &str = "==========";
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Trims every line and collapses runs of blank lines into one.
pub fn shrink(content: &str) -> String {
    let mut lines = Vec::new();
    let mut last_was_empty = false;

    for line in content.split('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !last_was_empty {
                lines.push(trimmed);
                last_was_empty = true;
            }
        } else {
            lines.push(trimmed);
            last_was_empty = false;
        }
    }

    lines.join("\n")
}

/// Writes file blocks into a bundle and keeps the run counters.
pub struct BundleWriter<W: Write> {
    out: W,
    target: PathBuf,
    description: Option<String>,
    shrink: bool,
    verbose: bool,
    stats: RunStats,
}

impl<W: Write> BundleWriter<W> {
    pub fn new(out: W, target: impl Into<PathBuf>, description: Option<String>) -> Self {
        Self {
            out,
            target: target.into(),
            description: description.filter(|d| !d.is_empty()),
            shrink: false,
            verbose: false,
            stats: RunStats::since(Instant::now()),
        }
    }

    pub fn shrink(mut self, shrink: bool) -> Self {
        self.shrink = shrink;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Measures elapsed time from `started` instead of from construction.
    pub fn started_at(mut self, started: Instant) -> Self {
        self.stats = RunStats::since(started);
        self
    }

    /// Reads one resolved file and appends its block. A read failure is fatal.
    pub fn write_entry(&mut self, entry: &FileEntry) -> Result<(), BundleError> {
        let raw = fs::read(&entry.path).map_err(|e| BundleError::ReadFile(entry.path.clone(), e))?;
        let text = String::from_utf8_lossy(&raw);

        self.write_block(&entry.relative_path, &text, Local::now())?;

        if self.verbose {
            println!("Visited: {}", entry.relative_path.display());
        }
        Ok(())
    }

    fn write_block(
        &mut self,
        path: &Path,
        content: &str,
        time: DateTime<Local>,
    ) -> Result<(), BundleError> {
        let content = if self.shrink {
            shrink(content)
        } else {
            content.to_string()
        };
        self.stats.record(&content);

        let mut block = format!("{}\n", SEPARATOR);
        if let Some(description) = &self.description {
            block.push_str(&format!("!! {}\n", description));
        }
        block.push_str(&format!("File: {}\n", path.display()));
        block.push_str(&format!("Time: {}\n", time.format(TIME_FORMAT)));
        block.push_str(&format!("{}\n", SEPARATOR));

        block.push_str(&content);
        block.push('\n');

        self.out
            .write_all(block.as_bytes())
            .map_err(|e| BundleError::Write(self.target.clone(), e))
    }

    /// Flushes the underlying writer and hands back the counters.
    pub fn finish(mut self) -> Result<RunStats, BundleError> {
        self.out
            .flush()
            .map_err(|e| BundleError::Write(self.target.clone(), e))?;
        Ok(self.stats)
    }
}
