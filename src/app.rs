// Declare modules
pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod models;
pub mod report;
pub mod scaffold;
pub mod scanner;

use anyhow::{Context, Result};
use std::env;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;
use std::time::Instant;

use self::cli::Cli;
use self::config::resolve_config;
use self::error::BundleError;
use self::formatter::BundleWriter;
use self::scanner::Scanner;

/// Writes the starter config (and optional Makefile) instead of bundling.
fn run_touch(args: &Cli, current_dir: &Path) -> Result<()> {
    let written = scaffold::touch(current_dir, args.dir.as_deref(), args.force)?;
    for path in written {
        let shown = path.strip_prefix(current_dir).unwrap_or(&path);
        println!("{} created successfully.", shown.display());
    }
    Ok(())
}

/// Locates the config, resolves the patterns and writes the bundle.
/// `started` is when the process began; the verbose summary reports time since then.
pub fn run(args: Cli, started: Instant) -> Result<()> {
    let current_dir = env::current_dir().context("Failed to get current directory")?;

    if args.touch {
        return run_touch(&args, &current_dir);
    }

    let config = resolve_config(&args, &current_dir)?;

    if config.entry.is_empty() {
        log::warn!("💡 Tip: No entry patterns configured, the bundle will be empty.");
    }

    // The bundle is created before patterns are expanded and stays open for the whole run.
    let output_path = current_dir.join(&config.output);
    let file = File::create(&output_path)
        .map_err(|e| BundleError::CreateOutput(output_path.clone(), e))?;
    let mut writer = BundleWriter::new(
        BufWriter::new(file),
        output_path.clone(),
        config.description.clone(),
    )
    .shrink(args.shrink)
    .verbose(args.verbose)
    .started_at(started);

    let scanner = Scanner::new(current_dir, &config);
    for entry in scanner.scan() {
        writer.write_entry(&entry)?;
    }
    let stats = writer.finish()?;

    report::write_summary(&mut io::stdout().lock(), &config.output, &stats, args.verbose)
        .context("Failed to print summary")?;

    Ok(())
}
