use crate::app::models::RunStats;
use std::io::{self, Write};

/// Prints the end-of-run summary; counters only in verbose mode.
pub fn write_summary<W: Write>(
    out: &mut W,
    output: &str,
    stats: &RunStats,
    verbose: bool,
) -> io::Result<()> {
    writeln!(out, "=== Bundle ({}) created successfully", output)?;
    if verbose {
        writeln!(out, " - Execution Time: {:?}", stats.elapsed())?;
        writeln!(out, " - Total Files: {}", stats.files)?;
        writeln!(out, " - Total Lines: {}", stats.lines)?;
        writeln!(out, " - Total Characters: {}", stats.chars)?;
        writeln!(out, "==================================")?;
    }
    Ok(())
}
