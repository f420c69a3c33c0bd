//! Iconcheck - Icon Padding Inspector
//!
//! Scans the PNG and ICO files in the current directory and reports how many
//! fully white-or-transparent rows/columns sit at each edge, plus the raw
//! color values of the four corner pixels. Run it against an icon asset
//! directory before packaging to catch stray padding or opaque corners.

use anyhow::Result;
use clap::Parser;
use iconcheck::report;
use std::io;
use std::path::Path;

#[derive(Parser)]
struct Args {
    /// Enable debug-level log output
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let stdout = io::stdout();
    report::write_report(&mut stdout.lock(), Path::new("."))?;

    Ok(())
}
