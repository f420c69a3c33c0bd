//! Directory scan and report formatting
//!
//! Walks the target directory (non-recursively), runs the padding analyzer
//! over every PNG/ICO file in sorted order, and writes one block per file to
//! the output sink. A file that fails to decode gets an inline error block
//! and the remaining files are still processed.

use anyhow::{Context, Result};
use image::Rgba;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::analyzer::{analyze_image, PaddingAnalysis};
use crate::utils::IconCheckError;

/// Recognized icon file suffixes
const ICON_SUFFIXES: [&str; 2] = [".png", ".ico"];

/// Width of the report's separator rule
const SEPARATOR_WIDTH: usize = 50;

/// Report record for one successfully analyzed file
#[derive(Debug, Clone)]
pub struct PaddingResult {
    /// File name without its directory part
    pub file: String,
    pub analysis: PaddingAnalysis,
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// List the icon files in `dir`, sorted by file name.
///
/// Matches on the name suffix, the same way packaging scripts pick up icon
/// assets. Everything else in the directory is ignored.
pub fn collect_icon_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in
        fs::read_dir(dir).with_context(|| format!("Failed to list directory {}", dir.display()))?
    {
        let entry = entry.context("Failed to read directory entry")?;
        let name = entry.file_name().to_string_lossy().to_string();
        if ICON_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) {
            files.push(entry.path());
        }
    }

    files.sort_by_key(|path| path.file_name().map(|n| n.to_owned()));
    Ok(files)
}

/// Decode one icon file and measure its padding.
///
/// The source is converted to RGBA8 before analysis, so palette and
/// grayscale images are handled the same as true-color ones. For ICO
/// containers the decoder picks the best-resolution entry.
pub fn check_file(path: &Path) -> Result<PaddingResult, IconCheckError> {
    debug!(file = %path.display(), "decoding");

    let img = image::open(path)?.to_rgba8();
    let analysis = analyze_image(&img);

    Ok(PaddingResult {
        file: display_name(path),
        analysis,
    })
}

/// Run the full report over `dir`, writing to `out`.
///
/// Per-file failures are contained: the offending file gets an error block
/// and processing moves on. Only a failure to list the directory itself
/// aborts the run.
pub fn write_report<W: Write>(out: &mut W, dir: &Path) -> Result<()> {
    let files = collect_icon_files(dir)?;
    debug!(count = files.len(), "icon files found");

    writeln!(out, "\nIcon padding report:")?;
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;

    for path in &files {
        match check_file(path) {
            Ok(result) => write_file_block(out, &result)?,
            Err(e) => {
                writeln!(out, "\nFile: {}", display_name(path))?;
                writeln!(out, "❌ error: {}", e)?;
            }
        }
    }

    writeln!(out, "\n{}", "-".repeat(SEPARATOR_WIDTH))?;
    Ok(())
}

fn write_file_block<W: Write>(out: &mut W, result: &PaddingResult) -> Result<()> {
    let analysis = &result.analysis;
    let padding = &analysis.padding;

    writeln!(out, "\nFile: {}", result.file)?;
    writeln!(out, "Size: {}x{}", analysis.width, analysis.height)?;
    writeln!(out, "Padding pixels:")?;
    writeln!(out, "  top: {} bottom: {}", padding.top, padding.bottom)?;
    writeln!(out, "  left: {} right: {}", padding.left, padding.right)?;

    writeln!(out, "Corner pixel colors (R,G,B,A):")?;
    for (corner, color) in &analysis.corners {
        let Rgba([r, g, b, a]) = *color;
        writeln!(out, "  {}: ({}, {}, {}, {})", corner.label(), r, g, b, a)?;
    }

    if analysis.has_white_corners {
        writeln!(out, "⚠️  white corners detected!")?;
    }

    if padding.total() > 0 {
        writeln!(out, "⚠️  padding detected!")?;
    } else {
        writeln!(out, "✅ no padding")?;
    }

    Ok(())
}
