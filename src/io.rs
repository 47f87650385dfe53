use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

// ---------------------------------------------------------------------------
// File boundary
// ---------------------------------------------------------------------------

/// Read the whole recording into memory, one raw line per entry.
///
/// The original text is retained alongside the parsed samples because
/// marker rows must be re-emitted byte-for-byte in the output.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    Ok(text.lines().map(str::to_owned).collect())
}

/// Write the smoothed recording. Only called once the pipeline has fully
/// succeeded, so a failed run never leaves a partial output file behind.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let file = fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    for line in lines {
        writeln!(writer, "{line}").with_context(|| format!("writing {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flushing {}", path.display()))
}
