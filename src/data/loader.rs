use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::SeriesData;
use super::neighbourhood::{self, ParseOptions, ParseReport};
use super::series;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a series file (`x y1 y2 ...` per line).
pub fn load_series(path: &Path) -> Result<SeriesData> {
    let reader = open(path)?;
    let data = series::parse_series(reader)
        .with_context(|| format!("parsing series file {}", path.display()))?;
    log::info!(
        "loaded {} records ({} y columns) from {}",
        data.len(),
        data.max_width(),
        path.display()
    );
    Ok(data)
}

/// Load a neighbourhood coordinate file.
pub fn load_neighbourhoods(path: &Path, options: &ParseOptions) -> Result<ParseReport> {
    let reader = open(path)?;
    let report = neighbourhood::parse_neighbourhoods(reader, options)
        .with_context(|| format!("parsing neighbourhood file {}", path.display()))?;
    log::info!(
        "loaded {} neighbourhoods from {}",
        report.neighbourhoods.len(),
        path.display()
    );
    Ok(report)
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    Ok(BufReader::new(file))
}
