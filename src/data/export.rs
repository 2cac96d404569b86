use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use super::model::NeighbourhoodMap;

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

/// Write any parsed structure as pretty-printed JSON.
pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let mut writer = create(path)?;
    serde_json::to_writer_pretty(&mut writer, value)
        .context("serialising JSON")?;
    writer.flush().context("flushing JSON output")?;
    log::info!("wrote {}", path.display());
    Ok(())
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

/// One outline vertex per CSV row.
#[derive(Debug, Serialize)]
struct VertexRow<'a> {
    name: &'a str,
    index: Option<usize>,
    vertex: usize,
    x: f64,
    y: f64,
}

/// Flatten neighbourhoods into `name,index,vertex,x,y` rows, in
/// declaration order. Entries with no coordinates produce no rows.
pub fn write_neighbourhoods_csv<W: Write>(map: &NeighbourhoodMap, writer: W) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    for (name, entry) in map.iter() {
        for (vertex, c) in entry.coordinates.iter().enumerate() {
            let row = VertexRow {
                name,
                index: entry.index,
                vertex,
                x: c.x,
                y: c.y,
            };
            out.serialize(row).context("writing CSV row")?;
        }
    }
    out.flush().context("flushing CSV output")?;
    Ok(())
}

pub fn write_neighbourhoods_csv_file(map: &NeighbourhoodMap, path: &Path) -> Result<()> {
    write_neighbourhoods_csv(map, create(path)?)?;
    log::info!("wrote {}", path.display());
    Ok(())
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    Ok(BufWriter::new(file))
}
