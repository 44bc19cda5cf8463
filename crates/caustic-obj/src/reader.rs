//! OBJ reader: collects positions and normals from a text source.

use std::path::Path;

use log::{debug, info, warn};

use crate::error::ObjError;
use crate::geometry::LensGeometry;
use crate::record::{classify_line, Record};

/// Result of classifying every line of a source.
#[derive(Debug, Clone, Default)]
pub struct ParsedObj {
    /// Accepted positions and normals.
    pub geometry: LensGeometry,
    /// Number of `v`/`vn` records skipped as malformed.
    pub skipped: usize,
    /// Number of `vt` records seen.
    pub tex_coords: usize,
}

/// Read lens geometry from an OBJ file.
///
/// Fails with [`ObjError::SourceUnreadable`] if the file cannot be read and
/// [`ObjError::EmptyGeometry`] if it has no positions or no normals.
pub fn read_obj(path: impl AsRef<Path>) -> Result<LensGeometry, ObjError> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|e| ObjError::unreadable(path, e))?;
    let geometry = read_obj_from_buffer(&data).inspect_err(|e| {
        warn!("{}: {e}", path.display());
    })?;
    info!(
        "loaded {} positions and {} normals from {}",
        geometry.positions.len(),
        geometry.normals.len(),
        path.display()
    );
    Ok(geometry)
}

/// Read lens geometry from raw OBJ bytes.
///
/// Invalid UTF-8 is replaced rather than rejected; the affected lines will
/// simply fail classification.
pub fn read_obj_from_buffer(data: &[u8]) -> Result<LensGeometry, ObjError> {
    let text = String::from_utf8_lossy(data);
    let parsed = parse_records(&text);
    if parsed.geometry.is_empty() {
        return Err(ObjError::EmptyGeometry {
            positions: parsed.geometry.positions.len(),
            normals: parsed.geometry.normals.len(),
        });
    }
    Ok(parsed.geometry)
}

/// Classify every line of `text`, keeping positions and normals in order.
///
/// Never fails: malformed records are skipped and counted.
pub fn parse_records(text: &str) -> ParsedObj {
    let mut parsed = ParsedObj::default();
    for (lineno, line) in text.lines().enumerate() {
        match classify_line(line) {
            Record::Position(p) => parsed.geometry.positions.push(p),
            Record::Normal(n) => parsed.geometry.normals.push(n),
            Record::TexCoord => parsed.tex_coords += 1,
            Record::Malformed(m) => {
                debug!("line {}: skipping {m}", lineno + 1);
                parsed.skipped += 1;
            }
            Record::Other => {}
        }
    }
    if parsed.skipped > 0 {
        debug!("skipped {} malformed records", parsed.skipped);
    }
    parsed
}
