//! OBJ line classifier.
//!
//! Each line is one record, classified by its first token:
//! - `v x y z ...` — vertex position
//! - `vn x y z ...` — vertex normal
//! - `vt ...` — texture coordinate (ignored)
//! - anything else — ignored
//!
//! Fields are split on a single space, so doubled spaces produce empty
//! fields. Those fail numeric parsing like any other bad token and the
//! record is reported as malformed rather than aborting the load.

use std::fmt;

use caustic_math::{Point3, Vec3};

/// Record kinds this loader consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordTag {
    /// `v` position record.
    Position,
    /// `vn` normal record.
    Normal,
}

impl RecordTag {
    fn keyword(self) -> &'static str {
        match self {
            RecordTag::Position => "v",
            RecordTag::Normal => "vn",
        }
    }
}

/// Why a `v` or `vn` record was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum MalformedReason {
    /// Fewer than three fields after the keyword.
    TooFewFields(usize),
    /// A required field is not a finite real number.
    BadNumber {
        /// Zero-based field index after the keyword.
        field: usize,
        /// Offending text (empty for doubled delimiters).
        text: String,
    },
}

/// A position or normal record that could not be used.
#[derive(Debug, Clone, PartialEq)]
pub struct Malformed {
    /// Record kind the line claimed to be.
    pub tag: RecordTag,
    /// What was wrong with it.
    pub reason: MalformedReason,
}

impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kw = self.tag.keyword();
        match &self.reason {
            MalformedReason::TooFewFields(n) => {
                write!(f, "`{kw}` record has {n} fields, need 3")
            }
            MalformedReason::BadNumber { field, text } => {
                write!(f, "`{kw}` record field {field} is not a number: {text:?}")
            }
        }
    }
}

/// A classified line.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    /// Vertex position.
    Position(Point3),
    /// Vertex normal.
    Normal(Vec3),
    /// Texture coordinate; recognized and dropped.
    TexCoord,
    /// Position or normal record that failed validation.
    Malformed(Malformed),
    /// Blank line, comment, face, group or any other record type.
    Other,
}

/// Classify a single line.
pub fn classify_line(line: &str) -> Record {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let mut fields = line.split(' ');
    let tag = match fields.next() {
        Some("v") => RecordTag::Position,
        Some("vn") => RecordTag::Normal,
        Some("vt") => return Record::TexCoord,
        _ => return Record::Other,
    };

    let fields: Vec<&str> = fields.collect();
    match parse_triple(&fields) {
        Ok([x, y, z]) => match tag {
            RecordTag::Position => Record::Position(Point3::new(x, y, z)),
            RecordTag::Normal => Record::Normal(Vec3::new(x, y, z)),
        },
        Err(reason) => Record::Malformed(Malformed { tag, reason }),
    }
}

/// Parse the first three fields as finite reals. Extra fields are ignored.
fn parse_triple(fields: &[&str]) -> Result<[f64; 3], MalformedReason> {
    if fields.len() < 3 {
        return Err(MalformedReason::TooFewFields(fields.len()));
    }
    let mut out = [0.0; 3];
    for (i, text) in fields.iter().take(3).enumerate() {
        out[i] = text
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| MalformedReason::BadNumber {
                field: i,
                text: (*text).to_string(),
            })?;
    }
    Ok(out)
}
