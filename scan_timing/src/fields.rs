/*
 Identity of every labeled field on the timing form, with its display label,
 hover tip, and the text parsers the form edits go through.
*/

use crate::error::FieldError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Readout,
    Motion,
    Align,
    Scans,
    Points,
    Exposure,
    Accumulations,
    Repetitions,
    ScanTime,
    RowTime,
    OverallTime,
}

impl FieldId {
    pub const OVERHEADS: [FieldId; 3] = [FieldId::Readout, FieldId::Motion, FieldId::Align];

    /// Column order of the scan row grid.
    pub const ROW_COLUMNS: [FieldId; 7] = [
        FieldId::Scans,
        FieldId::Points,
        FieldId::Exposure,
        FieldId::Accumulations,
        FieldId::Repetitions,
        FieldId::ScanTime,
        FieldId::RowTime,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            FieldId::Readout => "readout",
            FieldId::Motion => "motion",
            FieldId::Align => "align",
            FieldId::Scans => "scans",
            FieldId::Points => "pts",
            FieldId::Exposure => "exp",
            FieldId::Accumulations => "acc",
            FieldId::Repetitions => "rep",
            FieldId::ScanTime => "tscan",
            FieldId::RowTime => "trow",
            FieldId::OverallTime => "ttot",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Readout => "Readout",
            FieldId::Motion => "Motion",
            FieldId::Align => "Alignment",
            FieldId::Scans => "Scans",
            FieldId::Points => "Points",
            FieldId::Exposure => "Exp.",
            FieldId::Accumulations => "Accum.",
            FieldId::Repetitions => "Repeat",
            FieldId::ScanTime => "Scan time",
            FieldId::RowTime => "Total time",
            FieldId::OverallTime => "Overall time",
        }
    }

    pub fn tip(&self) -> &'static str {
        match self {
            FieldId::Readout => "Time spent reading out each frame",
            FieldId::Motion => "Time spent moving motors from one scan position to the next",
            FieldId::Align => "Time spent realigning before each scan repetition",
            FieldId::Scans => "Number of scans to be performed with these parameters",
            FieldId::Points => "Number of points to be measured for each scan",
            FieldId::Exposure => "Exposure time (seconds)",
            FieldId::Accumulations => "Number of exposures accumulated at each scan point",
            FieldId::Repetitions => "Number of times each scan will be repeated",
            FieldId::ScanTime => "Time that will be spent on each scan",
            FieldId::RowTime => "Total time to complete all scans in this row",
            FieldId::OverallTime => "Total time to complete all scans in all rows",
        }
    }

    pub fn is_editable(&self) -> bool {
        !matches!(self, FieldId::ScanTime | FieldId::RowTime | FieldId::OverallTime)
    }
}

/// Parse a non-negative count. Decimal text is truncated toward zero, so
/// `"9.0"` and `"9.7"` both count as 9.
pub fn parse_count(field: FieldId, text: &str) -> Result<u32, FieldError> {
    let t = text.trim();
    if let Ok(n) = t.parse::<u32>() {
        return Ok(n);
    }
    match t.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 && n < u32::MAX as f64 + 1.0 => Ok(n.trunc() as u32),
        _ => Err(FieldError {
            field,
            text: text.to_string(),
            expected: "non-negative count",
        }),
    }
}

/// Parse a non-negative, finite number of seconds.
pub fn parse_seconds(field: FieldId, text: &str) -> Result<f64, FieldError> {
    match text.trim().parse::<f64>() {
        Ok(s) if s.is_finite() && s >= 0.0 => Ok(s),
        _ => Err(FieldError {
            field,
            text: text.to_string(),
            expected: "non-negative number of seconds",
        }),
    }
}
