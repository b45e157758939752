use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::fields::{parse_seconds, FieldId};

pub const DEFAULT_READTIME: f64 = 0.01;
pub const DEFAULT_MOVETIME: f64 = 45.0;
pub const DEFAULT_ALIGNTIME: f64 = 45.0;

/// Shared per-scan costs in seconds, applied identically to every row.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Overheads {
    pub readout: f64,
    pub motion: f64,
    pub alignment: f64,
}

impl Default for Overheads {
    fn default() -> Self {
        Self {
            readout: DEFAULT_READTIME,
            motion: DEFAULT_MOVETIME,
            alignment: DEFAULT_ALIGNTIME,
        }
    }
}

impl Overheads {
    pub fn zero() -> Self {
        Self { readout: 0.0, motion: 0.0, alignment: 0.0 }
    }
}

/// The three overhead entries as typed into the form.
#[derive(Clone, Debug, PartialEq)]
pub struct OverheadInputs {
    pub readout: String,
    pub motion: String,
    pub alignment: String,
}

impl OverheadInputs {
    pub fn field_mut(&mut self, field: FieldId) -> Option<&mut String> {
        match field {
            FieldId::Readout => Some(&mut self.readout),
            FieldId::Motion => Some(&mut self.motion),
            FieldId::Align => Some(&mut self.alignment),
            _ => None,
        }
    }

    pub fn field(&self, field: FieldId) -> Option<&str> {
        match field {
            FieldId::Readout => Some(&self.readout),
            FieldId::Motion => Some(&self.motion),
            FieldId::Align => Some(&self.alignment),
            _ => None,
        }
    }

    /// Each malformed entry falls back to zero on its own; the others still apply.
    pub fn resolve(&self) -> Overheads {
        let read = |field: FieldId, text: &str| {
            parse_seconds(field, text).unwrap_or_else(|e| {
                debug!("{}, using 0", e);
                0.0
            })
        };
        Overheads {
            readout: read(FieldId::Readout, &self.readout),
            motion: read(FieldId::Motion, &self.motion),
            alignment: read(FieldId::Align, &self.alignment),
        }
    }
}

impl From<Overheads> for OverheadInputs {
    fn from(o: Overheads) -> Self {
        Self {
            readout: o.readout.to_string(),
            motion: o.motion.to_string(),
            alignment: o.alignment.to_string(),
        }
    }
}

impl Default for OverheadInputs {
    fn default() -> Self {
        Overheads::default().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_render_as_typed_text() {
        let i = OverheadInputs::default();
        assert_eq!(i.readout, "0.01");
        assert_eq!(i.motion, "45");
        assert_eq!(i.alignment, "45");
        assert_eq!(i.resolve(), Overheads::default());
    }

    #[test]
    fn malformed_entry_only_zeroes_itself() {
        let mut i = OverheadInputs::default();
        *i.field_mut(FieldId::Motion).unwrap() = String::from("4x");
        let o = i.resolve();
        assert_eq!(o.readout, 0.01);
        assert_eq!(o.motion, 0.0);
        assert_eq!(o.alignment, 45.0);
    }

    #[test]
    fn row_fields_are_not_overheads() {
        let mut i = OverheadInputs::default();
        assert!(i.field_mut(FieldId::Exposure).is_none());
        assert!(i.field(FieldId::Scans).is_none());
    }
}
