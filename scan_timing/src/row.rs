/*
 One scan row of the timing form: the raw text of its five entries, the
 parsed parameters, and the derived per-peak and row times.
*/

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use crate::error::FieldError;
use crate::fields::{parse_count, parse_seconds, FieldId};
use crate::format::format_hours_minutes;
use crate::overheads::Overheads;

/// Parsed scan parameters of a single row.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct RowParameters {
    pub peaks: u32,
    pub points: u32,
    pub exposure: f64,
    pub accumulations: u32,
    pub repetitions: u32,
}

impl RowParameters {
    /// Seconds to finish every repetition of one peak, motion included.
    pub fn peak_time(&self, overheads: &Overheads) -> f64 {
        let frame = self.exposure + overheads.readout;
        let pass = (self.points as f64 + 1.0) * frame * self.accumulations as f64 + overheads.alignment;
        pass * self.repetitions as f64 + overheads.motion
    }

    pub fn row_time(&self, overheads: &Overheads) -> f64 {
        self.peaks as f64 * self.peak_time(overheads)
    }
}

/// The five row entries as typed into the form.
#[derive(Clone, Debug, PartialEq)]
pub struct RowInputs {
    pub peaks: String,
    pub points: String,
    pub exposure: String,
    pub accumulations: String,
    pub repetitions: String,
}

impl Default for RowInputs {
    fn default() -> Self {
        Self {
            peaks: String::from("0"),
            points: String::from("0"),
            exposure: String::from("0"),
            accumulations: String::from("0"),
            repetitions: String::from("0"),
        }
    }
}

impl From<RowParameters> for RowInputs {
    fn from(p: RowParameters) -> Self {
        Self {
            peaks: p.peaks.to_string(),
            points: p.points.to_string(),
            exposure: p.exposure.to_string(),
            accumulations: p.accumulations.to_string(),
            repetitions: p.repetitions.to_string(),
        }
    }
}

impl RowInputs {
    pub fn field(&self, field: FieldId) -> Option<&str> {
        match field {
            FieldId::Scans => Some(&self.peaks),
            FieldId::Points => Some(&self.points),
            FieldId::Exposure => Some(&self.exposure),
            FieldId::Accumulations => Some(&self.accumulations),
            FieldId::Repetitions => Some(&self.repetitions),
            _ => None,
        }
    }

    pub fn field_mut(&mut self, field: FieldId) -> Option<&mut String> {
        match field {
            FieldId::Scans => Some(&mut self.peaks),
            FieldId::Points => Some(&mut self.points),
            FieldId::Exposure => Some(&mut self.exposure),
            FieldId::Accumulations => Some(&mut self.accumulations),
            FieldId::Repetitions => Some(&mut self.repetitions),
            _ => None,
        }
    }

    pub fn parse(&self) -> Result<RowParameters, FieldError> {
        Ok(RowParameters {
            peaks: parse_count(FieldId::Scans, &self.peaks)?,
            points: parse_count(FieldId::Points, &self.points)?,
            exposure: parse_seconds(FieldId::Exposure, &self.exposure)?,
            accumulations: parse_count(FieldId::Accumulations, &self.accumulations)?,
            repetitions: parse_count(FieldId::Repetitions, &self.repetitions)?,
        })
    }
}

/// Derived times of a row whose entries all parsed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RowTiming {
    pub peak_seconds: f64,
    pub row_seconds: f64,
}

pub struct ScanRow {
    inputs: RowInputs,
    overheads: Overheads,
    timing: Option<RowTiming>,
    peak_time_str: String,
    row_time_str: String,
}

impl ScanRow {
    pub fn new(inputs: RowInputs, overheads: Overheads) -> Self {
        let mut row = Self {
            inputs,
            overheads,
            timing: None,
            peak_time_str: String::new(),
            row_time_str: String::new(),
        };
        row.recompute();
        row
    }

    pub fn inputs(&self) -> &RowInputs {
        &self.inputs
    }

    pub fn overheads(&self) -> &Overheads {
        &self.overheads
    }

    /// Store new text for one entry and refresh the outputs. Output columns are ignored.
    pub fn set_field(&mut self, field: FieldId, text: &str) {
        match self.inputs.field_mut(field) {
            Some(entry) => {
                entry.clear();
                entry.push_str(text);
                self.recompute();
            }
            None => debug!("{} is not a row entry", field.key()),
        }
    }

    pub fn set_overheads(&mut self, overheads: Overheads) {
        self.overheads = overheads;
        self.recompute();
    }

    /// Re-derive the outputs from the current entries. Unparseable entries
    /// blank the row instead of failing.
    pub fn recompute(&mut self) {
        match self.inputs.parse() {
            Ok(params) => {
                let peak_seconds = params.peak_time(&self.overheads);
                let row_seconds = params.row_time(&self.overheads);
                trace!(peak_seconds, row_seconds, "row recomputed");
                self.peak_time_str = format_hours_minutes(peak_seconds);
                self.row_time_str = format_hours_minutes(row_seconds);
                self.timing = Some(RowTiming { peak_seconds, row_seconds });
            }
            Err(e) => {
                debug!("{}, row time cleared", e);
                self.timing = None;
                self.peak_time_str.clear();
                self.row_time_str.clear();
            }
        }
    }

    pub fn timing(&self) -> Option<RowTiming> {
        self.timing
    }

    pub fn peak_seconds(&self) -> f64 {
        self.timing.map(|t| t.peak_seconds).unwrap_or(0.0)
    }

    pub fn row_seconds(&self) -> f64 {
        self.timing.map(|t| t.row_seconds).unwrap_or(0.0)
    }

    pub fn peak_time_str(&self) -> &str {
        &self.peak_time_str
    }

    pub fn row_time_str(&self) -> &str {
        &self.row_time_str
    }
}
