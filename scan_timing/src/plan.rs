/*
 Scan plans: a whole acquisition written down as toml so it can be
 estimated without opening the form.
*/

use std::fmt;
use serde::{Deserialize, Serialize};
use tracing::warn;
use crate::overheads::{OverheadInputs, Overheads};
use crate::row::{RowInputs, RowParameters};
use crate::settings::ConfigFile;
use crate::timer::ScanTimer;

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct ScanPlan {
    pub overheads: Option<Overheads>,
    #[serde(default)]
    pub rows: Vec<RowParameters>,
}

impl ConfigFile for ScanPlan {
    fn file_ext() -> String {
        String::from("scan_plan")
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RowEstimate {
    pub peak_seconds: f64,
    pub peak_time: String,
    pub row_seconds: f64,
    pub row_time: String,
    /// Why the row was left blank, if any of its parameters are unusable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Estimate {
    pub overheads: Overheads,
    pub rows: Vec<RowEstimate>,
    pub total_seconds: f64,
    pub total_time: String,
}

impl ScanPlan {
    /// Run the plan through the same model the form uses. Plan overheads win over `fallback`.
    pub fn estimate(&self, fallback: &Overheads) -> Estimate {
        let overheads = self.overheads.unwrap_or(*fallback);
        let rows = self.rows.iter().map(|p| RowInputs::from(*p)).collect();
        let timer = ScanTimer::with_rows(rows, OverheadInputs::from(overheads));
        let e = Estimate::from(&timer);
        for (i, r) in e.rows.iter().enumerate() {
            if let Some(reason) = &r.invalid {
                warn!("plan row {} left out of the total: {}", i + 1, reason);
            }
        }
        e
    }
}

impl From<&ScanTimer> for Estimate {
    fn from(timer: &ScanTimer) -> Self {
        Self {
            overheads: *timer.overheads(),
            rows: timer.rows().iter().map(|r| RowEstimate {
                peak_seconds: r.peak_seconds(),
                peak_time: r.peak_time_str().to_string(),
                row_seconds: r.row_seconds(),
                row_time: r.row_time_str().to_string(),
                invalid: r.inputs().parse().err().map(|e| e.to_string()),
            }).collect(),
            total_seconds: timer.total_seconds(),
            total_time: timer.total_str().to_string(),
        }
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "overhead (s): readout {} motion {} alignment {}",
            self.overheads.readout, self.overheads.motion, self.overheads.alignment
        )?;
        for (i, r) in self.rows.iter().enumerate() {
            match &r.invalid {
                Some(reason) => writeln!(f, "row {}: invalid, {}", i + 1, reason)?,
                None => writeln!(
                    f,
                    "row {}: scan time {} ({:.2} s), total time {} ({:.2} s)",
                    i + 1, r.peak_time, r.peak_seconds, r.row_time, r.row_seconds
                )?,
            }
        }
        write!(f, "Overall time: {} ({:.2} s)", self.total_time, self.total_seconds)
    }
}
