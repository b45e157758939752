use tracing::{debug, trace};
use crate::error::TimingError;
use crate::fields::FieldId;
use crate::format::format_hours_minutes;
use crate::overheads::{OverheadInputs, Overheads};
use crate::row::{RowInputs, ScanRow};

pub const DEFAULT_ROWS: usize = 4;

/// All scan rows of the form plus the shared overheads and the overall total.
///
/// Every mutation recomputes the affected rows and then the total before it
/// returns, so the outputs are never stale.
pub struct ScanTimer {
    overhead_inputs: OverheadInputs,
    overheads: Overheads,
    rows: Vec<ScanRow>,
    total_seconds: f64,
    total_str: String,
}

impl Default for ScanTimer {
    fn default() -> Self {
        ScanTimer::new(DEFAULT_ROWS, OverheadInputs::default())
    }
}

impl ScanTimer {
    pub fn new(n_rows: usize, overhead_inputs: OverheadInputs) -> Self {
        Self::with_rows(vec![RowInputs::default(); n_rows], overhead_inputs)
    }

    pub fn with_rows(rows: Vec<RowInputs>, overhead_inputs: OverheadInputs) -> Self {
        let overheads = overhead_inputs.resolve();
        let rows = rows.into_iter().map(|r| ScanRow::new(r, overheads)).collect();
        let mut timer = Self {
            overhead_inputs,
            overheads,
            rows,
            total_seconds: 0.0,
            total_str: String::new(),
        };
        timer.recompute_total();
        timer
    }

    pub fn rows(&self) -> &[ScanRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Result<&ScanRow, TimingError> {
        let n_rows = self.rows.len();
        self.rows.get(index).ok_or(TimingError::RowOutOfRange { index, n_rows })
    }

    pub fn overhead_inputs(&self) -> &OverheadInputs {
        &self.overhead_inputs
    }

    /// Overheads currently applied to every row (malformed entries already zeroed).
    pub fn overheads(&self) -> &Overheads {
        &self.overheads
    }

    /// Edit one entry of one row, then refresh that row and the total.
    pub fn set_row_field(&mut self, index: usize, field: FieldId, text: &str) -> Result<(), TimingError> {
        let n_rows = self.rows.len();
        let row = self.rows.get_mut(index).ok_or(TimingError::RowOutOfRange { index, n_rows })?;
        row.set_field(field, text);
        self.recompute_total();
        Ok(())
    }

    /// Edit a single overhead entry and push the result to every row.
    pub fn set_overhead_field(&mut self, field: FieldId, text: &str) {
        let mut inputs = self.overhead_inputs.clone();
        match inputs.field_mut(field) {
            Some(entry) => {
                entry.clear();
                entry.push_str(text);
                self.update_overheads(inputs);
            }
            None => debug!("{} is not an overhead entry", field.key()),
        }
    }

    /// Apply new overhead entries to every row, recompute each row, then the total.
    pub fn update_overheads(&mut self, overhead_inputs: OverheadInputs) {
        self.overheads = overhead_inputs.resolve();
        self.overhead_inputs = overhead_inputs;
        for row in self.rows.iter_mut() {
            row.set_overheads(self.overheads);
        }
        self.recompute_total();
    }

    pub fn recompute_total(&mut self) {
        self.total_seconds = self.rows.iter().map(|r| r.row_seconds()).sum();
        self.total_str = format_hours_minutes(self.total_seconds);
        trace!(total_seconds = self.total_seconds, "total recomputed");
    }

    pub fn total_seconds(&self) -> f64 {
        self.total_seconds
    }

    pub fn total_str(&self) -> &str {
        &self.total_str
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_reference(timer: &mut ScanTimer, index: usize) {
        for (field, text) in [
            (FieldId::Scans, "1"),
            (FieldId::Points, "9"),
            (FieldId::Exposure, "1.0"),
            (FieldId::Accumulations, "1"),
            (FieldId::Repetitions, "1"),
        ] {
            timer.set_row_field(index, field, text).unwrap();
        }
    }

    #[test]
    fn starts_at_zero() {
        let timer = ScanTimer::default();
        assert_eq!(timer.rows().len(), 4);
        assert_eq!(timer.total_seconds(), 0.0);
        assert_eq!(timer.total_str(), "0h 0m");
        assert_eq!(timer.overheads(), &Overheads::default());
    }

    #[test]
    fn four_reference_rows() {
        let mut timer = ScanTimer::default();
        for i in 0..4 {
            fill_reference(&mut timer, i);
        }
        assert!((timer.total_seconds() - 400.4).abs() < 1e-9);
        assert_eq!(timer.total_str(), "0h 6m");
    }

    #[test]
    fn cleared_exposure_drops_one_row() {
        let mut timer = ScanTimer::default();
        for i in 0..4 {
            fill_reference(&mut timer, i);
        }
        timer.set_row_field(2, FieldId::Exposure, "").unwrap();
        assert_eq!(timer.row(2).unwrap().row_time_str(), "");
        assert_eq!(timer.row(1).unwrap().row_time_str(), "0h 1m");
        assert!((timer.total_seconds() - 300.3).abs() < 1e-9);
        assert_eq!(timer.total_str(), "0h 5m");
    }

    #[test]
    fn overhead_edit_reaches_every_row() {
        let mut timer = ScanTimer::default();
        for i in 0..4 {
            fill_reference(&mut timer, i);
        }
        timer.set_overhead_field(FieldId::Motion, "105");
        for row in timer.rows() {
            assert!((row.row_seconds() - 160.1).abs() < 1e-9);
        }
        assert!((timer.total_seconds() - 640.4).abs() < 1e-9);
        assert_eq!(timer.total_str(), "0h 10m");
        assert_eq!(timer.overhead_inputs().motion, "105");
    }

    #[test]
    fn decimal_points_count_whole_points() {
        let mut timer = ScanTimer::default();
        fill_reference(&mut timer, 0);
        timer.set_row_field(0, FieldId::Points, "9.0").unwrap();
        assert_eq!(timer.row(0).unwrap().row_time_str(), "0h 1m");
        assert!((timer.total_seconds() - 100.1).abs() < 1e-9);

        timer.set_row_field(0, FieldId::Points, "9.9").unwrap();
        assert!((timer.row(0).unwrap().row_seconds() - 100.1).abs() < 1e-9);
    }

    #[test]
    fn malformed_overhead_counts_as_zero() {
        let mut timer = ScanTimer::default();
        fill_reference(&mut timer, 0);
        timer.set_overhead_field(FieldId::Align, "");
        assert_eq!(timer.overheads().alignment, 0.0);
        assert_eq!(timer.overheads().motion, 45.0);
        assert!((timer.row(0).unwrap().row_seconds() - 55.1).abs() < 1e-9);
    }

    #[test]
    fn unknown_row_is_an_error() {
        let mut timer = ScanTimer::default();
        assert_eq!(
            timer.set_row_field(4, FieldId::Points, "1"),
            Err(TimingError::RowOutOfRange { index: 4, n_rows: 4 })
        );
        assert!(timer.row(7).is_err());
    }
}
