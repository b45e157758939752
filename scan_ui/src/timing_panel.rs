/*
 The scan row grid and the overall total. Each edit is pushed straight into
 the timer, which refreshes the row and total before the next frame is drawn.
*/

use eframe::egui;
use eframe::egui::{RichText, Ui};
use tracing::warn;
use scan_timing::fields::FieldId;
use scan_timing::timer::ScanTimer;

pub const FONT_SIZE:f32 = 14.0;
const TOTAL_FONT_SIZE:f32 = 20.0;
const ENTRY_WIDTH:f32 = 60.0;

pub struct TimingPanel {
    timer:ScanTimer,
}

impl TimingPanel {
    pub fn new(timer:ScanTimer) -> Self {
        Self {
            timer
        }
    }
    pub fn timer(&self) -> &ScanTimer {
        &self.timer
    }
    pub fn timer_mut(&mut self) -> &mut ScanTimer {
        &mut self.timer
    }
    pub fn overall_label(&self) -> String {
        format!("{}: {}",FieldId::OverallTime.label(),self.timer.total_str())
    }
}

/// Single line text entry. Returns the new text only when the user changed it.
pub fn entry(ui:&mut Ui,current:String) -> Option<String> {
    let mut buffer = current;
    let response = ui.add(
        egui::TextEdit::singleline(&mut buffer)
            .desired_width(ENTRY_WIDTH)
            .font(egui::FontId::proportional(FONT_SIZE))
    );
    match response.changed() {
        true => Some(buffer),
        false => None
    }
}

pub fn timing_panel(_ctx: &egui::Context,ui:&mut Ui,tp:&mut TimingPanel) {

    egui::Grid::new("scan_rows").num_columns(FieldId::ROW_COLUMNS.len()).spacing([6.0,6.0]).show(ui, |ui| {
        for field in FieldId::ROW_COLUMNS {
            ui.label(RichText::new(field.label()).size(FONT_SIZE)).on_hover_text(field.tip());
        }
        ui.end_row();

        for index in 0..tp.timer.rows().len() {
            for field in FieldId::ROW_COLUMNS {
                match field.is_editable() {
                    true => {
                        let current = tp.timer.rows()[index].inputs().field(field).unwrap_or_default().to_string();
                        if let Some(text) = entry(ui,current) {
                            if let Err(e) = tp.timer.set_row_field(index,field,&text) {
                                warn!("{}",e);
                            }
                        }
                    }
                    false => {
                        let row = &tp.timer.rows()[index];
                        let shown = match field {
                            FieldId::ScanTime => row.peak_time_str(),
                            _ => row.row_time_str(),
                        };
                        ui.label(RichText::new(shown).size(FONT_SIZE));
                    }
                }
            }
            ui.end_row();
        }
    });

    ui.separator();
    ui.label(RichText::new(tp.overall_label()).size(TOTAL_FONT_SIZE))
        .on_hover_text(FieldId::OverallTime.tip());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overall_label_tracks_edits() {
        let mut tp = TimingPanel::new(ScanTimer::default());
        assert_eq!(tp.overall_label(), "Overall time: 0h 0m");
        tp.timer_mut().set_row_field(0,FieldId::Scans,"40").unwrap();
        // 40 peaks x 45 s of motion
        assert_eq!(tp.overall_label(), "Overall time: 0h 30m");
    }
}
