use eframe::egui;
use eframe::egui::{RichText, Ui};
use scan_timing::fields::FieldId;
use crate::timing_panel::{entry, TimingPanel, FONT_SIZE};

/// Readout, motion and alignment entries shared by every scan row.
pub fn overhead_panel(_ctx: &egui::Context,ui:&mut Ui,tp:&mut TimingPanel) {
    ui.label(RichText::new("Overhead (in seconds)").size(FONT_SIZE));

    egui::Grid::new("overhead_grid").num_columns(2).spacing([6.0,6.0]).show(ui, |ui| {
        for field in FieldId::OVERHEADS {
            ui.label(RichText::new(field.label()).size(FONT_SIZE)).on_hover_text(field.tip());

            let current = tp.timer().overhead_inputs().field(field).unwrap_or_default().to_string();
            if let Some(text) = entry(ui,current) {
                tp.timer_mut().set_overhead_field(field,&text);
            }
            ui.end_row();
        }
    });
}
