//#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release
use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use scan_timing::settings::TimerSettings;
use scan_ui::args::{Action, ScanUiArgs};
use scan_ui::command::{estimate, new_settings};
use scan_ui::overhead_panel::overhead_panel;
use scan_ui::timing_panel::{timing_panel, TimingPanel};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "scan_ui=info,scan_timing=info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = ScanUiArgs::parse();

    let settings = TimerSettings::load_or_default(args.settings.as_deref())
        .context("cannot load timer settings")?;

    match args.action.unwrap_or(Action::Gui) {
        Action::Gui => {
            tracing::info!(rows = settings.rows, "opening scan timer");
            let panel = TimingPanel::new(settings.build_timer());
            let options = eframe::NativeOptions {
                initial_window_size: Some(egui::vec2(640.0, 420.0)),
                ..Default::default()
            };
            eframe::run_native(
                "Scan Timer",
                options,
                Box::new(move |_cc| Box::new(MyApp { timing_panel: panel })),
            );
        }
        Action::NewSettings(args) => {
            let written = new_settings(&args)?;
            println!("settings written to {:?}", written);
        }
        Action::Estimate(args) => {
            println!("{}", estimate(&args, &settings)?);
        }
    }
    Ok(())
}

struct MyApp {
    timing_panel:TimingPanel,
}

impl eframe::App for MyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            overhead_panel(ctx,ui,&mut self.timing_panel);
            ui.separator();
            timing_panel(ctx,ui,&mut self.timing_panel);
        });
    }
}
