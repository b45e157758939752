use std::path::{Path, PathBuf};
use anyhow::{bail, Context, Result};
use tracing::info;
use scan_timing::plan::ScanPlan;
use scan_timing::settings::{Config, ConfigFile, TimerSettings};

use crate::args::*;

/// Write default settings to the destination and return where they landed.
pub fn new_settings(args:&NewSettingsArgs) -> Result<PathBuf> {
    if TimerSettings::exists(&args.destination) {
        bail!("{:?} already exists", args.destination.with_extension(TimerSettings::file_ext()));
    }
    let settings = <TimerSettings as Config>::default();
    settings.to_file(&args.destination)
        .with_context(|| format!("cannot write settings to {:?}", args.destination))?;
    let written = args.destination.with_extension(TimerSettings::file_ext());
    info!("wrote default settings to {:?}", written);
    Ok(written)
}

/// Render the estimate for a scan plan, either as a text report or as json.
pub fn estimate(args:&EstimateArgs,settings:&TimerSettings) -> Result<String> {
    let plan = load_plan(&args.plan)?;
    let e = plan.estimate(&settings.overheads);
    info!(rows = e.rows.len(), total_seconds = e.total_seconds, "estimated {:?}", args.plan);
    match args.json {
        true => serde_json::to_string_pretty(&e).context("cannot serialize estimate"),
        false => Ok(e.to_string()),
    }
}

fn load_plan(path:&Path) -> Result<ScanPlan> {
    ScanPlan::from_file(path).with_context(|| format!("cannot load scan plan {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAN:&str = "[[rows]]\npeaks = 1\npoints = 9\nexposure = 1.0\naccumulations = 1\nrepetitions = 1\n";

    #[test]
    fn new_settings_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let args = NewSettingsArgs{ destination: dir.path().join("lab") };
        let written = new_settings(&args).unwrap();
        assert_eq!(written, dir.path().join("lab.timer_settings"));
        assert!(new_settings(&args).is_err());
    }

    #[test]
    fn estimate_text_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let plan = dir.path().join("night");
        std::fs::write(plan.with_extension("scan_plan"), PLAN).unwrap();
        let settings = <TimerSettings as Config>::default();

        let text = estimate(&EstimateArgs{ plan: plan.clone(), json: false }, &settings).unwrap();
        assert!(text.ends_with("Overall time: 0h 1m (100.10 s)"));

        let json = estimate(&EstimateArgs{ plan, json: true }, &settings).unwrap();
        let v:serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["total_time"], "0h 1m");
        assert_eq!(v["rows"][0]["row_time"], "0h 1m");
    }

    #[test]
    fn missing_plan_names_the_file() {
        let settings = <TimerSettings as Config>::default();
        let e = estimate(&EstimateArgs{ plan: PathBuf::from("no_such_plan"), json: false }, &settings).unwrap_err();
        assert!(format!("{:#}", e).contains("no_such_plan"));
    }
}
