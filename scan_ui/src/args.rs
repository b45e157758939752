use std::path::PathBuf;

#[derive(clap::Parser,Debug)]
#[command(name = "scan_ui", about = "Estimate how long a set of scans will take")]
pub struct ScanUiArgs {
    /// timer settings file (overhead defaults and row count)
    #[clap(short, long)]
    pub settings: Option<PathBuf>,
    #[command(subcommand)]
    pub action: Option<Action>,
}

#[derive(clap::Subcommand,Debug,PartialEq)]
pub enum Action {
    /// open the timing form (default)
    Gui,
    /// write a timer settings file with the default overheads
    NewSettings(NewSettingsArgs),
    /// print the timing of every row in a scan plan
    Estimate(EstimateArgs),
}

#[derive(clap::Args,Debug,PartialEq)]
pub struct NewSettingsArgs {
    pub destination:PathBuf,
}

#[derive(clap::Args,Debug,PartialEq)]
pub struct EstimateArgs {
    pub plan:PathBuf,
    /// print the estimate as json
    #[clap(long)]
    pub json:bool,
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use super::*;

    #[test]
    fn gui_is_optional() {
        let args = ScanUiArgs::try_parse_from(["scan_ui"]).unwrap();
        assert_eq!(args.action, None);
        assert_eq!(args.settings, None);
    }

    #[test]
    fn estimate_takes_plan_and_flag() {
        let args = ScanUiArgs::try_parse_from(["scan_ui","-s","lab","estimate","night","--json"]).unwrap();
        assert_eq!(args.settings, Some(PathBuf::from("lab")));
        assert_eq!(args.action, Some(Action::Estimate(EstimateArgs{ plan: PathBuf::from("night"), json: true })));
    }

    #[test]
    fn new_settings_needs_destination() {
        assert!(ScanUiArgs::try_parse_from(["scan_ui","new-settings"]).is_err());
    }
}
