use std::path::Path;
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use tracing::info;
use crate::error::SettingsError;
use crate::overheads::Overheads;
use crate::timer::{ScanTimer, DEFAULT_ROWS};

pub const MAX_ROWS: usize = 32;

pub trait Config {
    fn default() -> Self;
}

/// Toml-backed settings stored under a fixed file extension.
pub trait ConfigFile: Serialize + DeserializeOwned {
    fn file_ext() -> String;

    fn to_file(&self, filename: &Path) -> Result<(), SettingsError> {
        let t = toml::to_string_pretty(&self)?;
        let path = filename.with_extension(Self::file_ext());
        utils::write_to_file(filename, &Self::file_ext(), &t)
            .map_err(|source| SettingsError::Io { path, source })
    }

    fn from_file(filename: &Path) -> Result<Self, SettingsError> {
        let path = filename.with_extension(Self::file_ext());
        let t = utils::read_to_string(filename, &Self::file_ext())
            .map_err(|source| SettingsError::Io { path: path.clone(), source })?;
        toml::from_str(&t).map_err(|source| SettingsError::Parse { path, source })
    }

    fn exists(filename: &Path) -> bool {
        filename.with_extension(Self::file_ext()).exists()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimerSettings {
    pub rows: usize,
    pub overheads: Overheads,
}

impl Config for TimerSettings {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            overheads: Overheads::default(),
        }
    }
}

impl ConfigFile for TimerSettings {
    fn file_ext() -> String {
        String::from("timer_settings")
    }
}

impl TimerSettings {
    /// Load settings if a file was given, otherwise fall back to the built-in defaults.
    pub fn load_or_default(filename: Option<&Path>) -> Result<Self, SettingsError> {
        match filename {
            Some(f) => {
                let s = Self::from_file(f)?;
                if s.rows == 0 || s.rows > MAX_ROWS {
                    return Err(SettingsError::RowCount {
                        path: f.with_extension(Self::file_ext()),
                        rows: s.rows,
                        max: MAX_ROWS,
                    });
                }
                info!(rows = s.rows, "loaded timer settings from {:?}", f);
                Ok(s)
            }
            None => Ok(<Self as Config>::default()),
        }
    }

    pub fn build_timer(&self) -> ScanTimer {
        ScanTimer::new(self.rows, self.overheads.into())
    }
}
