use crate::models::category::OvertimeCategory;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub state_file: String,
    #[serde(default = "default_dept_code")]
    pub dept_code: String,
    #[serde(default = "default_anchor_weekday")]
    pub anchor_weekday: String,
    #[serde(default = "default_category")]
    pub default_category: String,
}

fn default_dept_code() -> String {
    "910".to_string()
}
fn default_anchor_weekday() -> String {
    "Saturday".to_string()
}
fn default_category() -> String {
    "ot10".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_file: Self::state_file_path().to_string_lossy().to_string(),
            dept_code: default_dept_code(),
            anchor_weekday: default_anchor_weekday(),
            default_category: default_category(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("otledger")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".otledger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("otledger.conf")
    }

    /// Return the full path of the persisted ledger state
    pub fn state_file_path() -> PathBuf {
        Self::config_dir().join("otledger_state.json")
    }

    /// Load configuration from file, or return defaults if missing or
    /// unparsable (a broken config never blocks startup).
    pub fn load() -> Self {
        match fs::read_to_string(Self::config_file()) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Pay-period anchor weekday; unknown names fall back to Saturday.
    pub fn anchor(&self) -> Weekday {
        self.anchor_weekday.parse().unwrap_or(Weekday::Sat)
    }

    /// Category used when `add` is called without `--cat`.
    pub fn category_default(&self) -> OvertimeCategory {
        OvertimeCategory::from_code(&self.default_category).unwrap_or(OvertimeCategory::Ot10)
    }

    /// Initialize configuration and state files
    pub fn init_all(is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config::default();

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create an empty state file if not present
        let state_path = Self::state_file_path();
        if !state_path.exists() {
            fs::File::create(&state_path)?;
        }

        println!("✅ State file:  {:?}", state_path);

        Ok(())
    }
}
