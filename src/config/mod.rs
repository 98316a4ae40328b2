use crate::cli::parser::Cli;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Environment variable that relocates the configuration directory.
pub const HOME_ENV: &str = "RATTENDANCE_HOME";

/// Keys every up-to-date configuration file is expected to carry.
pub const EXPECTED_KEYS: &[&str] = &[
    "port",
    "baud_rate",
    "timeout_ms",
    "settle_ms",
    "roster_file",
    "attendance_file",
    "log_file",
    "beep",
    "ignore_prefixes",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: String,
    #[serde(default = "default_baud_rate")]
    pub baud_rate: u32,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,
    #[serde(default = "default_roster_file")]
    pub roster_file: String,
    #[serde(default = "default_attendance_file")]
    pub attendance_file: String,
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default = "default_beep")]
    pub beep: bool,
    #[serde(default = "default_ignore_prefixes")]
    pub ignore_prefixes: Vec<String>,
}

fn default_port() -> String {
    if cfg!(target_os = "windows") {
        "COM10".to_string()
    } else {
        "/dev/ttyUSB0".to_string()
    }
}
fn default_baud_rate() -> u32 {
    115_200
}
fn default_timeout_ms() -> u64 {
    1000
}
fn default_settle_ms() -> u64 {
    2000
}
fn default_roster_file() -> String {
    Config::config_dir()
        .join("students.csv")
        .to_string_lossy()
        .to_string()
}
fn default_attendance_file() -> String {
    Config::config_dir()
        .join("attendance.csv")
        .to_string_lossy()
        .to_string()
}
fn default_log_file() -> String {
    Config::config_dir()
        .join("activity.log")
        .to_string_lossy()
        .to_string()
}
fn default_beep() -> bool {
    true
}
fn default_ignore_prefixes() -> Vec<String> {
    vec![
        "RFID".to_string(),
        "Module".to_string(),
        "Connection".to_string(),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            baud_rate: default_baud_rate(),
            timeout_ms: default_timeout_ms(),
            settle_ms: default_settle_ms(),
            roster_file: default_roster_file(),
            attendance_file: default_attendance_file(),
            log_file: default_log_file(),
            beep: default_beep(),
            ignore_prefixes: default_ignore_prefixes(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform.
    /// `RATTENDANCE_HOME` takes precedence when set.
    pub fn config_dir() -> PathBuf {
        if let Ok(custom) = env::var(HOME_ENV) {
            return expand_tilde(&custom);
        }

        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rattendance")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".rattendance")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    /// Apply global command-line overrides on top of the loaded file.
    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(roster) = &cli.roster {
            self.roster_file = roster.clone();
        }
        if let Some(attendance) = &cli.attendance {
            self.attendance_file = attendance.clone();
        }
        if let Some(port) = &cli.port {
            self.port = port.clone();
        }
        if let Some(baud) = cli.baud {
            self.baud_rate = baud;
        }
    }

    pub fn roster_path(&self) -> PathBuf {
        expand_tilde(&self.roster_file)
    }

    pub fn attendance_path(&self) -> PathBuf {
        expand_tilde(&self.attendance_file)
    }

    pub fn log_path(&self) -> PathBuf {
        expand_tilde(&self.log_file)
    }

    /// Create the configuration directory and, outside test mode, write
    /// the configuration file.
    pub fn init_all(&self, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        if !is_test {
            let yaml = serde_yaml::to_string(self)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(())
    }

    /// Return the expected keys that the configuration file does not define.
    pub fn missing_keys() -> AppResult<Vec<&'static str>> {
        let path = Self::config_file();
        if !path.exists() {
            return Err(AppError::Config(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(&path)?;
        Ok(missing_keys_in(&content)?)
    }
}

/// Inspect raw YAML text and list the expected keys it lacks.
pub fn missing_keys_in(content: &str) -> Result<Vec<&'static str>, serde_yaml::Error> {
    let yaml: Value = serde_yaml::from_str(content)?;
    let missing = match yaml.as_mapping() {
        Some(map) => EXPECTED_KEYS
            .iter()
            .copied()
            .filter(|k| !map.contains_key(*k))
            .collect(),
        None => EXPECTED_KEYS.to_vec(),
    };
    Ok(missing)
}
