pub mod run_options;

use crate::{error::AppError, MAX_CHIPS, MIN_CHIPS};
use run_options::Args;
use serde::Deserialize;
use std::fs;
use tracing::{debug, warn};

pub const CONFIG_FILE: &str = "hydround.toml";

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default)]
pub struct Scan {
    pub chips: usize,
    /// fixed seed for a reproducible scan, random otherwise
    pub seed: Option<u64>,
}

impl Default for Scan {
    fn default() -> Self {
        Self { chips: 4, seed: None }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Report {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Log {
    pub filter: String,
}

impl Default for Log {
    fn default() -> Self {
        Self { filter: "info".to_owned() }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub scan: Scan,
    pub report: Report,
    pub log: Log,
}

impl Config {
    /// Reads the config file named in `args`, falling back to defaults when it
    /// does not exist, then applies the command line overrides.
    pub fn load(args: &Args) -> Result<Self, AppError> {
        let mut config = if let Some(cfg_str) = &args.cfg_str {
            Self::load_from_str(cfg_str)?
        } else if args.cfg_file.exists() {
            debug!("Loading config from {}", args.cfg_file.display());
            let config_content = fs::read_to_string(&args.cfg_file)?;
            Self::load_from_str(&config_content)?
        } else {
            warn!("Config file '{}' not found, using defaults.", args.cfg_file.display());
            Self::default()
        };

        if let Some(chips) = args.chips {
            config.scan.chips = chips;
        }
        if args.seed.is_some() {
            config.scan.seed = args.seed;
        }
        if args.json {
            config.report.format = OutputFormat::Json;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_str(config_str: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(config_str)?)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_chip_count(self.scan.chips).map(|_| ())
    }
}

pub fn validate_chip_count(chips: usize) -> Result<usize, AppError> {
    if (MIN_CHIPS..=MAX_CHIPS).contains(&chips) {
        Ok(chips)
    } else {
        Err(AppError::InvalidChipCount(chips))
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::test::utils::log_capture::capture_logs;
    use std::path::PathBuf;

    fn args_with(cfg_str: Option<&str>) -> Args {
        Args { cfg_file: PathBuf::from("does/not/exist.toml"), cfg_str: cfg_str.map(str::to_owned), ..Default::default() }
    }

    #[test]
    fn missing_file_gives_defaults() {
        let cfg = Config::load(&args_with(None)).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.scan.chips, 4);
        assert_eq!(cfg.report.format, OutputFormat::Text);
    }

    #[test]
    fn missing_file_is_reported() {
        let (cfg, logs) = capture_logs("warn", || Config::load(&args_with(None)));
        assert!(cfg.is_ok());
        assert!(logs.contains("WARN"));
        assert!(logs.contains("Config file 'does/not/exist.toml' not found, using defaults."));
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let cfg = Config::load_from_str("[scan]\nseed = 9\n").unwrap();
        assert_eq!(cfg.scan, Scan { chips: 4, seed: Some(9) });
        assert_eq!(cfg.log.filter, "info");
    }

    #[test]
    fn command_line_overrides_file() {
        let mut args = args_with(Some("[scan]\nchips = 6\nseed = 1\n[report]\nformat = \"text\"\n"));
        args.chips = Some(12);
        args.json = true;
        let cfg = Config::load(&args).unwrap();
        assert_eq!(cfg.scan.chips, 12);
        assert_eq!(cfg.scan.seed, Some(1));
        assert_eq!(cfg.report.format, OutputFormat::Json);
    }

    #[test]
    fn chip_count_bounds() {
        assert!(validate_chip_count(1).is_ok());
        assert!(validate_chip_count(20).is_ok());
        assert!(matches!(validate_chip_count(0), Err(AppError::InvalidChipCount(0))));
        assert!(matches!(validate_chip_count(21), Err(AppError::InvalidChipCount(21))));
    }

    #[test]
    fn out_of_range_config_is_rejected() {
        let res = Config::load(&args_with(Some("[scan]\nchips = 40\n")));
        assert!(matches!(res, Err(AppError::InvalidChipCount(40))));
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(matches!(Config::load_from_str("[scan]\nchips = \"many\"\n"), Err(AppError::Config(_))));
    }
}
