//! Command-line options for the `droplet` binary.

use std::path::PathBuf;

use thiserror::Error;

use droplet_core::config::{ConfigError, SimConfig};

use crate::game_loop::LoopConfig;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("invalid value {value:?} for {flag}")]
    InvalidValue { flag: &'static str, value: String },
    #[error("unknown argument {0:?}")]
    UnknownArgument(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to start game loop: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Parsed `droplet` options.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub config_path: Option<PathBuf>,
    /// Stop after this much simulated time even if the player survives.
    pub seconds: f64,
    pub seed: Option<u64>,
    pub unpaced: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            config_path: None,
            seconds: 120.0,
            seed: None,
            unpaced: false,
        }
    }
}

impl Options {
    /// Parse arguments, excluding the program name.
    pub fn parse<I, S>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options = Options::default();
        let mut args = args.into_iter().map(Into::into);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let value = args.next().ok_or(CliError::MissingValue("--config"))?;
                    options.config_path = Some(PathBuf::from(value));
                }
                "--seconds" => {
                    let value = args.next().ok_or(CliError::MissingValue("--seconds"))?;
                    options.seconds = match value.parse::<f64>() {
                        Ok(secs) if secs > 0.0 && secs.is_finite() => secs,
                        _ => {
                            return Err(CliError::InvalidValue {
                                flag: "--seconds",
                                value,
                            })
                        }
                    };
                }
                "--seed" => {
                    let value = args.next().ok_or(CliError::MissingValue("--seed"))?;
                    let seed = value.parse::<u64>().map_err(|_| CliError::InvalidValue {
                        flag: "--seed",
                        value: value.clone(),
                    })?;
                    options.seed = Some(seed);
                }
                "--unpaced" => options.unpaced = true,
                _ => return Err(CliError::UnknownArgument(arg)),
            }
        }
        Ok(options)
    }

    /// Load the config file (or defaults) and apply overrides.
    pub fn loop_config(&self) -> Result<LoopConfig, CliError> {
        let mut sim = match &self.config_path {
            Some(path) => SimConfig::load(path)?,
            None => SimConfig::default(),
        };
        if let Some(seed) = self.seed {
            sim.seed = seed;
        }
        Ok(LoopConfig {
            sim,
            unpaced: self.unpaced,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::parse(Vec::<String>::new()).unwrap();
        assert_eq!(options, Options::default());
    }

    #[test]
    fn test_all_flags() {
        let options = Options::parse([
            "--config",
            "run.json",
            "--seconds",
            "30",
            "--seed",
            "7",
            "--unpaced",
        ])
        .unwrap();
        assert_eq!(options.config_path, Some(PathBuf::from("run.json")));
        assert_eq!(options.seconds, 30.0);
        assert_eq!(options.seed, Some(7));
        assert!(options.unpaced);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(
            Options::parse(["--seed"]),
            Err(CliError::MissingValue("--seed"))
        ));
        assert!(matches!(
            Options::parse(["--seconds", "-1"]),
            Err(CliError::InvalidValue { flag: "--seconds", .. })
        ));
        assert!(matches!(
            Options::parse(["--fast"]),
            Err(CliError::UnknownArgument(_))
        ));
    }

    #[test]
    fn test_seed_override() {
        let options = Options {
            seed: Some(99),
            ..Default::default()
        };
        let config = options.loop_config().unwrap();
        assert_eq!(config.sim.seed, 99);
        assert!(!config.unpaced);
    }

    #[test]
    fn test_missing_config_file() {
        let options = Options {
            config_path: Some(PathBuf::from("/nonexistent/droplet.json")),
            ..Default::default()
        };
        assert!(matches!(
            options.loop_config(),
            Err(CliError::Config(ConfigError::Io { .. }))
        ));
    }
}
