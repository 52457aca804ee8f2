//! Module containing [Config] and [Settings]
//!
//! [Config] is what is read from disk. Every key is optional. [Settings] is what actually gets used,
//! after merging the CLI args on top of the [Config] and filling in the defaults.
use bicycle::Direction;
use serde::Deserialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{cli::CycleArgs, errors::Error, paths::CONFIG_FILE};

/// Structure of the config file
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Index to start at
    pub start: Option<usize>,
    /// Direction to start in
    pub direction: Option<Direction>,
    /// Number of steps `run` takes
    pub steps: Option<u64>,
    /// Delay between steps of `run`
    pub delay_ms: Option<u64>,
}

impl Config {
    /// Parse a [Config] from a toml string
    pub fn from_toml(toml: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml)
    }

    /// Read the config file
    ///
    /// If `path` is given it must exist. Otherwise the default config file is tried, falling back
    /// to [Config::default] if there is none.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        if let Some(path) = path {
            return Self::read(path);
        }

        let Some(default_path) = CONFIG_FILE.as_ref() else {
            log::warn!("Couldn't find the home dir. Using default config.");
            return Ok(Self::default());
        };

        match Self::read(default_path) {
            Err(Error::ConfigRead(_, e)) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("Could not find config file. Using defaults.");
                log::info!(
                    "Consider creating one at {}",
                    default_path.to_string_lossy()
                );
                Ok(Self::default())
            }
            result => result,
        }
    }

    /// Read and parse the config at `path`
    fn read(path: &Path) -> Result<Self, Error> {
        let toml =
            fs::read_to_string(path).map_err(|e| Error::ConfigRead(PathBuf::from(path), e))?;

        let config =
            Self::from_toml(&toml).map_err(|e| Error::ConfigParse(PathBuf::from(path), e))?;

        log::info!("Loaded config from: {}", path.to_string_lossy());

        Ok(config)
    }
}

/// The settings used for a single cycle, after merging CLI args and [Config]
///
/// CLI args take precedence over the [Config], which takes precedence over the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Index to start at
    pub start: usize,
    /// Direction to start in
    pub direction: Direction,
    /// Number of steps to take, [None] meaning forever
    pub steps: Option<u64>,
    /// Delay between steps
    pub delay: Duration,
}

impl Settings {
    /// Merge `args` on top of `config`
    ///
    /// `steps` and `delay_ms` are only passed by the `run` action.
    pub fn resolve(
        args: &CycleArgs,
        steps: Option<u64>,
        delay_ms: Option<u64>,
        config: &Config,
    ) -> Self {
        let direction = if args.reverse {
            Direction::Reverse
        } else {
            config.direction.unwrap_or_default()
        };

        Self {
            start: args.start.or(config.start).unwrap_or(0),
            direction,
            steps: steps.or(config.steps),
            delay: Duration::from_millis(delay_ms.or(config.delay_ms).unwrap_or(0)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Config, Settings};
    use crate::{cli::CycleArgs, errors::Error};
    use bicycle::Direction;
    use std::{path::Path, time::Duration};

    fn args(start: Option<usize>, reverse: bool) -> CycleArgs {
        CycleArgs {
            elements: vec!["rick".to_string(), "morty".to_string()],
            start,
            reverse,
        }
    }

    #[test]
    fn parse_full() {
        let config = Config::from_toml(
            r#"
start = 1
direction = "reverse"
steps = 10
delay_ms = 250
            "#,
        )
        .unwrap();

        assert_eq!(
            config,
            Config {
                start: Some(1),
                direction: Some(Direction::Reverse),
                steps: Some(10),
                delay_ms: Some(250),
            }
        );
    }

    #[test]
    fn parse_empty() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn parse_invalid() {
        assert!(Config::from_toml(r#"direction = "sideways""#).is_err());
        assert!(Config::from_toml("unknown_key = 1").is_err());
        assert!(Config::from_toml("start = -1").is_err());
    }

    #[test]
    fn defaults() {
        let settings = Settings::resolve(&args(None, false), None, None, &Config::default());

        assert_eq!(
            settings,
            Settings {
                start: 0,
                direction: Direction::Forward,
                steps: None,
                delay: Duration::ZERO,
            }
        );
    }

    #[test]
    fn config_used_when_no_args() {
        let config = Config {
            start: Some(1),
            direction: Some(Direction::Reverse),
            steps: Some(3),
            delay_ms: Some(5),
        };

        let settings = Settings::resolve(&args(None, false), None, None, &config);

        assert_eq!(settings.start, 1);
        assert_eq!(settings.direction, Direction::Reverse);
        assert_eq!(settings.steps, Some(3));
        assert_eq!(settings.delay, Duration::from_millis(5));
    }

    #[test]
    fn args_override_config() {
        let config = Config {
            start: Some(1),
            direction: Some(Direction::Forward),
            steps: Some(3),
            delay_ms: Some(5),
        };

        let settings = Settings::resolve(&args(Some(0), true), Some(8), Some(0), &config);

        assert_eq!(settings.start, 0);
        assert_eq!(settings.direction, Direction::Reverse);
        assert_eq!(settings.steps, Some(8));
        assert_eq!(settings.delay, Duration::ZERO);
    }

    #[test]
    fn explicit_missing_config() {
        let path = Path::new("this/config/does/not/exist.toml");

        assert!(matches!(
            Config::load(Some(path)),
            Err(Error::ConfigRead(p, _)) if p == path
        ));
    }
}
