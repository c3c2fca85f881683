use error::{Error, Result};
use serde_json::Value;
use simplelog::{CombinedLogger, LevelFilter, SharedLogger, WriteLogger};
use std::convert::TryFrom;
use std::fs::{self, File};
use std::io::stderr;
use std::path::{Path, PathBuf};

pub const DEFAULT_GRID_SIZE: isize = 200;
pub const DEFAULT_TRIALS: isize = 100;

/// Settings shared by the binaries. Read from a JSON object; missing keys
/// keep their defaults.
///
/// ```json
/// {"log_level": "info", "log_file": "stats.log", "n": 50, "trials": 30, "seed": 7}
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
    pub grid_size: isize,
    pub trials: isize,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            log_level: LevelFilter::Warn,
            log_file: None,
            grid_size: DEFAULT_GRID_SIZE,
            trials: DEFAULT_TRIALS,
            seed: None,
        }
    }
}

fn invalid(key: &str, reason: &str) -> Error {
    Error::InvalidConfig { key: key.to_string(), reason: reason.to_string() }
}

// Absent and null keys both keep the default.
fn field<'a>(json: &'a Value, key: &str) -> Option<&'a Value> {
    match json.get(key) {
        None | Some(Value::Null) => None,
        Some(v) => Some(v),
    }
}

fn as_isize(json: &Value, key: &str) -> Result<Option<isize>> {
    match field(json, key) {
        None => Ok(None),
        Some(v) => {
            let v = v.as_i64().ok_or_else(|| invalid(key, "expected an integer"))?;
            isize::try_from(v).map(Some).map_err(|_| invalid(key, "out of range for this platform"))
        }
    }
}

impl Config {
    pub fn from_json(json: &Value) -> Result<Config> {
        if !json.is_object() {
            return Err(invalid("<root>", "expected a JSON object"));
        }
        let mut config = Config::default();

        if let Some(level) = field(json, "log_level") {
            config.log_level = level.as_str()
                .and_then(|s| s.parse::<LevelFilter>().ok())
                .ok_or_else(|| invalid("log_level", "expected one of off, error, warn, info, debug, trace"))?;
        }
        if let Some(file) = field(json, "log_file") {
            let file = file.as_str().ok_or_else(|| invalid("log_file", "expected a path"))?;
            config.log_file = Some(PathBuf::from(file));
        }
        if let Some(n) = as_isize(json, "n")? {
            config.grid_size = n;
        }
        if let Some(trials) = as_isize(json, "trials")? {
            config.trials = trials;
        }
        if let Some(seed) = field(json, "seed") {
            config.seed = Some(seed.as_u64().ok_or_else(|| invalid("seed", "expected a non-negative integer"))?);
        }
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Config> {
        let json: Value = serde_json::from_str(text)
            .map_err(|e| invalid("<root>", &e.to_string()))?;
        Config::from_json(&json)
    }

    pub fn load(path: &Path) -> Result<Config> {
        let text = fs::read_to_string(path)
            .map_err(|e| invalid("<root>", &format!("{}: {}", path.display(), e)))?;
        Config::parse(&text)
    }

    /// Applies positional `n trials [seed]` arguments on top of the file
    /// settings.
    pub fn apply_args<I: Iterator<Item = String>>(&mut self, args: I) -> Result<()> {
        let args: Vec<String> = args.collect();
        if args.len() > 3 {
            return Err(invalid("<args>", "expected at most: n trials [seed]"));
        }
        if let Some(n) = args.get(0) {
            self.grid_size = n.parse().map_err(|_| invalid("n", "expected an integer"))?;
        }
        if let Some(trials) = args.get(1) {
            self.trials = trials.parse().map_err(|_| invalid("trials", "expected an integer"))?;
        }
        if let Some(seed) = args.get(2) {
            self.seed = Some(seed.parse().map_err(|_| invalid("seed", "expected a non-negative integer"))?);
        }
        Ok(())
    }

    /// Logs go to stderr, and to `log_file` as well when one is set, so
    /// stdout stays reserved for results.
    pub fn init_logger(&self) -> Result<()> {
        let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
        loggers.push(WriteLogger::new(self.log_level, simplelog::Config::default(), stderr()));
        if let Some(ref path) = self.log_file {
            let file = File::create(path)
                .map_err(|e| invalid("log_file", &format!("{}: {}", path.display(), e)))?;
            loggers.push(WriteLogger::new(self.log_level, simplelog::Config::default(), file));
        }
        // a logger may already be installed, e.g. by a test harness
        let _ = CombinedLogger::init(loggers);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_keeps_defaults() {
        assert_eq!(Config::parse("{}").unwrap(), Config::default());
    }

    #[test]
    fn reads_every_key() {
        let config = Config::parse(
            r#"{"log_level": "debug", "log_file": "run.log", "n": 20, "trials": 5, "seed": 42}"#).unwrap();
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_file, Some(PathBuf::from("run.log")));
        assert_eq!(config.grid_size, 20);
        assert_eq!(config.trials, 5);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn rejects_bad_values() {
        let err = Config::parse(r#"{"n": "big"}"#).unwrap_err();
        assert_eq!(err, Error::InvalidConfig { key: "n".to_string(), reason: "expected an integer".to_string() });
        assert!(Config::parse(r#"{"log_level": "loud"}"#).is_err());
        assert!(Config::parse(r#"{"seed": -4}"#).is_err());
        assert!(Config::parse("[1, 2]").is_err());
        assert!(Config::parse("not json").unwrap_err().is_invalid_argument());
    }

    #[test]
    fn null_keeps_the_default() {
        let config = Config::parse(
            r#"{"log_level": null, "log_file": null, "n": null, "trials": null, "seed": null}"#).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn integers_must_fit_the_platform() {
        let result = Config::parse(r#"{"n": 9223372036854775807}"#);
        if cfg!(target_pointer_width = "64") {
            assert_eq!(result.unwrap().grid_size, isize::max_value());
        } else {
            assert_eq!(result.unwrap_err(), Error::InvalidConfig {
                key: "n".to_string(),
                reason: "out of range for this platform".to_string(),
            });
        }
    }

    #[test]
    fn args_override_file() {
        let mut config = Config::parse(r#"{"n": 20, "trials": 5}"#).unwrap();
        config.apply_args(vec!["64".to_string()].into_iter()).unwrap();
        assert_eq!(config.grid_size, 64);
        assert_eq!(config.trials, 5);

        config.apply_args(vec!["8", "3", "11"].into_iter().map(String::from)).unwrap();
        assert_eq!((config.grid_size, config.trials, config.seed), (8, 3, Some(11)));
    }

    #[test]
    fn rejects_bad_args() {
        let mut config = Config::default();
        assert!(config.apply_args(vec!["x".to_string()].into_iter()).is_err());
        assert!(config.apply_args(vec!["1", "2", "3", "4"].into_iter().map(String::from)).is_err());
    }
}
