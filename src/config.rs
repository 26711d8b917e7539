use super::*;

use log::LevelFilter;

pub const MAX_DEPTH_KEY: &str = "DHALL_KERNEL_MAX_DEPTH";
pub const LOG_LEVEL_KEY: &str = "DHALL_KERNEL_LOG";

pub const DEFAULT_MAX_DEPTH: u32 = 1024;

/// Settings for a checking session.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Config {
    /// How deeply the checker may recurse into a term before giving up.
    pub max_depth: u32,
    pub log_level: LevelFilter,
}

#[derive(Debug, Fail)]
pub enum ConfigError {
    #[fail(display = "invalid value {:?} for {}: {}", value, key, reason)]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl Default for Config {
    fn default() -> Config {
        Config {
            max_depth: DEFAULT_MAX_DEPTH,
            log_level: LevelFilter::Warn,
        }
    }
}

impl Config {
    /// Builds a config from the given key-value source, falling back to the defaults for keys
    /// that are absent.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(value) = lookup(MAX_DEPTH_KEY) {
            config.max_depth = match u32::from_str(value.trim()) {
                Ok(0) => {
                    return Err(ConfigError::Invalid {
                        key: MAX_DEPTH_KEY,
                        value,
                        reason: String::from("depth must be positive"),
                    });
                },
                Ok(depth) => depth,
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        key: MAX_DEPTH_KEY,
                        value,
                        reason: e.to_string(),
                    });
                },
            };
        }

        if let Some(value) = lookup(LOG_LEVEL_KEY) {
            config.log_level = match LevelFilter::from_str(value.trim()) {
                Ok(level) => level,
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        key: LOG_LEVEL_KEY,
                        value,
                        reason: e.to_string(),
                    });
                },
            };
        }

        debug!("loaded config: {:?}", config);
        Ok(config)
    }

    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lookup_in(vars: HashMap<&'static str, &'static str>) -> impl Fn(&str) -> Option<String> {
        move |key: &str| vars.get(key).map(|value| value.to_string())
    }

    #[test]
    fn missing_keys_use_defaults() {
        let config = unwrap!(Config::from_lookup(|_| None));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn reads_both_keys() {
        let vars = hashmap! {
            MAX_DEPTH_KEY => "64",
            LOG_LEVEL_KEY => "trace",
        };
        let config = unwrap!(Config::from_lookup(lookup_in(vars)));
        assert_eq!(config.max_depth, 64);
        assert_eq!(config.log_level, LevelFilter::Trace);
    }

    #[test]
    fn rejects_bad_depth() {
        for bad in &["zero", "-1", "0"] {
            let vars = hashmap! { MAX_DEPTH_KEY => *bad };
            match Config::from_lookup(lookup_in(vars)) {
                Err(ConfigError::Invalid { key, .. }) => assert_eq!(key, MAX_DEPTH_KEY),
                Ok(config) => panic!("accepted {:?} as {:?}", bad, config),
            }
        }
    }

    #[test]
    fn rejects_bad_log_level() {
        let vars = hashmap! { LOG_LEVEL_KEY => "loud" };
        let err = match Config::from_lookup(lookup_in(vars)) {
            Err(err) => err,
            Ok(config) => panic!("accepted a bogus log level: {:?}", config),
        };
        assert!(err.to_string().contains(LOG_LEVEL_KEY));
    }
}
