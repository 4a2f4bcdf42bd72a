use std::{env, fmt, str::FromStr};

const ENV_KEYS: &[&str] = &["APP_ENV", "FLASK_ENV"];
const DEBUG_KEYS: &[&str] = &["APP_DEBUG", "FLASK_DEBUG"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl FromStr for AppEnv {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(AppEnv::Development),
            "production" | "prod" => Ok(AppEnv::Production),
            other => Err(format!("unknown environment '{}'", other)),
        }
    }
}

impl fmt::Display for AppEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppEnv::Development => write!(f, "development"),
            AppEnv::Production => write!(f, "production"),
        }
    }
}

/// Why a setting ended up at its default
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fallback {
    Unset { keys: String, default: String },
    Invalid { key: String, reason: String, default: String },
}

impl fmt::Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fallback::Unset { keys, default } => write!(f, "{keys} not set, using default: {default}"),
            Fallback::Invalid { key, reason, default } => {
                write!(f, "Invalid {key} value: {reason}, using default: {default}")
            }
        }
    }
}

/// Settings read from the environment (and `.env`, if present)
#[derive(Debug, Clone)]
pub struct Config {
    pub env: AppEnv,
    pub debug: bool,
}

impl Config {
    /// Read the process environment. Fallbacks are returned rather than
    /// logged because this runs before the logger is installed.
    pub fn load() -> (Self, Vec<Fallback>) {
        // Missing .env is the normal case in production
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<Fallback>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut fallbacks = Vec::new();

        let (env, fallback) = try_load(&lookup, ENV_KEYS, AppEnv::Development);
        fallbacks.extend(fallback);
        let (debug, fallback) = try_load(&lookup, DEBUG_KEYS, Flag(false));
        fallbacks.extend(fallback);

        (Self { env, debug: debug.0 }, fallbacks)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { env: AppEnv::Development, debug: false }
    }
}

/// Boolean accepting the usual spellings of true/false
#[derive(Debug, Clone, Copy)]
struct Flag(bool);

impl FromStr for Flag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(Flag(true)),
            "0" | "false" | "no" | "off" | "" => Ok(Flag(false)),
            other => Err(format!("expected a boolean, got '{}'", other)),
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// The first key that is set wins; later keys are older aliases
fn try_load<T, F>(lookup: &F, keys: &[&str], default: T) -> (T, Option<Fallback>)
where
    T: FromStr + fmt::Display,
    T::Err: fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let found = keys.iter().find_map(|&key| lookup(key).map(|raw| (key, raw)));

    match found {
        Some((key, raw)) => match raw.parse() {
            Ok(value) => (value, None),
            Err(e) => {
                let fallback = Fallback::Invalid {
                    key: key.to_string(),
                    reason: e.to_string(),
                    default: default.to_string(),
                };
                (default, Some(fallback))
            }
        },
        None => {
            let fallback = Fallback::Unset { keys: keys.join("/"), default: default.to_string() };
            (default, Some(fallback))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_app_env_parsing() {
        assert_eq!("production".parse::<AppEnv>(), Ok(AppEnv::Production));
        assert_eq!(" Development ".parse::<AppEnv>(), Ok(AppEnv::Development));
        assert_eq!("prod".parse::<AppEnv>(), Ok(AppEnv::Production));
        assert!("staging".parse::<AppEnv>().is_err());
    }

    #[test]
    fn test_flag_parsing() {
        assert!("True".parse::<Flag>().unwrap().0);
        assert!("1".parse::<Flag>().unwrap().0);
        assert!(!"false".parse::<Flag>().unwrap().0);
        assert!(!"".parse::<Flag>().unwrap().0);
        assert!("maybe".parse::<Flag>().is_err());
    }

    #[test]
    fn test_invalid_value_is_reported() {
        let (config, fallbacks) = Config::from_lookup(lookup_from(&[
            ("APP_ENV", "staging"),
            ("APP_DEBUG", "true"),
        ]));

        assert_eq!(config.env, AppEnv::Development);
        assert!(config.debug);
        assert_eq!(fallbacks, vec![Fallback::Invalid {
            key: "APP_ENV".to_string(),
            reason: "unknown environment 'staging'".to_string(),
            default: "development".to_string(),
        }]);
        assert_eq!(
            fallbacks[0].to_string(),
            "Invalid APP_ENV value: unknown environment 'staging', using default: development"
        );
    }

    #[test]
    fn test_unset_values_are_reported() {
        let (config, fallbacks) = Config::from_lookup(lookup_from(&[]));

        assert_eq!(config.env, AppEnv::Development);
        assert!(!config.debug);
        assert_eq!(fallbacks.len(), 2);
        assert_eq!(fallbacks[0].to_string(), "APP_ENV/FLASK_ENV not set, using default: development");
        assert_eq!(fallbacks[1].to_string(), "APP_DEBUG/FLASK_DEBUG not set, using default: false");
    }

    #[test]
    fn test_flask_names_are_accepted() {
        let (config, fallbacks) = Config::from_lookup(lookup_from(&[
            ("FLASK_ENV", "production"),
            ("FLASK_DEBUG", "True"),
        ]));

        assert_eq!(config.env, AppEnv::Production);
        assert!(config.debug);
        assert!(fallbacks.is_empty());
    }

    #[test]
    fn test_app_names_take_precedence() {
        let (config, _) = Config::from_lookup(lookup_from(&[
            ("APP_ENV", "development"),
            ("FLASK_ENV", "production"),
            ("APP_DEBUG", "false"),
            ("FLASK_DEBUG", "true"),
        ]));

        assert_eq!(config.env, AppEnv::Development);
        assert!(!config.debug);
    }

    #[test]
    fn test_invalid_flask_value_names_its_key() {
        let (_, fallbacks) = Config::from_lookup(lookup_from(&[
            ("APP_ENV", "production"),
            ("FLASK_DEBUG", "maybe"),
        ]));

        assert!(matches!(
            fallbacks.as_slice(),
            [Fallback::Invalid { key, .. }] if key == "FLASK_DEBUG"
        ));
    }
}
