use serde::{Deserialize, Serialize};
use std::fs;

use twofold_ai::STRATEGY_NAMES;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub strategy: String,
    pub games: u32,
    pub max_moves: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub strategy: ValueSource,
    pub games: ValueSource,
    pub max_moves: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            strategy: ValueSource::Default,
            games: ValueSource::Default,
            max_moves: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            strategy: "baseline".into(),
            games: 10,
            max_moves: 100_000,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_with_sources_from(|key| std::env::var(key).ok())
}

/// Resolves configuration with `env` standing in for the process
/// environment. Precedence, lowest first: defaults, the TOML file named by
/// `TWOFOLD_CONFIG`, then individual `TWOFOLD_*` variables.
pub fn load_with_sources_from<F>(env: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = env("TWOFOLD_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.strategy {
            cfg.strategy = v;
            sources.strategy = ValueSource::File;
        }
        if let Some(v) = f.games {
            cfg.games = v;
            sources.games = ValueSource::File;
        }
        if let Some(v) = f.max_moves {
            cfg.max_moves = v;
            sources.max_moves = ValueSource::File;
        }
    }

    if let Some(seed) = env("TWOFOLD_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(strategy) = env("TWOFOLD_STRATEGY")
        && !strategy.is_empty()
    {
        cfg.strategy = strategy;
        sources.strategy = ValueSource::Env;
    }
    if let Some(games) = env("TWOFOLD_GAMES")
        && !games.is_empty()
    {
        cfg.games = games
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid games".into()))?;
        sources.games = ValueSource::Env;
    }
    if let Some(max_moves) = env("TWOFOLD_MAX_MOVES")
        && !max_moves.is_empty()
    {
        cfg.max_moves = max_moves
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid max_moves".into()))?;
        sources.max_moves = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    strategy: Option<String>,
    #[serde(default)]
    games: Option<u32>,
    #[serde(default)]
    max_moves: Option<u32>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.games == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: games must be >=1".into(),
        ));
    }
    if cfg.max_moves == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: max_moves must be >=1".into(),
        ));
    }
    if !STRATEGY_NAMES.contains(&cfg.strategy.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown strategy '{}'",
            cfg.strategy
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let resolved = load_with_sources_from(env_of(&[])).unwrap();
        assert_eq!(resolved.config, Config::default());
        assert_eq!(resolved.sources.games, ValueSource::Default);
    }

    #[test]
    fn file_values_override_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = 9\nstrategy = \"random\"\ngames = 3").unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let resolved = load_with_sources_from(env_of(&[("TWOFOLD_CONFIG", path.as_str())])).unwrap();
        assert_eq!(resolved.config.seed, Some(9));
        assert_eq!(resolved.config.strategy, "random");
        assert_eq!(resolved.config.games, 3);
        assert_eq!(resolved.sources.seed, ValueSource::File);
        assert_eq!(resolved.sources.max_moves, ValueSource::Default);
    }

    #[test]
    fn env_values_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = 9\ngames = 3").unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let resolved = load_with_sources_from(env_of(&[
            ("TWOFOLD_CONFIG", path.as_str()),
            ("TWOFOLD_SEED", "100"),
        ]))
        .unwrap();
        assert_eq!(resolved.config.seed, Some(100));
        assert_eq!(resolved.sources.seed, ValueSource::Env);
        assert_eq!(resolved.config.games, 3);
        assert_eq!(resolved.sources.games, ValueSource::File);
    }

    #[test]
    fn rejects_zero_games() {
        let err = load_with_sources_from(env_of(&[("TWOFOLD_GAMES", "0")])).unwrap_err();
        assert!(err.to_string().contains("games must be >=1"));
    }

    #[test]
    fn rejects_unknown_strategy() {
        let err = load_with_sources_from(env_of(&[("TWOFOLD_STRATEGY", "oracle")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref m) if m.contains("oracle")));
    }

    #[test]
    fn rejects_malformed_seed() {
        let err = load_with_sources_from(env_of(&[("TWOFOLD_SEED", "abc")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_unknown_file_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "board_size = 5").unwrap();
        let path = file.path().to_string_lossy().into_owned();
        let err = load_with_sources_from(env_of(&[("TWOFOLD_CONFIG", path.as_str())])).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
