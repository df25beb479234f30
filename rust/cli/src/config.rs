use carddraw_engine::config::DeckConfiguration;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub deck_sizes: Vec<usize>,
    pub min_card_count: usize,
    pub max_card_count: usize,
    pub min_hand_size: usize,
    pub max_hand_size: usize,
    pub outdir: String,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub deck_sizes: ValueSource,
    pub min_card_count: ValueSource,
    pub max_card_count: ValueSource,
    pub min_hand_size: ValueSource,
    pub max_hand_size: ValueSource,
    pub outdir: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            deck_sizes: ValueSource::Default,
            min_card_count: ValueSource::Default,
            max_card_count: ValueSource::Default,
            min_hand_size: ValueSource::Default,
            max_hand_size: ValueSource::Default,
            outdir: ValueSource::Default,
            seed: ValueSource::Default,
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
            deck_sizes: vec![60, 53],
            min_card_count: 1,
            max_card_count: 32,
            min_hand_size: 1,
            max_hand_size: 16,
            outdir: "mtg_out".into(),
            seed: None,
        }
    }
}

impl Config {
    /// Engine bounds for one deck size.
    pub fn deck_configuration(&self, deck_size: usize) -> Result<DeckConfiguration, ConfigError> {
        DeckConfiguration::new(
            deck_size,
            self.min_card_count,
            self.max_card_count,
            self.min_hand_size,
            self.max_hand_size,
        )
        .map_err(|e| ConfigError::Invalid(format!("deck size {}: {}", deck_size, e)))
    }

    /// The deck size commands use when none is given.
    pub fn primary_deck_size(&self) -> usize {
        self.deck_sizes.first().copied().unwrap_or(60)
    }
}

/// Command-line overrides; `None` leaves the resolved value alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub deck_sizes: Option<Vec<usize>>,
    pub min_card_count: Option<usize>,
    pub max_card_count: Option<usize>,
    pub min_hand_size: Option<usize>,
    pub max_hand_size: Option<usize>,
    pub outdir: Option<String>,
    pub seed: Option<u64>,
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
    resolve(&Overrides::default())
}

/// Defaults, then the TOML file named by `CARDDRAW_CONFIG`, then `CARDDRAW_*`
/// environment variables, then `overrides`.
pub fn resolve(overrides: &Overrides) -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("CARDDRAW_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.deck_sizes {
            cfg.deck_sizes = v;
            sources.deck_sizes = ValueSource::File;
        }
        if let Some(v) = f.min_card_count {
            cfg.min_card_count = v;
            sources.min_card_count = ValueSource::File;
        }
        if let Some(v) = f.max_card_count {
            cfg.max_card_count = v;
            sources.max_card_count = ValueSource::File;
        }
        if let Some(v) = f.min_hand_size {
            cfg.min_hand_size = v;
            sources.min_hand_size = ValueSource::File;
        }
        if let Some(v) = f.max_hand_size {
            cfg.max_hand_size = v;
            sources.max_hand_size = ValueSource::File;
        }
        if let Some(v) = f.outdir {
            cfg.outdir = v;
            sources.outdir = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Ok(sizes) = std::env::var("CARDDRAW_DECK_SIZES")
        && !sizes.is_empty()
    {
        cfg.deck_sizes = parse_list(&sizes)
            .ok_or_else(|| ConfigError::Invalid("Invalid deck sizes".into()))?;
        sources.deck_sizes = ValueSource::Env;
    }
    if let Some(v) = env_usize("CARDDRAW_MIN_CARDS")? {
        cfg.min_card_count = v;
        sources.min_card_count = ValueSource::Env;
    }
    if let Some(v) = env_usize("CARDDRAW_MAX_CARDS")? {
        cfg.max_card_count = v;
        sources.max_card_count = ValueSource::Env;
    }
    if let Some(v) = env_usize("CARDDRAW_MIN_HAND")? {
        cfg.min_hand_size = v;
        sources.min_hand_size = ValueSource::Env;
    }
    if let Some(v) = env_usize("CARDDRAW_MAX_HAND")? {
        cfg.max_hand_size = v;
        sources.max_hand_size = ValueSource::Env;
    }
    if let Ok(dir) = std::env::var("CARDDRAW_OUTDIR")
        && !dir.is_empty()
    {
        cfg.outdir = dir;
        sources.outdir = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var("CARDDRAW_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }

    apply_overrides(&mut cfg, &mut sources, overrides);

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn apply_overrides(cfg: &mut Config, sources: &mut ConfigSources, o: &Overrides) {
    if let Some(v) = &o.deck_sizes
        && !v.is_empty()
    {
        cfg.deck_sizes = v.clone();
        sources.deck_sizes = ValueSource::Cli;
    }
    if let Some(v) = o.min_card_count {
        cfg.min_card_count = v;
        sources.min_card_count = ValueSource::Cli;
    }
    if let Some(v) = o.max_card_count {
        cfg.max_card_count = v;
        sources.max_card_count = ValueSource::Cli;
    }
    if let Some(v) = o.min_hand_size {
        cfg.min_hand_size = v;
        sources.min_hand_size = ValueSource::Cli;
    }
    if let Some(v) = o.max_hand_size {
        cfg.max_hand_size = v;
        sources.max_hand_size = ValueSource::Cli;
    }
    if let Some(v) = &o.outdir {
        cfg.outdir = v.clone();
        sources.outdir = ValueSource::Cli;
    }
    if let Some(v) = o.seed {
        cfg.seed = Some(v);
        sources.seed = ValueSource::Cli;
    }
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    deck_sizes: Option<Vec<usize>>,
    #[serde(default)]
    min_card_count: Option<usize>,
    #[serde(default)]
    max_card_count: Option<usize>,
    #[serde(default)]
    min_hand_size: Option<usize>,
    #[serde(default)]
    max_hand_size: Option<usize>,
    #[serde(default)]
    outdir: Option<String>,
    #[serde(default)]
    seed: Option<u64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.deck_sizes.is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: at least one deck size is required".into(),
        ));
    }
    if cfg.outdir.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: outdir must not be empty".into(),
        ));
    }
    for &size in &cfg.deck_sizes {
        cfg.deck_configuration(size)
            .map_err(|e| ConfigError::Invalid(format!("Invalid configuration: {}", e)))?;
    }
    Ok(())
}

fn env_usize(key: &str) -> Result<Option<usize>, ConfigError> {
    match std::env::var(key) {
        Ok(v) if !v.is_empty() => v
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}", key))),
        _ => Ok(None),
    }
}

fn parse_list(s: &str) -> Option<Vec<usize>> {
    s.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(|part| part.trim().parse().ok())
        .collect()
}
