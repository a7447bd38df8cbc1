use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main generator configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub files: FilesConfig,
    /// Token in the template replaced by the rendered cards
    pub placeholder: String,
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory whose subdirectories are scanned for agents
    pub root: PathBuf,
    /// Template document, relative to root unless absolute
    pub template: PathBuf,
    /// Generated document, relative to root unless absolute
    pub output: PathBuf,
}

/// Per-agent file names looked up inside each agent directory
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FilesConfig {
    pub metadata: String,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Off => log::LevelFilter::Off,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: PathsConfig::default(),
            files: FilesConfig::default(),
            placeholder: "$$AGENTS_CARDS$$".to_string(),
            log_level: LogLevel::Warn,
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            template: PathBuf::from("docs").join("_index.mdx"),
            output: PathBuf::from("docs").join("index.mdx"),
        }
    }
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            metadata: "agent.json".to_string(),
            icon: "icon.svg".to_string(),
        }
    }
}

/// Result of resolving the config fallback chain
///
/// Loading runs before the logger exists, so the file used and any skipped
/// candidates are returned for `main` to log afterwards.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config came from, `None` for built-in defaults
    pub source: Option<PathBuf>,
    /// Candidates that existed but failed to load
    pub warnings: Vec<String>,
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<LoadedConfig> {
        // An explicit path must load
        if let Some(path) = config_path {
            let config =
                Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()))?;
            return Ok(LoadedConfig {
                config,
                source: Some(path.clone()),
                warnings: Vec::new(),
            });
        }

        let mut candidates = Vec::new();
        if let Ok(env_path) = std::env::var("AGENT_CARDS_CONFIG") {
            candidates.push((
                Self::expand_path(Path::new(&env_path)),
                "Failed to load config from AGENT_CARDS_CONFIG".to_string(),
            ));
        }
        candidates.push((PathBuf::from("agent-cards.yaml"), "Failed to load local config".to_string()));
        if let Some(config_dir) = dirs::config_dir() {
            let path = config_dir.join("agent-cards").join("agent-cards.yaml");
            let label = format!("Failed to load config from {}", path.display());
            candidates.push((path, label));
        }

        let mut warnings = Vec::new();
        for (path, label) in candidates {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(config) => {
                    return Ok(LoadedConfig {
                        config,
                        source: Some(path),
                        warnings,
                    });
                }
                Err(e) => warnings.push(format!("{}: {:#}", label, e)),
            }
        }

        Ok(LoadedConfig {
            config: Self::default(),
            source: None,
            warnings,
        })
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Root directory, with ~ and env vars expanded
    pub fn root_dir(&self) -> PathBuf {
        Self::expand_path(&self.paths.root)
    }

    pub fn template_path(&self) -> PathBuf {
        self.resolve(&self.paths.template)
    }

    pub fn output_path(&self) -> PathBuf {
        self.resolve(&self.paths.output)
    }

    /// Resolve a configured path against the root directory
    fn resolve(&self, path: &Path) -> PathBuf {
        let expanded = Self::expand_path(path);
        if expanded.is_absolute() {
            expanded
        } else {
            self.root_dir().join(expanded)
        }
    }

    /// Expand a path that may contain ~ or env vars
    pub fn expand_path(path: &Path) -> PathBuf {
        let path_str = path.to_string_lossy();
        let expanded = shellexpand::full(&path_str).unwrap_or_else(|_| path_str.clone());
        PathBuf::from(expanded.as_ref())
    }
}
