//! Agent discovery
//!
//! Each immediate subdirectory of the root that holds a metadata file
//! (`agent.json` by default) describes one agent.

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Fallback for any missing text field
pub const MISSING: &str = "-";

/// Agent metadata as read from its metadata file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    /// Stable identifier, used as the title when `name` is absent
    #[serde(default)]
    pub id: Option<String>,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub version: Option<String>,

    /// Link target for the card
    #[serde(default)]
    pub repository: Option<String>,

    /// Directory the metadata was loaded from
    #[serde(skip)]
    pub dir: PathBuf,
}

impl Agent {
    /// Parse a single metadata file
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read agent file: {}", path.display()))?;

        let agent: Agent = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse agent file: {}", path.display()))?;

        Ok(agent)
    }

    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or(MISSING)
    }

    /// Name, falling back to the id
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| self.id())
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or(MISSING)
    }

    /// Version text, `None` when absent, empty or the `-` placeholder
    pub fn known_version(&self) -> Option<&str> {
        self.version.as_deref().filter(|v| !v.is_empty() && *v != MISSING)
    }

    /// Repository URL, `None` when absent or empty
    pub fn repository(&self) -> Option<&str> {
        self.repository.as_deref().filter(|r| !r.is_empty())
    }

    pub fn icon_path(&self, icon_file: &str) -> PathBuf {
        self.dir.join(icon_file)
    }

    fn sort_key(&self) -> String {
        self.display_name().to_lowercase()
    }
}

/// Discover all agents under `root`, sorted case-insensitively by display name
///
/// Subdirectories without `metadata_file` are skipped. A metadata file that
/// fails to parse aborts discovery.
pub fn discover_agents(root: &Path, metadata_file: &str) -> Result<Vec<Agent>> {
    let mut agents = Vec::new();

    let walker = WalkDir::new(root).min_depth(1).max_depth(1).sort_by_file_name();

    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to read agents directory: {}", root.display()))?;
        let path = entry.path();

        if !path.is_dir() {
            continue;
        }

        let metadata_path = path.join(metadata_file);
        if !metadata_path.is_file() {
            log::debug!("Skipping {}: no {}", path.display(), metadata_file);
            continue;
        }

        let mut agent = Agent::load(&metadata_path)?;
        agent.dir = path.to_path_buf();
        log::info!("Found agent: {} at {}", agent.display_name(), path.display());
        agents.push(agent);
    }

    // Stable sort keeps directory order for equal names
    agents.sort_by_cached_key(Agent::sort_key);

    Ok(agents)
}
