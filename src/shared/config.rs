//! Layout configuration
//!
//! Defaults for new layouts, loaded from `layout.toml` (or a `.json` file).
//! Every field is optional in the file; missing ones take the built-in
//! defaults below.

use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Align, Edges};
use crate::layout::{AnchorItem, FlowItem};

/// Layout configuration loaded from layout.toml
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Gaps within this distance of zero snap to zero on anchor import
    pub import_snap_epsilon: i32,

    /// Content alignment of new flow layouts
    pub content_align: Align,

    /// Item template for new flow layouts
    pub flow: FlowDefaults,

    /// Item template for new anchor layouts
    pub anchor: AnchorDefaults,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            import_snap_epsilon: 1,
            content_align: Align::Default,
            flow: FlowDefaults::default(),
            anchor: AnchorDefaults::default(),
        }
    }
}

/// Defaults applied to flow items that leave a field unset
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowDefaults {
    pub align: Align,
    pub weight: Option<u32>,
    pub min_width: Option<i32>,
    pub min_height: Option<i32>,
    pub padding: Edges<Option<i32>>,
}

impl FlowDefaults {
    /// Template item carrying these defaults
    pub fn template(&self) -> FlowItem {
        let mut item = FlowItem::new().with_padding(self.padding).with_align(self.align);
        item.weight = self.weight;
        item.common.min_width = self.min_width;
        item.common.min_height = self.min_height;
        item
    }
}

/// Defaults applied to anchor items that leave a field unset
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorDefaults {
    pub min_width: Option<i32>,
    pub min_height: Option<i32>,
    pub gaps: Edges<Option<i32>>,
}

impl AnchorDefaults {
    /// Template item carrying these defaults
    pub fn template(&self) -> AnchorItem {
        let mut item = AnchorItem::new();
        item.gaps = self.gaps;
        item.common.min_width = self.min_width;
        item.common.min_height = self.min_height;
        item
    }
}

impl LayoutConfig {
    /// Find layout.toml in standard locations
    pub fn find_config_path() -> Option<PathBuf> {
        // user config dir first, then cwd
        let candidates = [
            dirs::config_dir().map(|p| p.join("flowanchor").join("layout.toml")),
            Some(PathBuf::from("layout.toml")),
        ];

        candidates.into_iter().flatten().find(|p| p.exists())
    }

    /// Load configuration from file, returning defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::find_config_path() else {
            debug!("No layout.toml found, using defaults");
            return Self::default();
        };
        match Self::load_from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load configuration from a specific path; `.json` files are JSON, anything else TOML
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let config = if is_json {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };
        debug!("Loaded layout config from {}", path.display());
        Ok(config)
    }

    /// Save configuration as TOML
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
