//! Deployment Configuration
//!
//! Everything that differs between deployments of the same book lives here:
//! the per-locale model/audio lists, the anchor remap overrides, interaction
//! assignments and the scale/offset constants. Configurations are plain JSON.
//!
//! ```rust,ignore
//! let config = FolioConfig::load("book.json")?;
//! let pairs = config.pairs("en")?;
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::anchors::AnchorBindingTable;
use crate::assets::{ContentPair, LoadSettings};
use crate::errors::ConfigError;
use crate::interaction::InteractionKind;

/// What startup does when a content pair fails to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Abort the whole startup; no anchor is activated.
    #[default]
    FailFast,
    /// Log the failed pair and bring up the others.
    SkipFailed,
}

/// Audio emitter settings applied to every loaded clip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    pub looping: bool,
    pub ref_distance: f32,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            looping: true,
            ref_distance: 1000.0,
        }
    }
}

/// Ordered model and audio lists for one locale.
///
/// Models are usually shared between locales while audio is narrated per
/// language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentVariant {
    pub locale: String,
    pub models: Vec<String>,
    pub audio: Vec<String>,
}

impl ContentVariant {
    /// Zips the two lists into indexed pairs.
    pub fn pairs(&self) -> Result<Vec<ContentPair>, ConfigError> {
        if self.models.len() != self.audio.len() {
            return Err(ConfigError::PairCountMismatch {
                locale: self.locale.clone(),
                models: self.models.len(),
                audio: self.audio.len(),
            });
        }

        Ok(self
            .models
            .iter()
            .zip(&self.audio)
            .enumerate()
            .map(|(index, (model, audio))| ContentPair::new(index, model.clone(), audio.clone()))
            .collect())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Largest bounding-box extent every model is normalized to.
    pub target_size: f32,
    /// Vertical baseline offset applied to every model.
    pub vertical_offset: f32,
    pub audio: AudioSettings,
    /// Number of targets compiled into the tracker, when known.
    pub anchor_count: Option<usize>,
    pub anchor_remap: AnchorBindingTable,
    pub interactions: BTreeMap<usize, InteractionKind>,
    pub failure_policy: FailurePolicy,
    pub variants: Vec<ContentVariant>,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            target_size: 1.0,
            vertical_offset: -0.4,
            audio: AudioSettings::default(),
            anchor_count: None,
            anchor_remap: AnchorBindingTable::identity(),
            interactions: BTreeMap::new(),
            failure_policy: FailurePolicy::FailFast,
            variants: Vec::new(),
        }
    }
}

impl FolioConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.load_settings().validate()?;
        for variant in &self.variants {
            variant.pairs()?;
        }
        for (&index, kind) in &self.interactions {
            kind.validate(index)?;
        }
        Ok(())
    }

    /// Content pairs for `locale`, in index order.
    pub fn pairs(&self, locale: &str) -> Result<Vec<ContentPair>, ConfigError> {
        self.variants
            .iter()
            .find(|variant| variant.locale == locale)
            .ok_or_else(|| ConfigError::UnknownLocale(locale.to_string()))?
            .pairs()
    }

    #[must_use]
    pub fn locales(&self) -> Vec<&str> {
        self.variants.iter().map(|v| v.locale.as_str()).collect()
    }

    #[must_use]
    pub fn load_settings(&self) -> LoadSettings {
        LoadSettings {
            target_size: self.target_size,
            vertical_offset: self.vertical_offset,
            audio: self.audio,
        }
    }
}
