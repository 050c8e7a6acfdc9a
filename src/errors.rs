//! Error Types
//!
//! This module defines the error types used throughout the engine.
//!
//! # Overview
//!
//! The top-level error type [`StartupError`] covers every way bringing up the
//! content engine can fail:
//! - Configuration parsing and validation
//! - Anchor binding validation
//! - Content loading (model or audio, per pair)
//! - Tracking provider failures
//!
//! A missing animation clip is not an error: the content is used as a static
//! model and a warning is logged.
//!
//! # Usage
//!
//! ```rust,ignore
//! use folio::errors::Result;
//!
//! fn bring_up() -> Result<()> {
//!     // Operations that may fail return Result
//!     Ok(())
//! }
//! ```

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which half of a content pair failed to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Model,
    Audio,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Model => f.write_str("model"),
            Self::Audio => f.write_str("audio"),
        }
    }
}

/// A content pair could not be turned into a bundle.
///
/// No partial bundle is ever produced alongside this error.
#[derive(Error, Debug)]
#[error("failed to load {resource} for content {index}: {source}")]
pub struct LoadError {
    /// Logical content index of the failed pair.
    pub index: usize,
    /// Whether the model or the audio failed.
    pub resource: ResourceKind,
    /// Underlying cause reported by the content provider.
    #[source]
    pub source: anyhow::Error,
}

impl LoadError {
    #[must_use]
    pub fn model(index: usize, source: impl Into<anyhow::Error>) -> Self {
        Self {
            index,
            resource: ResourceKind::Model,
            source: source.into(),
        }
    }

    #[must_use]
    pub fn audio(index: usize, source: impl Into<anyhow::Error>) -> Self {
        Self {
            index,
            resource: ResourceKind::Audio,
            source: source.into(),
        }
    }
}

/// Failures reported by a tracking provider.
#[derive(Error, Debug)]
pub enum TrackingError {
    /// The provider has no target for this anchor index.
    #[error("anchor {0} is not known to the tracking provider")]
    UnknownAnchor(usize),

    /// `start()` failed.
    #[error("tracking provider failed to start: {0}")]
    StartFailed(String),
}

/// The anchor binding table does not fit the deployment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    /// A content index resolves to an anchor the tracker does not have.
    #[error("content {content_index} resolves to anchor {anchor_index}, but only {anchor_count} anchors exist")]
    AnchorOutOfRange {
        content_index: usize,
        anchor_index: usize,
        anchor_count: usize,
    },

    /// An override is keyed by a content index that is not configured.
    #[error("remap entry for content {content_index} is outside the {content_count} configured pairs")]
    ContentOutOfRange {
        content_index: usize,
        content_count: usize,
    },
}

/// Configuration could not be read or is inconsistent.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no content variant for locale '{0}'")]
    UnknownLocale(String),

    #[error("variant '{locale}' lists {models} models but {audio} audio clips")]
    PairCountMismatch {
        locale: String,
        models: usize,
        audio: usize,
    },

    #[error("content pairs must be indexed in order: expected {expected}, found {found}")]
    NonContiguousPairs { expected: usize, found: usize },

    #[error("target size must be a positive finite number, got {0}")]
    InvalidTargetSize(f32),

    #[error("vertical offset must be finite, got {0}")]
    InvalidVerticalOffset(f32),

    #[error("interaction assigned to content {index}, but only {content_count} pairs are configured")]
    InteractionOutOfRange { index: usize, content_count: usize },

    #[error("invalid interaction on content {index}: {reason}")]
    InvalidInteraction { index: usize, reason: &'static str },
}

/// The main error type returned while bringing the engine up.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Binding(#[from] BindingError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Tracking(#[from] TrackingError),
}

/// Alias for `Result<T, StartupError>`.
pub type Result<T> = std::result::Result<T, StartupError>;
