use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::errors::BindingError;

/// One logical-to-physical mapping entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnchorBinding {
    pub content_index: usize,
    pub anchor_index: usize,
}

/// Maps logical content indices to the tracker's anchor indices.
///
/// Identity unless an override says otherwise. Overrides exist for books
/// whose physical page order differs from the content order. The table is
/// neither required to be injective nor contiguous on the anchor side.
///
/// Serialized as a JSON object of overrides, e.g. `{ "3": 4, "4": 5 }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnchorBindingTable {
    overrides: FxHashMap<usize, usize>,
}

impl AnchorBindingTable {
    #[must_use]
    pub fn identity() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_override(mut self, content_index: usize, anchor_index: usize) -> Self {
        self.overrides.insert(content_index, anchor_index);
        self
    }

    #[must_use]
    pub fn from_overrides(overrides: impl IntoIterator<Item = (usize, usize)>) -> Self {
        Self {
            overrides: overrides.into_iter().collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn resolve(&self, content_index: usize) -> usize {
        self.overrides
            .get(&content_index)
            .copied()
            .unwrap_or(content_index)
    }

    #[inline]
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.overrides
            .iter()
            .all(|(content, anchor)| content == anchor)
    }

    /// All bindings for content indices `0..content_count`.
    #[must_use]
    pub fn bindings(&self, content_count: usize) -> Vec<AnchorBinding> {
        (0..content_count)
            .map(|content_index| AnchorBinding {
                content_index,
                anchor_index: self.resolve(content_index),
            })
            .collect()
    }

    /// Checks the table against the configured content and, when known, the
    /// tracker's anchor count.
    pub fn validate(
        &self,
        content_count: usize,
        anchor_count: Option<usize>,
    ) -> Result<(), BindingError> {
        let stray = self
            .overrides
            .keys()
            .copied()
            .filter(|&content_index| content_index >= content_count)
            .min();
        if let Some(content_index) = stray {
            return Err(BindingError::ContentOutOfRange {
                content_index,
                content_count,
            });
        }

        let Some(anchor_count) = anchor_count else {
            return Ok(());
        };
        for binding in self.bindings(content_count) {
            if binding.anchor_index >= anchor_count {
                return Err(BindingError::AnchorOutOfRange {
                    content_index: binding.content_index,
                    anchor_index: binding.anchor_index,
                    anchor_count,
                });
            }
        }
        Ok(())
    }
}
