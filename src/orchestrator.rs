//! Startup Orchestration
//!
//! [`StartupOrchestrator`] brings the engine up in a fixed order:
//!
//! 1. Validate the load settings, the pairs, the anchor binding table and
//!    the interaction assignments. Nothing is loaded if the configuration is inconsistent.
//! 2. For each pair, in index order: load it, bind its animation, create its
//!    anchor on the tracker, build its lifecycle controller, register the
//!    animation with the shared clock and attach its interaction.
//! 3. Start the tracker, so no found/lost event can reach an anchor whose
//!    content is not bound yet.
//!
//! A load failure aborts startup before the tracker is started, unless the
//! deployment opted into [`FailurePolicy::SkipFailed`].

use std::collections::BTreeMap;

use crate::anchors::{AnchorBindingTable, LifecycleController, TrackingProvider};
use crate::assets::{ContentBundle, ContentLoader, ContentPair, ContentProvider, LoadSettings};
use crate::config::{FailurePolicy, FolioConfig};
use crate::errors::{ConfigError, Result};
use crate::interaction::InteractionKind;
use crate::runtime::ContentRuntime;

pub struct StartupOrchestrator {
    settings: LoadSettings,
    bindings: AnchorBindingTable,
    interactions: BTreeMap<usize, InteractionKind>,
    anchor_count: Option<usize>,
    failure_policy: FailurePolicy,
}

impl StartupOrchestrator {
    #[must_use]
    pub fn new(settings: LoadSettings, bindings: AnchorBindingTable) -> Self {
        Self {
            settings,
            bindings,
            interactions: BTreeMap::new(),
            anchor_count: None,
            failure_policy: FailurePolicy::FailFast,
        }
    }

    #[must_use]
    pub fn from_config(config: &FolioConfig) -> Self {
        Self {
            settings: config.load_settings(),
            bindings: config.anchor_remap.clone(),
            interactions: config.interactions.clone(),
            anchor_count: config.anchor_count,
            failure_policy: config.failure_policy,
        }
    }

    #[must_use]
    pub fn with_interaction(mut self, content_index: usize, kind: InteractionKind) -> Self {
        self.interactions.insert(content_index, kind);
        self
    }

    /// Anchor count to validate against when the tracker does not report one.
    #[must_use]
    pub fn with_anchor_count(mut self, anchor_count: usize) -> Self {
        self.anchor_count = Some(anchor_count);
        self
    }

    #[must_use]
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    #[inline]
    #[must_use]
    pub fn bindings(&self) -> &AnchorBindingTable {
        &self.bindings
    }

    /// Runs the full startup sequence.
    ///
    /// `pairs` must be indexed `0..pairs.len()` in order. On success the
    /// tracker has been started and the returned runtime is ready for
    /// [`ContentRuntime::update`].
    pub async fn run<P, T>(
        &self,
        pairs: &[ContentPair],
        content: &P,
        tracker: &mut T,
    ) -> Result<ContentRuntime>
    where
        P: ContentProvider,
        T: TrackingProvider,
    {
        self.validate(pairs, tracker.anchor_count())?;

        let loader = ContentLoader::new(content, self.settings);
        let mut runtime = ContentRuntime::new();

        for pair in pairs {
            let bundle = match loader.load(pair).await {
                Ok(bundle) => bundle,
                Err(err) => match self.failure_policy {
                    FailurePolicy::FailFast => {
                        log::error!(
                            "Failed to load {} for content {}. Startup aborted.",
                            err.resource,
                            err.index
                        );
                        return Err(err.into());
                    }
                    FailurePolicy::SkipFailed => {
                        log::warn!("Skipping content {}: {err}", err.index);
                        continue;
                    }
                },
            };

            self.install(bundle, &mut runtime, tracker)?;
        }

        tracker.start()?;
        log::info!(
            "Tracking started with {} bound contents ({} animated)",
            runtime.controllers.len(),
            runtime.scheduler.len()
        );

        Ok(runtime)
    }

    fn validate(&self, pairs: &[ContentPair], tracker_anchor_count: Option<usize>) -> Result<()> {
        self.settings.validate()?;

        for (expected, pair) in pairs.iter().enumerate() {
            if pair.index != expected {
                return Err(ConfigError::NonContiguousPairs {
                    expected,
                    found: pair.index,
                }
                .into());
            }
        }

        let anchor_count = tracker_anchor_count.or(self.anchor_count);
        self.bindings.validate(pairs.len(), anchor_count)?;

        for (&index, kind) in &self.interactions {
            if index >= pairs.len() {
                return Err(ConfigError::InteractionOutOfRange {
                    index,
                    content_count: pairs.len(),
                }
                .into());
            }
            kind.validate(index)?;
        }
        Ok(())
    }

    fn install<T: TrackingProvider>(
        &self,
        mut bundle: ContentBundle,
        runtime: &mut ContentRuntime,
        tracker: &mut T,
    ) -> Result<()> {
        let index = bundle.index;

        if !bundle.bind_animation() {
            log::warn!("No animations found in the model for content {index}");
        }

        let anchor_index = self.bindings.resolve(index);
        tracker.create_anchor(anchor_index)?;

        let ContentBundle {
            model,
            audio,
            animation,
            ..
        } = bundle;

        let stage = &mut runtime.stage;
        let model = stage.add_model(model);
        let audio = stage.add_audio(audio);
        let mixer = animation.map(|mixer| stage.add_mixer(mixer));

        runtime.add_controller(LifecycleController::new(
            index,
            anchor_index,
            model,
            audio,
            mixer,
        ));

        if let Some(key) = mixer {
            runtime.scheduler.register(key);
        }

        if let Some(kind) = self.interactions.get(&index) {
            runtime.interactions.attach(index, model, kind.build());
        }

        log::debug!("Content {index} bound to anchor {anchor_index}");
        Ok(())
    }
}
