//! Locale-keyed guideline rule sets
//!
//! Rule sets are loaded once at startup and shared read-only for the
//! process lifetime. The built-in English and Polish sets ship embedded;
//! deployments can replace or extend them per locale from files.

use std::sync::Arc;

use indexmap::IndexMap;
use octofhir_hra_types::PlanConfig;
use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::error::GuidelineConfigError;

/// Locale whose rule set answers requests for unregistered locales
pub const BASELINE_LOCALE: &str = "en";

const BUILTIN_EN_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/resources/guidelines.en.json"
));
const BUILTIN_PL_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/resources/guidelines.pl.json"
));

static BUILTIN_REGISTRY: Lazy<Result<GuidelineRegistry, GuidelineConfigError>> = Lazy::new(|| {
    let registry = GuidelineRegistry::new();
    registry.load_json(BASELINE_LOCALE, BUILTIN_EN_JSON)?;
    registry.load_json("pl", BUILTIN_PL_JSON)?;
    Ok(registry)
});

/// Locale-keyed rule sets for plan generation.
///
/// Cloning is cheap and clones share the underlying table, so a registry
/// configured at startup can be handed to every engine.
#[derive(Debug, Clone, Default)]
pub struct GuidelineRegistry {
    inner: Arc<RwLock<IndexMap<String, PlanConfig>>>,
}

impl GuidelineRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the shared registry preloaded with the built-in English
    /// and Polish rule sets
    pub fn builtin() -> Result<Self, GuidelineConfigError> {
        BUILTIN_REGISTRY.clone()
    }

    /// Register or replace the rule set for a locale
    pub fn insert(&self, locale: impl Into<String>, config: PlanConfig) {
        self.inner.write().insert(locale.into(), config);
    }

    /// Load a rule-set document for a locale from a JSON string
    pub fn load_json(
        &self,
        locale: impl Into<String>,
        json: &str,
    ) -> Result<(), GuidelineConfigError> {
        let config: PlanConfig =
            serde_json::from_str(json).map_err(|e| GuidelineConfigError::parse(e.to_string()))?;
        self.insert(locale, config);
        Ok(())
    }

    /// Load a rule-set document for a locale from a JSON file at startup
    pub fn load_json_file(
        &self,
        locale: impl Into<String>,
        path: impl AsRef<std::path::Path>,
    ) -> Result<(), GuidelineConfigError> {
        let json =
            std::fs::read_to_string(path).map_err(|e| GuidelineConfigError::io(e.to_string()))?;
        self.load_json(locale, &json)
    }

    /// Rule set for a locale, if registered
    pub fn config_for(&self, locale: &str) -> Option<PlanConfig> {
        self.inner.read().get(locale).cloned()
    }

    /// Registered locales in registration order
    pub fn locales(&self) -> Vec<String> {
        self.inner.read().keys().cloned().collect()
    }
}
