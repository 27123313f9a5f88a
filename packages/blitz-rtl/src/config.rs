//! RTL support configuration
//!
//! Plain data handed in by the locale/configuration provider. Every field
//! has a default so partial JSON documents deserialize.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use unicode_script::Script;

use crate::bidi::BidiOptions;
use crate::cultural::Locale;
use crate::error::{RtlError, RtlResult};
use crate::languages;
use crate::layout::{ElementRegistry, LayoutOptions};

/// Configuration for an [`RtlContext`](crate::RtlContext)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RtlSupportConfiguration {
    /// Produce layout adjustments as part of the pipeline
    pub enable_auto_layout_adaptation: bool,
    /// Languages expected in the content, most preferred first. The first
    /// one whose script occurs in a text becomes its language hint.
    pub preferred_languages: Vec<String>,
    /// Resource to mirrored-resource substitutions
    pub mirroring_rules: BTreeMap<String, String>,
    pub mirror_icons: bool,
    pub flip_constraints: bool,
    /// Locale used for cultural formatting
    pub default_locale: String,
    /// Direction results below this confidence are rejected
    pub minimum_confidence: f32,
    /// Entries kept by the analysis cache
    pub cache_capacity: usize,
    pub bidi: BidiOptions,
}

impl Default for RtlSupportConfiguration {
    fn default() -> Self {
        Self {
            enable_auto_layout_adaptation: true,
            preferred_languages: vec!["ar".to_string(), "he".to_string()],
            mirroring_rules: BTreeMap::new(),
            mirror_icons: true,
            flip_constraints: true,
            default_locale: "ar".to_string(),
            minimum_confidence: 0.5,
            cache_capacity: 256,
            bidi: BidiOptions::default(),
        }
    }
}

impl RtlSupportConfiguration {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> RtlResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> RtlResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check field ranges and language support
    pub fn validate(&self) -> RtlResult<()> {
        if let Some(unsupported) = self
            .preferred_languages
            .iter()
            .find(|code| languages::rules_for(code).is_none())
        {
            let supported: Vec<&str> = languages::supported_languages().collect();
            return Err(RtlError::ConfigurationError(format!(
                "unsupported preferred language '{}' (supported: {})",
                unsupported,
                supported.join(", ")
            )));
        }

        if !(0.0..=1.0).contains(&self.minimum_confidence) {
            return Err(RtlError::ConfigurationError(format!(
                "minimum confidence {} outside [0, 1]",
                self.minimum_confidence
            )));
        }

        if self.bidi.max_text_length == 0 {
            return Err(RtlError::ConfigurationError(
                "maximum text length must be positive".to_string(),
            ));
        }

        if self.cache_capacity == 0 {
            return Err(RtlError::ConfigurationError(
                "cache capacity must be positive".to_string(),
            ));
        }

        Locale::parse(&self.default_locale)
            .map_err(|err| RtlError::ConfigurationError(err.to_string()))?;

        Ok(())
    }

    /// First preferred language written in a script that occurs in `text`
    pub fn language_hint(&self, text: &str) -> Option<&str> {
        let scripts: Vec<Script> = languages::detect_languages(text)
            .into_iter()
            .filter_map(languages::rules_for)
            .map(|rules| rules.script)
            .collect();

        self.preferred_languages
            .iter()
            .map(String::as_str)
            .find(|code| {
                languages::rules_for(code).is_some_and(|rules| scripts.contains(&rules.script))
            })
    }

    /// Layout options for the given elements under this configuration
    pub fn layout_options(&self, registry: ElementRegistry, targets: Vec<String>) -> LayoutOptions {
        LayoutOptions {
            registry,
            targets,
            mirror_icons: self.mirror_icons,
            flip_constraints: self.flip_constraints,
            mirroring_rules: self.mirroring_rules.clone(),
        }
    }
}
