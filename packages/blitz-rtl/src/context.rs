//! RTL processing context
//!
//! Owns a validated configuration and an analysis cache, and runs the
//! analyze → process → adapt pipeline. Callers hold as many contexts as
//! they like; nothing is global.

use serde::{Deserialize, Serialize};

use crate::analysis::{TextDirection, TextDirectionResult};
use crate::bidi::{self, BidiProcessingResult};
use crate::cache::{AnalysisCache, CacheStats};
use crate::config::RtlSupportConfiguration;
use crate::cultural::{self, FormattingContext, RtlFormattedText};
use crate::error::{RtlError, RtlResult};
use crate::layout::{self, ElementRegistry, RtlLayoutResult};

/// Pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessingState {
    Ready,
    Analyzing,
    Processing,
    Adapting,
    Completed,
    Error,
}

/// Everything a successful pipeline run produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineReport {
    pub direction: TextDirectionResult,
    pub bidi: BidiProcessingResult,
    /// `None` when automatic layout adaptation is disabled
    pub layout: Option<RtlLayoutResult>,
}

/// Result of [`RtlContext::run`] with the stages it passed through
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutcome {
    pub states: Vec<ProcessingState>,
    pub result: RtlResult<PipelineReport>,
}

impl PipelineOutcome {
    #[inline]
    pub fn final_state(&self) -> ProcessingState {
        self.states.last().copied().unwrap_or(ProcessingState::Ready)
    }
}

/// Configured entry point to the RTL core
#[derive(Debug)]
pub struct RtlContext {
    config: RtlSupportConfiguration,
    cache: AnalysisCache,
}

impl RtlContext {
    pub fn new(config: RtlSupportConfiguration) -> RtlResult<Self> {
        config.validate()?;
        let cache = AnalysisCache::new(config.cache_capacity);
        Ok(Self { config, cache })
    }

    #[inline]
    pub fn config(&self) -> &RtlSupportConfiguration {
        &self.config
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Analyze `text`, rejecting results below the configured confidence
    pub fn analyze(&self, text: &str, language_hint: Option<&str>) -> RtlResult<TextDirectionResult> {
        self.check_length(text)?;
        let result = self.cache.analyze(text, language_hint)?;
        if result.confidence < self.config.minimum_confidence {
            return Err(RtlError::DirectionDetectionFailed(format!(
                "confidence {:.2} below minimum {:.2}",
                result.confidence, self.config.minimum_confidence
            )));
        }
        Ok(TextDirectionResult::clone(&result))
    }

    fn check_length(&self, text: &str) -> RtlResult<()> {
        let limit = self.config.bidi.max_text_length;
        if text.len() > limit {
            log::warn!(
                "rejecting {} byte text before analysis, limit is {} bytes",
                text.len(),
                limit
            );
            return Err(RtlError::BidiProcessingFailed(format!(
                "text length {} exceeds maximum of {} bytes",
                text.len(),
                limit
            )));
        }
        Ok(())
    }

    pub fn process(&self, text: &str) -> RtlResult<BidiProcessingResult> {
        bidi::process(text, &self.config.bidi)
    }

    pub fn adapt(
        &self,
        direction: &TextDirectionResult,
        bidi: &BidiProcessingResult,
        registry: &ElementRegistry,
        targets: &[String],
    ) -> RtlResult<RtlLayoutResult> {
        let options = self
            .config
            .layout_options(registry.clone(), targets.to_vec());
        layout::adapt(direction, bidi, &options)
    }

    /// Format `text` for the configured default locale
    pub fn format(&self, text: &str, direction: TextDirection) -> RtlResult<RtlFormattedText> {
        cultural::format(
            text,
            &self.config.default_locale,
            &FormattingContext::new(direction),
        )
    }

    /// Run analysis, reordering and (if enabled) layout adaptation
    pub fn run(&self, text: &str, registry: &ElementRegistry, targets: &[String]) -> PipelineOutcome {
        let mut states = vec![ProcessingState::Ready];
        let result = self.run_stages(text, registry, targets, &mut states);

        states.push(if result.is_ok() {
            ProcessingState::Completed
        } else {
            ProcessingState::Error
        });

        if let Err(err) = &result {
            log::debug!("pipeline failed after {:?}: {}", states, err);
        }

        PipelineOutcome { states, result }
    }

    fn run_stages(
        &self,
        text: &str,
        registry: &ElementRegistry,
        targets: &[String],
        states: &mut Vec<ProcessingState>,
    ) -> RtlResult<PipelineReport> {
        states.push(ProcessingState::Analyzing);
        self.check_length(text)?;
        let direction = self.analyze(text, self.config.language_hint(text))?;

        states.push(ProcessingState::Processing);
        let bidi = self.process(text)?;

        let layout = if self.config.enable_auto_layout_adaptation {
            states.push(ProcessingState::Adapting);
            Some(self.adapt(&direction, &bidi, registry, targets)?)
        } else {
            None
        };

        Ok(PipelineReport {
            direction,
            bidi,
            layout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{LayoutElement, TextAlignment};

    fn registry() -> ElementRegistry {
        ElementRegistry::new().with("title", LayoutElement::TextAlignment(TextAlignment::Left))
    }

    #[test]
    fn test_full_pipeline() {
        let context = RtlContext::new(RtlSupportConfiguration::default()).unwrap();
        let outcome = context.run("مرحبا بالعالم", &registry(), &["title".to_string()]);

        assert_eq!(
            outcome.states,
            vec![
                ProcessingState::Ready,
                ProcessingState::Analyzing,
                ProcessingState::Processing,
                ProcessingState::Adapting,
                ProcessingState::Completed,
            ]
        );
        let report = outcome.result.unwrap();
        assert_eq!(report.direction.direction, TextDirection::Rtl);
        assert_eq!(report.bidi.paragraph_level, 1);
        assert_eq!(report.layout.map(|layout| layout.adjustments.len()), Some(1));
    }

    #[test]
    fn test_pipeline_error_state() {
        let context = RtlContext::new(RtlSupportConfiguration::default()).unwrap();
        let outcome = context.run("   ", &registry(), &[]);
        assert_eq!(outcome.final_state(), ProcessingState::Error);
        assert_eq!(
            outcome.states,
            vec![ProcessingState::Ready, ProcessingState::Analyzing, ProcessingState::Error]
        );
        assert_eq!(outcome.result, Err(RtlError::EmptyText));
    }

    #[test]
    fn test_adaptation_disabled() {
        let config = RtlSupportConfiguration {
            enable_auto_layout_adaptation: false,
            ..RtlSupportConfiguration::default()
        };
        let context = RtlContext::new(config).unwrap();
        let outcome = context.run("שלום", &registry(), &["missing".to_string()]);

        assert!(!outcome.states.contains(&ProcessingState::Adapting));
        assert!(outcome.result.unwrap().layout.is_none());
    }

    #[test]
    fn test_minimum_confidence() {
        let config = RtlSupportConfiguration {
            minimum_confidence: 0.9,
            ..RtlSupportConfiguration::default()
        };
        let context = RtlContext::new(config).unwrap();

        // Mixed text reports 0.8
        assert!(matches!(
            context.analyze("Hello مرحبا", None),
            Err(RtlError::DirectionDetectionFailed(_))
        ));
        assert!(context.analyze("مرحبا بالعالم", None).is_ok());
    }

    #[test]
    fn test_invalid_configuration_rejected() {
        let config = RtlSupportConfiguration {
            minimum_confidence: -0.1,
            ..RtlSupportConfiguration::default()
        };
        assert!(matches!(
            RtlContext::new(config),
            Err(RtlError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_analysis_is_cached() {
        let context = RtlContext::new(RtlSupportConfiguration::default()).unwrap();
        context.analyze("שלום", None).unwrap();
        context.analyze("שלום", None).unwrap();
        assert_eq!(context.cache_stats().hits, 1);
    }

    #[test]
    fn test_oversized_text_rejected_before_analysis() {
        let mut config = RtlSupportConfiguration::default();
        config.bidi.max_text_length = 1024;
        let context = RtlContext::new(config).unwrap();
        let huge = "שלום ".repeat(2_000);

        let outcome = context.run(&huge, &registry(), &["title".to_string()]);
        assert_eq!(
            outcome.states,
            vec![ProcessingState::Ready, ProcessingState::Analyzing, ProcessingState::Error]
        );
        assert!(matches!(outcome.result, Err(RtlError::BidiProcessingFailed(_))));
        assert!(matches!(
            context.analyze(&huge, None),
            Err(RtlError::BidiProcessingFailed(_))
        ));

        let stats = context.cache_stats();
        assert_eq!((stats.entries, stats.misses), (0, 0));
    }

    #[test]
    fn test_preferred_language_is_hint() {
        let config = RtlSupportConfiguration {
            preferred_languages: vec!["he".to_string(), "fa".to_string()],
            ..RtlSupportConfiguration::default()
        };
        let context = RtlContext::new(config).unwrap();
        let outcome = context.run("مرحبا بالعالم", &registry(), &["title".to_string()]);
        let hints = outcome.result.unwrap().direction.detected_language_hints;
        assert_eq!(hints.first().map(String::as_str), Some("fa"));
    }

    #[test]
    fn test_format_uses_default_locale() {
        let context = RtlContext::new(RtlSupportConfiguration::default()).unwrap();
        let formatted = context.format("العدد 42", TextDirection::Rtl).unwrap();
        assert_eq!(formatted.text, "العدد ٤٢");
    }
}
