//! BiDi processing validation
//!
//! Structural checks on a processing result before it leaves the engine.

use super::types::BidiProcessingResult;
use crate::error::{RtlError, RtlResult};

/// BiDi processing validation utilities
pub struct BidiValidator;

impl BidiValidator {
    /// Validate a processing result
    ///
    /// The visual order must be a permutation of the code point indices,
    /// the logical order its inverse, and the direction runs must tile the
    /// text without gaps or overlaps.
    pub fn validate(result: &BidiProcessingResult) -> RtlResult<()> {
        let length = result.source_text.chars().count();

        if result.visual_order.len() != length {
            return Err(RtlError::ProcessingError(
                "Visual order length mismatch".to_string(),
            ));
        }

        if result.logical_order.len() != length {
            return Err(RtlError::ProcessingError(
                "Logical order length mismatch".to_string(),
            ));
        }

        if result.levels.len() != length {
            return Err(RtlError::ProcessingError(
                "Embedding level count mismatch".to_string(),
            ));
        }

        let mut seen = vec![false; length];
        for (visual, &logical) in result.visual_order.iter().enumerate() {
            if logical >= length || seen[logical] {
                return Err(RtlError::ProcessingError(
                    "Visual order is not a permutation".to_string(),
                ));
            }
            seen[logical] = true;

            if result.logical_order[logical] != visual {
                return Err(RtlError::ProcessingError(
                    "Logical order is not the inverse of visual order".to_string(),
                ));
            }
        }

        let mut covered = 0;
        for run in &result.direction_runs {
            if run.start != covered || run.is_empty() {
                return Err(RtlError::ProcessingError(format!(
                    "Direction run {}..{} breaks coverage at {}",
                    run.start, run.end, covered
                )));
            }
            covered = run.end;
        }

        if covered != length {
            return Err(RtlError::ProcessingError(
                "Direction runs do not cover entire text".to_string(),
            ));
        }

        Ok(())
    }
}
