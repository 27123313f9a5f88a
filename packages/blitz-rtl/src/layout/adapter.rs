//! Layout adapter
//!
//! Turns analyzer and reordering output into adjustment instructions for
//! the registered elements. The registry is only read.

use super::types::{
    AdjustmentType, AdjustmentValue, LayoutAdjustment, LayoutElement, LayoutOptions,
    RtlLayoutResult,
};
use crate::analysis::{TextDirection, TextDirectionResult};
use crate::bidi::BidiProcessingResult;
use crate::error::{RtlError, RtlResult};

/// Whether content should be laid out right-to-left
///
/// Mixed text follows its paragraph level.
#[inline]
pub fn is_semantic_rtl(direction: TextDirection, paragraph_level: u8) -> bool {
    match direction {
        TextDirection::Rtl => true,
        TextDirection::Mixed => paragraph_level % 2 == 1,
        TextDirection::Ltr | TextDirection::Neutral => false,
    }
}

/// Describe the adjustments for every target in `options`
///
/// Every target must be registered; the first unknown one fails the call
/// before any adjustment is produced.
pub fn adapt(
    direction: &TextDirectionResult,
    bidi: &BidiProcessingResult,
    options: &LayoutOptions,
) -> RtlResult<RtlLayoutResult> {
    if let Some(unknown) = options
        .targets
        .iter()
        .find(|target| !options.registry.contains(target.as_str()))
    {
        return Err(RtlError::LayoutAdaptationFailed(format!(
            "unknown element identifier '{}'",
            unknown
        )));
    }

    let rtl = is_semantic_rtl(direction.direction, bidi.paragraph_level);
    let mut result = RtlLayoutResult {
        semantic_direction: if rtl {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        },
        adjustments: Vec::new(),
        mirrored_resources: Vec::new(),
    };

    if !rtl {
        return Ok(result);
    }

    for target in &options.targets {
        if let Some(element) = options.registry.get(target) {
            adjust_element(target, element, options, &mut result);
        }
    }

    log::debug!(
        "layout adapted {} targets: {} adjustments, {} mirrored resources",
        options.targets.len(),
        result.adjustments.len(),
        result.mirrored_resources.len()
    );

    Ok(result)
}

fn adjust_element(
    target: &str,
    element: &LayoutElement,
    options: &LayoutOptions,
    result: &mut RtlLayoutResult,
) {
    let adjustments = &mut result.adjustments;
    let mirrored_resources = &mut result.mirrored_resources;
    let mut push = |adjustment_type, original_value, adjusted_value| {
        adjustments.push(LayoutAdjustment {
            target: target.to_string(),
            adjustment_type,
            original_value,
            adjusted_value,
        });
    };

    match element {
        LayoutElement::Constraint {
            attribute,
            constant,
        } => {
            if !options.flip_constraints {
                return;
            }
            let flipped = attribute.flipped();
            if flipped != *attribute {
                push(
                    AdjustmentType::ConstraintAttribute,
                    AdjustmentValue::Attribute(*attribute),
                    AdjustmentValue::Attribute(flipped),
                );
            }
            if *constant != 0.0 {
                push(
                    AdjustmentType::ConstraintConstant,
                    AdjustmentValue::Constant(*constant),
                    AdjustmentValue::Constant(-*constant),
                );
            }
        }
        LayoutElement::Image {
            resource,
            direction_sensitive,
        } => {
            if !options.mirror_icons || !direction_sensitive {
                return;
            }
            match options.mirroring_rules.get(resource) {
                Some(counterpart) => push(
                    AdjustmentType::ImageSubstitution,
                    AdjustmentValue::Resource(resource.clone()),
                    AdjustmentValue::Resource(counterpart.clone()),
                ),
                None => {
                    push(
                        AdjustmentType::ImageMirroring,
                        AdjustmentValue::Resource(resource.clone()),
                        AdjustmentValue::Resource(resource.clone()),
                    );
                    if !mirrored_resources.contains(resource) {
                        mirrored_resources.push(resource.clone());
                    }
                }
            }
        }
        LayoutElement::TextAlignment(alignment) => {
            let flipped = alignment.flipped();
            if flipped != *alignment {
                push(
                    AdjustmentType::TextAlignment,
                    AdjustmentValue::Alignment(*alignment),
                    AdjustmentValue::Alignment(flipped),
                );
            }
        }
        LayoutElement::Insets(insets) => {
            if !insets.is_symmetric() {
                push(
                    AdjustmentType::Insets,
                    AdjustmentValue::Insets(*insets),
                    AdjustmentValue::Insets(insets.flipped()),
                );
            }
        }
    }
}
