//! End-to-end tests across analysis, reordering, layout and formatting
//!
//! Exercises the public surface the way an embedding renderer would:
//! configuration from JSON, a context running the pipeline, inert layout
//! output that survives serialization, and batch entry points.

use std::io::Cursor;

use blitz_rtl::cultural::{FormatFeatures, FormattingKind};
use blitz_rtl::layout::{
    AdjustmentType, AdjustmentValue, HorizontalAttribute, Insets, LayoutElement, TextAlignment,
};
use blitz_rtl::{
    adapt, analyze, analyze_batch, format, image_mirror, mirror_image, process,
    process_batch_async, BidiOptions, ElementRegistry, FormattingContext, LayoutOptions,
    ProcessingState, RtlContext, RtlError, RtlLayoutResult, RtlSupportConfiguration,
    TextDirection,
};

fn toolbar() -> ElementRegistry {
    ElementRegistry::new()
        .with(
            "back_button.leading",
            LayoutElement::Constraint {
                attribute: HorizontalAttribute::Leading,
                constant: 12.0,
            },
        )
        .with(
            "back_button.icon",
            LayoutElement::Image {
                resource: "chevron_left".to_string(),
                direction_sensitive: true,
            },
        )
        .with(
            "share_button.icon",
            LayoutElement::Image {
                resource: "share".to_string(),
                direction_sensitive: true,
            },
        )
        .with("title", LayoutElement::TextAlignment(TextAlignment::Natural))
        .with("content", LayoutElement::Insets(Insets::new(16.0, 8.0)))
}

fn targets(registry: &ElementRegistry) -> Vec<String> {
    registry.ids().map(str::to_string).collect()
}

#[cfg(test)]
mod pipeline_tests {
    use super::*;

    #[test]
    fn test_configured_pipeline() {
        let config = RtlSupportConfiguration::from_json(
            r#"{
                "preferred_languages": ["ar", "fa"],
                "mirroring_rules": { "chevron_left": "chevron_right" },
                "default_locale": "ar-SA"
            }"#,
        )
        .unwrap();
        let context = RtlContext::new(config).unwrap();
        let registry = toolbar();

        let outcome = context.run("مرحبا بالعالم", &registry, &targets(&registry));
        assert_eq!(outcome.final_state(), ProcessingState::Completed);

        let report = outcome.result.unwrap();
        let layout = report.layout.unwrap();
        assert!(layout.is_rtl());
        assert_eq!(layout.mirrored_resources, vec!["share"]);

        let icon = layout.adjustments_for("back_button.icon").next().unwrap();
        assert_eq!(icon.adjustment_type, AdjustmentType::ImageSubstitution);
        assert_eq!(
            icon.adjusted_value,
            AdjustmentValue::Resource("chevron_right".to_string())
        );

        // Natural alignment already follows the writing direction
        assert_eq!(layout.adjustments_for("title").count(), 0);
        assert_eq!(
            layout
                .adjustments_for("content")
                .next()
                .map(|a| a.adjusted_value.clone()),
            Some(AdjustmentValue::Insets(Insets::new(8.0, 16.0)))
        );
    }

    #[test]
    fn test_layout_result_is_serializable() {
        let text = "שלום עולם";
        let registry = toolbar();
        let result = adapt(
            &analyze(text, None).unwrap(),
            &process(text, &BidiOptions::default()).unwrap(),
            &LayoutOptions::for_registry(registry),
        )
        .unwrap();

        let json = result.to_json().unwrap();
        assert!(json.contains("\"semantic_direction\":\"Rtl\""));
        assert_eq!(RtlLayoutResult::from_json(&json).unwrap(), result);
    }

    #[test]
    fn test_unknown_element_is_rejected() {
        let text = "مرحبا";
        let direction = analyze(text, None).unwrap();
        let bidi = process(text, &BidiOptions::default()).unwrap();
        let registry = toolbar();
        let options = LayoutOptions {
            targets: vec!["title".to_string(), "does_not_exist".to_string()],
            ..LayoutOptions::for_registry(registry.clone())
        };

        let err = adapt(&direction, &bidi, &options).unwrap_err();
        assert!(matches!(err, RtlError::LayoutAdaptationFailed(ref msg) if msg.contains("does_not_exist")));
        assert_eq!(options.registry, registry);
    }

    #[test]
    fn test_processing_result_json() {
        let result = process("(Hello)", &BidiOptions::default().with_base_direction(TextDirection::Rtl))
            .unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let parsed: blitz_rtl::BidiProcessingResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }

    #[test]
    fn test_formatting_round_trip() {
        let text = "الإجمالي 2,500.75 ريال? موعد التسليم 2024-03-15";
        let formatted = format(text, "ar-SA", &FormattingContext::default()).unwrap();

        assert!(formatted.text.contains("٢٬٥٠٠٫٧٥"));
        assert!(formatted.text.contains('؟'));
        assert!(formatted
            .formatting
            .iter()
            .any(|entry| matches!(entry.kind, FormattingKind::CalendarHint(_))));
        assert_eq!(formatted.undo(), text);

        for entry in &formatted.formatting {
            assert_eq!(&text[entry.original_range.clone()], entry.original);
            assert_eq!(&formatted.text[entry.formatted_range.clone()], entry.replacement);
        }
    }

    #[test]
    fn test_formatting_without_features() {
        let context = FormattingContext::default().with_features(FormatFeatures::empty());
        let formatted = format("العدد 42?", "ar", &context).unwrap();
        assert_eq!(formatted.text, "العدد 42?");
        assert!(formatted.formatting.is_empty());
    }

    #[test]
    fn test_batch_isolates_failures() {
        let texts = vec!["Hello", "", "مرحبا"];
        let results = analyze_batch(&texts, Some("ar"));
        assert!(results[0].is_ok());
        assert_eq!(results[1].as_ref().unwrap_err(), &RtlError::EmptyText);
        assert_eq!(
            results[2].as_ref().unwrap().detected_language_hints,
            vec!["ar"]
        );
    }

    #[test]
    fn test_async_batch_matches_sync() {
        let texts = vec![
            "السعر هو 1234 دولار".to_string(),
            "Hello مرحبا".to_string(),
        ];
        let options = BidiOptions::default();
        let results = tokio_test::block_on(process_batch_async(texts.clone(), options.clone()));

        for (text, result) in texts.iter().zip(results) {
            assert_eq!(result.unwrap(), process(text, &options).unwrap());
        }
    }

    #[test]
    fn test_mirror_layout_resources() {
        let text = "שלום";
        let result = adapt(
            &analyze(text, None).unwrap(),
            &process(text, &BidiOptions::default()).unwrap(),
            &LayoutOptions::for_registry(toolbar()),
        )
        .unwrap();

        let icon = image::RgbaImage::from_fn(2, 2, |x, _| {
            if x == 0 {
                image::Rgba([0, 0, 0, 255])
            } else {
                image::Rgba([255, 255, 255, 255])
            }
        });
        let mut png = Vec::new();
        icon.write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();

        let mirrored = image_mirror::mirror_resources(&result, |_| Ok(png.clone())).unwrap();
        assert_eq!(mirrored.len(), result.mirrored_resources.len());

        let flipped = image::load_from_memory(&mirror_image(&png).unwrap())
            .unwrap()
            .to_rgba8();
        assert_eq!(flipped.get_pixel(0, 0), &image::Rgba([255, 255, 255, 255]));
    }
}
