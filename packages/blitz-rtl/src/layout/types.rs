//! Layout adaptation types
//!
//! Inert descriptions of UI elements and the adjustments a renderer
//! should apply to them. Nothing here holds a handle to a real UI object.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analysis::TextDirection;
use crate::error::RtlResult;

/// Horizontal anchor of a layout constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HorizontalAttribute {
    Leading,
    Trailing,
    Left,
    Right,
    CenterX,
}

impl HorizontalAttribute {
    /// Attribute on the opposite side
    #[inline]
    pub const fn flipped(self) -> Self {
        match self {
            HorizontalAttribute::Leading => HorizontalAttribute::Trailing,
            HorizontalAttribute::Trailing => HorizontalAttribute::Leading,
            HorizontalAttribute::Left => HorizontalAttribute::Right,
            HorizontalAttribute::Right => HorizontalAttribute::Left,
            HorizontalAttribute::CenterX => HorizontalAttribute::CenterX,
        }
    }
}

/// Paragraph alignment of a text element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextAlignment {
    Left,
    Right,
    Center,
    Justified,
    /// Follows the writing direction
    Natural,
}

impl TextAlignment {
    #[inline]
    pub const fn flipped(self) -> Self {
        match self {
            TextAlignment::Left => TextAlignment::Right,
            TextAlignment::Right => TextAlignment::Left,
            other => other,
        }
    }
}

/// Horizontal padding or margin pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
}

impl Insets {
    pub const fn new(left: f32, right: f32) -> Self {
        Self { left, right }
    }

    #[inline]
    pub const fn flipped(self) -> Self {
        Self {
            left: self.right,
            right: self.left,
        }
    }

    #[inline]
    pub fn is_symmetric(&self) -> bool {
        self.left == self.right
    }
}

/// A UI element registered for adaptation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LayoutElement {
    Constraint {
        attribute: HorizontalAttribute,
        constant: f32,
    },
    Image {
        resource: String,
        /// Icons such as arrows that point along the reading direction
        direction_sensitive: bool,
    },
    TextAlignment(TextAlignment),
    Insets(Insets),
}

/// Elements the caller registered, keyed by identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ElementRegistry {
    elements: BTreeMap<String, LayoutElement>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element, returning the one it replaced
    pub fn register(
        &mut self,
        id: impl Into<String>,
        element: LayoutElement,
    ) -> Option<LayoutElement> {
        self.elements.insert(id.into(), element)
    }

    /// Builder form of [`register`](Self::register)
    pub fn with(mut self, id: impl Into<String>, element: LayoutElement) -> Self {
        self.register(id, element);
        self
    }

    #[inline]
    pub fn get(&self, id: &str) -> Option<&LayoutElement> {
        self.elements.get(id)
    }

    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.elements.keys().map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Layout adaptation options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    pub registry: ElementRegistry,
    /// Element identifiers to adapt, in output order
    pub targets: Vec<String>,
    pub mirror_icons: bool,
    pub flip_constraints: bool,
    /// Resource to mirrored-resource substitutions
    pub mirroring_rules: BTreeMap<String, String>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            registry: ElementRegistry::default(),
            targets: Vec::new(),
            mirror_icons: true,
            flip_constraints: true,
            mirroring_rules: BTreeMap::new(),
        }
    }
}

impl LayoutOptions {
    /// Options targeting every registered element
    pub fn for_registry(registry: ElementRegistry) -> Self {
        let targets = registry.ids().map(str::to_string).collect();
        Self {
            registry,
            targets,
            ..Self::default()
        }
    }
}

/// What a layout adjustment changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdjustmentType {
    ConstraintAttribute,
    ConstraintConstant,
    ImageSubstitution,
    ImageMirroring,
    TextAlignment,
    Insets,
}

/// Value before or after an adjustment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AdjustmentValue {
    Attribute(HorizontalAttribute),
    Constant(f32),
    Resource(String),
    Alignment(TextAlignment),
    Insets(Insets),
}

/// One instruction for the rendering layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutAdjustment {
    pub target: String,
    pub adjustment_type: AdjustmentType,
    pub original_value: AdjustmentValue,
    pub adjusted_value: AdjustmentValue,
}

/// Declarative adaptation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RtlLayoutResult {
    /// Ltr or Rtl
    pub semantic_direction: TextDirection,
    pub adjustments: Vec<LayoutAdjustment>,
    /// Resources whose pixels must be flipped horizontally
    pub mirrored_resources: Vec<String>,
}

impl RtlLayoutResult {
    #[inline]
    pub fn is_rtl(&self) -> bool {
        self.semantic_direction.is_rtl()
    }

    /// Adjustments for one element
    pub fn adjustments_for<'a>(
        &'a self,
        target: &'a str,
    ) -> impl Iterator<Item = &'a LayoutAdjustment> + 'a {
        self.adjustments
            .iter()
            .filter(move |adjustment| adjustment.target == target)
    }

    pub fn to_json(&self) -> RtlResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> RtlResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
