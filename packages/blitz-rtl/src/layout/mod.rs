//! Layout adaptation
//!
//! Produces serializable instructions (semantic direction, constraint
//! flips, icon substitutions) for an external rendering layer.

pub mod adapter;
pub mod types;

pub use adapter::{adapt, is_semantic_rtl};
pub use types::{
    AdjustmentType, AdjustmentValue, ElementRegistry, HorizontalAttribute, Insets,
    LayoutAdjustment, LayoutElement, LayoutOptions, RtlLayoutResult, TextAlignment,
};
