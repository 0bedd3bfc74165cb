//! Relative-anchoring placement parameters.
//!
//! A relative container places each child against its parent or against a
//! named sibling. The references here are weak, name-based lookups; nothing
//! in this module resolves them. The relative layout pass owns resolution,
//! including what happens when a name never matches a sibling.

use serde::{Deserialize, Serialize};

use crate::margin::Margin;
use crate::parameter::LayoutType;

/// Anchor position for a widget in a relative container.
///
/// The `Parent*` variants (plus `CenterInParent`) anchor against the parent's
/// own edges and center. The directional variants anchor against the sibling
/// named by the parameter's `relative_to_widget_name`; the second word picks
/// which edges of the two widgets line up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RelativeAlign {
    /// No anchoring; the pass leaves the widget where it already is.
    #[default]
    None,

    ParentTopLeft,
    ParentTopCenter,
    ParentTopRight,
    ParentCenterLeft,
    CenterInParent,
    ParentCenterRight,
    ParentBottomLeft,
    ParentBottomCenter,
    ParentBottomRight,

    /// Above the target sibling, left edges aligned.
    AboveLeft,
    AboveCenter,
    AboveRight,
    LeftOfTop,
    LeftOfCenter,
    LeftOfBottom,
    RightOfTop,
    RightOfCenter,
    RightOfBottom,
    /// Below the target sibling, left edges aligned.
    BelowLeft,
    BelowCenter,
    BelowRight,
}

/// Placement of a widget inside a relative container.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RelativeLayoutParameter {
    pub margin: Margin,
    pub align: RelativeAlign,
    /// Name of the sibling this widget anchors against. A lookup key, not a
    /// reference to the widget itself; it may be empty or match nothing until
    /// (or even during) layout.
    pub relative_to_widget_name: String,
    /// Name this parameter registers in its relative container, so that
    /// siblings can anchor against this widget by name.
    pub relative_name: String,
    /// Set by the relative layout pass once this widget's position has been
    /// resolved. Per-pass working state, not part of the value's identity:
    /// never serialized, and a clone always starts unplaced.
    #[serde(skip)]
    placed: bool,
}

impl RelativeLayoutParameter {
    /// Create a parameter with zero margin, no anchoring, and empty names.
    pub fn new() -> Self {
        Self::default()
    }

    /// The layout strategy this parameter belongs to.
    #[inline]
    pub const fn layout_type(&self) -> LayoutType {
        LayoutType::Relative
    }

    pub fn margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    pub fn align(mut self, align: RelativeAlign) -> Self {
        self.align = align;
        self
    }

    pub fn relative_to_widget_name(mut self, name: impl Into<String>) -> Self {
        self.relative_to_widget_name = name.into();
        self
    }

    pub fn relative_name(mut self, name: impl Into<String>) -> Self {
        self.relative_name = name.into();
        self
    }

    /// Whether the current layout pass has resolved this widget's position.
    pub fn is_placed(&self) -> bool {
        self.placed
    }

    /// Mark this parameter as resolved (or not) for the current pass.
    ///
    /// Driven by the relative layout pass; clearing the flag between passes is
    /// also the pass's responsibility.
    pub fn set_placed(&mut self, placed: bool) {
        self.placed = placed;
    }
}

impl Clone for RelativeLayoutParameter {
    fn clone(&self) -> Self {
        // A clone has not been seen by any layout pass yet.
        Self {
            margin: self.margin,
            align: self.align,
            relative_to_widget_name: self.relative_to_widget_name.clone(),
            relative_name: self.relative_name.clone(),
            placed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_align_default_is_none() {
        assert_eq!(RelativeAlign::default(), RelativeAlign::None);
    }

    #[test]
    fn relative_new_defaults() {
        let p = RelativeLayoutParameter::new();
        assert_eq!(p.margin, Margin::ZERO);
        assert_eq!(p.align, RelativeAlign::None);
        assert!(p.relative_to_widget_name.is_empty());
        assert!(p.relative_name.is_empty());
        assert!(!p.is_placed());
        assert_eq!(p.layout_type(), LayoutType::Relative);
    }

    #[test]
    fn relative_builder_roundtrip() {
        let p = RelativeLayoutParameter::new()
            .margin(Margin::all(2.0))
            .align(RelativeAlign::ParentBottomRight)
            .relative_to_widget_name("status_bar")
            .relative_name("hint");
        assert_eq!(p.margin, Margin::all(2.0));
        assert_eq!(p.align, RelativeAlign::ParentBottomRight);
        assert_eq!(p.relative_to_widget_name, "status_bar");
        assert_eq!(p.relative_name, "hint");
    }

    #[test]
    fn relative_accepts_empty_and_unresolvable_names() {
        // No validation at this layer; resolution is the layout pass's job.
        let p = RelativeLayoutParameter::new()
            .relative_to_widget_name("")
            .relative_name("no widget by this name exists");
        assert_eq!(p.relative_to_widget_name, "");
        assert_eq!(p.relative_name, "no widget by this name exists");
    }

    #[test]
    fn placed_flag_roundtrip() {
        let mut p = RelativeLayoutParameter::new();
        p.set_placed(true);
        assert!(p.is_placed());
        p.set_placed(false);
        assert!(!p.is_placed());
    }

    #[test]
    fn relative_clone_copies_value_fields() {
        let p = RelativeLayoutParameter::new()
            .margin(Margin::new(1.0, 2.0, 3.0, 4.0))
            .align(RelativeAlign::CenterInParent)
            .relative_to_widget_name("title")
            .relative_name("subtitle");
        let c = p.clone();
        assert_eq!(c.margin, p.margin);
        assert_eq!(c.align, RelativeAlign::CenterInParent);
        assert_eq!(c.relative_to_widget_name, "title");
        assert_eq!(c.relative_name, "subtitle");
    }

    #[test]
    fn relative_clone_is_never_placed() {
        let mut p = RelativeLayoutParameter::new().align(RelativeAlign::AboveCenter);
        p.set_placed(true);

        let c = p.clone();
        assert!(p.is_placed());
        assert!(!c.is_placed());
    }

    #[test]
    fn relative_clone_is_detached_from_source() {
        let p = RelativeLayoutParameter::new().relative_to_widget_name("title");
        let mut c = p.clone();
        c.relative_to_widget_name = "body".to_string();
        assert_eq!(p.relative_to_widget_name, "title");
    }

    #[test]
    fn placed_flag_is_not_serialized() {
        let mut p = RelativeLayoutParameter::new().relative_name("badge");
        p.set_placed(true);

        let json = serde_json::to_string(&p).unwrap();
        assert!(!json.contains("placed"));

        let back: RelativeLayoutParameter = serde_json::from_str(&json).unwrap();
        assert_eq!(back.relative_name, "badge");
        assert!(!back.is_placed());
    }
}
