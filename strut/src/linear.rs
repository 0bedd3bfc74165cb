//! Linear-flow placement parameters.

use serde::{Deserialize, Serialize};

use crate::margin::Margin;
use crate::parameter::LayoutType;

/// Flow-alignment hint for a child of a linear (single-axis) container.
///
/// A vertical flow reads the horizontal variants to place the child across
/// the axis, and a horizontal flow reads the vertical ones. `None` leaves the
/// child at the container's default edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gravity {
    #[default]
    None,
    Left,
    Top,
    Right,
    Bottom,
    CenterVertical,
    CenterHorizontal,
}

/// Placement of a widget inside a linear-flow container.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LinearLayoutParameter {
    pub margin: Margin,
    pub gravity: Gravity,
}

impl LinearLayoutParameter {
    /// Create a parameter with zero margin and no gravity.
    pub fn new() -> Self {
        Self::default()
    }

    /// The layout strategy this parameter belongs to.
    #[inline]
    pub const fn layout_type(&self) -> LayoutType {
        LayoutType::Linear
    }

    pub fn margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    pub fn gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = gravity;
        self
    }
}
