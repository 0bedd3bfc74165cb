//! Layout parameter switchboard.
//!
//! `LayoutParameter` is the one type a widget attaches to describe its
//! placement. Containers and layout passes match on it to reach the
//! strategy-specific data; they never need to know the concrete kind up
//! front.

use serde::{Deserialize, Serialize};

use crate::linear::LinearLayoutParameter;
use crate::margin::Margin;
use crate::relative::RelativeLayoutParameter;

/// Which layout strategy owns a parameter.
///
/// Fixed by construction of the concrete value. Changing strategy means
/// constructing a new parameter, never re-tagging an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LayoutType {
    #[default]
    None,
    Linear,
    Relative,
}

/// A widget's placement descriptor.
///
/// Closed set of the placement strategies the layout system understands.
/// Cloning reconstructs the matching concrete variant and copies its fields;
/// the relative variant's per-pass `placed` flag is deliberately excluded
/// (see [`RelativeLayoutParameter`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "params")]
pub enum LayoutParameter {
    /// Margin only; not tied to any layout strategy.
    None(Margin),
    /// Placement in a linear-flow container.
    Linear(LinearLayoutParameter),
    /// Placement in a relative container.
    Relative(RelativeLayoutParameter),
}

impl LayoutParameter {
    /// Create a margin-only parameter not tied to any layout strategy.
    pub fn new() -> Self {
        Self::None(Margin::ZERO)
    }

    /// The layout strategy this parameter belongs to.
    pub fn layout_type(&self) -> LayoutType {
        match self {
            LayoutParameter::None(_) => LayoutType::None,
            LayoutParameter::Linear(_) => LayoutType::Linear,
            LayoutParameter::Relative(_) => LayoutType::Relative,
        }
    }

    /// The margin every parameter kind carries.
    pub fn margin(&self) -> Margin {
        match self {
            LayoutParameter::None(margin) => *margin,
            LayoutParameter::Linear(p) => p.margin,
            LayoutParameter::Relative(p) => p.margin,
        }
    }

    /// Replace the margin, whatever the concrete kind. No validation.
    pub fn set_margin(&mut self, margin: Margin) {
        match self {
            LayoutParameter::None(m) => *m = margin,
            LayoutParameter::Linear(p) => p.margin = margin,
            LayoutParameter::Relative(p) => p.margin = margin,
        }
    }

    /// Borrow the linear data, if this is a linear parameter.
    pub fn as_linear(&self) -> Option<&LinearLayoutParameter> {
        match self {
            LayoutParameter::Linear(p) => Some(p),
            _ => None,
        }
    }

    /// Mutably borrow the linear data, if this is a linear parameter.
    pub fn as_linear_mut(&mut self) -> Option<&mut LinearLayoutParameter> {
        match self {
            LayoutParameter::Linear(p) => Some(p),
            _ => None,
        }
    }

    /// Borrow the relative data, if this is a relative parameter.
    pub fn as_relative(&self) -> Option<&RelativeLayoutParameter> {
        match self {
            LayoutParameter::Relative(p) => Some(p),
            _ => None,
        }
    }

    /// Mutably borrow the relative data, if this is a relative parameter.
    ///
    /// The relative layout pass goes through this to drive the `placed` flag.
    pub fn as_relative_mut(&mut self) -> Option<&mut RelativeLayoutParameter> {
        match self {
            LayoutParameter::Relative(p) => Some(p),
            _ => None,
        }
    }
}

impl Default for LayoutParameter {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Margin> for LayoutParameter {
    fn from(margin: Margin) -> Self {
        Self::None(margin)
    }
}

impl From<LinearLayoutParameter> for LayoutParameter {
    fn from(p: LinearLayoutParameter) -> Self {
        Self::Linear(p)
    }
}

impl From<RelativeLayoutParameter> for LayoutParameter {
    fn from(p: RelativeLayoutParameter) -> Self {
        Self::Relative(p)
    }
}
