//! Strut: widget placement parameters.
//!
//! The value layer a widget attaches to tell its container how it wants to be
//! placed: a margin plus either a flow [`Gravity`] (linear containers) or a
//! [`RelativeAlign`] anchor with weak name references to siblings (relative
//! containers). The [`LayoutParameter`] switchboard enum carries whichever
//! strategy applies.
//!
//! This crate is deliberately inert. It holds no layout mathematics, no
//! widget tree, and no rendering; the layout passes that read these
//! parameters (and resolve the name references) live elsewhere. Every
//! accessor takes any value unconditionally — negative margins and
//! never-resolving names are representable on purpose.

pub mod margin;
pub mod parameter;

// Strategy-specific parameter kinds
pub mod linear;
pub mod relative;

// Re-export core types
pub use margin::Margin;
pub use parameter::{LayoutParameter, LayoutType};

pub use linear::{Gravity, LinearLayoutParameter};
pub use relative::{RelativeAlign, RelativeLayoutParameter};
