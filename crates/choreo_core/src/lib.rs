//! Choreo Core
//!
//! Foundational primitives for the Choreo animation engine:
//!
//! - **Elements**: registry of animation targets with explicit capability sets
//! - **Stage**: shared geometry reads, resize writes, and unit conversion
//! - **Motion Paths**: polyline paths for path-following tracks
//!
//! # Example
//!
//! ```rust
//! use choreo_core::{Element, Stage};
//!
//! let stage = Stage::new(2.0);
//! let button = stage.insert(Element::new(120.0, 48.0));
//!
//! let geom = stage.geometry(button).unwrap();
//! assert_eq!(geom.width, 120.0);
//! assert_eq!(stage.to_px(10.0), 20.0);
//! ```

pub mod element;
pub mod path;
pub mod stage;

pub use element::{
    Element, ElementCaps, ElementGeometry, ElementId, ElementRegistry, Insets, Targets,
};
pub use path::{MotionPath, PathError};
pub use stage::{Stage, Units};
