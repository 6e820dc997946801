//! Core data structures for the vitrine product showcase
//!
//! This crate provides the fundamental types for the showcase: the product
//! catalog, the carousel/selection state machine, and the model geometry
//! used by the viewer (bounding boxes, normalization).

pub mod error;
pub mod model;
pub mod product;
pub mod showcase;

pub use error::*;
pub use model::*;
pub use product::*;
pub use showcase::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Matrix4, Point3, Vector3};
