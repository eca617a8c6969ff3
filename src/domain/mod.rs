//! Pure domain types with minimal dependencies
//!
//! This module contains core types used throughout the application.
//! Types here should have no framework dependencies (cosmic, iced, etc.)
//! so the review overlay can be exercised without a running UI.

pub mod annotation;
pub mod error;
pub mod geometry;

pub use annotation::*;
pub use error::*;
pub use geometry::*;
