//! Screen image sources
//!
//! This module provides:
//! - The screen image handle type (image.rs)
//! - Discovery of sequentially named screen assets (source.rs)

pub mod image;
pub mod source;
