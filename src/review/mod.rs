//! Hand-off to the surrounding review session
//!
//! This module provides:
//! - The product review brief and its validation (brief.rs)
//! - Sinks that receive the finished feedback (report.rs)

pub mod brief;
pub mod report;
