//! Review session management module
//!
//! This module contains:
//! - The screen navigator
//! - The review overlay owning all per-session state
//! - Message types and their routing
//! - Keyboard shortcuts

pub mod messages;
pub mod navigator;
pub mod shortcuts;
pub mod state;
pub mod update;
