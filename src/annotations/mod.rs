//! Feedback annotations: storage, the comment dialog, and hover tooltips
//!
//! This module provides:
//! - Per-screen point storage (store.rs)
//! - The create/edit/cancel dialog state machine (dialog.rs)
//! - Marker hit-testing and hover tracking (tooltip.rs)
//! - Message handlers for FeedbackMsg and PointerMsg (handlers.rs)

pub mod dialog;
pub mod handlers;
pub mod store;
pub mod tooltip;
