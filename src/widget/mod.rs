//! Custom widgets and view builders
//!
//! This module contains:
//! - The marker canvas laid over each screen image (screen_canvas.rs)
//! - Comment dialog and tooltip popups (feedback_dialog.rs)
//! - The overall review layout (viewer.rs)
//! - Shared marker drawing helpers (drawing.rs)

pub mod drawing;
pub mod feedback_dialog;
pub mod screen_canvas;
pub mod viewer;
