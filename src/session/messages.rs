//! Message types for a review session
//!
//! Widgets emit these; `session::update` routes them into the overlay.

use crate::domain::{ImageBounds, PointId};

// ============================================================================
// Navigation
// ============================================================================

#[derive(Debug, Clone)]
pub enum NavMsg {
    Next,
    Previous,
    /// Jump to a screen by ordinal
    GoTo(usize),
    First,
    Last,
}

// ============================================================================
// Feedback dialog
// ============================================================================

#[derive(Debug, Clone)]
pub enum FeedbackMsg {
    /// Click on the screen image at raw window coordinates
    CanvasPressed { x: f32, y: f32, bounds: ImageBounds },
    /// Click on an existing marker
    MarkerPressed(PointId),
    /// Dialog text changed
    DraftChanged(String),
    Submit,
    Remove,
    Cancel,
    /// Remove one marker without opening the dialog
    DismissMarker(PointId),
    /// Remove every point on the current screen
    ClearScreen,
}

// ============================================================================
// Pointer tracking
// ============================================================================

#[derive(Debug, Clone)]
pub enum PointerMsg {
    /// Pointer moved over the screen image (image-local coordinates)
    Moved(f32, f32),
    /// Pointer left the screen image
    Left,
}

/// All review session messages
#[derive(Debug, Clone)]
pub enum Msg {
    Nav(NavMsg),
    Feedback(FeedbackMsg),
    Pointer(PointerMsg),
    /// End the session and hand the feedback over
    Finish,
}

impl Msg {
    /// Whether handling this message may open the comment dialog
    pub fn opens_dialog(&self) -> bool {
        matches!(
            self,
            Msg::Feedback(FeedbackMsg::CanvasPressed { .. } | FeedbackMsg::MarkerPressed(_))
        )
    }

    pub fn next() -> Self {
        Msg::Nav(NavMsg::Next)
    }

    pub fn previous() -> Self {
        Msg::Nav(NavMsg::Previous)
    }

    pub fn go_to(ordinal: usize) -> Self {
        Msg::Nav(NavMsg::GoTo(ordinal))
    }

    pub fn first() -> Self {
        Msg::Nav(NavMsg::First)
    }

    pub fn last() -> Self {
        Msg::Nav(NavMsg::Last)
    }

    pub fn submit() -> Self {
        Msg::Feedback(FeedbackMsg::Submit)
    }

    pub fn remove() -> Self {
        Msg::Feedback(FeedbackMsg::Remove)
    }

    pub fn cancel() -> Self {
        Msg::Feedback(FeedbackMsg::Cancel)
    }

    pub fn clear_screen() -> Self {
        Msg::Feedback(FeedbackMsg::ClearScreen)
    }

    pub fn finish() -> Self {
        Msg::Finish
    }

    pub fn draft_changed(text: String) -> Self {
        Msg::Feedback(FeedbackMsg::DraftChanged(text))
    }
}
