//! Routing of session messages into the overlay

use crate::annotations::handlers::{handle_feedback_msg, handle_pointer_msg};
use crate::domain::AnnotationSet;
use crate::session::messages::{Msg, NavMsg};
use crate::session::state::ReviewOverlay;

/// Apply one message to the overlay
///
/// Returns the collected feedback when the message ends the session.
pub fn update(overlay: &mut ReviewOverlay, msg: Msg) -> Option<AnnotationSet> {
    match msg {
        Msg::Nav(nav) => handle_nav_msg(overlay, nav),
        Msg::Feedback(feedback) => handle_feedback_msg(overlay, feedback),
        Msg::Pointer(pointer) => handle_pointer_msg(overlay, pointer),
        Msg::Finish => return Some(overlay.finish()),
    }
    None
}

fn handle_nav_msg(overlay: &mut ReviewOverlay, msg: NavMsg) {
    match msg {
        NavMsg::Next => overlay.next(),
        NavMsg::Previous => overlay.previous(),
        NavMsg::GoTo(ordinal) => {
            if let Err(err) = overlay.go_to(ordinal) {
                log::warn!("Ignoring navigation: {err}");
            }
        }
        NavMsg::First => {
            if let Err(err) = overlay.go_to(0) {
                log::warn!("Ignoring navigation: {err}");
            }
        }
        NavMsg::Last => {
            let last = overlay.screen_count() - 1;
            if let Err(err) = overlay.go_to(last) {
                log::warn!("Ignoring navigation: {err}");
            }
        }
    }
}
