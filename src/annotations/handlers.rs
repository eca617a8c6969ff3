//! Feedback and pointer message handlers
//!
//! Handles FeedbackMsg and PointerMsg against the review overlay.

use crate::domain::LocalPoint;
use crate::session::messages::{FeedbackMsg, PointerMsg};
use crate::session::state::ReviewOverlay;

pub fn handle_feedback_msg(overlay: &mut ReviewOverlay, msg: FeedbackMsg) {
    match msg {
        FeedbackMsg::CanvasPressed { x, y, bounds } => overlay.click_canvas(x, y, bounds),
        FeedbackMsg::MarkerPressed(id) => {
            overlay.click_marker(id);
        }
        FeedbackMsg::DraftChanged(text) => overlay.edit_draft(text),
        FeedbackMsg::Submit => {
            if let Some(id) = overlay.submit() {
                log::info!(
                    "Feedback {:?} added to screen {}",
                    id,
                    overlay.current_index() + 1
                );
            }
        }
        FeedbackMsg::Remove => overlay.remove(),
        FeedbackMsg::Cancel => overlay.cancel(),
        FeedbackMsg::DismissMarker(id) => {
            if overlay.remove_point(id).is_some() {
                log::info!("Feedback {:?} removed from screen {}", id, overlay.current_index() + 1);
            }
        }
        FeedbackMsg::ClearScreen => {
            overlay.clear_current_screen();
        }
    }
}

pub fn handle_pointer_msg(overlay: &mut ReviewOverlay, msg: PointerMsg) {
    match msg {
        PointerMsg::Moved(x, y) => {
            overlay.pointer_moved(LocalPoint::new(x, y));
        }
        PointerMsg::Left => overlay.pointer_left(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotations::dialog::DialogState;
    use crate::domain::ImageBounds;
    use crate::session::navigator::test_images;
    use crate::session::state::DEFAULT_MARKER_RADIUS;

    #[test]
    fn test_message_flow_creates_and_removes() {
        let mut overlay = ReviewOverlay::new(&test_images(2), DEFAULT_MARKER_RADIUS).unwrap();
        let bounds = ImageBounds::new(10.0, 10.0, 100.0, 100.0);

        handle_feedback_msg(&mut overlay, FeedbackMsg::CanvasPressed { x: 30.0, y: 40.0, bounds });
        handle_feedback_msg(&mut overlay, FeedbackMsg::DraftChanged("typo".to_string()));
        handle_feedback_msg(&mut overlay, FeedbackMsg::Submit);

        let id = overlay.current_points()[0].id;
        assert_eq!(overlay.current_points()[0].position(), LocalPoint::new(20.0, 30.0));

        handle_pointer_msg(&mut overlay, PointerMsg::Moved(21.0, 29.0));
        assert_eq!(overlay.hovered(), Some(id));
        handle_pointer_msg(&mut overlay, PointerMsg::Left);
        assert!(overlay.hovered().is_none());

        handle_feedback_msg(&mut overlay, FeedbackMsg::MarkerPressed(id));
        assert!(matches!(overlay.dialog(), DialogState::Editing { .. }));
        handle_feedback_msg(&mut overlay, FeedbackMsg::Remove);
        assert!(overlay.current_points().is_empty());
        assert_eq!(overlay.dialog(), &DialogState::Closed);
    }

    #[test]
    fn test_dismiss_closes_dialog_editing_that_marker() {
        let mut overlay = ReviewOverlay::new(&test_images(1), DEFAULT_MARKER_RADIUS).unwrap();
        let bounds = ImageBounds::new(0.0, 0.0, 100.0, 100.0);
        handle_feedback_msg(&mut overlay, FeedbackMsg::CanvasPressed { x: 5.0, y: 5.0, bounds });
        handle_feedback_msg(&mut overlay, FeedbackMsg::DraftChanged("gone soon".to_string()));
        handle_feedback_msg(&mut overlay, FeedbackMsg::Submit);
        let id = overlay.current_points()[0].id;

        handle_feedback_msg(&mut overlay, FeedbackMsg::MarkerPressed(id));
        handle_feedback_msg(&mut overlay, FeedbackMsg::DismissMarker(id));
        assert_eq!(overlay.dialog(), &DialogState::Closed);
        assert!(overlay.current_points().is_empty());

        // A second dismissal of the same marker is a no-op
        handle_feedback_msg(&mut overlay, FeedbackMsg::DismissMarker(id));
        assert!(overlay.current_points().is_empty());
    }
}
