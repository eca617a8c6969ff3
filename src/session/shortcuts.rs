use crate::annotations::dialog::DialogState;
use crate::session::messages::Msg;
use crate::session::state::ReviewOverlay;
use cosmic::iced::keyboard::{key::Named, Key, Modifiers};

pub fn handle_key_event(overlay: &ReviewOverlay, key: Key, modifiers: Modifiers) -> Option<Msg> {
    let dialog = overlay.dialog();
    let dialog_open = !matches!(dialog, DialogState::Closed);
    let creating = matches!(dialog, DialogState::Creating { .. });
    let editing = matches!(dialog, DialogState::Editing { .. });

    match key {
        Key::Named(Named::Escape) if dialog_open => Some(Msg::cancel()),
        // Ctrl+Enter commits a new comment; plain Enter stays with the text field
        Key::Named(Named::Enter) if modifiers.control() && creating => Some(Msg::submit()),
        Key::Named(Named::Delete) if modifiers.control() && editing => Some(Msg::remove()),
        // Navigation only while no dialog has keyboard focus
        Key::Named(Named::ArrowRight) if !dialog_open => Some(Msg::next()),
        Key::Named(Named::ArrowLeft) if !dialog_open => Some(Msg::previous()),
        Key::Character(c) if c.as_str() == "l" && !dialog_open => Some(Msg::next()),
        Key::Character(c) if c.as_str() == "h" && !dialog_open => Some(Msg::previous()),
        Key::Named(Named::Home) if !dialog_open => Some(Msg::first()),
        Key::Named(Named::End) if !dialog_open => Some(Msg::last()),
        // 1-9 jump straight to a screen
        Key::Character(c) if !dialog_open => match c.as_str().parse::<usize>() {
            Ok(n @ 1..=9) => Some(Msg::go_to(n - 1)),
            _ => None,
        },
        _ => None,
    }
}

/// Dialog chords that still apply while the comment field holds focus
///
/// The focused text field captures every key press, so these are routed to
/// `handle_key_event` even when a widget already handled them.
pub fn is_dialog_chord(key: &Key, modifiers: Modifiers) -> bool {
    match key {
        Key::Named(Named::Escape) => true,
        Key::Named(Named::Enter | Named::Delete) => modifiers.control(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ImageBounds;
    use crate::session::messages::{FeedbackMsg, NavMsg};
    use crate::session::navigator::test_images;
    use crate::session::state::DEFAULT_MARKER_RADIUS;

    fn overlay() -> ReviewOverlay {
        ReviewOverlay::new(&test_images(3), DEFAULT_MARKER_RADIUS).unwrap()
    }

    #[test]
    fn test_arrows_navigate_when_closed() {
        let overlay = overlay();
        assert!(matches!(
            handle_key_event(&overlay, Key::Named(Named::ArrowRight), Modifiers::empty()),
            Some(Msg::Nav(NavMsg::Next))
        ));
        assert!(matches!(
            handle_key_event(&overlay, Key::Named(Named::ArrowLeft), Modifiers::empty()),
            Some(Msg::Nav(NavMsg::Previous))
        ));
        assert!(handle_key_event(&overlay, Key::Named(Named::Escape), Modifiers::empty()).is_none());
    }

    #[test]
    fn test_dialog_owns_keyboard_while_open() {
        let mut overlay = overlay();
        overlay.click_canvas(1.0, 1.0, ImageBounds::new(0.0, 0.0, 10.0, 10.0));

        assert!(handle_key_event(&overlay, Key::Named(Named::ArrowRight), Modifiers::empty()).is_none());
        assert!(matches!(
            handle_key_event(&overlay, Key::Named(Named::Escape), Modifiers::empty()),
            Some(Msg::Feedback(FeedbackMsg::Cancel))
        ));
        assert!(matches!(
            handle_key_event(&overlay, Key::Named(Named::Enter), Modifiers::CTRL),
            Some(Msg::Feedback(FeedbackMsg::Submit))
        ));
        assert!(handle_key_event(&overlay, Key::Named(Named::Delete), Modifiers::CTRL).is_none());
    }

    #[test]
    fn test_digits_jump_to_screen() {
        let overlay = overlay();
        assert!(matches!(
            handle_key_event(&overlay, Key::Character("2".into()), Modifiers::empty()),
            Some(Msg::Nav(NavMsg::GoTo(1)))
        ));
        assert!(handle_key_event(&overlay, Key::Character("0".into()), Modifiers::empty()).is_none());
    }

    #[test]
    fn test_dialog_chords_bypass_focused_field() {
        assert!(is_dialog_chord(&Key::Named(Named::Escape), Modifiers::empty()));
        assert!(is_dialog_chord(&Key::Named(Named::Enter), Modifiers::CTRL));
        assert!(is_dialog_chord(&Key::Named(Named::Delete), Modifiers::CTRL));
        // Plain typing stays with the text field
        assert!(!is_dialog_chord(&Key::Named(Named::Delete), Modifiers::empty()));
        assert!(!is_dialog_chord(&Key::Character("l".into()), Modifiers::empty()));
        assert!(!is_dialog_chord(&Key::Named(Named::ArrowLeft), Modifiers::empty()));
    }
}
