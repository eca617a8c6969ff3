//! Comment dialog state machine
//!
//! The dialog never touches storage itself. Closing transitions return a
//! [`DialogOutcome`] that the owning overlay applies to the current screen.

use crate::domain::{FeedbackPoint, LocalPoint, PointId};

/// The single dialog value of a session
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DialogState {
    #[default]
    Closed,
    /// Composing a new comment at an image-local position
    Creating { at: LocalPoint, draft: String },
    /// Inspecting an existing point; the draft is never written back
    Editing { point: PointId, draft: String },
}

/// Store mutation requested by a dialog transition
#[derive(Clone, Debug, PartialEq)]
pub enum DialogOutcome {
    None,
    Add { at: LocalPoint, text: String },
    Remove(PointId),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnnotationDialog {
    state: DialogState,
}

impl AnnotationDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DialogState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, DialogState::Closed)
    }

    /// Current text buffer, if the dialog is open
    pub fn draft(&self) -> Option<&str> {
        match &self.state {
            DialogState::Closed => None,
            DialogState::Creating { draft, .. } | DialogState::Editing { draft, .. } => {
                Some(draft.as_str())
            }
        }
    }

    /// Point being inspected, if in editing mode
    pub fn editing(&self) -> Option<PointId> {
        match self.state {
            DialogState::Editing { point, .. } => Some(point),
            _ => None,
        }
    }

    /// Start composing a new comment, discarding anything in flight
    pub fn open_create(&mut self, at: LocalPoint) {
        self.discard_in_flight();
        log::debug!("Dialog: creating at ({}, {})", at.x, at.y);
        self.state = DialogState::Creating {
            at,
            draft: String::new(),
        };
    }

    /// Open an existing point with its text loaded into the buffer
    pub fn open_edit(&mut self, point: &FeedbackPoint) {
        self.discard_in_flight();
        log::debug!("Dialog: editing {:?}", point.id);
        self.state = DialogState::Editing {
            point: point.id,
            draft: point.text.clone(),
        };
    }

    /// Replace the text buffer; ignored while closed
    pub fn edit_draft(&mut self, text: String) {
        match &mut self.state {
            DialogState::Closed => {}
            DialogState::Creating { draft, .. } | DialogState::Editing { draft, .. } => {
                *draft = text;
            }
        }
    }

    /// Commit a new comment
    ///
    /// Only meaningful while creating; an empty draft closes the dialog
    /// without adding anything. In any other state this does nothing.
    pub fn submit(&mut self) -> DialogOutcome {
        if !matches!(self.state, DialogState::Creating { .. }) {
            return DialogOutcome::None;
        }
        match std::mem::take(&mut self.state) {
            DialogState::Creating { at, draft } if !draft.is_empty() => {
                DialogOutcome::Add { at, text: draft }
            }
            _ => DialogOutcome::None,
        }
    }

    /// Remove the inspected point; does nothing unless editing
    pub fn remove(&mut self) -> DialogOutcome {
        match self.state {
            DialogState::Editing { point, .. } => {
                self.state = DialogState::Closed;
                DialogOutcome::Remove(point)
            }
            _ => DialogOutcome::None,
        }
    }

    /// Close without touching storage
    pub fn cancel(&mut self) {
        self.state = DialogState::Closed;
    }

    /// Close unconditionally, returning whether anything was discarded
    pub fn force_close(&mut self) -> bool {
        let was_open = self.is_open();
        self.state = DialogState::Closed;
        was_open
    }

    fn discard_in_flight(&mut self) {
        if self.force_close() {
            log::debug!("Dialog: discarding in-flight state");
        }
    }
}
