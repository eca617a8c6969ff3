//! Review overlay state
//!
//! `ReviewOverlay` owns the navigator, the store, the dialog and the hover
//! tracker of one viewing session. Every UI event goes through it so that
//! navigation always closes the dialog and a point is never removed while the
//! dialog still refers to it.

use crate::annotations::dialog::{AnnotationDialog, DialogOutcome, DialogState};
use crate::annotations::store::AnnotationStore;
use crate::annotations::tooltip::HoverTooltip;
use crate::assets::source::ScreenSource;
use crate::domain::{AnnotationSet, ConfigError, FeedbackPoint, ImageBounds, LocalPoint, PointId};
use crate::session::navigator::{Screen, ScreenNavigator};

/// Marker hit radius used when none is configured (half the 24px icon)
pub const DEFAULT_MARKER_RADIUS: f32 = 12.0;

#[derive(Clone, Debug)]
pub struct ReviewOverlay {
    navigator: ScreenNavigator,
    store: AnnotationStore,
    dialog: AnnotationDialog,
    hover: HoverTooltip,
}

impl ReviewOverlay {
    pub fn new(source: &dyn ScreenSource, marker_radius: f32) -> Result<Self, ConfigError> {
        let navigator = ScreenNavigator::from_source(source)?;
        let store = AnnotationStore::new(navigator.len());
        log::info!("Review session started with {} screen(s)", navigator.len());
        Ok(Self {
            navigator,
            store,
            dialog: AnnotationDialog::new(),
            hover: HoverTooltip::new(marker_radius),
        })
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn next(&mut self) {
        self.navigator.next();
        self.screen_changed();
    }

    pub fn previous(&mut self) {
        self.navigator.previous();
        self.screen_changed();
    }

    pub fn go_to(&mut self, ordinal: usize) -> Result<(), ConfigError> {
        if ordinal == self.navigator.index() {
            return Ok(());
        }
        self.navigator.go_to(ordinal)?;
        self.screen_changed();
        Ok(())
    }

    fn screen_changed(&mut self) {
        if self.dialog.force_close() {
            log::debug!("Navigation discarded the open dialog");
        }
        self.hover.pointer_left();
        log::debug!(
            "Showing screen {}/{}",
            self.navigator.index() + 1,
            self.navigator.len()
        );
    }

    // ------------------------------------------------------------------
    // Dialog
    // ------------------------------------------------------------------

    /// A click on the screen image at raw window coordinates
    pub fn click_canvas(&mut self, raw_x: f32, raw_y: f32, bounds: ImageBounds) {
        if !bounds.contains(raw_x, raw_y) {
            log::debug!("Click at ({raw_x}, {raw_y}) clamped onto the screen image");
        }
        let at = bounds.to_local(raw_x, raw_y);
        self.dialog.open_create(at);
    }

    /// A click on an existing marker of the current screen
    ///
    /// Returns false if the point is not on the current screen.
    pub fn click_marker(&mut self, id: PointId) -> bool {
        let screen = self.navigator.index();
        match self.store.get(screen, id) {
            Some(point) => {
                self.dialog.open_edit(point);
                true
            }
            None => {
                log::warn!("Marker {:?} is not on screen {screen}", id);
                false
            }
        }
    }

    pub fn edit_draft(&mut self, text: String) {
        self.dialog.edit_draft(text);
    }

    /// Commit the comment being composed; returns the new point's id
    pub fn submit(&mut self) -> Option<PointId> {
        let outcome = self.dialog.submit();
        self.apply(outcome)
    }

    /// Remove the point being inspected
    pub fn remove(&mut self) {
        let outcome = self.dialog.remove();
        self.apply(outcome);
    }

    pub fn cancel(&mut self) {
        self.dialog.cancel();
    }

    fn apply(&mut self, outcome: DialogOutcome) -> Option<PointId> {
        let screen = self.navigator.index();
        match outcome {
            DialogOutcome::None => None,
            DialogOutcome::Add { at, text } => self.store.add(screen, at.x, at.y, text),
            DialogOutcome::Remove(id) => {
                if self.store.remove(screen, id).is_none() {
                    log::debug!("Feedback {:?} was already gone", id);
                }
                None
            }
        }
    }

    // ------------------------------------------------------------------
    // Removal outside the dialog
    // ------------------------------------------------------------------

    /// Remove a point of the current screen without going through the dialog
    pub fn remove_point(&mut self, id: PointId) -> Option<FeedbackPoint> {
        if self.dialog.editing() == Some(id) {
            self.dialog.force_close();
        }
        if self.hover.hovered() == Some(id) {
            self.hover.pointer_left();
        }
        self.store.remove(self.navigator.index(), id)
    }

    /// Drop every point of the current screen
    pub fn clear_current_screen(&mut self) -> usize {
        if self.dialog.editing().is_some() {
            self.dialog.force_close();
        }
        self.hover.pointer_left();
        let removed = self.store.clear(self.navigator.index());
        log::info!(
            "Cleared {removed} feedback point(s) from screen {}",
            self.navigator.index() + 1
        );
        removed
    }

    // ------------------------------------------------------------------
    // Hover
    // ------------------------------------------------------------------

    pub fn pointer_moved(&mut self, pos: LocalPoint) -> bool {
        let points = self.store.list(self.navigator.index());
        self.hover.pointer_moved(pos, points)
    }

    pub fn pointer_left(&mut self) {
        self.hover.pointer_left();
    }

    /// Point whose tooltip should be shown, if any
    pub fn tooltip(&self) -> Option<&FeedbackPoint> {
        self.hover.point(self.current_points())
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn current_screen(&self) -> &Screen {
        self.navigator.current()
    }

    pub fn current_index(&self) -> usize {
        self.navigator.index()
    }

    /// All screens in navigation order
    pub fn screens(&self) -> &[Screen] {
        self.navigator.screens()
    }

    pub fn screen_count(&self) -> usize {
        self.navigator.len()
    }

    pub fn current_points(&self) -> &[FeedbackPoint] {
        self.store.list(self.navigator.index())
    }

    pub fn store(&self) -> &AnnotationStore {
        &self.store
    }

    pub fn dialog(&self) -> &DialogState {
        self.dialog.state()
    }

    pub fn hovered(&self) -> Option<PointId> {
        self.hover.hovered()
    }

    pub fn marker_radius(&self) -> f32 {
        self.hover.radius()
    }

    /// Where the open dialog is anchored on the current screen
    pub fn dialog_anchor(&self) -> Option<LocalPoint> {
        match self.dialog.state() {
            DialogState::Closed => None,
            DialogState::Creating { at, .. } => Some(*at),
            DialogState::Editing { point, .. } => self
                .store
                .get(self.navigator.index(), *point)
                .map(FeedbackPoint::position),
        }
    }

    /// End the session, handing back everything that was collected
    ///
    /// Any open dialog is discarded and the store is left empty.
    pub fn finish(&mut self) -> AnnotationSet {
        self.dialog.force_close();
        self.hover.pointer_left();
        let store = std::mem::replace(&mut self.store, AnnotationStore::new(self.navigator.len()));
        let set = store.snapshot();
        log::info!(
            "Review session finished with {} feedback point(s)",
            set.total()
        );
        set
    }
}
