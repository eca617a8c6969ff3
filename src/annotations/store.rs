//! Per-screen storage of feedback points

use crate::domain::{AnnotationSet, FeedbackPoint, PointId, ScreenFeedback};

/// Ordered feedback points for every screen of a session
///
/// Each screen owns its own `Vec`; nothing is shared between screens.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnnotationStore {
    screens: Vec<Vec<FeedbackPoint>>,
    next_id: u64,
}

impl AnnotationStore {
    /// Create a store with one empty sequence per screen
    pub fn new(screen_count: usize) -> Self {
        Self {
            screens: (0..screen_count).map(|_| Vec::new()).collect(),
            next_id: 0,
        }
    }

    /// Append a point to the end of a screen's sequence
    ///
    /// Coordinates are stored as given; callers clamp them beforehand.
    /// Returns `None` when the screen does not exist.
    pub fn add(&mut self, screen: usize, x: f32, y: f32, text: impl Into<String>) -> Option<PointId> {
        let Some(points) = self.screens.get_mut(screen) else {
            log::warn!("Ignoring feedback for unknown screen {screen}");
            return None;
        };
        let id = PointId::new(self.next_id);
        self.next_id += 1;
        points.push(FeedbackPoint {
            id,
            x,
            y,
            text: text.into(),
        });
        log::debug!("Added feedback {:?} to screen {screen} at ({x}, {y})", id);
        Some(id)
    }

    /// Remove the point with the given identity
    ///
    /// Removing an id that is not present is a no-op. The relative order of
    /// the remaining points is preserved.
    pub fn remove(&mut self, screen: usize, id: PointId) -> Option<FeedbackPoint> {
        let points = self.screens.get_mut(screen)?;
        let index = points.iter().position(|p| p.id == id)?;
        log::debug!("Removed feedback {:?} from screen {screen}", id);
        Some(points.remove(index))
    }

    /// Read-only view of a screen's points in insertion order
    pub fn list(&self, screen: usize) -> &[FeedbackPoint] {
        self.screens
            .get(screen)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn get(&self, screen: usize, id: PointId) -> Option<&FeedbackPoint> {
        self.list(screen).iter().find(|p| p.id == id)
    }

    /// Drop every point on one screen, returning how many were removed
    pub fn clear(&mut self, screen: usize) -> usize {
        self.screens
            .get_mut(screen)
            .map(|points| points.drain(..).count())
            .unwrap_or(0)
    }

    /// Number of points on one screen
    pub fn len(&self, screen: usize) -> usize {
        self.list(screen).len()
    }

    /// Number of points across all screens
    pub fn total(&self) -> usize {
        self.screens.iter().map(Vec::len).sum()
    }

    /// Owned copy of every screen's points
    pub fn snapshot(&self) -> AnnotationSet {
        AnnotationSet {
            screens: self
                .screens
                .iter()
                .enumerate()
                .map(|(ordinal, points)| ScreenFeedback {
                    ordinal,
                    points: points.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut store = AnnotationStore::new(2);
        store.add(0, 1.0, 1.0, "first");
        store.add(0, 2.0, 2.0, "second");
        store.add(0, 3.0, 3.0, "third");

        let texts: Vec<_> = store.list(0).iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, ["first", "second", "third"]);
    }

    #[test]
    fn test_screens_are_independent() {
        let mut store = AnnotationStore::new(3);
        store.add(0, 5.0, 5.0, "only on zero");

        assert_eq!(store.len(0), 1);
        assert!(store.list(1).is_empty());
        assert!(store.list(2).is_empty());

        store.add(2, 1.0, 1.0, "only on two");
        assert_eq!(store.len(0), 1);
        assert!(store.list(1).is_empty());
        assert_eq!(store.list(2)[0].text, "only on two");
    }

    #[test]
    fn test_remove_targets_identity_not_value() {
        let mut store = AnnotationStore::new(1);
        let a = store.add(0, 10.0, 10.0, "same").unwrap();
        let b = store.add(0, 10.0, 10.0, "same").unwrap();
        let c = store.add(0, 10.0, 10.0, "same").unwrap();

        let removed = store.remove(0, b).unwrap();
        assert_eq!(removed.id, b);

        let ids: Vec<_> = store.list(0).iter().map(|p| p.id).collect();
        assert_eq!(ids, [a, c]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut store = AnnotationStore::new(2);
        let id = store.add(0, 1.0, 1.0, "keep").unwrap();
        let before = store.clone();

        assert!(store.remove(1, id).is_none());
        assert!(store.remove(0, PointId::new(99)).is_none());
        assert!(store.remove(7, id).is_none());
        assert_eq!(store, before);

        store.remove(0, id);
        assert!(store.remove(0, id).is_none());
    }

    #[test]
    fn test_unknown_screen_is_ignored() {
        let mut store = AnnotationStore::new(1);
        assert!(store.add(4, 0.0, 0.0, "nowhere").is_none());
        assert!(store.list(4).is_empty());
        assert_eq!(store.total(), 0);
    }

    #[test]
    fn test_clear_only_touches_one_screen() {
        let mut store = AnnotationStore::new(2);
        store.add(0, 0.0, 0.0, "a");
        store.add(0, 0.0, 0.0, "b");
        store.add(1, 0.0, 0.0, "c");

        assert_eq!(store.clear(0), 2);
        assert!(store.list(0).is_empty());
        assert_eq!(store.len(1), 1);
        assert_eq!(store.clear(5), 0);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut store = AnnotationStore::new(2);
        let id = store.add(1, 4.0, 2.0, "note").unwrap();
        let snapshot = store.snapshot();

        store.remove(1, id);
        assert_eq!(snapshot.total(), 1);
        assert_eq!(snapshot.points(1)[0].text, "note");
        assert!(snapshot.points(0).is_empty());
    }
}
