//! Hover tooltip for feedback markers

use crate::domain::{FeedbackPoint, LocalPoint, PointId};

/// Find the marker nearest to `pos` within `radius`
///
/// Ties go to the point added first.
pub fn marker_under(points: &[FeedbackPoint], pos: LocalPoint, radius: f32) -> Option<&FeedbackPoint> {
    points
        .iter()
        .map(|p| (p, p.position().distance_to(pos)))
        .filter(|(_, d)| *d <= radius)
        .fold(None, |best: Option<(&FeedbackPoint, f32)>, (p, d)| match best {
            Some((_, best_d)) if best_d <= d => best,
            _ => Some((p, d)),
        })
        .map(|(p, _)| p)
}

/// Which marker the pointer currently rests on
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HoverTooltip {
    hovered: Option<PointId>,
    radius: f32,
}

impl HoverTooltip {
    pub fn new(radius: f32) -> Self {
        Self {
            hovered: None,
            radius,
        }
    }

    pub fn hovered(&self) -> Option<PointId> {
        self.hovered
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Recompute the hovered marker; returns true when it changed
    pub fn pointer_moved(&mut self, pos: LocalPoint, points: &[FeedbackPoint]) -> bool {
        let next = marker_under(points, pos, self.radius).map(|p| p.id);
        let changed = next != self.hovered;
        self.hovered = next;
        changed
    }

    pub fn pointer_left(&mut self) {
        self.hovered = None;
    }

    /// The hovered marker, if it is still among `points`
    pub fn point<'a>(&self, points: &'a [FeedbackPoint]) -> Option<&'a FeedbackPoint> {
        let id = self.hovered?;
        points.iter().find(|p| p.id == id)
    }
}
