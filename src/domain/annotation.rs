//! Feedback point types
//!
//! Point coordinates are image-local logical pixels of the screen the point
//! was created on.

use serde::{Deserialize, Serialize};

use super::geometry::LocalPoint;

/// Identity of a feedback point, unique for the lifetime of a store
///
/// Two points with identical position and text are still distinct; removal
/// always goes through the id, never through value equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointId(u64);

impl PointId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// A comment anchored to a position on one screen
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedbackPoint {
    pub id: PointId,
    pub x: f32,
    pub y: f32,
    pub text: String,
}

impl FeedbackPoint {
    pub fn position(&self) -> LocalPoint {
        LocalPoint::new(self.x, self.y)
    }
}

/// Feedback collected on one screen, in insertion order
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenFeedback {
    pub ordinal: usize,
    pub points: Vec<FeedbackPoint>,
}

/// Every screen's feedback, ordered by screen ordinal
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationSet {
    pub screens: Vec<ScreenFeedback>,
}

impl AnnotationSet {
    /// Total number of feedback points across all screens
    pub fn total(&self) -> usize {
        self.screens.iter().map(|s| s.points.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Points of one screen, empty if the ordinal is unknown
    pub fn points(&self, ordinal: usize) -> &[FeedbackPoint] {
        self.screens
            .iter()
            .find(|s| s.ordinal == ordinal)
            .map(|s| s.points.as_slice())
            .unwrap_or(&[])
    }
}
