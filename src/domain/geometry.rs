//! Geometric types for screen-local coordinates

/// A position in image-local logical pixels (origin at the image's top-left)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LocalPoint {
    pub x: f32,
    pub y: f32,
}

impl LocalPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: LocalPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Window-space rectangle the screen image is rendered into
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ImageBounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ImageBounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Translate raw pointer coordinates into image-local ones.
    ///
    /// The result is clamped to `[0, width] x [0, height]`; pointers outside
    /// the image are pulled onto its nearest edge rather than rejected.
    pub fn to_local(&self, raw_x: f32, raw_y: f32) -> LocalPoint {
        LocalPoint {
            x: clamp_axis(raw_x - self.x, self.width),
            y: clamp_axis(raw_y - self.y, self.height),
        }
    }

    /// Check if raw pointer coordinates fall on the image
    pub fn contains(&self, raw_x: f32, raw_y: f32) -> bool {
        raw_x >= self.x
            && raw_x <= self.x + self.width
            && raw_y >= self.y
            && raw_y <= self.y + self.height
    }
}

#[inline]
fn clamp_axis(value: f32, extent: f32) -> f32 {
    let extent = extent.max(0.0);
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, extent)
    }
}

/// Placement of the screen image inside the decorative device frame
///
/// Ratios match a phone bezel: the screen sits 8% in from the left and 9%
/// down from the top, covering 84% x 92% of the frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameLayout {
    pub frame_width: f32,
    pub frame_height: f32,
}

impl FrameLayout {
    const INSET_LEFT: f32 = 0.08;
    const INSET_TOP: f32 = 0.09;
    const SCREEN_WIDTH: f32 = 0.84;
    const SCREEN_HEIGHT: f32 = 0.92;

    pub fn new(frame_width: f32, frame_height: f32) -> Self {
        Self {
            frame_width,
            frame_height,
        }
    }

    /// Offset of the screen image's top-left corner within the frame
    pub fn screen_offset(&self) -> (f32, f32) {
        (
            self.frame_width * Self::INSET_LEFT,
            self.frame_height * Self::INSET_TOP,
        )
    }

    /// Rendered size of the screen image
    pub fn screen_size(&self) -> (f32, f32) {
        (
            self.frame_width * Self::SCREEN_WIDTH,
            self.frame_height * Self::SCREEN_HEIGHT,
        )
    }

    /// Frame position of a popup offset from a screen-local anchor
    ///
    /// The popup is kept inside the frame so it is never clipped.
    pub fn place_popup(&self, anchor: LocalPoint, offset: (f32, f32), size: (f32, f32)) -> (f32, f32) {
        let (screen_x, screen_y) = self.screen_offset();
        let x = screen_x + anchor.x + offset.0;
        let y = screen_y + anchor.y + offset.1;
        (
            x.min(self.frame_width - size.0).max(0.0),
            y.min(self.frame_height - size.1).max(0.0),
        )
    }
}

impl Default for FrameLayout {
    fn default() -> Self {
        Self::new(375.0, 812.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_local_translates_by_origin() {
        let bounds = ImageBounds::new(30.0, 73.0, 315.0, 747.0);
        assert_eq!(bounds.to_local(70.0, 133.0), LocalPoint::new(40.0, 60.0));
    }

    #[test]
    fn test_to_local_clamps_to_image() {
        let bounds = ImageBounds::new(10.0, 10.0, 100.0, 200.0);
        assert_eq!(bounds.to_local(0.0, 0.0), LocalPoint::new(0.0, 0.0));
        assert_eq!(bounds.to_local(500.0, 500.0), LocalPoint::new(100.0, 200.0));
        assert_eq!(bounds.to_local(f32::NAN, 50.0), LocalPoint::new(0.0, 40.0));
    }

    #[test]
    fn test_contains_includes_edges() {
        let bounds = ImageBounds::new(0.0, 0.0, 10.0, 10.0);
        assert!(bounds.contains(0.0, 0.0));
        assert!(bounds.contains(10.0, 10.0));
        assert!(!bounds.contains(10.5, 5.0));
    }

    #[test]
    fn test_frame_layout_matches_bezel_ratios() {
        let layout = FrameLayout::new(100.0, 200.0);
        let (x, y) = layout.screen_offset();
        let (w, h) = layout.screen_size();
        assert!((x - 8.0).abs() < 1e-4);
        assert!((y - 18.0).abs() < 1e-4);
        assert!((w - 84.0).abs() < 1e-4);
        assert!((h - 184.0).abs() < 1e-4);
    }

    #[test]
    fn test_place_popup_stays_inside_frame() {
        let layout = FrameLayout::new(100.0, 200.0);
        let (x, y) = layout.place_popup(LocalPoint::new(10.0, 10.0), (5.0, -5.0), (20.0, 20.0));
        assert!((x - 23.0).abs() < 1e-4);
        assert!((y - 23.0).abs() < 1e-4);

        let (x, y) = layout.place_popup(LocalPoint::new(80.0, 5.0), (40.0, -30.0), (50.0, 20.0));
        assert_eq!(x, 50.0);
        assert_eq!(y, 0.0);
    }
}
