//! Screen image handle used by the viewer

use std::path::{Path, PathBuf};

use anyhow::Context;

/// One screen's image: where it lives, its pixel size, and a display handle
#[derive(Clone, Debug)]
pub struct ScreenImage {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub handle: cosmic::widget::image::Handle,
}

impl ScreenImage {
    /// Create a handle for an image whose dimensions are already known
    pub fn new(path: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        let path = path.into();
        let handle = cosmic::widget::image::Handle::from_path(path.clone());
        Self {
            path,
            width,
            height,
            handle,
        }
    }

    /// Probe an image file's dimensions without decoding its pixels
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let (width, height) = ::image::image_dimensions(path)
            .with_context(|| format!("Failed to read screen image {}", path.display()))?;
        log::debug!("Screen image {}: {}x{} pixels", path.display(), width, height);
        Ok(Self::new(path, width, height))
    }

    /// Width over height of the source pixels
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// Whether stretching the image into `width` x `height` distorts it
    /// by more than `tolerance` (relative)
    pub fn distorted_in(&self, width: f32, height: f32, tolerance: f32) -> bool {
        if width <= 0.0 || height <= 0.0 {
            return false;
        }
        let target = width / height;
        ((self.aspect_ratio() - target) / target).abs() > tolerance
    }
}
