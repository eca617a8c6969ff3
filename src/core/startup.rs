//! Everything that has to succeed before the viewer opens

use anyhow::Context;

use crate::assets::source::AssetDirectory;
use crate::config::ReviewConfig;
use crate::review::brief::ReviewBrief;
use crate::session::navigator::Screen;
use crate::session::state::ReviewOverlay;

/// A ready-to-show review session
pub struct Startup {
    pub config: ReviewConfig,
    pub overlay: ReviewOverlay,
    pub brief: Option<ReviewBrief>,
    pub bezel: Option<cosmic::widget::image::Handle>,
}

impl Startup {
    /// Discover screens, load the brief and build the overlay
    ///
    /// Fails when no screen can be found or the brief is invalid; the viewer
    /// must not open without at least one screen.
    pub fn prepare(config: ReviewConfig) -> anyhow::Result<Self> {
        let assets_dir = config.assets_dir();
        let assets = AssetDirectory::discover(
            &assets_dir,
            &config.asset_prefix,
            &config.asset_extension,
        )?;

        let overlay = ReviewOverlay::new(&assets, config.marker_radius).with_context(|| {
            format!(
                "Cannot build the {}N.{} screen sequence from {}",
                config.asset_prefix,
                config.asset_extension,
                assets.root().display()
            )
        })?;

        let (screen_w, screen_h) = config.frame_layout().screen_size();
        for screen in distorted_screens(&overlay, screen_w, screen_h) {
            log::warn!(
                "Screen {} ({}x{}) will be stretched to fit the {screen_w:.0}x{screen_h:.0} frame",
                screen.ordinal + 1,
                screen.image.width,
                screen.image.height
            );
        }

        let brief = match &config.brief_path {
            Some(path) => Some(ReviewBrief::load(path)?),
            None => None,
        };
        if let Some(brief) = &brief {
            if brief.screen_count as usize != overlay.screen_count() {
                log::warn!(
                    "Brief for {} expects {} screen(s), found {}",
                    brief.product_name,
                    brief.screen_count,
                    overlay.screen_count()
                );
            }
            log::debug!("Reviewer prompt:\n{}", brief.prompt_text());
        }

        let bezel = match &config.bezel_path {
            Some(path) if path.is_file() => {
                Some(cosmic::widget::image::Handle::from_path(path.clone()))
            }
            Some(path) => {
                log::warn!("Bezel {} not found, showing bare screens", path.display());
                None
            }
            None => None,
        };

        Ok(Self {
            config,
            overlay,
            brief,
            bezel,
        })
    }
}

/// Relative aspect difference tolerated before a screen counts as stretched
const ASPECT_TOLERANCE: f32 = 0.05;

/// Screens whose pixels do not match the frame's screen area
fn distorted_screens(overlay: &ReviewOverlay, width: f32, height: f32) -> Vec<&Screen> {
    overlay
        .screens()
        .iter()
        .filter(|s| s.image.distorted_in(width, height, ASPECT_TOLERANCE))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn write_png(path: &Path) {
        ::image::RgbaImage::new(3, 5).save(path).unwrap();
    }

    fn config_for(dir: &Path) -> ReviewConfig {
        ReviewConfig {
            assets_dir: Some(dir.to_path_buf()),
            ..Default::default()
        }
    }

    #[test]
    fn test_prepare_without_screens_fails() {
        if std::env::var_os(crate::config::ASSETS_ENV).is_some() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let err = Startup::prepare(config_for(dir.path())).err().unwrap();
        assert!(format!("{err:#}").contains("at least one screen"));
    }

    #[test]
    fn test_prepare_builds_overlay() {
        if std::env::var_os(crate::config::ASSETS_ENV).is_some() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("app-image1.png"));
        write_png(&dir.path().join("app-image2.png"));

        let startup = Startup::prepare(config_for(dir.path())).unwrap();
        assert_eq!(startup.overlay.screen_count(), 2);
        assert!(startup.brief.is_none());
        assert!(startup.bezel.is_none());
    }

    #[test]
    fn test_prepare_rejects_invalid_brief() {
        if std::env::var_os(crate::config::ASSETS_ENV).is_some() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("app-image1.png"));
        let brief = dir.path().join("brief.json");
        std::fs::write(&brief, "{}").unwrap();

        let config = ReviewConfig {
            brief_path: Some(brief),
            ..config_for(dir.path())
        };
        assert!(Startup::prepare(config).is_err());
    }

    #[test]
    fn test_distorted_screens_are_reported() {
        let images = vec![
            crate::assets::image::ScreenImage::new("a.png", 630, 1494),
            crate::assets::image::ScreenImage::new("b.png", 1920, 1080),
        ];
        let overlay = ReviewOverlay::new(&images, 12.0).unwrap();
        let (w, h) = crate::domain::FrameLayout::default().screen_size();

        let ordinals: Vec<_> = distorted_screens(&overlay, w, h)
            .iter()
            .map(|s| s.ordinal)
            .collect();
        assert_eq!(ordinals, vec![1]);
    }
}
