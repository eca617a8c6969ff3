//! Ordered screen sequence with wrap-around navigation

use crate::assets::image::ScreenImage;
use crate::assets::source::ScreenSource;
use crate::domain::ConfigError;

/// One screen of the review, fixed for the whole session
#[derive(Clone, Debug)]
pub struct Screen {
    pub ordinal: usize,
    pub image: ScreenImage,
}

/// Owns the screen sequence and the current position in it
///
/// The sequence always holds at least one screen, so the current index is
/// always valid.
#[derive(Clone, Debug)]
pub struct ScreenNavigator {
    screens: Vec<Screen>,
    current: usize,
}

impl ScreenNavigator {
    pub fn new(images: Vec<ScreenImage>) -> Result<Self, ConfigError> {
        if images.is_empty() {
            return Err(ConfigError::NoScreens);
        }
        let screens = images
            .into_iter()
            .enumerate()
            .map(|(ordinal, image)| Screen { ordinal, image })
            .collect();
        Ok(Self {
            screens,
            current: 0,
        })
    }

    /// Build the sequence from an image source collaborator
    ///
    /// Every ordinal below `count()` must resolve; a hole would shift the
    /// ordinals of all later screens.
    pub fn from_source(source: &dyn ScreenSource) -> Result<Self, ConfigError> {
        let images = (0..source.count())
            .map(|n| source.get(n).ok_or(ConfigError::MissingScreen(n)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(images)
    }

    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.screens.len();
    }

    pub fn previous(&mut self) {
        let count = self.screens.len();
        self.current = (self.current + count - 1) % count;
    }

    /// Jump to a screen; fails if the ordinal is out of range
    pub fn go_to(&mut self, ordinal: usize) -> Result<(), ConfigError> {
        if ordinal >= self.screens.len() {
            return Err(ConfigError::ScreenOutOfRange {
                ordinal,
                count: self.screens.len(),
            });
        }
        self.current = ordinal;
        Ok(())
    }

    pub fn current(&self) -> &Screen {
        &self.screens[self.current]
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }
}

#[cfg(test)]
pub(crate) fn test_images(count: usize) -> Vec<ScreenImage> {
    (1..=count)
        .map(|n| ScreenImage::new(format!("app-image{n}.png"), 1170, 2532))
        .collect()
}
