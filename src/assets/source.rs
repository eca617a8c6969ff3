//! Discovery of the ordered screen sequence
//!
//! Screens are sequentially named assets: `app-image1.png`, `app-image2.png`,
//! and so on. Discovery stops at the first missing index.

use std::path::{Path, PathBuf};

use anyhow::Context;

use super::image::ScreenImage;

/// Supplies the fixed, ordered screen images of a session
pub trait ScreenSource {
    fn count(&self) -> usize;
    fn get(&self, ordinal: usize) -> Option<ScreenImage>;
}

impl ScreenSource for Vec<ScreenImage> {
    fn count(&self) -> usize {
        self.len()
    }

    fn get(&self, ordinal: usize) -> Option<ScreenImage> {
        self.as_slice().get(ordinal).cloned()
    }
}

/// Screen images found in a directory
#[derive(Clone, Debug)]
pub struct AssetDirectory {
    root: PathBuf,
    images: Vec<ScreenImage>,
}

impl AssetDirectory {
    /// Upper bound on how many sequential assets are probed
    pub const MAX_SCREENS: usize = 256;

    /// Scan `root` for `{prefix}{n}.{extension}` starting at n = 1
    pub fn discover(root: &Path, prefix: &str, extension: &str) -> anyhow::Result<Self> {
        if !root.is_dir() {
            anyhow::bail!("Screen asset directory {} does not exist", root.display());
        }

        let mut images = Vec::new();
        for n in 1..=Self::MAX_SCREENS {
            let path = root.join(asset_name(prefix, n, extension));
            if !path.is_file() {
                break;
            }
            let image = ScreenImage::open(&path)
                .with_context(|| format!("Screen {n} in {} is not a readable image", root.display()))?;
            images.push(image);
        }

        log::info!("Found {} screen(s) in {}", images.len(), root.display());
        Ok(Self {
            root: root.to_path_buf(),
            images,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ScreenSource for AssetDirectory {
    fn count(&self) -> usize {
        self.images.len()
    }

    fn get(&self, ordinal: usize) -> Option<ScreenImage> {
        self.images.get(ordinal).cloned()
    }
}

/// File name of the n-th (1-based) screen asset
pub fn asset_name(prefix: &str, n: usize, extension: &str) -> String {
    format!("{prefix}{n}.{extension}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_png(path: &Path, width: u32, height: u32) {
        ::image::RgbaImage::new(width, height).save(path).unwrap();
    }

    #[test]
    fn test_asset_name() {
        assert_eq!(asset_name("app-image", 3, "png"), "app-image3.png");
    }

    #[test]
    fn test_discover_stops_at_gap() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("app-image1.png"), 4, 8);
        write_png(&dir.path().join("app-image2.png"), 6, 2);
        write_png(&dir.path().join("app-image4.png"), 1, 1);

        let assets = AssetDirectory::discover(dir.path(), "app-image", "png").unwrap();
        assert_eq!(assets.count(), 2);
        let second = assets.get(1).unwrap();
        assert_eq!((second.width, second.height), (6, 2));
        assert!(assets.get(2).is_none());
    }

    #[test]
    fn test_discover_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let assets = AssetDirectory::discover(dir.path(), "app-image", "png").unwrap();
        assert_eq!(assets.count(), 0);
    }

    #[test]
    fn test_discover_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(AssetDirectory::discover(&missing, "app-image", "png").is_err());
    }

    #[test]
    fn test_discover_rejects_unreadable_image() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("app-image1.png"), b"not a png").unwrap();
        assert!(AssetDirectory::discover(dir.path(), "app-image", "png").is_err());
    }
}
