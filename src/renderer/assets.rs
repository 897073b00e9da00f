//! Image assets with placeholder fallback
//!
//! Decoding is the backend's business; this module only decides what each
//! sprite is (a file or a flat placeholder) and how large it is drawn.

use std::path::{Path, PathBuf};

use glam::IVec2;

use super::colors;
use crate::consts::{PLAYER_SIZE, SCREEN_H, SCREEN_W};
use crate::settings::AssetPaths;

/// Size of the placeholder surface used for missing images (before scaling)
pub const PLACEHOLDER_SIZE: IVec2 = IVec2::splat(64);

/// Where a sprite's pixels come from
#[derive(Debug, Clone, PartialEq)]
pub enum SpriteSource {
    File(PathBuf),
    /// Flat color rectangle standing in for a missing file
    Placeholder([f32; 4]),
}

/// A sprite and the size it is drawn at
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub source: SpriteSource,
    pub size: IVec2,
}

impl Sprite {
    pub fn placeholder(size: IVec2) -> Self {
        Self {
            source: SpriteSource::Placeholder(colors::PLACEHOLDER),
            size,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.source, SpriteSource::Placeholder(_))
    }
}

/// Sprites referenced by draw commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteId {
    Background,
    Player,
    LostBanner,
}

/// Answers whether an image can be loaded and how big it is
pub trait ImageSource {
    /// Natural pixel size of the image at `path`, or None if it can't be loaded
    fn image_size(&self, path: &Path) -> Option<IVec2>;
}

/// Reads image dimensions from the file header without decoding pixels
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageFiles;

impl ImageSource for ImageFiles {
    fn image_size(&self, path: &Path) -> Option<IVec2> {
        match imagesize::size(path) {
            Ok(dim) => Some(IVec2::new(dim.width as i32, dim.height as i32)),
            Err(e) => {
                log::debug!("Can't read image header of {}: {}", path.display(), e);
                None
            }
        }
    }
}

/// Scale a banner to fit within 80% x 60% of the screen, keeping aspect
pub fn fit_banner(natural: IVec2) -> IVec2 {
    let natural = natural.max(IVec2::ONE).as_vec2();
    let scale = (SCREEN_W as f32 * 0.8 / natural.x).min(SCREEN_H as f32 * 0.6 / natural.y);
    (natural * scale).as_ivec2()
}

/// Resolved game sprites
#[derive(Debug, Clone, PartialEq)]
pub struct Assets {
    pub background: Sprite,
    pub player: Sprite,
    /// None = draw the text banner instead
    pub lost_banner: Option<Sprite>,
}

impl Assets {
    /// Resolve every sprite; required images fall back to placeholders
    pub fn load(paths: &AssetPaths, source: &dyn ImageSource) -> Self {
        Self {
            background: load_required(source, &paths.background, IVec2::new(SCREEN_W, SCREEN_H)),
            player: load_required(source, &paths.player, IVec2::splat(PLAYER_SIZE)),
            lost_banner: source.image_size(&paths.lost_banner).map(|natural| Sprite {
                source: SpriteSource::File(paths.lost_banner.clone()),
                size: fit_banner(natural),
            }),
        }
    }

    /// All placeholders, no banner
    pub fn placeholders() -> Self {
        Self {
            background: Sprite::placeholder(IVec2::new(SCREEN_W, SCREEN_H)),
            player: Sprite::placeholder(IVec2::splat(PLAYER_SIZE)),
            lost_banner: None,
        }
    }

    pub fn get(&self, id: SpriteId) -> Option<&Sprite> {
        match id {
            SpriteId::Background => Some(&self.background),
            SpriteId::Player => Some(&self.player),
            SpriteId::LostBanner => self.lost_banner.as_ref(),
        }
    }
}

/// Image scaled to `display_size`, or a placeholder of the same size
fn load_required(source: &dyn ImageSource, path: &Path, display_size: IVec2) -> Sprite {
    match source.image_size(path) {
        Some(_) => Sprite {
            source: SpriteSource::File(path.to_path_buf()),
            size: display_size,
        },
        None => {
            log::warn!(
                "Missing image {}, using {}x{} placeholder",
                path.display(),
                PLACEHOLDER_SIZE.x,
                PLACEHOLDER_SIZE.y
            );
            Sprite::placeholder(display_size)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every path "exists" with the given size
    struct FixedSize(IVec2);

    impl ImageSource for FixedSize {
        fn image_size(&self, _path: &Path) -> Option<IVec2> {
            Some(self.0)
        }
    }

    struct NothingLoads;

    impl ImageSource for NothingLoads {
        fn image_size(&self, _path: &Path) -> Option<IVec2> {
            None
        }
    }

    #[test]
    fn test_missing_images_fall_back() {
        let assets = Assets::load(&AssetPaths::default(), &NothingLoads);
        assert!(assets.background.is_placeholder());
        assert_eq!(assets.background.size, IVec2::new(SCREEN_W, SCREEN_H));
        assert!(assets.player.is_placeholder());
        assert_eq!(assets.player.size, IVec2::splat(PLAYER_SIZE));
        assert!(assets.lost_banner.is_none());
        assert_eq!(assets, Assets::placeholders());
    }

    #[test]
    fn test_present_images_are_used() {
        let paths = AssetPaths::default();
        let assets = Assets::load(&paths, &FixedSize(IVec2::new(1000, 500)));
        assert_eq!(assets.player.source, SpriteSource::File(paths.player.clone()));
        assert_eq!(assets.player.size, IVec2::splat(PLAYER_SIZE));
        let banner = assets.get(SpriteId::LostBanner).unwrap();
        assert!(!banner.is_placeholder());
    }

    #[test]
    fn test_fit_banner() {
        // Width-limited: 1000 wide -> 819 (80% of 1024)
        let size = fit_banner(IVec2::new(1000, 100));
        assert_eq!(size.x, 819);
        assert!(size.y <= (SCREEN_H as f32 * 0.6) as i32);

        // Height-limited: 345 tall (60% of 576)
        let size = fit_banner(IVec2::new(100, 1000));
        assert_eq!(size.y, 345);
        assert!(size.x <= 820);
    }

    /// Minimal PNG: signature plus an IHDR chunk carrying the dimensions
    fn png_header(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        bytes.extend_from_slice(&13u32.to_be_bytes());
        bytes.extend_from_slice(b"IHDR");
        bytes.extend_from_slice(&width.to_be_bytes());
        bytes.extend_from_slice(&height.to_be_bytes());
        bytes.extend_from_slice(&[8, 6, 0, 0, 0]);
        bytes.extend_from_slice(&[0; 4]);
        bytes
    }

    fn temp_file(name: &str, bytes: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("endless-jump-{}-{}", std::process::id(), name));
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn test_image_files_missing_file() {
        assert_eq!(ImageFiles.image_size(Path::new("no/such/image.png")), None);
    }

    #[test]
    fn test_image_files_unreadable_header() {
        let path = temp_file("garbage.png", b"not an image at all");
        assert_eq!(ImageFiles.image_size(&path), None);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_banner_keeps_real_aspect_ratio() {
        let path = temp_file("square_banner.png", &png_header(300, 300));
        assert_eq!(ImageFiles.image_size(&path), Some(IVec2::new(300, 300)));

        let paths = AssetPaths {
            lost_banner: path.clone(),
            ..AssetPaths::default()
        };
        let banner = Assets::load(&paths, &ImageFiles).lost_banner.unwrap();
        // Square stays square, limited by 60% of the screen height
        assert_eq!(banner.size, IVec2::new(345, 345));
        assert_eq!(banner.source, SpriteSource::File(path.clone()));
        std::fs::remove_file(&path).unwrap();
    }
}
