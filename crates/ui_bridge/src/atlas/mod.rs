//! Icon atlas
//!
//! One shared image holding the built-in icons and a solid-fill swatch.
//! Filled rectangles are drawn by stretching the swatch, so nothing renders
//! without an atlas; every failure here is a setup error.

use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::foundation::math::Rect;

/// Result type for atlas operations
pub type AtlasResult<T> = Result<T, AtlasError>;

/// Errors raised while setting up the atlas
#[derive(Debug, thiserror::Error)]
pub enum AtlasError {
    /// The embedded default atlas failed to decode
    #[error("Failed to decode default atlas: {0}")]
    Decode(#[source] image::ImageError),

    /// An atlas image on disk failed to load
    #[error("Failed to load atlas image {path}: {source}")]
    Load {
        /// Image path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: image::ImageError,
    },

    /// The rect table has no usable solid-fill slot
    #[error("Atlas has no solid-fill slot at index {}", ATLAS_FILL)]
    MissingFill,

    /// A rect lies outside the atlas texture
    #[error("Atlas rect {index} {rect:?} lies outside the {width}x{height} texture")]
    RectOutOfBounds {
        /// Slot index
        index: usize,
        /// Offending rect
        rect: Rect,
        /// Texture width
        width: u32,
        /// Texture height
        height: u32,
    },
}

/// Close box icon slot
pub const ICON_CLOSE: u32 = 1;
/// Resize grip icon slot
pub const ICON_RESIZE: u32 = 2;
/// Checkmark icon slot
pub const ICON_CHECK: u32 = 3;
/// Collapsed disclosure triangle slot
pub const ICON_COLLAPSED: u32 = 4;
/// Expanded disclosure triangle slot
pub const ICON_EXPANDED: u32 = 5;
/// Solid-fill swatch slot
pub const ATLAS_FILL: usize = 6;

/// Slot geometry of the embedded default atlas (index 0 is a placeholder)
pub const DEFAULT_ATLAS_RECTS: [Rect; 7] = [
    Rect::new(0, 0, 0, 0),
    Rect::new(0, 0, 16, 16),
    Rect::new(24, 24, 6, 6),
    Rect::new(16, 0, 16, 16),
    Rect::new(32, 0, 16, 16),
    Rect::new(48, 0, 16, 16),
    Rect::new(2, 18, 3, 3),
];

static DEFAULT_ATLAS_PNG: &[u8] = include_bytes!("../../assets/default_atlas.png");

/// Atlas texture plus validated slot geometry
#[derive(Debug, Clone)]
pub struct Atlas {
    texture: RgbaImage,
    rects: Vec<Rect>,
}

impl Atlas {
    /// Pair a texture with its slot table, validating every slot
    pub fn new(texture: RgbaImage, rects: Vec<Rect>) -> AtlasResult<Self> {
        let bounds = Rect::from_size(texture.width() as i32, texture.height() as i32);

        match rects.get(ATLAS_FILL) {
            Some(fill) if !fill.is_empty() => {}
            _ => return Err(AtlasError::MissingFill),
        }

        // Slot 0 and any other zero-sized slot are placeholders
        for (index, rect) in rects.iter().enumerate() {
            if !rect.is_empty() && !bounds.contains_rect(rect) {
                return Err(AtlasError::RectOutOfBounds {
                    index,
                    rect: *rect,
                    width: texture.width(),
                    height: texture.height(),
                });
            }
        }

        Ok(Self { texture, rects })
    }

    /// The embedded default atlas with its default geometry
    pub fn load_default() -> AtlasResult<Self> {
        Self::new(Self::default_texture()?, DEFAULT_ATLAS_RECTS.to_vec())
    }

    /// Decode the embedded default atlas image
    pub fn default_texture() -> AtlasResult<RgbaImage> {
        let image = image::load_from_memory(DEFAULT_ATLAS_PNG).map_err(AtlasError::Decode)?;
        log::info!("Decoded default atlas ({}x{})", image.width(), image.height());
        Ok(image.to_rgba8())
    }

    /// Load an atlas image from disk
    pub fn texture_from_path(path: impl AsRef<Path>) -> AtlasResult<RgbaImage> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|source| AtlasError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded atlas image {}", path.display());
        Ok(image.to_rgba8())
    }

    /// Atlas texture
    pub const fn texture(&self) -> &RgbaImage {
        &self.texture
    }

    /// Slot geometry
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// Rect for slot `id`, `None` when out of range
    pub fn rect(&self, id: u32) -> Option<Rect> {
        self.rects.get(id as usize).copied()
    }

    /// Solid-fill swatch rect
    pub fn fill_rect(&self) -> Rect {
        // Presence checked in `new`
        self.rects[ATLAS_FILL]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_atlas_decodes() {
        let atlas = Atlas::load_default().unwrap();
        assert_eq!(atlas.rects().len(), DEFAULT_ATLAS_RECTS.len());
        assert_eq!(atlas.fill_rect(), Rect::new(2, 18, 3, 3));
        assert!(atlas.rect(0).unwrap().is_empty());
    }

    #[test]
    fn test_fill_swatch_is_opaque_white() {
        let atlas = Atlas::load_default().unwrap();
        let fill = atlas.fill_rect();
        for y in fill.y..fill.bottom() {
            for x in fill.x..fill.right() {
                assert_eq!(atlas.texture().get_pixel(x as u32, y as u32).0, [255, 255, 255, 255]);
            }
        }
    }

    #[test]
    fn test_rect_outside_texture_rejected() {
        let mut rects = DEFAULT_ATLAS_RECTS.to_vec();
        rects[ICON_CHECK as usize] = Rect::new(60, 0, 16, 16);
        let result = Atlas::new(RgbaImage::new(64, 32), rects);
        assert!(matches!(result, Err(AtlasError::RectOutOfBounds { index: 3, .. })));
    }

    #[test]
    fn test_missing_fill_rejected() {
        let rects = DEFAULT_ATLAS_RECTS[..ATLAS_FILL].to_vec();
        let result = Atlas::new(RgbaImage::new(64, 32), rects);
        assert!(matches!(result, Err(AtlasError::MissingFill)));
    }

    #[test]
    fn test_missing_atlas_file() {
        let result = Atlas::texture_from_path("does/not/exist.png");
        assert!(matches!(result, Err(AtlasError::Load { .. })));
    }

    #[test]
    fn test_out_of_range_icon() {
        let atlas = Atlas::load_default().unwrap();
        assert!(atlas.rect(7).is_none());
    }
}
