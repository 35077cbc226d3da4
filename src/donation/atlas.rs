//! Sprite regions of the donations UI sheet.
//!
//! All overlay art lives on one 1024x512 atlas: the panel background on
//! top, the two button faces side by side along the bottom strip.

use bevy::prelude::*;

/// Atlas sheet dimensions in pixels.
pub const ATLAS_SIZE: Vec2 = Vec2::new(1024.0, 512.0);

/// Overlay panel background.
pub const BACKGROUND: AtlasRegion = AtlasRegion {
    x: 0.0,
    y: 0.0,
    w: 1024.0,
    h: 424.0,
};

/// Accept (tip) button face.
pub const ACCEPT_BUTTON: AtlasRegion = AtlasRegion {
    x: 475.0,
    y: 425.0,
    w: 460.0,
    h: 74.0,
};

/// Cancel button face.
pub const CANCEL_BUTTON: AtlasRegion = AtlasRegion {
    x: 0.0,
    y: 425.0,
    w: 460.0,
    h: 74.0,
};

/// A rectangular cut of the atlas sheet, in pixels from the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct AtlasRegion {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl AtlasRegion {
    /// Pixel-space rect, as `ImageNode::rect` expects.
    #[must_use]
    pub const fn rect(self) -> Rect {
        Rect {
            min: Vec2::new(self.x, self.y),
            max: Vec2::new(self.x + self.w, self.y + self.h),
        }
    }

    /// Normalized UV rect with the v-axis flipped, for renderers that
    /// sample the sheet from the bottom-left.
    #[must_use]
    pub fn uv_rect(self) -> Rect {
        Rect {
            min: Vec2::new(self.x / ATLAS_SIZE.x, 1.0 - (self.y + self.h) / ATLAS_SIZE.y),
            max: Vec2::new((self.x + self.w) / ATLAS_SIZE.x, 1.0 - self.y / ATLAS_SIZE.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn regions_stay_inside_the_sheet() {
        for region in [BACKGROUND, ACCEPT_BUTTON, CANCEL_BUTTON] {
            let rect = region.rect();
            assert!(rect.min.x >= 0.0 && rect.min.y >= 0.0);
            assert!(rect.max.x <= ATLAS_SIZE.x && rect.max.y <= ATLAS_SIZE.y);
        }
    }

    #[test]
    fn button_faces_do_not_overlap() {
        // Cancel occupies the left of the bottom strip, accept the right.
        assert!(CANCEL_BUTTON.rect().max.x < ACCEPT_BUTTON.rect().min.x);
        assert_eq!(CANCEL_BUTTON.w, ACCEPT_BUTTON.w);
        assert_eq!(CANCEL_BUTTON.h, ACCEPT_BUTTON.h);
    }

    #[test]
    fn pixel_rect_spans_width_times_height() {
        let rect = ACCEPT_BUTTON.rect();
        assert_eq!(rect.min, Vec2::new(475.0, 425.0));
        assert_eq!(rect.max, Vec2::new(935.0, 499.0));
    }

    #[test]
    fn uv_rect_flips_vertically() {
        let uv = BACKGROUND.uv_rect();
        assert_eq!(uv.min.x, 0.0);
        assert_eq!(uv.max.x, 1.0);
        // Top-of-sheet region maps to the top of UV space under a flip.
        assert_eq!(uv.max.y, 1.0);
        assert!((uv.min.y - (1.0 - 424.0 / 512.0)).abs() < f32::EPSILON);
    }
}
