//! Walkability oracle
//!
//! A per-pixel mask the size of the arena background. A pixel is walkable
//! when it is strongly red: R > 200, G < 80, B < 80. Anything outside the
//! mask is unwalkable.

use thiserror::Error;

/// Mask construction failure
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MaskError {
    #[error("mask buffer holds {actual} bytes, expected {expected} for {width}x{height} RGB")]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("mask dimensions must be non-zero")]
    Empty,
}

/// Decides whether an arena coordinate can be stood on
pub trait Walkability {
    fn is_walkable(&self, x: f32, y: f32) -> bool;
}

/// Whether a mask color marks walkable ground
#[inline]
pub fn is_walkable_color(r: u8, g: u8, b: u8) -> bool {
    r > 200 && g < 80 && b < 80
}

/// Binary walkable mask, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkMask {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl WalkMask {
    /// Classify a tightly packed RGB8 buffer
    pub fn from_rgb8(width: u32, height: u32, rgb: &[u8]) -> Result<Self, MaskError> {
        if width == 0 || height == 0 {
            return Err(MaskError::Empty);
        }
        let expected = width as usize * height as usize * 3;
        if rgb.len() != expected {
            return Err(MaskError::BufferSize {
                width,
                height,
                expected,
                actual: rgb.len(),
            });
        }
        let cells = rgb
            .chunks_exact(3)
            .map(|px| is_walkable_color(px[0], px[1], px[2]))
            .collect();
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a mask from a predicate over pixel coordinates
    pub fn from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> bool) -> Self {
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Every in-bounds pixel walkable
    pub fn filled(width: u32, height: u32) -> Self {
        Self::from_fn(width, height, |_, _| true)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of walkable pixels
    pub fn walkable_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

impl Walkability for WalkMask {
    fn is_walkable(&self, x: f32, y: f32) -> bool {
        if !x.is_finite() || !y.is_finite() {
            return false;
        }
        let (x, y) = (x.floor(), y.floor());
        if x < 0.0 || y < 0.0 || x >= self.width as f32 || y >= self.height as f32 {
            return false;
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.cells.get(idx).copied().unwrap_or(false)
    }
}

/// Rectangular arena with no obstacles; stands in when no mask is loaded
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpenField {
    pub width: f32,
    pub height: f32,
}

impl OpenField {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Walkability for OpenField {
    fn is_walkable(&self, x: f32, y: f32) -> bool {
        x >= 0.0 && y >= 0.0 && x < self.width && y < self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_threshold() {
        assert!(is_walkable_color(255, 0, 0));
        assert!(is_walkable_color(201, 79, 79));
        assert!(!is_walkable_color(200, 0, 0));
        assert!(!is_walkable_color(255, 80, 0));
        assert!(!is_walkable_color(255, 0, 80));
    }

    #[test]
    fn test_from_rgb8() {
        // 2x1: red, then blue
        let mask = WalkMask::from_rgb8(2, 1, &[255, 0, 0, 0, 0, 255]).expect("valid mask");
        assert!(mask.is_walkable(0.5, 0.5));
        assert!(!mask.is_walkable(1.5, 0.5));
        assert_eq!(mask.walkable_count(), 1);
    }

    #[test]
    fn test_from_rgb8_rejects_bad_length() {
        let err = WalkMask::from_rgb8(2, 2, &[0; 5]).unwrap_err();
        assert_eq!(
            err,
            MaskError::BufferSize {
                width: 2,
                height: 2,
                expected: 12,
                actual: 5
            }
        );
        assert_eq!(WalkMask::from_rgb8(0, 2, &[]).unwrap_err(), MaskError::Empty);
    }

    #[test]
    fn test_out_of_bounds_fails_closed() {
        let mask = WalkMask::filled(10, 10);
        assert!(mask.is_walkable(0.0, 0.0));
        assert!(mask.is_walkable(9.99, 9.99));
        assert!(!mask.is_walkable(10.0, 5.0));
        assert!(!mask.is_walkable(5.0, 10.0));
        assert!(!mask.is_walkable(-0.5, 5.0));
        assert!(!mask.is_walkable(f32::NAN, 5.0));
    }

    #[test]
    fn test_open_field_bounds() {
        let field = OpenField::new(800.0, 600.0);
        assert!(field.is_walkable(0.0, 0.0));
        assert!(!field.is_walkable(800.0, 10.0));
        assert!(!field.is_walkable(10.0, -1.0));
    }
}
