//! Parameter types for card composition.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the high-level [`operations`](super::operations) module
//! (which plans the card) and the [`backend`](super::backend) (which does the
//! actual pixel work). This separation allows swapping backends (e.g. for
//! testing with a mock) without changing operation logic.
//!
//! ## Types
//!
//! - [`CanvasSize`] — Validated output dimensions (both axes ≥ 1).
//! - [`Background`] — Opaque canvas fill color, parseable from `#rrggbb`.
//! - [`ShadowStyle`] — Drop-shadow margin, inset, and opacity.
//! - [`ComposeParams`] — Full specification for one composition: source,
//!   output path, canvas, colors, and the resolved [`Layout`].

use super::calculations::Layout;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// A zero dimension was requested for the output canvas.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid canvas size {width}x{height}: both dimensions must be at least 1")]
pub struct InvalidCanvasSize {
    pub width: u32,
    pub height: u32,
}

/// Output canvas dimensions. Construction rejects zero on either axis;
/// degenerate canvases are a caller mistake, not something to guess at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CanvasSize {
    width: u32,
    height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Result<Self, InvalidCanvasSize> {
        if width == 0 || height == 0 {
            return Err(InvalidCanvasSize { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(self) -> u32 {
        self.width
    }

    pub fn height(self) -> u32 {
        self.height
    }

    pub fn dimensions(self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl Default for CanvasSize {
    /// GitHub's recommended social preview size.
    fn default() -> Self {
        Self {
            width: 1280,
            height: 640,
        }
    }
}

/// A color string could not be parsed as `#rrggbb`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid color {0:?}: expected #rrggbb")]
pub struct InvalidColor(pub String);

/// Opaque background color for the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Background {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Background {
    /// Parse a `#rrggbb` hex string (leading `#` optional).
    pub fn from_hex(s: &str) -> Result<Self, InvalidColor> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(InvalidColor(s.to_string()));
        }
        let channel = |i| u8::from_str_radix(&hex[i..i + 2], 16).unwrap();
        Ok(Self {
            r: channel(0),
            g: channel(2),
            b: channel(4),
        })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for Background {
    /// Dark navy (RGB 10, 14, 24).
    fn default() -> Self {
        Self {
            r: 10,
            g: 14,
            b: 24,
        }
    }
}

impl std::str::FromStr for Background {
    type Err = InvalidColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Drop-shadow styling.
///
/// The shadow buffer is `2 × margin` larger than the cover on each axis and
/// sits `margin` up-left of it. Inside the buffer, a black rectangle of
/// cover-size + `inset` is pasted at offset (`inset`, `inset`), so the
/// shadow peeks out asymmetrically toward the lower right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShadowStyle {
    /// Transparent margin around the shadow box, per side.
    pub margin: u32,
    /// Offset of the shadow box within its buffer, and its size overhang.
    pub inset: u32,
    /// Shadow opacity (0 = invisible, 255 = solid black).
    pub alpha: u8,
}

impl Default for ShadowStyle {
    fn default() -> Self {
        Self {
            margin: 12,
            inset: 8,
            alpha: 80,
        }
    }
}

/// Parameters for one card composition.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposeParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub canvas: CanvasSize,
    pub background: Background,
    pub shadow: ShadowStyle,
    /// Resolved placement, precomputed by [`plan_layout`](super::plan_layout).
    pub layout: Layout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_size_rejects_zero_axes() {
        assert!(CanvasSize::new(0, 640).is_err());
        assert!(CanvasSize::new(1280, 0).is_err());
        assert!(CanvasSize::new(0, 0).is_err());
    }

    #[test]
    fn canvas_size_accepts_positive() {
        let size = CanvasSize::new(2, 2).unwrap();
        assert_eq!(size.dimensions(), (2, 2));
    }

    #[test]
    fn canvas_size_default_is_github_preview() {
        assert_eq!(CanvasSize::default().dimensions(), (1280, 640));
    }

    #[test]
    fn background_parses_hex_with_and_without_hash() {
        let navy = Background { r: 10, g: 14, b: 24 };
        assert_eq!(Background::from_hex("#0a0e18").unwrap(), navy);
        assert_eq!(Background::from_hex("0a0e18").unwrap(), navy);
    }

    #[test]
    fn background_hex_roundtrip() {
        let bg = Background::default();
        assert_eq!(Background::from_hex(&bg.to_hex()).unwrap(), bg);
        assert_eq!(bg.to_hex(), "#0a0e18");
    }

    #[test]
    fn background_rejects_malformed_strings() {
        for bad in ["", "#fff", "#gggggg", "#0a0e188", "navy"] {
            assert!(Background::from_hex(bad).is_err(), "{bad:?} should fail");
        }
    }

    #[test]
    fn shadow_default_matches_card_template() {
        let s = ShadowStyle::default();
        assert_eq!((s.margin, s.inset, s.alpha), (12, 8, 80));
    }
}
