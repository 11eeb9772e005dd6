//! Pure calculation functions for card geometry.
//!
//! All functions here are pure and testable without any I/O or images.

use serde::Serialize;

/// Fraction of the canvas width the cover may occupy.
pub const AVAILABLE_WIDTH_FRACTION: f64 = 0.6;
/// Fraction of the canvas height the cover may occupy.
pub const AVAILABLE_HEIGHT_FRACTION: f64 = 0.9;

/// Calculate the bounding box available to the cover on a canvas.
///
/// The cover gets 60% of the canvas width and 90% of its height, floored.
///
/// # Examples
/// ```
/// # use covercard::imaging::calculate_available_box;
/// assert_eq!(calculate_available_box((1280, 640)), (768, 576));
/// assert_eq!(calculate_available_box((1, 1)), (0, 0));
/// ```
pub fn calculate_available_box(target: (u32, u32)) -> (u32, u32) {
    let (target_w, target_h) = target;
    (
        (target_w as f64 * AVAILABLE_WIDTH_FRACTION) as u32,
        (target_h as f64 * AVAILABLE_HEIGHT_FRACTION) as u32,
    )
}

/// Calculate dimensions that fit a source inside a bounding box.
///
/// Scales by the smaller of the two axis ratios so the result is contained
/// in the box while preserving the source aspect ratio. Dimensions are
/// floored and clamped to at least 1 pixel, so a degenerate box (zero on
/// either axis) still yields a drawable image.
///
/// # Arguments
/// * `source` - Original image dimensions (width, height)
/// * `bounds` - Bounding box dimensions (width, height)
///
/// # Examples
/// ```
/// # use covercard::imaging::calculate_fit_dimensions;
/// // 800x1200 portrait into a 768x576 box → scale 0.48 → 384x576
/// assert_eq!(calculate_fit_dimensions((800, 1200), (768, 576)), (384, 576));
/// ```
pub fn calculate_fit_dimensions(source: (u32, u32), bounds: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = source;
    let (bound_w, bound_h) = bounds;

    let scale = f64::min(
        bound_w as f64 / src_w as f64,
        bound_h as f64 / src_h as f64,
    );

    (
        ((src_w as f64 * scale) as u32).max(1),
        ((src_h as f64 * scale) as u32).max(1),
    )
}

/// Calculate the offset that centers `inner` within `outer`.
///
/// Integer division: when the leftover space is odd, the extra pixel goes
/// to the right/bottom edge.
pub fn calculate_centering_offset(outer: (u32, u32), inner: (u32, u32)) -> (u32, u32) {
    (
        outer.0.saturating_sub(inner.0) / 2,
        outer.1.saturating_sub(inner.1) / 2,
    )
}

/// Resolved placement of the cover and its shadow on the canvas.
///
/// Produced by [`plan_layout`]; consumed by the backend, which only pastes
/// and blends — it never re-derives geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Layout {
    /// Scaled cover dimensions.
    pub cover_width: u32,
    pub cover_height: u32,
    /// Top-left corner of the cover on the canvas.
    pub cover_x: u32,
    pub cover_y: u32,
    /// Top-left corner of the shadow buffer on the canvas. Signed: the
    /// shadow margin can push it past the canvas edge on tiny canvases.
    pub shadow_x: i64,
    pub shadow_y: i64,
}

/// Plan the full card layout: fit the source into the available box,
/// center it, and place the shadow buffer `shadow_margin` up-left of the
/// cover (the buffer is `2 × shadow_margin` larger on each axis).
///
/// # Examples
/// ```
/// # use covercard::imaging::plan_layout;
/// let layout = plan_layout((800, 1200), (1280, 640), 12);
/// assert_eq!((layout.cover_width, layout.cover_height), (384, 576));
/// assert_eq!((layout.cover_x, layout.cover_y), (448, 32));
/// assert_eq!((layout.shadow_x, layout.shadow_y), (436, 20));
/// ```
pub fn plan_layout(source: (u32, u32), target: (u32, u32), shadow_margin: u32) -> Layout {
    let bounds = calculate_available_box(target);
    let (cover_w, cover_h) = calculate_fit_dimensions(source, bounds);
    let (cover_x, cover_y) = calculate_centering_offset(target, (cover_w, cover_h));

    Layout {
        cover_width: cover_w,
        cover_height: cover_h,
        cover_x,
        cover_y,
        shadow_x: cover_x as i64 - shadow_margin as i64,
        shadow_y: cover_y as i64 - shadow_margin as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // calculate_available_box tests
    // =========================================================================

    #[test]
    fn available_box_default_canvas() {
        assert_eq!(calculate_available_box((1280, 640)), (768, 576));
    }

    #[test]
    fn available_box_floors_fractions() {
        // 101 * 0.6 = 60.6 → 60, 99 * 0.9 = 89.1 → 89
        assert_eq!(calculate_available_box((101, 99)), (60, 89));
    }

    #[test]
    fn available_box_degenerates_to_zero() {
        assert_eq!(calculate_available_box((1, 1)), (0, 0));
    }

    // =========================================================================
    // calculate_fit_dimensions tests
    // =========================================================================

    #[test]
    fn fit_portrait_source_height_limited() {
        // scale = min(768/800, 576/1200) = 0.48
        assert_eq!(calculate_fit_dimensions((800, 1200), (768, 576)), (384, 576));
    }

    #[test]
    fn fit_landscape_source_width_limited() {
        // 1600x900 into 768x576: scale = min(0.48, 0.64) = 0.48 → 768x432
        assert_eq!(calculate_fit_dimensions((1600, 900), (768, 576)), (768, 432));
    }

    #[test]
    fn fit_preserves_aspect_within_one_pixel() {
        let source = (1023u32, 767u32);
        let (w, h) = calculate_fit_dimensions(source, (768, 576));
        let src_ratio = source.0 as f64 / source.1 as f64;
        // Flooring can shave up to a pixel from either axis
        let lo = (h as f64 - 1.0) * src_ratio;
        let hi = (h as f64 + 1.0) * src_ratio;
        assert!(lo <= w as f64 && w as f64 <= hi);
    }

    #[test]
    fn fit_upscales_small_source() {
        // 10x10 into 768x576: scale = 57.6 → 576x576
        assert_eq!(calculate_fit_dimensions((10, 10), (768, 576)), (576, 576));
    }

    #[test]
    fn fit_clamps_to_one_pixel_minimum() {
        // Zero-width box would floor to 0x0 without the clamp
        assert_eq!(calculate_fit_dimensions((1000, 1000), (0, 0)), (1, 1));
        assert_eq!(calculate_fit_dimensions((1, 3000), (768, 576)), (1, 576));
    }

    #[test]
    fn fit_never_exceeds_bounds() {
        for source in [(799u32, 1201u32), (3, 7), (5000, 5001), (640, 640)] {
            let (w, h) = calculate_fit_dimensions(source, (768, 576));
            assert!(w <= 768 && h <= 576, "{source:?} → {w}x{h}");
        }
    }

    // =========================================================================
    // calculate_centering_offset tests
    // =========================================================================

    #[test]
    fn centering_splits_space_evenly() {
        assert_eq!(calculate_centering_offset((1280, 640), (384, 576)), (448, 32));
    }

    #[test]
    fn centering_odd_leftover_favors_trailing_edge() {
        // 5 pixels of slack → 2 before, 3 after
        assert_eq!(calculate_centering_offset((105, 100), (100, 100)), (2, 0));
    }

    #[test]
    fn centering_oversized_inner_pins_to_origin() {
        assert_eq!(calculate_centering_offset((100, 100), (200, 50)), (0, 25));
    }

    // =========================================================================
    // plan_layout tests
    // =========================================================================

    #[test]
    fn layout_portrait_cover_on_default_canvas() {
        let layout = plan_layout((800, 1200), (1280, 640), 12);
        assert_eq!(
            layout,
            Layout {
                cover_width: 384,
                cover_height: 576,
                cover_x: 448,
                cover_y: 32,
                shadow_x: 436,
                shadow_y: 20,
            }
        );
    }

    #[test]
    fn layout_margins_balanced_within_one_pixel() {
        let layout = plan_layout((633, 471), (1280, 640), 12);
        let right = 1280 - layout.cover_x - layout.cover_width;
        let bottom = 640 - layout.cover_y - layout.cover_height;
        assert!(layout.cover_x.abs_diff(right) <= 1);
        assert!(layout.cover_y.abs_diff(bottom) <= 1);
    }

    #[test]
    fn layout_tiny_canvas_goes_negative_for_shadow() {
        // 2x2 canvas: available box (1, 1), cover 1x1 at (0, 0)
        let layout = plan_layout((1, 1), (2, 2), 12);
        assert_eq!((layout.cover_width, layout.cover_height), (1, 1));
        assert_eq!((layout.cover_x, layout.cover_y), (0, 0));
        assert_eq!((layout.shadow_x, layout.shadow_y), (-12, -12));
    }

    #[test]
    fn layout_one_pixel_source_survives() {
        let layout = plan_layout((1, 2400), (1280, 640), 12);
        assert_eq!(layout.cover_height, 576);
        assert_eq!(layout.cover_width, 1); // floored to 0.24, clamped up
    }
}
