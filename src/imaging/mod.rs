//! Image processing — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `ImageReader::into_decoder` (dimensions + EXIF orientation) |
//! | **Resize** | Lanczos3 via `image::imageops::resize` |
//! | **Composite** | `image::imageops::overlay` (over-operator) |
//! | **Encode** | `image::codecs::png::PngEncoder`, best compression |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for layout math (unit testable)
//! - **Parameters**: Data structures describing a composition
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::{
    Layout, calculate_available_box, calculate_centering_offset, calculate_fit_dimensions,
    plan_layout,
};
pub use operations::{PreviewConfig, PreviewPlan, create_preview, get_dimensions, plan_preview};
pub use params::{
    Background, CanvasSize, ComposeParams, InvalidCanvasSize, InvalidColor, ShadowStyle,
};
pub use rust_backend::RustBackend;
