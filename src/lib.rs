//! # Covercard
//!
//! Compose social-media preview cards from book and project covers.
//! Given a cover image, covercard scales it to fit a bounding box, centers
//! it on a fixed-size canvas with a drop shadow, and writes the flattened
//! result as an optimized PNG — ready for GitHub's social preview slot or
//! any Open Graph `og:image` tag.
//!
//! # Architecture: Plan, Then Compose
//!
//! A composition runs in two steps, each independently testable:
//!
//! ```text
//! 1. Plan     source dimensions  →  Layout        (pure geometry, no I/O)
//! 2. Compose  source + Layout    →  output PNG    (decode, resize, blend, encode)
//! ```
//!
//! This separation exists for two reasons:
//!
//! - **Testability**: all placement math (fit scale, centering, shadow
//!   geometry) lives in pure functions that unit tests exercise without
//!   decoding a single pixel.
//! - **Debuggability**: the resolved [`PreviewPlan`](imaging::PreviewPlan)
//!   is serializable JSON you can inspect with `covercard plan` before
//!   committing to an encode.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Pure-Rust image operations: geometry, backend trait, compositing |
//! | [`output`] | CLI output formatting — pure `format_*` functions + `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Pure-Rust Imaging (No ImageMagick)
//!
//! The [`imaging`] module uses the `image` crate for everything: decoding
//! (JPEG, PNG, TIFF, WebP), Lanczos3 resampling, alpha compositing, and PNG
//! encoding. No system dependencies — the binary is fully self-contained.
//!
//! ## Fixed Template
//!
//! There is exactly one layout: cover centered in a 0.6×width by 0.9×height
//! box, drop shadow offset down-right, opaque background. Covercard is a
//! one-trick tool; the only knobs are canvas size and background color.
//! No template language, no theme files.
//!
//! ## Opaque Output
//!
//! Social platforms composite preview images against unknown page colors, so
//! the output carries no alpha channel: the RGBA working canvas is flattened
//! to RGB before encoding. What you see is what every platform renders.

pub mod imaging;
pub mod output;
