//! High-level card operations.
//!
//! These functions combine calculations with backend execution.
//! They take configuration, compute the layout, and call the backend.

use super::backend::{BackendError, ImageBackend};
use super::calculations::{Layout, plan_layout};
use super::params::{Background, CanvasSize, ComposeParams, ShadowStyle};
use serde::Serialize;
use std::path::Path;

/// Result type for card operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Get image dimensions using the backend.
pub fn get_dimensions(backend: &impl ImageBackend, path: &Path) -> Result<(u32, u32)> {
    let dims = backend.identify(path)?;
    Ok((dims.width, dims.height))
}

/// Configuration for card generation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PreviewConfig {
    pub canvas: CanvasSize,
    pub background: Background,
    pub shadow: ShadowStyle,
}

/// A fully-resolved composition: source dimensions plus placement.
///
/// Serialized as pretty JSON by the `plan` subcommand, and used by the CLI
/// to report what `compose` produced.
#[derive(Debug, Clone, Serialize)]
pub struct PreviewPlan {
    pub source_width: u32,
    pub source_height: u32,
    pub canvas: CanvasSize,
    pub layout: Layout,
}

/// Resolve the card layout for a source image without touching any pixels.
///
/// Reads only the image header (dimensions + orientation) via the backend;
/// all placement math is pure.
pub fn plan_preview(
    backend: &impl ImageBackend,
    source: &Path,
    config: &PreviewConfig,
) -> Result<PreviewPlan> {
    let dims = backend.identify(source)?;
    let layout = plan_layout(
        (dims.width, dims.height),
        config.canvas.dimensions(),
        config.shadow.margin,
    );

    Ok(PreviewPlan {
        source_width: dims.width,
        source_height: dims.height,
        canvas: config.canvas,
        layout,
    })
}

/// Assemble compose parameters from a resolved plan.
///
/// Useful for testing parameter generation.
pub fn compose_params(
    source: &Path,
    output: &Path,
    plan: &PreviewPlan,
    config: &PreviewConfig,
) -> ComposeParams {
    ComposeParams {
        source: source.to_path_buf(),
        output: output.to_path_buf(),
        canvas: config.canvas,
        background: config.background,
        shadow: config.shadow,
        layout: plan.layout,
    }
}

/// Compose a preview card and write it to `output`.
///
/// Creates the output directory if absent, plans the layout, and hands the
/// pixel work to the backend. All-or-nothing: either the PNG lands at
/// `output` or the error propagates untouched.
pub fn create_preview(
    backend: &impl ImageBackend,
    source: &Path,
    output: &Path,
    config: &PreviewConfig,
) -> Result<PreviewPlan> {
    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let plan = plan_preview(backend, source, config)?;
    backend.compose(&compose_params(source, output, &plan, config))?;

    Ok(plan)
}
