//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! # Output Format
//!
//! ## Compose
//!
//! ```text
//! Cover: DeepLearning101-cover.png (800x1200)
//!     Fitted: 384x576
//!     Placed: (448, 32)
//! Card: images/github-social-media-preview.png (1280x640)
//! ```

use crate::imaging::PreviewPlan;
use std::path::Path;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format a `WxH` dimension pair.
fn dims(width: u32, height: u32) -> String {
    format!("{}x{}", width, height)
}

/// Format the report for a completed composition.
pub fn format_compose_output(plan: &PreviewPlan, source: &Path, output: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!(
        "Cover: {} ({})",
        source.display(),
        dims(plan.source_width, plan.source_height)
    ));
    lines.push(format!(
        "{}Fitted: {}",
        indent(1),
        dims(plan.layout.cover_width, plan.layout.cover_height)
    ));
    lines.push(format!(
        "{}Placed: ({}, {})",
        indent(1),
        plan.layout.cover_x,
        plan.layout.cover_y
    ));
    lines.push(format!(
        "Card: {} ({})",
        output.display(),
        dims(plan.canvas.width(), plan.canvas.height())
    ));

    lines
}

/// Print the compose report to stdout.
pub fn print_compose_output(plan: &PreviewPlan, source: &Path, output: &Path) {
    for line in format_compose_output(plan, source, output) {
        println!("{}", line);
    }
}
