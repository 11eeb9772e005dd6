use clap::{Parser, Subcommand};
use covercard::imaging::{
    Background, CanvasSize, PreviewConfig, RustBackend, ShadowStyle, create_preview, plan_preview,
};
use covercard::output;
use std::path::PathBuf;

/// Shared canvas flags for all subcommands.
#[derive(clap::Args, Clone, Copy)]
struct CanvasArgs {
    /// Canvas width in pixels
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 640)]
    height: u32,
}

impl CanvasArgs {
    fn canvas(self) -> Result<CanvasSize, covercard::imaging::InvalidCanvasSize> {
        CanvasSize::new(self.width, self.height)
    }
}

fn version_string() -> &'static str {
    if env!("ON_RELEASE_TAG") == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "covercard")]
#[command(about = "Compose social-media preview cards from cover images")]
#[command(long_about = "\
Compose social-media preview cards from cover images

Scales a book or project cover to fit a bounding box (60% of the canvas
width, 90% of its height), centers it on an opaque background with a drop
shadow, and writes the flattened result as an optimized PNG.

The default 1280x640 canvas matches GitHub's social preview slot and works
for any Open Graph og:image tag.

Examples:

  covercard compose cover.png images/social-preview.png
  covercard compose cover.jpg card.png --width 1200 --height 630
  covercard compose cover.png card.png --background '#1a1a2e'
  covercard plan cover.png                # resolved layout as JSON, no output file

Input formats: JPEG, PNG, TIFF, WebP. EXIF orientation is respected, so
phone photos come out upright.")]
#[command(version = version_string())]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compose a preview card and write it as PNG
    Compose {
        /// Cover image to place on the card
        cover: PathBuf,

        /// Where to write the PNG (directories are created as needed)
        output: PathBuf,

        #[command(flatten)]
        canvas: CanvasArgs,

        /// Canvas background color as #rrggbb
        #[arg(long, default_value = "#0a0e18")]
        background: Background,
    },
    /// Resolve the card layout and print it as JSON without writing pixels
    Plan {
        /// Cover image to plan for
        cover: PathBuf,

        #[command(flatten)]
        canvas: CanvasArgs,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let backend = RustBackend::new();

    match cli.command {
        Command::Compose {
            cover,
            output: out,
            canvas,
            background,
        } => {
            let config = PreviewConfig {
                canvas: canvas.canvas()?,
                background,
                shadow: ShadowStyle::default(),
            };
            let plan = create_preview(&backend, &cover, &out, &config)?;
            output::print_compose_output(&plan, &cover, &out);
        }
        Command::Plan { cover, canvas } => {
            let config = PreviewConfig {
                canvas: canvas.canvas()?,
                ..PreviewConfig::default()
            };
            let plan = plan_preview(&backend, &cover, &config)?;
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
    }

    Ok(())
}
