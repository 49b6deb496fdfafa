use std::path::PathBuf;

use anyhow::bail;
use clap::{Parser, Subcommand};
use pixel_forensics_rs::forensics::{AnalysisConfig, ArtifactKind, ImageAnalysisPipeline, list_images};
use pixel_forensics_rs::forensics::report::DEFAULT_RESULTS_DIR;
use pixel_forensics_rs::logger;

use tracing::info;

#[derive(Parser)]
#[command(name = "pixel_forensics")]
#[command(about = "Pixel dump, string scan, LSB and bit-plane analysis of a single image")]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one image and write the result artifacts
    Analyze {
        /// Image file (.jpg, .jpeg, .png, .bmp, .gif)
        image: PathBuf,

        /// Directory receiving the result artifacts
        #[arg(long, default_value = DEFAULT_RESULTS_DIR)]
        results_dir: PathBuf,

        /// Log per-stage timings after the run
        #[arg(long)]
        timings: bool,
    },

    /// List candidate images in a directory
    List {
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    match cli.command {
        Commands::Analyze {
            image,
            results_dir,
            timings,
        } => {
            let pipeline = ImageAnalysisPipeline::new(AnalysisConfig::default(), &results_dir);
            let (report, step_timings) = pipeline.analyze_file_with_timings(&image)?;

            let stem = image
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();

            info!("Words found: {}", report.words.len());
            info!("LSB Analysis: {}", report.lsb);
            info!("Anomaly Analysis: {}", report.anomaly);
            for kind in ArtifactKind::ALL {
                info!("Saved {}", results_dir.join(kind.file_name(&stem)).display());
            }

            if timings {
                step_timings.log_summary();
            }
        }
        Commands::List { dir } => {
            let images = list_images(&dir)?;
            if images.is_empty() {
                bail!("No images found in directory.");
            }
            for (i, path) in images.iter().enumerate() {
                println!("{}. {}", i + 1, path.display());
            }
        }
    }

    Ok(())
}
