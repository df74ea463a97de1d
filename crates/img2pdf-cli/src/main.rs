use anyhow::{Result, bail};
use clap::Parser;
use img2pdf_runtime::{ConvertCommand, ConvertUpdate, worker_task};
use std::path::PathBuf;
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(
    name = "img2pdf",
    about = "Convert images into a single PDF, one page per image",
    version
)]
struct Cli {
    /// Input images (PNG or JPEG), in page order
    #[arg(required = true, num_args = 1..)]
    images: Vec<PathBuf>,

    /// Output name; ".pdf" is always appended (empty uses "output")
    #[arg(short, long, default_value = "")]
    output: String,
}

const ACCEPTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Reject anything that is not a PNG/JPEG path before a job starts.
///
/// The converter itself assumes a well-formed job; extension filtering is
/// this binary's responsibility.
fn validate_inputs(images: &[PathBuf]) -> Result<()> {
    for path in images {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext {
            Some(ext) if ACCEPTED_EXTENSIONS.contains(&ext.as_str()) => {}
            _ => bail!(
                "unsupported input {}: expected .png, .jpg or .jpeg",
                path.display()
            ),
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    validate_inputs(&cli.images)?;

    let total = cli.images.len();
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (update_tx, mut update_rx) = mpsc::unbounded_channel();
    let worker = tokio::spawn(worker_task(command_rx, update_tx));

    command_tx.send(ConvertCommand::Convert {
        images: cli.images,
        output_name: cli.output,
    })?;
    // Closing the command channel lets the worker exit after this job
    drop(command_tx);

    while let Some(update) = update_rx.recv().await {
        match update {
            ConvertUpdate::Started { page_count } => {
                println!("Processing {page_count} images...");
            }
            ConvertUpdate::PageAdded { index } => {
                println!("  page {}/{}", index + 1, total);
            }
            ConvertUpdate::Completed { path } => {
                println!("Converted → {}", path.display());
            }
            ConvertUpdate::Failed { message } => {
                bail!("conversion failed: {message}");
            }
        }
    }

    worker.await?;
    Ok(())
}
