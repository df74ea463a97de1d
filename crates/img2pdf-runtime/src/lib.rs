//! Message types and worker task bridging a UI or CLI to the converter.
//!
//! The collaborator owns two unbounded channels: commands flow in, updates
//! flow out. The worker processes one command at a time, so at most one
//! conversion job is ever in flight; preventing double-submission while a
//! job runs is the collaborator's responsibility (e.g. disabling the
//! trigger until a terminal update arrives).

use std::path::PathBuf;

use img2pdf::{ConversionJob, ImageSource};
use tokio::sync::mpsc;

/// Commands sent from the collaborator to the worker
#[derive(Debug)]
pub enum ConvertCommand {
    Convert {
        images: Vec<PathBuf>,
        output_name: String,
    },
}

/// Updates sent from the worker back to the collaborator.
///
/// All variants are `Clone` and carry errors as plain strings so they can
/// be forwarded onto a single-threaded UI loop without holding on to
/// non-`Send` error types.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertUpdate {
    /// A job was accepted and assembly has begun
    Started { page_count: usize },
    /// The page for the image at `index` was sealed
    PageAdded { index: usize },
    /// The document was persisted
    Completed { path: PathBuf },
    /// The job aborted; nothing was persisted
    Failed { message: String },
}

/// Async worker task that processes conversion commands and sends updates
pub async fn worker_task(
    mut command_rx: mpsc::UnboundedReceiver<ConvertCommand>,
    update_tx: mpsc::UnboundedSender<ConvertUpdate>,
) {
    while let Some(cmd) = command_rx.recv().await {
        process_command(cmd, &update_tx).await;
    }
}

async fn process_command(cmd: ConvertCommand, update_tx: &mpsc::UnboundedSender<ConvertUpdate>) {
    match cmd {
        ConvertCommand::Convert {
            images,
            output_name,
        } => {
            let sources = images.into_iter().map(ImageSource::new).collect();
            let job = ConversionJob::new(sources, output_name);

            // An empty selection is a silent no-op: no updates at all
            if job.is_empty() {
                log::debug!("ignoring convert command with no images");
                return;
            }

            let _ = update_tx.send(ConvertUpdate::Started {
                page_count: job.page_count(),
            });

            let page_tx = update_tx.clone();
            let result = img2pdf::run(job, move |index| {
                let _ = page_tx.send(ConvertUpdate::PageAdded { index });
            })
            .await;

            match result {
                Ok(Some(path)) => {
                    let _ = update_tx.send(ConvertUpdate::Completed { path });
                }
                Ok(None) => {}
                Err(e) => {
                    log::debug!("conversion failed: {e}");
                    let _ = update_tx.send(ConvertUpdate::Failed {
                        message: e.to_string(),
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_png(dir: &std::path::Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        let img = image::RgbImage::from_pixel(width, height, image::Rgb([40, 90, 160]));
        img.save(&path).unwrap();
        path
    }

    async fn drain_updates(
        mut update_rx: mpsc::UnboundedReceiver<ConvertUpdate>,
    ) -> Vec<ConvertUpdate> {
        let mut updates = Vec::new();
        while let Some(update) = update_rx.recv().await {
            updates.push(update);
        }
        updates
    }

    #[tokio::test]
    async fn test_worker_emits_full_lifecycle() {
        let dir = tempfile::tempdir().unwrap();
        let images = vec![
            write_png(dir.path(), "one.png", 800, 600),
            write_png(dir.path(), "two.png", 300, 900),
        ];
        let output_name = dir.path().join("cards").to_string_lossy().into_owned();

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (update_tx, update_rx) = mpsc::unbounded_channel();
        let worker = tokio::spawn(worker_task(command_rx, update_tx));

        command_tx
            .send(ConvertCommand::Convert {
                images,
                output_name,
            })
            .unwrap();
        drop(command_tx);

        let updates = drain_updates(update_rx).await;
        worker.await.unwrap();

        assert_eq!(
            updates,
            vec![
                ConvertUpdate::Started { page_count: 2 },
                ConvertUpdate::PageAdded { index: 0 },
                ConvertUpdate::PageAdded { index: 1 },
                ConvertUpdate::Completed {
                    path: dir.path().join("cards.pdf")
                },
            ]
        );
        assert!(dir.path().join("cards.pdf").exists());
    }

    #[tokio::test]
    async fn test_worker_is_silent_for_empty_selection() {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (update_tx, update_rx) = mpsc::unbounded_channel();
        let worker = tokio::spawn(worker_task(command_rx, update_tx));

        command_tx
            .send(ConvertCommand::Convert {
                images: vec![],
                output_name: String::new(),
            })
            .unwrap();
        drop(command_tx);

        let updates = drain_updates(update_rx).await;
        worker.await.unwrap();

        assert!(updates.is_empty());
    }

    #[tokio::test]
    async fn test_worker_reports_failure_with_cause() {
        let dir = tempfile::tempdir().unwrap();
        let images = vec![
            write_png(dir.path(), "ok.png", 640, 480),
            dir.path().join("gone.png"),
        ];
        let output_name = dir.path().join("half").to_string_lossy().into_owned();

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (update_tx, update_rx) = mpsc::unbounded_channel();
        let worker = tokio::spawn(worker_task(command_rx, update_tx));

        command_tx
            .send(ConvertCommand::Convert {
                images,
                output_name,
            })
            .unwrap();
        drop(command_tx);

        let updates = drain_updates(update_rx).await;
        worker.await.unwrap();

        assert_eq!(updates[0], ConvertUpdate::Started { page_count: 2 });
        assert_eq!(updates[1], ConvertUpdate::PageAdded { index: 0 });
        match updates.last().unwrap() {
            ConvertUpdate::Failed { message } => {
                assert!(message.contains("gone.png"), "message was: {message}");
            }
            other => panic!("expected Failed, got {other:?}"),
        }
        assert!(!dir.path().join("half.pdf").exists());
    }
}
