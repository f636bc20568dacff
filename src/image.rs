//! og:image preview: download, persist to a temp file, hand off to `timg`.

use std::io::Write;
use std::path::{Path, PathBuf};

use reqwest::Client;
use tokio::process::Command;

use crate::config::ViewerConfig;
use crate::error::PreviewError;
use crate::terminal;

/// Downloaded image bytes and the temp file they were written to.
#[derive(Debug)]
pub struct ImageArtifact {
    pub bytes: Vec<u8>,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewOutcome {
    /// The viewer ran and exited successfully.
    Rendered { path: PathBuf },
    /// No viewer on `PATH`; the image was only saved.
    Saved { path: PathBuf },
}

impl PreviewOutcome {
    pub fn path(&self) -> &Path {
        match self {
            PreviewOutcome::Rendered { path } | PreviewOutcome::Saved { path } => path,
        }
    }
}

pub async fn download_image(client: &Client, url: &str) -> Result<Vec<u8>, PreviewError> {
    let res = client.get(url).send().await.map_err(PreviewError::Download)?;
    tracing::debug!(url, status = %res.status(), "fetched image");
    let bytes = res.bytes().await.map_err(PreviewError::Download)?;

    match image::guess_format(&bytes) {
        Ok(format) => tracing::debug!(?format, len = bytes.len(), "image format"),
        Err(_) => tracing::warn!(url, len = bytes.len(), "og:image is not a recognised image"),
    }

    Ok(bytes.to_vec())
}

/// Writes `bytes` to a fresh `ogpk-*.jpg` file that outlives the process.
/// The extension is fixed whatever the actual format.
pub fn save_image(bytes: &[u8], dir: Option<&Path>) -> Result<PathBuf, PreviewError> {
    let mut builder = tempfile::Builder::new();
    builder.prefix("ogpk-").suffix(".jpg");
    let mut file = match dir {
        Some(dir) => builder.tempfile_in(dir),
        None => builder.tempfile(),
    }
    .map_err(PreviewError::Save)?;

    file.write_all(bytes).map_err(PreviewError::Save)?;
    let (_, path) = file.keep().map_err(|e| PreviewError::Save(e.error))?;
    tracing::debug!(path = %path.display(), "saved image");
    Ok(path)
}

pub async fn fetch_image_artifact(
    client: &Client,
    url: &str,
    config: &ViewerConfig,
) -> Result<ImageArtifact, PreviewError> {
    let bytes = download_image(client, url).await?;
    let path = save_image(&bytes, config.temp_dir.as_deref())?;
    Ok(ImageArtifact { bytes, path })
}

/// Downloads the image and shows it with the configured viewer, or reports
/// where it was saved when the viewer is not installed.
pub async fn preview_image(
    client: &Client,
    url: &str,
    config: &ViewerConfig,
) -> Result<PreviewOutcome, PreviewError> {
    let artifact = fetch_image_artifact(client, url, config).await?;

    let viewer = match which::which(&config.program) {
        Ok(viewer) => viewer,
        Err(_) => {
            println!(
                "{} not found, image saved to: {}",
                config.program,
                artifact.path.display()
            );
            return Ok(PreviewOutcome::Saved {
                path: artifact.path,
            });
        }
    };

    let args = config.viewer_args(&artifact.path, &terminal::identify());
    tracing::debug!(viewer = %viewer.display(), ?args, "running viewer");

    println!();
    let status = Command::new(&viewer)
        .args(&args)
        .status()
        .await
        .map_err(|source| PreviewError::Spawn {
            program: config.program.clone(),
            source,
        })?;

    if !status.success() {
        return Err(PreviewError::ViewerFailed {
            program: config.program.clone(),
            status,
            path: artifact.path,
        });
    }

    Ok(PreviewOutcome::Rendered {
        path: artifact.path,
    })
}
