use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Failure to retrieve the target page.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("reading response body failed: {0}")]
    Body(#[source] reqwest::Error),
}

/// Failure anywhere in the og:image download/save/view pipeline.
#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("downloading image: {0}")]
    Download(#[source] reqwest::Error),

    #[error("saving image: {0}")]
    Save(#[source] std::io::Error),

    #[error("starting {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status} while displaying {}", .path.display())]
    ViewerFailed {
        program: String,
        status: ExitStatus,
        path: PathBuf,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("fetching URL: {0}")]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Preview(#[from] PreviewError),

    #[error("converting data to JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
