//! Fetch a page's OpenGraph metadata and optionally preview its `og:image`
//! in the terminal.

pub mod config;
pub mod error;
pub mod image;
pub mod ogp;
pub mod terminal;
pub mod ui;

pub use config::ViewerConfig;
pub use error::{Error, FetchError, PreviewError, Result};
pub use ogp::{extract_open_graph, fetch_open_graph, normalize_url, OpenGraphData};
