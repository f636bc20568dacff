//! Viewer settings for the og:image preview.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::terminal::TerminalKind;

pub const DEFAULT_VIEWER: &str = "timg";
/// Render height of 12 grid units.
pub const DEFAULT_SIZE_FLAG: &str = "-gx12";

#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Executable looked up on `PATH`.
    pub program: String,
    pub size_flag: String,
    /// Extra flag selecting the graphics protocol for a given terminal.
    pub protocol_flags: Vec<(TerminalKind, String)>,
    /// Where the downloaded image is written; the system temp dir when `None`.
    pub temp_dir: Option<PathBuf>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_VIEWER.to_string(),
            size_flag: DEFAULT_SIZE_FLAG.to_string(),
            protocol_flags: vec![
                (TerminalKind::Ghostty, "-pk".to_string()),
                (TerminalKind::XtermKitty, "-pk".to_string()),
                (TerminalKind::ITermApp, "-pi".to_string()),
            ],
            temp_dir: None,
        }
    }
}

impl ViewerConfig {
    pub fn protocol_flag(&self, kind: &TerminalKind) -> Option<&str> {
        self.protocol_flags
            .iter()
            .find(|(k, _)| k == kind)
            .map(|(_, flag)| flag.as_str())
    }

    /// Arguments for the viewer: the image path, the protocol flag if the
    /// terminal has one, then the sizing flag.
    pub fn viewer_args(&self, path: &Path, kind: &TerminalKind) -> Vec<OsString> {
        let mut args = vec![path.as_os_str().to_os_string()];
        if let Some(flag) = self.protocol_flag(kind) {
            args.push(flag.into());
        }
        args.push(self.size_flag.as_str().into());
        args
    }
}
