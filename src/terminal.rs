//! Host terminal detection, used to pick the graphics protocol for the viewer.

use std::env;

/// Terminals whose graphics protocol the viewer can be told about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalKind {
    Ghostty,
    XtermKitty,
    ITermApp,
    /// A terminal we found a name for but have no protocol flag for.
    Other(String),
    Unknown,
}

impl TerminalKind {
    fn from_name(name: &str) -> Self {
        match name {
            "ghostty" => TerminalKind::Ghostty,
            "xterm-kitty" => TerminalKind::XtermKitty,
            "iTerm.app" => TerminalKind::ITermApp,
            other => TerminalKind::Other(other.to_string()),
        }
    }
}

/// Classifies the terminal from `$TERM_PROGRAM`, falling back to `$TERM`.
pub fn identify() -> TerminalKind {
    let program = env::var("TERM_PROGRAM").ok();
    let term = env::var("TERM").ok();
    let kind = classify(program.as_deref(), term.as_deref());
    tracing::debug!(?kind, "identified terminal");
    kind
}

/// Empty values count as unset.
pub fn classify(program: Option<&str>, term: Option<&str>) -> TerminalKind {
    program
        .filter(|s| !s.is_empty())
        .or_else(|| term.filter(|s| !s.is_empty()))
        .map_or(TerminalKind::Unknown, TerminalKind::from_name)
}
