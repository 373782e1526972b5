use std::path::PathBuf;

/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    /// Draw a spread for the query (blank means the void's own question).
    Transmit(String),
    /// Move the signal calibration by this many steps.
    AdjustSignal(i32),
    SaveLog(Option<PathBuf>),
    SaveHtml(Option<PathBuf>),
    Reboot,
    Quit,
    Help,
    InvalidCommand(String),
    None,
}
