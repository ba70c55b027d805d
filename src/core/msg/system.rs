use serde::{Deserialize, Serialize};

/// Process lifecycle, terminal size and the status line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemMsg {
    Quit,
    Suspend,
    Resume,
    Resize(u16, u16),

    /// Shown in the status bar until dismissed.
    ShowError(String),
    ClearStatusMessage,
}
