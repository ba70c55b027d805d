use serde::{Deserialize, Serialize};

/// UI (TUI) specific sub-commands executed by the runner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
}

/// Side effects requested by `update`. The update function itself stays
/// pure; the runner executes these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    Tui(TuiCommand),

    // Logging related
    LogInfo { message: String },
    LogError { message: String },
}

impl Cmd {
    pub fn log_info(message: impl Into<String>) -> Self {
        Cmd::LogInfo {
            message: message.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui::Resize",
            Cmd::LogInfo { .. } => "LogInfo",
            Cmd::LogError { .. } => "LogError",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_cmd_names() {
        assert_eq!(
            Cmd::Tui(TuiCommand::Resize {
                width: 80,
                height: 24
            })
            .name(),
            "Tui::Resize"
        );
        assert_eq!(Cmd::log_info("hello").name(), "LogInfo");
    }

    #[test]
    fn test_cmd_serialization() -> Result<(), serde_json::Error> {
        let cmd = Cmd::log_info("navigated to /solar");
        let serialized = serde_json::to_string(&cmd)?;
        let deserialized: Cmd = serde_json::from_str(&serialized)?;
        assert_eq!(cmd, deserialized);
        Ok(())
    }
}
