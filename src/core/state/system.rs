use crate::core::{
    cmd::{Cmd, TuiCommand},
    msg::system::SystemMsg,
};

/// System-related state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    pub status_message: Option<String>,
    /// Last known terminal size as (width, height).
    pub viewport: (u16, u16),
}

impl SystemState {
    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![]
            }

            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![]
            }

            SystemMsg::Resize(width, height) => {
                self.viewport = (width, height);
                vec![Cmd::Tui(TuiCommand::Resize { width, height })]
            }

            SystemMsg::ClearStatusMessage => {
                self.status_message = None;
                vec![]
            }

            SystemMsg::ShowError(error) => {
                self.status_message = Some(format!("Error: {error}"));
                vec![Cmd::LogError { message: error }]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_quit_and_suspend_flags() {
        let mut system = SystemState::default();
        assert!(system.update(SystemMsg::Quit).is_empty());
        assert!(system.should_quit);

        system.update(SystemMsg::Suspend);
        assert!(system.should_suspend);
        system.update(SystemMsg::Resume);
        assert!(!system.should_suspend);
    }

    #[test]
    fn test_resize_records_viewport() {
        let mut system = SystemState::default();
        let cmds = system.update(SystemMsg::Resize(120, 40));
        assert_eq!(system.viewport, (120, 40));
        assert_eq!(
            cmds,
            vec![Cmd::Tui(TuiCommand::Resize {
                width: 120,
                height: 40
            })]
        );
    }

    #[test]
    fn test_status_messages() {
        let mut system = SystemState::default();
        let cmds = system.update(SystemMsg::ShowError("boom".to_string()));
        assert_eq!(system.status_message.as_deref(), Some("Error: boom"));
        assert_eq!(
            cmds,
            vec![Cmd::LogError {
                message: "boom".to_string()
            }]
        );

        system.update(SystemMsg::ClearStatusMessage);
        assert_eq!(system.status_message, None);
    }
}
