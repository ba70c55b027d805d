use serde::{Deserialize, Serialize};

pub mod nav;
pub mod reveal;
pub mod system;

use nav::NavMsg;
use reveal::RevealMsg;
use system::SystemMsg;

/// Domain messages representing application intent.
/// These are processed by the update function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Page, menu and selection (delegated to NavState)
    Nav(NavMsg),

    // Entrance animation (delegated to RevealState)
    Reveal(RevealMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, Msg::Reveal(RevealMsg::Tick(_)))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::route::Route;

    #[test]
    fn test_msg_frequent_detection() {
        assert!(Msg::Reveal(RevealMsg::Tick(Duration::from_millis(100))).is_frequent());
        assert!(!Msg::Reveal(RevealMsg::Skip).is_frequent());
        assert!(!Msg::System(SystemMsg::Quit).is_frequent());
        assert!(!Msg::Nav(NavMsg::NextPage).is_frequent());
    }

    #[test]
    fn test_msg_serialization() -> Result<(), serde_json::Error> {
        let msg = Msg::Nav(NavMsg::Navigate(Route::Dmfc));
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: Msg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);
        Ok(())
    }
}
