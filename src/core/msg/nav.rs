use serde::{Deserialize, Serialize};

use crate::domain::route::Route;

/// Messages specific to NavState
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavMsg {
    // Pages
    Navigate(Route),
    NextPage,
    PrevPage,

    // Technology menu
    ToggleMenu,
    CloseMenu,
    MenuUp,
    MenuDown,
    MenuSelect,

    // Alternative highlighted in the home charts
    SelectNext,
    SelectPrev,

    // Vertical scroll of the current page
    ScrollUp,
    ScrollDown,
    ScrollToTop,
}
