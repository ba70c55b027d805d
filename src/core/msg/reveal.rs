use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Messages specific to RevealState
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealMsg {
    /// Advance the entrance animation by a fixed step.
    Tick(Duration),
    Skip,
    Replay,
}
