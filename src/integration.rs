//! Integration layer
//!
//! - Runtime: message queues feeding translate and update
//! - AppRunner: the terminal event loop around the runtime

pub mod app_runner;
pub mod runtime;
