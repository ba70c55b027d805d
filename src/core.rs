//! Core Elm Architecture implementation
//!
//! This module contains the core components of the Elm architecture:
//! - Messages and raw messages
//! - Application state
//! - Update logic and the commands it emits
//! - Message translation layer

pub mod cmd;
pub mod msg;
pub mod raw_msg;
pub mod state;
pub mod translator;
pub mod update;
