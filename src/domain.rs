//! Domain logic
//!
//! Pure data shaping for the dashboard:
//! - Dataset types and start-up validation
//! - Decision-matrix arithmetic and chart series
//! - Number formatting and markdown-lite rich text
//! - Routes, page themes and entrance reveal plans

pub mod chart;
pub mod dataset;
pub mod format;
pub mod matrix;
pub mod reveal;
pub mod rich_text;
pub mod route;
pub mod theme;
pub mod validation;
