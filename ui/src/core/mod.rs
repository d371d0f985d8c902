//! Platform-agnostic building blocks shared by the page components.

pub mod config;
pub mod error;
pub mod format;
pub mod platform;
pub mod reveal;
pub mod timing;
