//! Shared UI crate for Ecometer. The predictor page, its gauges and the insights charts live here.

use dioxus::prelude::*;

pub mod components;
pub mod core;
pub mod gauges;
pub mod insights;
pub mod predict;
pub mod views;

/// Unified theme. Web links it as an asset; desktop embeds the same file.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
