//! Template Gallery Library
//!
//! Core functionality for the template gallery application: the
//! template registry, the filter pipeline, user configuration, and the
//! terminal UI.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod filter;
pub mod models;
pub mod registry;
pub mod shortcuts;
pub mod tui;
