//! Collaborators, configuration and the command-line host

/// Command-line host
pub mod cli;
/// Defaults and constants
pub mod configuration;
/// Error types
pub mod error;
/// Color-mode coercion and image files
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Progress display
pub mod progress;
/// Image source and sink collaborators
pub mod store;
