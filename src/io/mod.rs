//! Input/output operations, configuration and error handling
//!
//! This module contains everything around the renderer:
//! - The command-line interface and blueprint processing
//! - Rendering constants and defaults
//! - The error type shared by all modules
//! - Diagnostic logging setup

/// Command-line interface for printing a blueprint as ASCII art or JSON
pub mod cli;
/// Rendering constants and runtime configuration defaults
pub mod configuration;
/// Error types for rendering and blueprint decoding
pub mod error;
/// Diagnostic logging setup for the command-line tool
pub mod logging;
