/// Command-line argument parsing and output
pub mod cli;
/// Model constants and defaults
pub mod configuration;
/// Error types
pub mod error;
