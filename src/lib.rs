//! Powerspot Library
//!
//! This library provides the building blocks of the `powerspot` command-line
//! tool: chainable subcommands that fetch a user's Spotify library (followed
//! artists, saved albums and tracks, top artists and tracks), filter new
//! releases, and export the result as JSON or as formatted text.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints for the local OAuth callback server
//! - `chain` - Chain context, chain parsing, validation and execution
//! - `cli` - Implementations of the individual subcommands
//! - `config` - Configuration management and environment variables
//! - `error` - Crate error type
//! - `export` - Text formatting and date marker handling
//! - `management` - Credential storage and token lifecycle
//! - `prompt` - Interactive questions behind an injectable provider
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use powerspot::{chain, config};
//!
//! #[tokio::main]
//! async fn main() -> powerspot::Res<()> {
//!     config::load_env().await?;
//!     let steps = chain::parse_chain(&["artists".to_string()])?;
//!     chain::validate(&steps)?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod chain;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod management;
pub mod prompt;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::Error;

/// A convenient Result type alias for operations that may fail.
///
/// Every fallible operation of the crate reports a [`Error`], so callers can
/// match on the failure class (authentication, missing context, parse, I/O)
/// or simply bubble it up with `?`.
///
/// # Example
///
/// ```
/// use powerspot::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Error>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Fetching from {}", cutoff);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Fetched {} artists", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Writes to standard error and terminates the process with exit code 1.
/// Only the binary entry point uses it; library code returns [`Error`]
/// values instead.
///
/// # Example
///
/// ```
/// error!("Chain aborted: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Written to standard error so warnings never end up in piped output.
/// Used for recoverable issues such as a file without a date marker.
///
/// # Example
///
/// ```
/// warning!("No date marker found in {}", path.display());
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
