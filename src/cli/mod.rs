//! # CLI Module
//!
//! Implementations of the chainable subcommands. Each one reads what it
//! needs from the chain [`crate::chain::Context`], talks to the remote
//! library or the file system, and stores its result back in the context.
//!
//! ## Commands
//!
//! ### Fetching
//!
//! - [`artists`] - followed artists (sorted by name), or a JSON file
//! - [`albums`] - saved albums, or a JSON file
//! - [`tracks`] - saved tracks, or a JSON file
//! - [`top_artists`] / [`top_tracks`] - top artists and tracks for a term
//! - [`releases`] - the newest album of every artist in the chain, kept
//!   when released after a cutoff taken from a date marker file, a number
//!   of weeks, or a prompt
//!
//! ### Acting on results
//!
//! - [`save`] - saves the albums of the chain, optionally asking per album
//! - [`show`] - prints the last result
//! - [`write`] - writes the last result as JSON or as formatted `.wiki` text
//!
//! ## Usage Patterns
//!
//! ```bash
//! # Export followed artists, then later reuse them
//! powerspot artists write artists.json
//! powerspot artists -f artists.json releases -w 2 show
//!
//! # Releases since the last export, saved after confirmation
//! powerspot artists releases -r last.wiki save --ask write last.wiki
//!
//! # Top tracks of the last months
//! powerspot toptracks --term short show
//! ```
//!
//! Interactive questions go through the [`crate::prompt::Prompt`] passed
//! in, so none of these functions reads the terminal directly.

mod fetch;
mod output;
mod releases;
mod save;
mod user;

pub use fetch::albums;
pub use fetch::artists;
pub use fetch::load_records;
pub use fetch::top_artists;
pub use fetch::top_tracks;
pub use fetch::tracks;
pub use output::show;
pub use output::write;
pub use releases::DEFAULT_WEEKS;
pub use releases::cutoff;
pub use releases::releases;
pub use save::save;
pub use user::username;
