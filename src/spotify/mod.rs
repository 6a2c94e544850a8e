//! # Spotify Integration Module
//!
//! This module is the only place that talks to the Spotify Web API. It covers
//! authentication, the paginated listings of a user's library, the lookup of
//! an artist's newest album, and saving albums to the library.
//!
//! ## Architecture
//!
//! ```text
//! Chain (cli steps)
//!          ↓
//! Library trait ──── SpotifyLibrary
//!          ↓               ↓
//!     Release filter   Authenticator (OAuth 2.0 PKCE, token refresh)
//!          ↓               ↓
//!     Paginated fetcher → SpotifyClient (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - PKCE authorization in the browser with a local callback
//!   server, token refresh, and the [`auth::Authenticator`] that turns a
//!   username and a scope into an authenticated [`client::SpotifyClient`].
//! - [`client`] - The authenticated HTTP handle every operation receives
//!   explicitly.
//! - [`pagination`] - The [`pagination::PageSource`] capability and
//!   [`pagination::drain`], which concatenates all pages of a listing.
//! - [`artists`], [`albums`], [`tracks`] - Library and top listings, saving
//!   albums.
//! - [`releases`] - The new release filter over a
//!   [`releases::ReleaseSource`].
//! - [`library`] - The [`library::Library`] capability used by the chain and
//!   its Spotify implementation.
//!
//! ## Error Handling
//!
//! Nothing is retried. An error status, a network failure or a malformed
//! body ends the current operation with an error, and any items collected
//! from earlier pages of the same listing are dropped.
//!
//! ## API Coverage
//!
//! - `GET /me/following?type=artist` - followed artists (cursor paging)
//! - `GET /me/albums`, `GET /me/tracks` - saved albums and tracks
//! - `GET /me/top/artists`, `GET /me/top/tracks` - top artists and tracks
//! - `GET /artists/{id}/albums` - newest album of an artist
//! - `PUT /me/albums` - save albums
//! - `POST /api/token` - code exchange and token refresh

pub mod albums;
pub mod artists;
pub mod auth;
pub mod client;
pub mod library;
pub mod pagination;
pub mod releases;
pub mod tracks;

pub use client::SpotifyClient;
pub use library::{Library, SpotifyLibrary};
pub use pagination::{Page, PageSource, drain};
pub use releases::{ReleaseSource, new_releases};
