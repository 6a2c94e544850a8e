//! # API Module
//!
//! HTTP endpoints of the short-lived local server that runs while a user
//! authorizes powerspot in the browser.
//!
//! - [`callback`] - Receives the authorization code Spotify redirects to,
//!   exchanges it together with the PKCE code verifier for a token, and
//!   hands the token back to the waiting authorization flow through the
//!   shared state.
//! - [`health`] - Reports that the server is up and which version runs.
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use powerspot::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
