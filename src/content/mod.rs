// SPDX-License-Identifier: MPL-2.0
//! Read-only client for the headless content store.
//!
//! The store is an external collaborator: images and collections are
//! authored, ordered and published elsewhere. This module only issues
//! parameterized read queries and deserializes the JSON envelope. The query
//! language itself is treated as opaque strings (see [`queries`]).

pub mod asset;
mod client;
pub mod queries;

pub use asset::AssetUrl;
pub use client::ContentClient;

use crate::error::{Error, Result};

/// User agent sent on every outgoing request.
pub const USER_AGENT: &str = concat!("Galeria/", env!("CARGO_PKG_VERSION"));

/// Builds the shared HTTP client configuration.
///
/// Clients are built per operation rather than held for the lifetime of the
/// application; requests here are sparse enough that pooling does not pay
/// for the added setup fallibility.
pub(crate) fn http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| Error::Http(e.to_string()))
}
