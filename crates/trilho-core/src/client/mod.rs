//! Trilho SDK Client

#[allow(clippy::module_inception)]
mod client;
mod client_settings;
mod credential;
mod internal;
mod middleware;

pub use client::Client;
pub use client_settings::{ClientSettings, DEFAULT_API_URL};
pub use credential::{CredentialStore, InMemoryCredentialStore};
pub use internal::{InternalClient, SessionInvalidatedHandler};
