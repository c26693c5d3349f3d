#![doc = include_str!("../README.md")]

pub mod client;
mod error;
mod identity;
mod session;

pub use client::{
    Client, ClientSettings, CredentialStore, DEFAULT_API_URL, InMemoryCredentialStore,
    SessionInvalidatedHandler,
};
pub use error::MissingFieldError;
pub use identity::{AccountType, Identity, Tenant};
pub use session::SessionState;
