#![doc = include_str!("../README.md")]

mod configuration;
mod envelope;
mod error;
mod request;

pub use configuration::Configuration;
pub use envelope::ApiResponse;
pub use error::ApiError;
pub use request::send_api_request;
