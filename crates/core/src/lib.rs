//! Shared types and the domain error enum for the portfolio backend.

pub mod error;
pub mod types;

pub use error::CoreError;
