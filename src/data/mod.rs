//! External data access.

pub mod fred;

pub use fred::FredClient;
