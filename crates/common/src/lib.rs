//! Common utilities and shared types for holocron.
//!
//! This crate provides foundational components used across all holocron crates:
//!
//! - **Configuration**: Application settings via [`Config`]
//! - **Error handling**: Unified error types via [`AppError`] and [`AppResult`]
//! - **Passwords**: Argon2 hashing via [`hash_password`] and [`verify_password`]
//!
//! # Example
//!
//! ```no_run
//! use holocron_common::{AppResult, Config};
//!
//! fn example() -> AppResult<()> {
//!     let config = Config::load()?;
//!     println!("Listening on {}:{}", config.server.host, config.server.port);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod password;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use password::{hash_password, verify_password};
