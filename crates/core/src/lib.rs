//! Core business logic for holocron.

pub mod services;

pub use services::*;
