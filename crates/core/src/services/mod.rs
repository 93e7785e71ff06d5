//! Business logic services.

#![allow(missing_docs)]

pub mod character;
pub mod favourite;
pub mod planet;
pub mod user;

pub use character::CharacterService;
pub use favourite::FavouriteService;
pub use planet::PlanetService;
pub use user::{CreateUserInput, UserService};
