//! Database repositories.

mod character;
mod favourite;
mod planet;
mod user;

pub use character::CharacterRepository;
pub use favourite::FavouriteRepository;
pub use planet::PlanetRepository;
pub use user::UserRepository;
