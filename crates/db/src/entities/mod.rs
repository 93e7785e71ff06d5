//! Database entities.

pub mod character;
pub mod favourite;
pub mod planet;
pub mod user;

pub use character::Entity as Character;
pub use favourite::{Entity as Favourite, FavouriteTarget};
pub use planet::Entity as Planet;
pub use user::Entity as User;
