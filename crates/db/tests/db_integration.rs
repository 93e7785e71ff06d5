//! Database integration tests.
//!
//! Run against a migrated in-memory SQLite database, so no external
//! server is required.

#![allow(clippy::unwrap_used)]

use holocron_common::AppError;
use holocron_db::entities::{Favourite, FavouriteTarget, user};
use holocron_db::repositories::{
    CharacterRepository, FavouriteRepository, PlanetRepository, UserRepository,
};
use holocron_db::test_utils::TestDatabase;
use sea_orm::{EntityTrait, ModelTrait, Set};

fn new_user(email: &str, username: &str) -> user::ActiveModel {
    user::ActiveModel {
        email: Set(email.to_string()),
        password: Set("hashed".to_string()),
        username: Set(username.to_string()),
        is_active: Set(true),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_user_create_and_lookup() {
    let db = TestDatabase::sqlite().await.unwrap();
    let repo = UserRepository::new(db.shared());

    let created = repo.create(new_user("a@x.io", "a")).await.unwrap();
    assert_eq!(created.id, 1);
    assert!(created.is_active);

    let by_email = repo.find_by_email("a@x.io").await.unwrap().unwrap();
    assert_eq!(by_email, created);
    assert!(repo.find_by_id(2).await.unwrap().is_none());
}

#[tokio::test]
async fn test_user_list_in_id_order() {
    let db = TestDatabase::sqlite().await.unwrap();
    let repo = UserRepository::new(db.shared());

    repo.create(new_user("first@x.io", "first")).await.unwrap();
    repo.create(new_user("second@x.io", "second")).await.unwrap();

    let users = repo.find_all().await.unwrap();
    let names: Vec<_> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, ["first", "second"]);
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    let db = TestDatabase::sqlite().await.unwrap();
    let repo = UserRepository::new(db.shared());

    repo.create(new_user("dup@x.io", "one")).await.unwrap();
    let err = repo.create(new_user("dup@x.io", "two")).await.unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)), "got {err:?}");
    // The failed insert was rolled back; only the first row exists.
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_catalog_reads() {
    let db = TestDatabase::sqlite().await.unwrap();
    let tatooine = db.insert_planet("Tatooine").await.unwrap();
    let luke = db.insert_character("Luke Skywalker").await.unwrap();

    let planets = PlanetRepository::new(db.shared());
    let characters = CharacterRepository::new(db.shared());

    assert_eq!(planets.find_all().await.unwrap(), vec![tatooine.clone()]);
    assert_eq!(planets.find_by_id(tatooine.id).await.unwrap(), Some(tatooine));
    assert_eq!(characters.find_by_id(luke.id).await.unwrap(), Some(luke));
    assert!(characters.find_by_id(999).await.unwrap().is_none());
}

#[tokio::test]
async fn test_favourite_lifecycle() {
    let db = TestDatabase::sqlite().await.unwrap();
    let owner = UserRepository::new(db.shared())
        .create(new_user("fav@x.io", "fav"))
        .await
        .unwrap();
    let planet = db.insert_planet("Naboo").await.unwrap();
    let character = db.insert_character("Padme").await.unwrap();
    let repo = FavouriteRepository::new(db.shared());

    let on_planet = repo
        .create(owner.id, FavouriteTarget::Planet(planet.id))
        .await
        .unwrap();
    let on_character = repo
        .create(owner.id, FavouriteTarget::Character(character.id))
        .await
        .unwrap();

    assert_eq!(on_planet.planet_id, Some(planet.id));
    assert_eq!(on_planet.character_id, None);
    assert_eq!(on_character.character_id, Some(character.id));

    let found = repo
        .find_by_user_and_target(owner.id, FavouriteTarget::Planet(planet.id))
        .await
        .unwrap();
    assert_eq!(found, Some(on_planet.clone()));

    assert_eq!(repo.find_by_user_id(owner.id).await.unwrap().len(), 2);

    assert_eq!(repo.delete(on_planet.id).await.unwrap(), 1);
    assert_eq!(repo.delete(on_planet.id).await.unwrap(), 0);
    assert_eq!(
        repo.find_by_user_id(owner.id).await.unwrap(),
        vec![on_character]
    );
}

#[tokio::test]
async fn test_duplicate_favourite_is_conflict() {
    let db = TestDatabase::sqlite().await.unwrap();
    let owner = UserRepository::new(db.shared())
        .create(new_user("dup-fav@x.io", "dup"))
        .await
        .unwrap();
    let planet = db.insert_planet("Dagobah").await.unwrap();
    let repo = FavouriteRepository::new(db.shared());

    let target = FavouriteTarget::Planet(planet.id);
    repo.create(owner.id, target).await.unwrap();
    let err = repo.create(owner.id, target).await.unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)), "got {err:?}");
    assert_eq!(repo.find_by_user_id(owner.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_same_target_for_different_users() {
    let db = TestDatabase::sqlite().await.unwrap();
    let users = UserRepository::new(db.shared());
    let first = users.create(new_user("one@x.io", "one")).await.unwrap();
    let second = users.create(new_user("two@x.io", "two")).await.unwrap();
    let character = db.insert_character("Yoda").await.unwrap();
    let repo = FavouriteRepository::new(db.shared());

    let target = FavouriteTarget::Character(character.id);
    repo.create(first.id, target).await.unwrap();
    repo.create(second.id, target).await.unwrap();

    assert_eq!(repo.find_by_user_id(first.id).await.unwrap().len(), 1);
    assert_eq!(repo.find_by_user_id(second.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_deleting_user_cascades_to_favourites() {
    let db = TestDatabase::sqlite().await.unwrap();
    let owner = UserRepository::new(db.shared())
        .create(new_user("gone@x.io", "gone"))
        .await
        .unwrap();
    let planet = db.insert_planet("Alderaan").await.unwrap();
    FavouriteRepository::new(db.shared())
        .create(owner.id, FavouriteTarget::Planet(planet.id))
        .await
        .unwrap();

    owner.delete(db.connection()).await.unwrap();

    assert!(Favourite::find().all(db.connection()).await.unwrap().is_empty());
}
