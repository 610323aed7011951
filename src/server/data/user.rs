//! User data repository for database operations.
//!
//! Users are provisioned outside the API, so the repository only reads them.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::user::User;

/// Repository providing read access to user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by ID.
    ///
    /// # Arguments
    /// - `id` - UUID string of the user
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }
}
