use crate::{error::Result, models::Favorites};
use async_trait::async_trait;

#[async_trait]
pub trait FavoritesStorage: Send + Sync {
    /// Read the saved list. Unreadable data yields an empty list, not an error.
    async fn load(&self) -> Result<Favorites>;

    /// Replace the stored list with `favorites`.
    async fn save(&self, favorites: &Favorites) -> Result<()>;

    fn describe(&self) -> String;
}
