use crate::{error::Result, models::Favorites, storage::traits::FavoritesStorage};
use async_trait::async_trait;
use tokio::sync::Mutex;

/// Process-local backend; nothing survives a restart.
#[derive(Default)]
pub struct MemoryFavoritesStorage {
    saved: Mutex<Favorites>,
}

impl MemoryFavoritesStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            saved: Mutex::new(Favorites::from_entries(entries)),
        }
    }
}

#[async_trait]
impl FavoritesStorage for MemoryFavoritesStorage {
    async fn load(&self) -> Result<Favorites> {
        Ok(self.saved.lock().await.clone())
    }

    async fn save(&self, favorites: &Favorites) -> Result<()> {
        *self.saved.lock().await = favorites.clone();
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
