pub mod file;
pub mod memory;
pub mod traits;

use crate::{error::Result, models::Favorites};
use std::sync::Arc;
use tokio::sync::RwLock;

pub use file::FileFavoritesStorage;
pub use memory::MemoryFavoritesStorage;
pub use traits::FavoritesStorage;

/// In-memory favorites list backed by a storage that is loaded once and
/// rewritten in full on every change.
pub struct FavoritesManager {
    backend: Arc<dyn FavoritesStorage>,
    favorites: RwLock<Favorites>,
}

impl FavoritesManager {
    pub async fn load(backend: Arc<dyn FavoritesStorage>) -> Result<Self> {
        let favorites = backend.load().await?;
        log::info!(
            "📚 Loaded {} favorites from {}",
            favorites.len(),
            backend.describe()
        );
        Ok(Self {
            backend,
            favorites: RwLock::new(favorites),
        })
    }

    pub async fn list(&self) -> Favorites {
        self.favorites.read().await.clone()
    }

    pub async fn add(&self, prompt: &str) -> Result<Favorites> {
        let mut favorites = self.favorites.write().await;
        let mut updated = favorites.clone();
        if updated.add(prompt) {
            self.backend.save(&updated).await?;
            *favorites = updated;
            log::info!("⭐ Saved prompt to favorites ({} total)", favorites.len());
        }
        Ok(favorites.clone())
    }

    pub async fn remove(&self, prompt: &str) -> Result<Favorites> {
        let mut favorites = self.favorites.write().await;
        let mut updated = favorites.clone();
        if updated.remove(prompt) {
            self.backend.save(&updated).await?;
            *favorites = updated;
            log::info!("🗑️  Removed prompt from favorites ({} left)", favorites.len());
        }
        Ok(favorites.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PromptError;
    use async_trait::async_trait;
    use tempfile::tempdir;

    /// Loads a fixed list and refuses every write.
    struct ReadOnlyStorage {
        seed: Favorites,
    }

    #[async_trait]
    impl FavoritesStorage for ReadOnlyStorage {
        async fn load(&self) -> Result<Favorites> {
            Ok(self.seed.clone())
        }

        async fn save(&self, _favorites: &Favorites) -> Result<()> {
            Err(PromptError::Storage("read-only filesystem".into()))
        }

        fn describe(&self) -> String {
            "read-only".to_string()
        }
    }

    #[tokio::test]
    async fn test_failed_save_leaves_list_unchanged() {
        let backend = Arc::new(ReadOnlyStorage {
            seed: Favorites::from_entries(["kept"]),
        });
        let manager = FavoritesManager::load(backend).await.unwrap();

        let err = manager.add("new").await.unwrap_err();
        assert_eq!(err.details(), "read-only filesystem");
        assert_eq!(manager.list().await.iter().collect::<Vec<_>>(), vec!["kept"]);

        assert!(manager.remove("kept").await.is_err());
        assert!(manager.list().await.contains("kept"));

        // Nothing to persist, so no write is attempted.
        assert!(manager.remove("absent").await.is_ok());
    }

    #[tokio::test]
    async fn test_favorites_round_trip_through_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        let prompt = "A majestic dragon perched atop a snowy peak";

        let manager = FavoritesManager::load(Arc::new(FileFavoritesStorage::new(&path)))
            .await
            .unwrap();
        manager.add("an older prompt").await.unwrap();
        manager.add(prompt).await.unwrap();

        let reloaded = FavoritesManager::load(Arc::new(FileFavoritesStorage::new(&path)))
            .await
            .unwrap();
        assert_eq!(reloaded.list().await.first(), Some(prompt));

        let after_remove = reloaded.remove(prompt).await.unwrap();
        assert!(!after_remove.contains(prompt));

        let unchanged = reloaded.remove("never saved").await.unwrap();
        assert_eq!(unchanged, after_remove);

        let final_state = FileFavoritesStorage::new(&path).load().await.unwrap();
        assert_eq!(final_state.iter().collect::<Vec<_>>(), vec!["an older prompt"]);
    }

    #[tokio::test]
    async fn test_duplicate_add_keeps_one_entry() {
        let manager = FavoritesManager::load(Arc::new(MemoryFavoritesStorage::new()))
            .await
            .unwrap();
        manager.add("same").await.unwrap();
        let favorites = manager.add("same").await.unwrap();
        assert_eq!(favorites.len(), 1);
    }

    #[tokio::test]
    async fn test_changes_are_written_to_backend() {
        let backend = Arc::new(MemoryFavoritesStorage::with_entries(["seed"]));
        let manager = FavoritesManager::load(backend.clone()).await.unwrap();
        manager.add("fresh").await.unwrap();

        let stored = backend.load().await.unwrap();
        assert_eq!(stored.iter().collect::<Vec<_>>(), vec!["fresh", "seed"]);
    }
}
