use std::path::PathBuf;

use crate::{
    error::{PromptError, Result},
    models::Favorites,
    storage::traits::FavoritesStorage,
};
use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::fs;

/// Key the favorites list is stored under inside the state file.
pub const FAVORITES_KEY: &str = "favoritePrompts";

/// Favorites kept in a small JSON key/value file, one entry per key, the way
/// a browser keeps them in local storage.
pub struct FileFavoritesStorage {
    path: PathBuf,
}

impl FileFavoritesStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read_document(&self) -> Result<Option<Map<String, Value>>> {
        let raw = match fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice::<Value>(&raw) {
            Ok(Value::Object(document)) => Ok(Some(document)),
            // A bare list is the favorites entry on its own.
            Ok(Value::Array(entries)) => {
                let mut document = Map::new();
                document.insert(FAVORITES_KEY.to_string(), Value::Array(entries));
                Ok(Some(document))
            }
            Ok(other) => {
                log::warn!(
                    "⚠️  Ignoring favorites file {}: unexpected JSON {}",
                    self.path.display(),
                    other
                );
                Ok(None)
            }
            Err(e) => {
                log::warn!(
                    "⚠️  Ignoring unreadable favorites file {}: {}",
                    self.path.display(),
                    e
                );
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl FavoritesStorage for FileFavoritesStorage {
    async fn load(&self) -> Result<Favorites> {
        let Some(document) = self.read_document().await? else {
            return Ok(Favorites::new());
        };

        let Some(value) = document.get(FAVORITES_KEY) else {
            return Ok(Favorites::new());
        };

        match serde_json::from_value::<Vec<String>>(value.clone()) {
            Ok(entries) => Ok(Favorites::from_entries(entries)),
            Err(e) => {
                log::warn!("⚠️  Stored favorites are not a list of strings: {}", e);
                Ok(Favorites::new())
            }
        }
    }

    async fn save(&self, favorites: &Favorites) -> Result<()> {
        let mut document = self.read_document().await?.unwrap_or_default();
        document.insert(FAVORITES_KEY.to_string(), serde_json::to_value(favorites)?);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let contents = serde_json::to_string_pretty(&document)?;
        fs::write(&self.path, contents).await.map_err(|e| {
            PromptError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        })?;

        log::debug!("Saved {} favorites to {}", favorites.len(), self.path.display());
        Ok(())
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let storage = FileFavoritesStorage::new(dir.path().join("favorites.json"));
        assert!(storage.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("favorites.json");
        let storage = FileFavoritesStorage::new(&path);

        let mut favorites = Favorites::new();
        favorites.add("A majestic dragon...");
        storage.save(&favorites).await.unwrap();

        let reloaded = FileFavoritesStorage::new(&path).load().await.unwrap();
        assert_eq!(reloaded.first(), Some("A majestic dragon..."));
        assert_eq!(reloaded, favorites);
    }

    #[tokio::test]
    async fn test_garbage_is_treated_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        std::fs::write(&path, "{not json").unwrap();

        let storage = FileFavoritesStorage::new(&path);
        assert!(storage.load().await.unwrap().is_empty());

        // Saving over garbage replaces it.
        storage.save(&Favorites::from_entries(["ok"])).await.unwrap();
        assert_eq!(storage.load().await.unwrap().first(), Some("ok"));
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_treated_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x7b]).unwrap();

        let storage = FileFavoritesStorage::new(&path);
        assert!(storage.load().await.unwrap().is_empty());

        storage.save(&Favorites::from_entries(["recovered"])).await.unwrap();
        assert_eq!(storage.load().await.unwrap().first(), Some("recovered"));
    }

    #[tokio::test]
    async fn test_bare_array_is_loaded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        std::fs::write(&path, r#"["newest", "older"]"#).unwrap();

        let storage = FileFavoritesStorage::new(&path);
        let favorites = storage.load().await.unwrap();
        assert_eq!(favorites.iter().collect::<Vec<_>>(), vec!["newest", "older"]);

        // Rewritten in the keyed form on the next save.
        storage.save(&favorites).await.unwrap();
        let raw: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw[FAVORITES_KEY], serde_json::json!(["newest", "older"]));
    }

    #[tokio::test]
    async fn test_wrong_shape_is_treated_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        std::fs::write(&path, r#"{"favoritePrompts": {"a": 1}}"#).unwrap();

        let storage = FileFavoritesStorage::new(&path);
        assert!(storage.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_other_keys_are_preserved() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, r#"{"theme": "dark"}"#).unwrap();

        let storage = FileFavoritesStorage::new(&path);
        storage.save(&Favorites::from_entries(["p"])).await.unwrap();

        let raw: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["theme"], "dark");
        assert_eq!(raw[FAVORITES_KEY], serde_json::json!(["p"]));
    }
}
