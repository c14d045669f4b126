use serde::{Deserialize, Serialize};

/// Saved prompts, newest first, no two entries equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    prompts: Vec<String>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored entries, dropping later duplicates.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut favorites = Self::new();
        for entry in entries {
            let entry = entry.into();
            if !favorites.contains(&entry) {
                favorites.prompts.push(entry);
            }
        }
        favorites
    }

    /// Put `prompt` at the head. Returns false if it was already saved.
    pub fn add(&mut self, prompt: impl Into<String>) -> bool {
        let prompt = prompt.into();
        if self.contains(&prompt) {
            return false;
        }
        self.prompts.insert(0, prompt);
        true
    }

    /// Returns false if `prompt` was not saved.
    pub fn remove(&mut self, prompt: &str) -> bool {
        let before = self.prompts.len();
        self.prompts.retain(|p| p != prompt);
        self.prompts.len() != before
    }

    pub fn contains(&self, prompt: &str) -> bool {
        self.prompts.iter().any(|p| p == prompt)
    }

    pub fn first(&self) -> Option<&str> {
        self.prompts.first().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.prompts.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }
}
