pub mod collector;
pub mod composer;
pub mod config;
pub mod error;
pub mod gallery;
pub mod gemini;
pub mod logger;
pub mod models;
#[cfg(feature = "server")]
pub mod server;
pub mod storage;

pub use collector::{FieldCollector, Preset, SubmissionState, Vibe};
pub use composer::{render_instruction, PromptComposer, TextGenerator};
pub use config::{Config, GeminiConfig};
pub use error::{PromptError, Result};
pub use gemini::TextClient;
pub use models::{Favorites, PromptRequest, PromptResponse};
pub use storage::{
    FavoritesManager, FavoritesStorage, FileFavoritesStorage, MemoryFavoritesStorage,
};
