pub mod favorites;
pub mod gemini;
pub mod prompt;

pub use favorites::*;
pub use gemini::*;
pub use prompt::*;
