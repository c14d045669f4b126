pub mod text_client;

pub use text_client::TextClient;
