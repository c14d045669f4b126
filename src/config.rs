use std::env;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-pro-preview-03-25";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_FAVORITES_PATH: &str = "favorites.json";

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub favorites_path: String,
    pub json_logs: bool,
    pub gemini: GeminiConfig,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        GeminiConfig {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GeminiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let defaults = Self::default();
        let api_key = env::var("GEMINI_API_KEY").ok().filter(|k| !k.trim().is_empty());
        let model = env::var("GEMINI_MODEL").unwrap_or(defaults.model);
        let base_url = env::var("GEMINI_BASE_URL").unwrap_or(defaults.base_url);
        let timeout_secs = env::var("GEMINI_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.timeout_secs);

        GeminiConfig {
            api_key,
            model,
            base_url,
            timeout_secs,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_deref()
            .map_or(false, |key| !key.trim().is_empty())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: None,
            port: None,
            favorites_path: DEFAULT_FAVORITES_PATH.to_string(),
            json_logs: false,
            gemini: GeminiConfig::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let host = env::var("HOST").ok();
        let port = env::var("PORT").ok().and_then(|port| port.parse().ok());
        let favorites_path =
            env::var("FAVORITES_PATH").unwrap_or_else(|_| DEFAULT_FAVORITES_PATH.to_string());
        let json_logs = env::var("LOG_JSON").ok().map_or(false, |val| val == "true");

        Config {
            host,
            port,
            favorites_path,
            json_logs,
            gemini: GeminiConfig::from_env(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn with_favorites_path(mut self, path: impl Into<String>) -> Self {
        self.favorites_path = path.into();
        self
    }

    pub fn with_gemini(mut self, config: GeminiConfig) -> Self {
        self.gemini = config;
        self
    }

    pub fn bind_address(&self) -> (String, u16) {
        (
            self.host.clone().unwrap_or_else(|| "127.0.0.1".to_string()),
            self.port.unwrap_or(3000),
        )
    }
}
