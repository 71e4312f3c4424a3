use std::time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_OPENAI_TTS_MODEL: &str = "tts-1";
pub const DEFAULT_OPENAI_TIMEOUT_SECS: u64 = 45;
pub const DEFAULT_OPENAI_MAX_RETRIES: u32 = 2;
pub const DEFAULT_OPENAI_RETRY_BASE_MS: u64 = 1000;
pub const DEFAULT_OPENAI_RETRY_MAX_MS: u64 = 8000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMode {
    /// Slides and summaries are served from in-process stores.
    Static,
    /// Slides and summaries are proxied from the external content backend.
    Backend,
}

#[derive(Debug, Clone)]
pub struct OpenAiSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub tts_model: String,
    pub timeout: Duration,
    pub max_retries: u32,
    pub retry_base_ms: u64,
    pub retry_max_ms: u64,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub content_mode: ContentMode,
    pub backend_url: Option<String>,
    pub backend_timeout: Duration,
    pub openai: Option<OpenAiSettings>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            content_mode: ContentMode::Static,
            backend_url: None,
            backend_timeout: Duration::from_secs(DEFAULT_BACKEND_TIMEOUT_SECS),
            openai: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup so it can be
    /// exercised without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let backend_url = non_empty("FASTAPI_URL")
            .or_else(|| non_empty("NEXT_PUBLIC_API_URL"))
            .map(|url| url.trim_end_matches('/').to_string());

        let content_mode = match non_empty("CONTENT_MODE")
            .map(|raw| raw.to_ascii_lowercase())
            .as_deref()
        {
            Some("static") => ContentMode::Static,
            Some("backend") if backend_url.is_some() => ContentMode::Backend,
            Some(other) => {
                tracing::warn!(
                    "CONTENT_MODE={} is unusable without a backend URL, serving static content",
                    other
                );
                ContentMode::Static
            }
            None if backend_url.is_some() => ContentMode::Backend,
            None => ContentMode::Static,
        };

        let backend_timeout = non_empty("BACKEND_TIMEOUT_SECS")
            .and_then(|raw| raw.parse::<u64>().ok())
            .filter(|value| *value > 0)
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_BACKEND_TIMEOUT_SECS));

        let openai = non_empty("OPENAI_API_KEY").map(|api_key| OpenAiSettings {
            api_key,
            base_url: non_empty("OPENAI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            model: non_empty("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            tts_model: non_empty("OPENAI_TTS_MODEL")
                .unwrap_or_else(|| DEFAULT_OPENAI_TTS_MODEL.to_string()),
            timeout: non_empty("OPENAI_TIMEOUT_SECS")
                .and_then(|raw| raw.parse::<u64>().ok())
                .filter(|value| *value > 0)
                .map(Duration::from_secs)
                .unwrap_or(Duration::from_secs(DEFAULT_OPENAI_TIMEOUT_SECS)),
            max_retries: non_empty("OPENAI_MAX_RETRIES")
                .and_then(|raw| raw.parse::<u32>().ok())
                .map(|value| value.min(10))
                .unwrap_or(DEFAULT_OPENAI_MAX_RETRIES),
            retry_base_ms: DEFAULT_OPENAI_RETRY_BASE_MS,
            retry_max_ms: DEFAULT_OPENAI_RETRY_MAX_MS,
        });

        Self {
            bind_addr: non_empty("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            content_mode,
            backend_url,
            backend_timeout,
            openai,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_static_without_backend() {
        let config = config_from(&[]);
        assert_eq!(config.content_mode, ContentMode::Static);
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert!(config.backend_url.is_none());
        assert!(config.openai.is_none());
    }

    #[test]
    fn backend_url_enables_backend_mode() {
        let config = config_from(&[("FASTAPI_URL", "http://backend:8000/")]);
        assert_eq!(config.content_mode, ContentMode::Backend);
        assert_eq!(config.backend_url.as_deref(), Some("http://backend:8000"));
    }

    #[test]
    fn fastapi_url_wins_over_public_url() {
        let config = config_from(&[
            ("NEXT_PUBLIC_API_URL", "http://public:8000"),
            ("FASTAPI_URL", "http://private:8000"),
        ]);
        assert_eq!(config.backend_url.as_deref(), Some("http://private:8000"));
    }

    #[test]
    fn explicit_static_mode_overrides_backend_url() {
        let config = config_from(&[
            ("FASTAPI_URL", "http://backend:8000"),
            ("CONTENT_MODE", "STATIC"),
        ]);
        assert_eq!(config.content_mode, ContentMode::Static);
    }

    #[test]
    fn backend_mode_without_url_falls_back_to_static() {
        let config = config_from(&[("CONTENT_MODE", "backend")]);
        assert_eq!(config.content_mode, ContentMode::Static);
    }

    #[test]
    fn openai_settings_parse_and_clamp() {
        let config = config_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_MAX_RETRIES", "99"),
            ("OPENAI_TIMEOUT_SECS", "0"),
        ]);
        let openai = config.openai.expect("key should enable OpenAI settings");
        assert_eq!(openai.max_retries, 10);
        assert_eq!(
            openai.timeout,
            Duration::from_secs(DEFAULT_OPENAI_TIMEOUT_SECS)
        );
        assert_eq!(openai.model, DEFAULT_OPENAI_MODEL);
    }

    #[test]
    fn blank_api_key_is_ignored() {
        let config = config_from(&[("OPENAI_API_KEY", "   ")]);
        assert!(config.openai.is_none());
    }
}
