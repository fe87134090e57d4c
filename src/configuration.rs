use secrecy::Secret;

const DEFAULT_BASE_URL: &str = "https://api.lettermint.co/v1";
const DEFAULT_TIMEOUT_MILLISECONDS: u64 = 10_000;

/// Connection and filtering settings for
/// [`LettermintClient`](crate::client::LettermintClient).
///
/// Deserializable so host applications can embed it in their own
/// configuration files; `new` plus the `with_*` helpers cover programmatic
/// construction.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct LettermintSettings {
    /// API token, sent as the `x-lettermint-token` header on every request.
    ///
    /// Wrapped in [`Secret`] so the token cannot leak through `Debug`
    /// output or log lines by accident.
    pub api_key: Secret<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Recipient whitelist for development and testing environments. Leave
    /// empty to disable filtering, which is the production setting.
    ///
    /// Supported entry shapes:
    /// - exact address: `user@example.com` (plus-tags on it match too)
    /// - domain wildcard: `*@example.com`
    #[serde(default)]
    pub email_whitelist: Vec<String>,
    #[serde(default = "default_timeout_milliseconds")]
    pub timeout_milliseconds: u64,
}

impl LettermintSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: default_base_url(),
            email_whitelist: Vec::new(),
            timeout_milliseconds: default_timeout_milliseconds(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_email_whitelist<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.email_whitelist = entries.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_timeout_milliseconds(mut self, timeout_milliseconds: u64) -> Self {
        self.timeout_milliseconds = timeout_milliseconds;
        self
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_milliseconds() -> u64 {
    DEFAULT_TIMEOUT_MILLISECONDS
}
