use crate::client::consts;
use secrecy::SecretString;

pub struct Config {
    base_url: String,
    api_key: SecretString,
    agent_name: String,
    /// Collaborator credentials forwarded to the runtime as headers at
    /// registration, e.g. the transcription provider's API key.
    credentials: Vec<(&'static str, SecretString)>,
}

pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.config.base_url = base_url.to_string();
        self
    }

    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.config.api_key = SecretString::from(api_key.to_string());
        self
    }

    pub fn with_agent_name(mut self, agent_name: &str) -> Self {
        self.config.agent_name = agent_name.to_string();
        self
    }

    /// Header names must be lowercase static strings, e.g. "x-sarvam-api-key".
    pub fn with_credential(mut self, header: &'static str, value: &str) -> Self {
        self.config
            .credentials
            .push((header, SecretString::from(value.to_string())));
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

impl Config {
    // Sets the default values, reading the runtime endpoint and key from the
    // environment.
    pub fn new() -> Self {
        Self {
            base_url: std::env::var(consts::AGENT_RUNTIME_URL)
                .unwrap_or_else(|_| consts::BASE_URL.to_string()),
            api_key: std::env::var(consts::AGENT_RUNTIME_API_KEY)
                .unwrap_or_else(|_| "".to_string())
                .into(),
            agent_name: consts::DEFAULT_AGENT_NAME.to_string(),
            credentials: Vec::new(),
        }
    }

    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    pub fn agent_name(&self) -> &str {
        &self.agent_name
    }

    pub fn credentials(&self) -> &[(&'static str, SecretString)] {
        &self.credentials
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_builder_overrides_defaults() {
        let config = Config::builder()
            .with_base_url("wss://runtime.internal:7880")
            .with_api_key("wk_test")
            .with_agent_name("cafe-feedback")
            .with_credential("x-sarvam-api-key", "sk_test")
            .build();

        assert_eq!(config.base_url(), "wss://runtime.internal:7880");
        assert_eq!(config.agent_name(), "cafe-feedback");
        assert_eq!(config.credentials().len(), 1);
        assert_eq!(config.credentials()[0].0, "x-sarvam-api-key");
    }
}
