/*
[INPUT]:  .edgerc INI file section plus AKAMAI_IAM_* environment overrides
[OUTPUT]: IamConfig with host, credentials and HTTP timeouts
[POS]:    Configuration layer - loads connection settings for IamClient
[UPDATE]: When adding connection settings or changing override rules
*/

use std::path::Path;
use std::time::Duration;

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::http::client::ClientConfig;
use crate::http::error::{IamError, Result};

/// Prefix for environment overrides, e.g. `AKAMAI_IAM_HOST`
pub const ENV_PREFIX: &str = "AKAMAI_IAM";

/// Connection settings for one `.edgerc` section
#[derive(Clone, Deserialize)]
pub struct IamConfig {
    pub host: String,
    pub client_token: String,
    pub client_secret: String,
    pub access_token: String,
    #[serde(default)]
    pub account_key: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
}

impl std::fmt::Debug for IamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IamConfig")
            .field("host", &self.host)
            .field("client_token", &"<redacted>")
            .field("client_secret", &"<redacted>")
            .field("access_token", &"<redacted>")
            .field("account_key", &self.account_key)
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

impl IamConfig {
    /// Load `section` from an `.edgerc` file, then apply `AKAMAI_IAM_*`
    /// environment variables on top
    pub fn from_edgerc(path: impl AsRef<Path>, section: &str) -> Result<Self> {
        Self::load(path.as_ref(), section, Environment::with_prefix(ENV_PREFIX))
    }

    fn load(path: &Path, section: &str, env: Environment) -> Result<Self> {
        let file = Config::builder()
            .add_source(File::from(path).format(FileFormat::Ini))
            .build()?;
        let values = file
            .get_table(section)
            .map_err(|err| IamError::Config(format!("section [{section}]: {err}")))?;

        let mut builder = Config::builder();
        for (key, value) in values {
            builder = builder.set_default(key, value)?;
        }
        let config: IamConfig = builder
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()?;

        if config.host.trim().is_empty() {
            return Err(IamError::Config(format!("section [{section}]: host cannot be blank")));
        }
        Ok(config)
    }

    /// API base URL; hosts are given without scheme
    pub fn base_url(&self) -> String {
        let host = self.host.trim().trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("https://{host}")
        }
    }

    /// HTTP settings, falling back to the client defaults
    pub fn client_config(&self) -> ClientConfig {
        let defaults = ClientConfig::default();
        ClientConfig {
            timeout: self.timeout_secs.map(Duration::from_secs).unwrap_or(defaults.timeout),
            connect_timeout: self
                .connect_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.connect_timeout),
        }
    }
}
