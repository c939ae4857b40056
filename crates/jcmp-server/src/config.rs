use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
    /// Timeout for each outbound document fetch, in seconds.
    pub fetch_timeout_secs: u64,
    /// Maximum accepted request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8771".parse().unwrap(),
            fetch_timeout_secs: 30,
            max_body_bytes: 1024 * 1024,
        }
    }
}

impl ServerConfig {
    /// Build a config from the environment, falling back to defaults.
    ///
    /// Recognized variables: `JCMP_BIND`, `JCMP_FETCH_TIMEOUT_SECS`, and
    /// `JCMP_MAX_BODY_BYTES`. A variable that is set but unparseable is a
    /// configuration error, not a silent default.
    pub fn from_env() -> ServerResult<Self> {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var("JCMP_BIND") {
            config.bind_addr = raw
                .parse()
                .map_err(|_| ServerError::Config(format!("invalid JCMP_BIND: {raw:?}")))?;
        }
        if let Ok(raw) = std::env::var("JCMP_FETCH_TIMEOUT_SECS") {
            config.fetch_timeout_secs = raw.parse().map_err(|_| {
                ServerError::Config(format!("invalid JCMP_FETCH_TIMEOUT_SECS: {raw:?}"))
            })?;
        }
        if let Ok(raw) = std::env::var("JCMP_MAX_BODY_BYTES") {
            config.max_body_bytes = raw.parse().map_err(|_| {
                ServerError::Config(format!("invalid JCMP_MAX_BODY_BYTES: {raw:?}"))
            })?;
        }
        Ok(config)
    }
}
