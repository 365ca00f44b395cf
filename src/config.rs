use crate::error::ConfigError;
use std::env;
use std::time::Duration;
use url::Url;

const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:4943";
const DEFAULT_REFRESH_SECS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Local,
    Ic,
}

impl Network {
    /// Anything other than `ic` falls back to the local replica.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("ic") => Network::Ic,
            _ => Network::Local,
        }
    }
}

/// Settings resolved once at startup and passed to whoever needs them.
#[derive(Debug, Clone)]
pub struct Config {
    pub network: Network,
    pub frontend_canister_id: Option<String>,
    pub backend_url: Url,
    pub identity: Option<String>,
    pub refresh_interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let network = Network::parse(lookup("DFX_NETWORK").as_deref());

        let backend_url =
            lookup("DVOTE_BACKEND_URL").unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        let backend_url = Url::parse(&backend_url).map_err(|source| ConfigError::BackendUrl {
            value: backend_url.clone(),
            source,
        })?;

        let refresh_interval = match lookup("DVOTE_REFRESH_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::RefreshInterval(raw)),
            },
            None => Duration::from_secs(DEFAULT_REFRESH_SECS),
        };

        Ok(Self {
            network,
            frontend_canister_id: lookup("DVOTE_FRONTEND_CANISTER_ID").filter(|id| !id.is_empty()),
            backend_url,
            identity: lookup("DVOTE_IDENTITY").filter(|token| !token.is_empty()),
            refresh_interval,
        })
    }

    pub fn identity_provider_url(&self) -> Option<String> {
        let canister_id = self.frontend_canister_id.as_ref()?;
        Some(match self.network {
            Network::Local => format!("http://{}.localhost:4943", canister_id),
            Network::Ic => format!("https://{}.ic0.app", canister_id),
        })
    }

    pub fn logged_in(&self) -> bool {
        self.identity.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_local_replica() {
        let config = config(&[]).unwrap();
        assert_eq!(config.network, Network::Local);
        assert_eq!(config.backend_url.as_str(), "http://127.0.0.1:4943/");
        assert_eq!(config.refresh_interval, Duration::from_secs(5));
        assert!(!config.logged_in());
        assert_eq!(config.identity_provider_url(), None);
    }

    #[test]
    fn identity_provider_follows_network() {
        let local = config(&[("DVOTE_FRONTEND_CANISTER_ID", "abc")]).unwrap();
        assert_eq!(local.identity_provider_url().unwrap(), "http://abc.localhost:4943");

        let ic = config(&[("DFX_NETWORK", "ic"), ("DVOTE_FRONTEND_CANISTER_ID", "abc")]).unwrap();
        assert_eq!(ic.identity_provider_url().unwrap(), "https://abc.ic0.app");

        let unknown = config(&[
            ("DFX_NETWORK", "staging"),
            ("DVOTE_FRONTEND_CANISTER_ID", "abc"),
        ])
        .unwrap();
        assert_eq!(unknown.network, Network::Local);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            config(&[("DVOTE_BACKEND_URL", "not a url")]),
            Err(ConfigError::BackendUrl { .. })
        ));
        assert!(matches!(
            config(&[("DVOTE_REFRESH_SECS", "0")]),
            Err(ConfigError::RefreshInterval(_))
        ));
    }

    #[test]
    fn identity_means_logged_in() {
        let config = config(&[("DVOTE_IDENTITY", "token")]).unwrap();
        assert!(config.logged_in());
    }
}
