use std::env;
use std::net::SocketAddr;

use crate::error::Error;

pub const DEFAULT_API_BASE: &str = "maps.googleapis.com";
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

#[derive(Clone, Debug)]
pub struct Config {
    pub google_maps_api_base: String,
    pub google_maps_api_key: String,
    pub listen_addr: SocketAddr,
}

impl Config {
    /// Reads settings from the process environment. Call `dotenv::dotenv()` first
    /// to pick up a local `.env` file.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key))
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let google_maps_api_base =
            optional(lookup("GOOGLE_MAPS_API_BASE"))?.unwrap_or_else(|| DEFAULT_API_BASE.into());
        let google_maps_api_key = lookup("GOOGLE_MAPS_API_KEY")?;
        let listen_addr: SocketAddr = optional(lookup("WALKROUTE_LISTEN_ADDR"))?
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.into())
            .parse()?;

        Ok(Self {
            google_maps_api_base,
            google_maps_api_key,
            listen_addr,
        })
    }
}

fn optional(value: Result<String, env::VarError>) -> Result<Option<String>, Error> {
    match value {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(
        vars: &[(&str, &str)],
    ) -> impl Fn(&str) -> Result<String, env::VarError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        move |key: &str| vars.get(key).cloned().ok_or(env::VarError::NotPresent)
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_lookup(lookup(&[("GOOGLE_MAPS_API_KEY", "secret")])).unwrap();

        assert_eq!(config.google_maps_api_base, DEFAULT_API_BASE);
        assert_eq!(config.google_maps_api_key, "secret");
        assert_eq!(config.listen_addr, DEFAULT_LISTEN_ADDR.parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn api_key_is_required() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();

        assert_eq!(err.code, 1);
    }

    #[test]
    fn bad_listen_addr_is_rejected() {
        let err = Config::from_lookup(lookup(&[
            ("GOOGLE_MAPS_API_KEY", "secret"),
            ("WALKROUTE_LISTEN_ADDR", "not an address"),
        ]))
        .unwrap_err();

        assert_eq!(err.code, 2);
    }
}
