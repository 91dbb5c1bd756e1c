use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;

fn default_server_port() -> u16 {
    8080
}

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    #[serde(default = "default_server_port")]
    pub server_port: u16,

    #[serde(default)]
    pub log_json: bool,
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I>(vars: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Self>(vars)
            .map_err(|e| anyhow!("Invalid or missing environmental variable: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn falls_back_to_defaults() {
        let config = Config::from_vars(vars(&[])).unwrap();
        assert_eq!(config.server_port, 8080);
        assert!(!config.log_json);
    }

    #[test]
    fn reads_uppercase_variables() {
        let config =
            Config::from_vars(vars(&[("SERVER_PORT", "9090"), ("LOG_JSON", "true")])).unwrap();
        assert_eq!(config.server_port, 9090);
        assert!(config.log_json);
    }

    #[test]
    fn rejects_unparseable_port() {
        assert!(Config::from_vars(vars(&[("SERVER_PORT", "not-a-port")])).is_err());
    }
}
