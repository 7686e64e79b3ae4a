//! Configuration management for the status dashboard

use log::warn;
use std::env;
use std::time::Duration;

use crate::models::status::ServiceConfig;

pub const DEFAULT_API_URL: &str = "https://api.uptimerobot.com/v3/monitors";
pub const DEFAULT_PROXY_URL: &str = "https://stats.uptimerobot.com/uUEoseYylg";
pub const DEFAULT_PROXY_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Services shown when `STATUS_SERVICES` is not set, with the variable holding each monitor id.
const DEFAULT_SERVICES: [(&str, &str); 4] = [
    ("Main API", "MAIN_API_MONITOR_ID"),
    ("DSE Website", "DSE_WEBSITE_MONITOR_ID"),
    ("HPCCSS Site", "HPCCSS_SITE_MONITOR_ID"),
    ("ICT Website", "ICT_WEBSITE_MONITOR_ID"),
];

#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer token for the UptimeRobot API
    pub api_token: Option<String>,

    /// Monitor listing endpoint
    pub api_url: String,

    /// Services rendered on the dashboard, in display order
    pub services: Vec<ServiceConfig>,

    /// Public status page relayed by `/api/proxy`
    pub proxy_url: String,

    /// User agent sent when fetching the public status page
    pub proxy_user_agent: String,

    /// Timeout for outbound requests; `None` keeps the client default
    pub http_timeout: Option<Duration>,

    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_token: None,
            api_url: DEFAULT_API_URL.to_string(),
            services: DEFAULT_SERVICES
                .iter()
                .map(|(name, _)| ServiceConfig::new(*name, ""))
                .collect(),
            proxy_url: DEFAULT_PROXY_URL.to_string(),
            proxy_user_agent: DEFAULT_PROXY_USER_AGENT.to_string(),
            http_timeout: None,
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value source shaped like the environment
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(token) = lookup("UPTIME_ROBOT_TOKEN") {
            if !token.trim().is_empty() {
                config.api_token = Some(token.trim().to_string());
            }
        }

        if let Some(api_url) = lookup("UPTIME_ROBOT_API_URL") {
            config.api_url = api_url;
        }

        config.services = match lookup("STATUS_SERVICES") {
            Some(value) => parse_services(&value),
            None => DEFAULT_SERVICES
                .iter()
                .map(|(name, var)| ServiceConfig::new(*name, lookup(*var).unwrap_or_default()))
                .collect(),
        };

        if let Some(proxy_url) = lookup("PROXY_TARGET_URL") {
            config.proxy_url = proxy_url;
        }

        if let Some(user_agent) = lookup("PROXY_USER_AGENT") {
            config.proxy_user_agent = user_agent;
        }

        // 0 keeps the client default rather than failing every request immediately
        if let Some(timeout) = lookup("HTTP_TIMEOUT_SECONDS") {
            match timeout.trim().parse::<u64>() {
                Ok(0) => config.http_timeout = None,
                Ok(seconds) => config.http_timeout = Some(Duration::from_secs(seconds)),
                Err(_) => warn!("Ignoring invalid HTTP_TIMEOUT_SECONDS '{}'", timeout),
            }
        }

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }

        if let Some(port) = lookup("PORT") {
            match port.trim().parse() {
                Ok(port) => config.port = port,
                Err(_) => warn!("Ignoring invalid PORT '{}', using {}", port, config.port),
            }
        }

        config
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.api_url.is_empty() {
            return Err("api_url cannot be empty".to_string());
        }

        if self.proxy_url.is_empty() {
            return Err("proxy_url cannot be empty".to_string());
        }

        if self.services.is_empty() {
            return Err("at least one service must be configured".to_string());
        }

        if self.services.iter().any(|s| s.name.trim().is_empty()) {
            return Err("service names cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("port must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Inputs that are allowed to be missing but will turn entries into errors.
    pub fn missing_inputs(&self) -> Vec<String> {
        let mut missing = Vec::new();

        if self.api_token.is_none() {
            missing.push("UPTIME_ROBOT_TOKEN is not set; every service will report an error".to_string());
        }

        for service in self.services.iter().filter(|s| s.monitor_id.trim().is_empty()) {
            missing.push(format!("No monitor id configured for service '{}'", service.name));
        }

        missing
    }
}

/// Parse `Name=id;Name=id`. An entry without `=` keeps its name with an empty id.
fn parse_services(value: &str) -> Vec<ServiceConfig> {
    value.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once('=') {
            Some((name, id)) => ServiceConfig::new(name.trim(), id.trim()),
            None => ServiceConfig::new(entry, ""),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[]));

        assert!(config.api_token.is_none());
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.proxy_url, DEFAULT_PROXY_URL);
        assert_eq!(config.port, 8080);
        assert!(config.http_timeout.is_none());

        let names: Vec<&str> = config.services.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Main API", "DSE Website", "HPCCSS Site", "ICT Website"]);
        assert!(config.services.iter().all(|s| s.monitor_id.is_empty()));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_per_service_ids() {
        let config = Config::from_lookup(lookup_from(&[
            ("UPTIME_ROBOT_TOKEN", " secret "),
            ("MAIN_API_MONITOR_ID", "800123"),
            ("ICT_WEBSITE_MONITOR_ID", "800999"),
            ("HTTP_TIMEOUT_SECONDS", "15"),
            ("PORT", "3000"),
        ]));

        assert_eq!(config.api_token.as_deref(), Some("secret"));
        assert_eq!(config.services[0].monitor_id, "800123");
        assert_eq!(config.services[1].monitor_id, "");
        assert_eq!(config.services[3].monitor_id, "800999");
        assert_eq!(config.http_timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_zero_or_invalid_numbers_keep_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("HTTP_TIMEOUT_SECONDS", "0"),
            ("PORT", "eighty"),
        ]));
        assert!(config.http_timeout.is_none());
        assert_eq!(config.port, 8080);

        let config = Config::from_lookup(lookup_from(&[
            ("HTTP_TIMEOUT_SECONDS", "ten"),
            ("PORT", "70000"),
        ]));
        assert!(config.http_timeout.is_none());
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_blank_token_is_missing() {
        let config = Config::from_lookup(lookup_from(&[("UPTIME_ROBOT_TOKEN", "  ")]));
        assert!(config.api_token.is_none());
    }

    #[test]
    fn test_status_services_override() {
        let config = Config::from_lookup(lookup_from(&[
            ("STATUS_SERVICES", "Billing = 11; Search=22;;Docs"),
            ("MAIN_API_MONITOR_ID", "800123"),
        ]));

        assert_eq!(
            config.services,
            vec![
                ServiceConfig::new("Billing", "11"),
                ServiceConfig::new("Search", "22"),
                ServiceConfig::new("Docs", ""),
            ]
        );
    }

    #[test]
    fn test_validation() {
        let mut config = Config::default();
        config.port = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.services.clear();
        assert!(config.validate().is_err());

        let config = Config::from_lookup(lookup_from(&[("STATUS_SERVICES", "=5")]));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_inputs() {
        let config = Config::from_lookup(lookup_from(&[("MAIN_API_MONITOR_ID", "1")]));
        let missing = config.missing_inputs();

        // token plus three services without ids
        assert_eq!(missing.len(), 4);
        assert!(missing[0].contains("UPTIME_ROBOT_TOKEN"));
    }
}
