//! Build-time configuration.
//!
//! A CSR bundle has no runtime environment, so configuration is baked in at
//! compile time through `APTCARE_*` variables. Only the API base URL changes
//! runtime behavior; the rest is surfaced for display and build tooling.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend base address, trailing slashes stripped.
    pub api_base_url: String,
    /// Environment name shown in the header badge.
    pub environment: String,
    /// Development toggle for running against a local backend.
    pub local_mode: bool,
}

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_parts(
            option_env!("APTCARE_API_URL"),
            option_env!("APTCARE_ENV"),
            option_env!("APTCARE_LOCAL"),
        )
    }

    fn from_parts(url: Option<&str>, environment: Option<&str>, local: Option<&str>) -> Self {
        let api_base_url = url
            .filter(|u| !u.trim().is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();
        let environment = environment.unwrap_or("development").to_string();
        let local_mode = matches!(local, Some("1") | Some("true"));
        Self {
            api_base_url,
            environment,
            local_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let config = AppConfig::from_parts(None, None, None);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.environment, "development");
        assert!(!config.local_mode);
    }

    #[test]
    fn base_url_is_normalized() {
        let config = AppConfig::from_parts(Some("https://api.aptcare.example/"), None, None);
        assert_eq!(config.api_base_url, "https://api.aptcare.example");
    }

    #[test]
    fn blank_url_falls_back_to_default() {
        let config = AppConfig::from_parts(Some("  "), Some("staging"), Some("true"));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.environment, "staging");
        assert!(config.local_mode);
    }
}
