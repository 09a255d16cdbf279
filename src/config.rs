//! Site Configuration
//!
//! Compiled-in defaults, optionally overridden by `<meta>` tags in
//! `index.html` (`apply-endpoint`, `log-level`).

use log::LevelFilter;

use crate::commands;

pub const DEFAULT_APPLY_ENDPOINT: &str = "/api/apply";

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub school_name: &'static str,
    pub school_address: &'static str,
    pub logo_path: &'static str,
    /// Where the application form is POSTed
    pub apply_endpoint: String,
    pub log_level: LevelFilter,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            school_name: "FUTURE PODAR LEARN SCHOOL",
            school_address: "Add - Jambhali / Sadak, Taluka - Sakoli, District - Bhandara - 441802",
            logo_path: "/asset/logs/logo.jpg",
            apply_endpoint: DEFAULT_APPLY_ENDPOINT.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl SiteConfig {
    /// Apply overrides; blank or unknown values keep the default
    pub fn with_overrides(mut self, endpoint: Option<&str>, level: Option<&str>) -> Self {
        if let Some(endpoint) = endpoint.map(str::trim).filter(|e| !e.is_empty()) {
            self.apply_endpoint = endpoint.to_string();
        }
        if let Some(level) = level.and_then(parse_level) {
            self.log_level = level;
        }
        self
    }

    /// Defaults plus the page's `<meta>` overrides
    pub fn from_document() -> Self {
        let endpoint = commands::meta_content("apply-endpoint");
        let level = commands::meta_content("log-level");
        Self::default().with_overrides(endpoint.as_deref(), level.as_deref())
    }
}

pub fn parse_level(value: &str) -> Option<LevelFilter> {
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.apply_endpoint, "/api/apply");
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_overrides() {
        let config = SiteConfig::default().with_overrides(Some(" https://forms.example.org/apply "), Some("debug"));
        assert_eq!(config.apply_endpoint, "https://forms.example.org/apply");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_blank_or_bad_overrides_are_ignored() {
        let config = SiteConfig::default().with_overrides(Some("   "), Some("loud"));
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_parse_level_is_case_insensitive() {
        assert_eq!(parse_level("WARN"), Some(LevelFilter::Warn));
        assert_eq!(parse_level("off"), Some(LevelFilter::Off));
        assert_eq!(parse_level(""), None);
    }
}
