use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::constants;

pub const ENV_WHATSAPP_NUMBER: &str = "DITEL_WHATSAPP_NUMBER";
pub const ENV_COMPANY_NAME: &str = "DITEL_COMPANY_NAME";
pub const ENV_SITE_URL: &str = "DITEL_SITE_URL";
pub const ENV_EMAIL: &str = "DITEL_EMAIL";

/// Site settings. Values come from the package metadata baked in at build
/// time, then an optional TOML file, then `DITEL_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub whatsapp_number: String,
    pub company_name: String,
    pub site_url: String,
    pub email: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: constants::APP_WHATSAPP_NUMBER.to_string(),
            company_name: constants::APP_COMPANY.to_string(),
            site_url: constants::APP_SITE_URL.to_string(),
            email: constants::APP_EMAIL.to_string(),
        }
    }
}

impl SiteConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_toml_file(path)?,
            None => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        Self::from_toml_str(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse site config")
    }

    /// Replaces fields for which `lookup` returns a non-blank value.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let fields = [
            (ENV_WHATSAPP_NUMBER, &mut self.whatsapp_number),
            (ENV_COMPANY_NAME, &mut self.company_name),
            (ENV_SITE_URL, &mut self.site_url),
            (ENV_EMAIL, &mut self.email),
        ];

        for (key, field) in fields {
            if let Some(value) = lookup(key).filter(|value| !value.trim().is_empty()) {
                log::debug!("{key} overrides configured value");
                *field = value;
            }
        }
    }
}
