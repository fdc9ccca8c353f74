//! Form configuration.
//!
//! Every value has a compiled-in default. A TOML document may override any
//! subset of keys; missing keys keep their defaults.

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_LOOKUP_BASE_URL: &str = "https://brasilapi.com.br/api/cep/v1";
pub const DEFAULT_STORAGE_KEY: &str = "formData";
pub const DEFAULT_NOTIFICATION_DURATION_MS: u32 = 3000;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    /// Lookup endpoint; the formatted CEP is appended as the last path segment.
    pub lookup_base_url: String,
    /// Key of the single persisted snapshot.
    pub storage_key: String,
    /// Display time of the success notification, also the delay before reload.
    pub notification_duration_ms: u32,
    pub success_title: String,
    pub not_found_message: String,
    pub transport_error_message: String,
    pub stored_heading: String,
    pub empty_storage_message: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            lookup_base_url: DEFAULT_LOOKUP_BASE_URL.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            notification_duration_ms: DEFAULT_NOTIFICATION_DURATION_MS,
            success_title: "Formulário Enviado com Sucesso!".to_string(),
            not_found_message: "CEP incorreto ou não encontrado".to_string(),
            transport_error_message: "Não foi possível consultar o CEP".to_string(),
            stored_heading: "Dados armazenados no LocalStorage:".to_string(),
            empty_storage_message: "Nenhum dado armazenado em LocalStorage".to_string(),
        }
    }
}

impl FormConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Parse `source`, falling back to defaults when it is malformed.
    pub fn from_toml_or_default(source: &str) -> Self {
        Self::from_toml_str(source).unwrap_or_else(|error| {
            log::warn!("{error}; using default form configuration");
            Self::default()
        })
    }

    /// Full lookup URL for an already formatted CEP.
    pub fn lookup_url(&self, code: &str) -> String {
        format!("{}/{}", self.lookup_base_url.trim_end_matches('/'), code)
    }
}
