//! HTTP client for the CEP lookup endpoint (`GET {base}/{code}`).

use crate::config::FormConfig;
use crate::error::LookupError;
use crate::lookup::{Address, CepService};

#[derive(Clone, Debug)]
pub struct BrasilApiService {
    client: reqwest::Client,
    config: FormConfig,
}

impl BrasilApiService {
    pub fn new(config: FormConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn url_for(&self, code: &str) -> String {
        self.config.lookup_url(code)
    }
}

impl CepService for BrasilApiService {
    async fn lookup(&self, code: &str) -> Result<Address, LookupError> {
        let response = self.client.get(self.url_for(code)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::NotFound {
                status: status.as_u16(),
            });
        }
        Ok(response.json::<Address>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_appends_formatted_code() {
        let service = BrasilApiService::new(FormConfig::default());
        assert_eq!(service.url_for("01310-100"), "https://brasilapi.com.br/api/cep/v1/01310-100");
    }
}
