//! CEP address lookup.
//!
//! Every keystroke in the CEP field goes through [`AddressLookup::on_input`],
//! which masks the value, checks its shape and, for a well-formed code,
//! hands back a [`PendingLookup`]. The caller drives the network part with
//! [`AddressLookup::resolve`]. Only the lookup started by the latest
//! keystroke may touch the form; older ones resolve as [`LookupOutcome::Stale`].

use std::future::Future;
use std::rc::Rc;

use serde::Deserialize;
use zoon::Mutable;

use crate::cep::{is_cep_shape, mask_cep};
use crate::config::FormConfig;
use crate::error::LookupError;
use crate::field::FieldId;
use crate::form::FormContext;

/// Address returned by the lookup service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub neighborhood: String,
    pub city: String,
    pub state: String,
}

/// Resolves a formatted CEP (`DDDDD-DDD`) to an address.
pub trait CepService {
    fn lookup(&self, code: &str) -> impl Future<Output = Result<Address, LookupError>>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LookupPhase {
    #[default]
    Editing,
    FormatChecking,
    /// Shape check failed; no request issued.
    Idle,
    Querying,
    Filled,
    LookupFailed,
}

/// A request the caller still has to resolve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingLookup {
    code: String,
    ticket: u64,
}

impl PendingLookup {
    pub fn code(&self) -> &str {
        &self.code
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CepStep {
    Idle,
    Query(PendingLookup),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LookupOutcome {
    Filled(Address),
    NotFound,
    Failed(LookupError),
    /// A newer keystroke or a reset superseded this lookup.
    Stale,
}

pub struct AddressLookup<S> {
    service: Rc<S>,
    form: FormContext,
    config: Rc<FormConfig>,
    phase: Mutable<LookupPhase>,
}

impl<S> Clone for AddressLookup<S> {
    fn clone(&self) -> Self {
        Self {
            service: Rc::clone(&self.service),
            form: self.form.clone(),
            config: Rc::clone(&self.config),
            phase: self.phase.clone(),
        }
    }
}

impl<S: CepService> AddressLookup<S> {
    pub fn new(service: S, form: FormContext, config: Rc<FormConfig>) -> Self {
        Self {
            service: Rc::new(service),
            form,
            config,
            phase: Mutable::new(LookupPhase::Editing),
        }
    }

    pub fn phase(&self) -> &Mutable<LookupPhase> {
        &self.phase
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Handle one keystroke in the CEP field.
    pub fn on_input(&self, raw: &str) -> CepStep {
        if self.form.is_disabled(FieldId::Cep) {
            log::debug!("CEP field is locked, ignoring input {raw:?}");
            return CepStep::Idle;
        }
        self.phase.set(LookupPhase::Editing);
        let formatted = mask_cep(raw);
        self.form.set_value(FieldId::Cep, formatted.clone());

        self.phase.set(LookupPhase::FormatChecking);
        let ticket = self.form.next_cep_ticket();
        if !is_cep_shape(&formatted) {
            self.form.set_cep_error("");
            self.form.validate_and_update(FieldId::Cep, false);
            self.phase.set(LookupPhase::Idle);
            return CepStep::Idle;
        }

        self.phase.set(LookupPhase::Querying);
        log::debug!("Looking up CEP {formatted} (ticket {ticket})");
        CepStep::Query(PendingLookup {
            code: formatted,
            ticket,
        })
    }

    /// Query the service and apply the outcome, unless superseded meanwhile.
    pub async fn resolve(&self, pending: PendingLookup) -> LookupOutcome {
        let result = self.service.lookup(&pending.code).await;
        if !self.form.is_current_cep_ticket(pending.ticket) {
            log::debug!("Discarding stale lookup for CEP {} (ticket {})", pending.code, pending.ticket);
            return LookupOutcome::Stale;
        }
        match result {
            Ok(address) => {
                self.fill(&address);
                LookupOutcome::Filled(address)
            }
            Err(error) if error.is_not_found() => {
                log::info!("CEP {} not found: {error}", pending.code);
                self.fail(&self.config.not_found_message);
                LookupOutcome::NotFound
            }
            Err(error) => {
                log::warn!("Failed to look up CEP {}: {error}", pending.code);
                self.fail(&self.config.transport_error_message);
                LookupOutcome::Failed(error)
            }
        }
    }

    fn fill(&self, address: &Address) {
        self.form.set_value(FieldId::Street, address.street.clone());
        self.form.set_value(FieldId::Neighborhood, address.neighborhood.clone());
        self.form.set_value(FieldId::City, address.city.clone());
        self.form.set_value(FieldId::State, address.state.clone());
        self.form.set_disabled(FieldId::Cep, true);
        self.form.set_cep_error("");
        self.form.validate_and_update(FieldId::Cep, true);
        self.phase.set(LookupPhase::Filled);
    }

    fn fail(&self, message: &str) {
        self.form.set_cep_error(message);
        self.form.validate_and_update(FieldId::Cep, false);
        self.phase.set(LookupPhase::LookupFailed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_ignores_extra_fields_and_defaults_optional_ones() {
        let address: Address = serde_json::from_str(
            r#"{"cep":"01310100","state":"SP","city":"São Paulo","service":"open-cep"}"#,
        )
        .unwrap();
        assert_eq!(address.city, "São Paulo");
        assert_eq!(address.state, "SP");
        assert!(address.street.is_empty());
        assert!(address.neighborhood.is_empty());
    }

    #[test]
    fn address_requires_city_and_state() {
        assert!(serde_json::from_str::<Address>(r#"{"street":"Rua A"}"#).is_err());
    }
}
