//! Shared form state.
//!
//! `FormContext` replaces ad-hoc DOM lookups: it is built once, cloned into
//! every handler and bound to the element tree through zoon signals.

use std::cell::Cell;
use std::rc::Rc;

use zoon::Mutable;

use crate::field::{FieldId, FieldState};
use crate::snapshot::FormSnapshot;
use crate::validator::is_non_empty;

/// Reactive handle for one input.
#[derive(Clone, Debug)]
pub struct FieldHandle {
    pub id: FieldId,
    pub value: Mutable<String>,
    pub state: Mutable<FieldState>,
    pub disabled: Mutable<bool>,
}

impl FieldHandle {
    fn new(id: FieldId) -> Self {
        Self {
            id,
            value: Mutable::new(String::new()),
            state: Mutable::new(FieldState::Untouched),
            disabled: Mutable::new(false),
        }
    }

    /// Counts toward the aggregate: non-empty and not flagged as error.
    fn is_acceptable(&self) -> bool {
        is_non_empty(&self.value.lock_ref()) && !self.state.get().is_error()
    }
}

#[derive(Clone, Debug)]
pub struct FormContext {
    fields: Rc<[FieldHandle]>,
    cep_error: Mutable<String>,
    submit_enabled: Mutable<bool>,
    // Latest CEP lookup ticket; responses carrying an older ticket are stale.
    cep_sequence: Rc<Cell<u64>>,
}

impl Default for FormContext {
    fn default() -> Self {
        Self::new()
    }
}

impl FormContext {
    pub fn new() -> Self {
        Self {
            fields: FieldId::ALL.into_iter().map(FieldHandle::new).collect(),
            cep_error: Mutable::new(String::new()),
            submit_enabled: Mutable::new(false),
            cep_sequence: Rc::new(Cell::new(0)),
        }
    }

    pub fn field(&self, id: FieldId) -> &FieldHandle {
        &self.fields[id.index()]
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldHandle> {
        self.fields.iter()
    }

    pub fn value(&self, id: FieldId) -> String {
        self.field(id).value.get_cloned()
    }

    /// Write a value without touching validity, like a programmatic
    /// `input.value = ...` assignment.
    pub fn set_value(&self, id: FieldId, value: impl Into<String>) {
        self.field(id).value.set(value.into());
    }

    pub fn state(&self, id: FieldId) -> FieldState {
        self.field(id).state.get()
    }

    pub fn is_disabled(&self, id: FieldId) -> bool {
        self.field(id).disabled.get()
    }

    pub fn set_disabled(&self, id: FieldId, disabled: bool) {
        self.field(id).disabled.set_neq(disabled);
    }

    pub fn cep_error(&self) -> &Mutable<String> {
        &self.cep_error
    }

    pub fn set_cep_error(&self, message: impl Into<String>) {
        self.cep_error.set(message.into());
    }

    pub fn submit_enabled(&self) -> &Mutable<bool> {
        &self.submit_enabled
    }

    /// Mark `id` as exactly one of error/success, then recompute whether
    /// the form can be submitted.
    pub fn validate_and_update(&self, id: FieldId, is_valid: bool) {
        self.field(id).state.set_neq(FieldState::from_validity(is_valid));
        self.recompute_submittable();
    }

    /// All fields non-empty and none flagged as error.
    pub fn is_submittable(&self) -> bool {
        self.fields.iter().all(FieldHandle::is_acceptable)
    }

    pub fn recompute_submittable(&self) -> bool {
        let submittable = self.is_submittable();
        self.submit_enabled.set_neq(submittable);
        submittable
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot::from_values(self.fields.iter().map(|field| (field.id, field.value.get_cloned())))
    }

    /// Clear values, visual state, the CEP lock and error message, and
    /// disable submit. In-flight lookups become stale.
    pub fn reset(&self) {
        for field in self.fields.iter() {
            field.value.set(String::new());
            field.state.set_neq(FieldState::Untouched);
            field.disabled.set_neq(false);
        }
        self.cep_error.set(String::new());
        self.next_cep_ticket();
        self.submit_enabled.set_neq(false);
    }

    pub(crate) fn next_cep_ticket(&self) -> u64 {
        let ticket = self.cep_sequence.get() + 1;
        self.cep_sequence.set(ticket);
        ticket
    }

    pub(crate) fn is_current_cep_ticket(&self, ticket: u64) -> bool {
        self.cep_sequence.get() == ticket
    }
}
