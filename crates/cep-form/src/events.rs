//! Typed event dispatch.
//!
//! Element callbacks translate DOM events into [`FormEvent`]s and hand them
//! to [`FormController::dispatch`]; nothing else mutates the form.

use std::rc::Rc;

use crate::config::FormConfig;
use crate::error::SubmitError;
use crate::field::{FieldId, FieldKind};
use crate::form::FormContext;
use crate::lookup::{AddressLookup, CepService, CepStep, PendingLookup};
use crate::phone::format_phone;
use crate::render::{StorageRenderer, StoredView};
use crate::snapshot::{FormSnapshot, SnapshotStore};
use crate::submission::{Notifier, PageReloader, Scheduler, SubmissionController};
use crate::validator::{is_non_empty, is_valid_email};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEvent {
    Input { field: FieldId, text: String },
    Submit,
    Load,
}

impl FormEvent {
    pub fn input(field: FieldId, text: impl Into<String>) -> Self {
        Self::Input {
            field,
            text: text.into(),
        }
    }
}

/// What the caller still has to do after a dispatch.
#[derive(Debug)]
pub enum Dispatch {
    Done,
    /// Drive with [`FormController::lookup`]`.resolve(..)`.
    Lookup(PendingLookup),
    Submitted(FormSnapshot),
    Rejected(SubmitError),
    Loaded(StoredView),
}

/// Browser-facing collaborators, passed once at construction.
pub struct Collaborators {
    pub store: Rc<dyn SnapshotStore>,
    pub notifier: Rc<dyn Notifier>,
    pub scheduler: Rc<dyn Scheduler>,
    pub reloader: Rc<dyn PageReloader>,
}

pub struct FormController<S> {
    form: FormContext,
    lookup: AddressLookup<S>,
    submission: SubmissionController,
    renderer: StorageRenderer,
}

impl<S> Clone for FormController<S> {
    fn clone(&self) -> Self {
        Self {
            form: self.form.clone(),
            lookup: self.lookup.clone(),
            submission: self.submission.clone(),
            renderer: self.renderer.clone(),
        }
    }
}

impl<S: CepService> FormController<S> {
    pub fn new(config: FormConfig, service: S, collaborators: Collaborators) -> Self {
        let config = Rc::new(config);
        let form = FormContext::new();
        let Collaborators {
            store,
            notifier,
            scheduler,
            reloader,
        } = collaborators;
        Self {
            lookup: AddressLookup::new(service, form.clone(), Rc::clone(&config)),
            submission: SubmissionController::new(
                form.clone(),
                Rc::clone(&store),
                notifier,
                scheduler,
                reloader,
                Rc::clone(&config),
            ),
            renderer: StorageRenderer::new(store, config),
            form,
        }
    }

    pub fn form(&self) -> &FormContext {
        &self.form
    }

    pub fn lookup(&self) -> &AddressLookup<S> {
        &self.lookup
    }

    pub fn submission(&self) -> &SubmissionController {
        &self.submission
    }

    pub fn dispatch(&self, event: FormEvent) -> Dispatch {
        match event {
            FormEvent::Input { field, text } => self.on_input(field, &text),
            FormEvent::Submit => match self.submission.submit() {
                Ok(snapshot) => Dispatch::Submitted(snapshot),
                Err(error) => Dispatch::Rejected(error),
            },
            FormEvent::Load => Dispatch::Loaded(self.load()),
        }
    }

    /// Stored-data view for a freshly loaded page.
    pub fn load(&self) -> StoredView {
        self.renderer.render()
    }

    fn on_input(&self, field: FieldId, text: &str) -> Dispatch {
        match field.kind() {
            FieldKind::Text => {
                self.form.set_value(field, text);
                self.form.validate_and_update(field, is_non_empty(text));
            }
            FieldKind::Email => {
                self.form.set_value(field, text);
                self.form.validate_and_update(field, is_valid_email(text));
            }
            FieldKind::Phone => {
                let phone = format_phone(text);
                self.form.set_value(field, phone.display);
                self.form.validate_and_update(field, phone.is_valid);
            }
            FieldKind::Cep => {
                if let CepStep::Query(pending) = self.lookup.on_input(text) {
                    return Dispatch::Lookup(pending);
                }
            }
        }
        Dispatch::Done
    }
}
