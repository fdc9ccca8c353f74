#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use cep_form::platform::native::clock::ManualClock;
use cep_form::{
    Address, CepService, Collaborators, FormConfig, FormController, LookupError, MemorySnapshotStore,
    Notification, Notifier, PageReloader,
};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn paulista() -> Address {
    Address {
        street: "Av. Paulista".to_string(),
        neighborhood: "Bela Vista".to_string(),
        city: "São Paulo".to_string(),
        state: "SP".to_string(),
    }
}

pub fn praca_da_se() -> Address {
    Address {
        street: "Praça da Sé".to_string(),
        neighborhood: "Sé".to_string(),
        city: "São Paulo".to_string(),
        state: "SP".to_string(),
    }
}

/// Answers from a fixed table; unknown codes are reported as HTTP 404.
#[derive(Default)]
pub struct FakeCepService {
    responses: HashMap<String, Result<Address, LookupError>>,
    calls: RefCell<Vec<String>>,
}

impl FakeCepService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, code: &str, response: Result<Address, LookupError>) -> Self {
        self.responses.insert(code.to_string(), response);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CepService for FakeCepService {
    async fn lookup(&self, code: &str) -> Result<Address, LookupError> {
        self.calls.borrow_mut().push(code.to_string());
        self.responses
            .get(code)
            .cloned()
            .unwrap_or(Err(LookupError::NotFound { status: 404 }))
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub shown: RefCell<Vec<Notification>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.shown.borrow_mut().push(notification);
    }
}

#[derive(Default)]
pub struct CountingReloader {
    pub reloads: Cell<usize>,
}

impl PageReloader for CountingReloader {
    fn reload(&self) {
        self.reloads.set(self.reloads.get() + 1);
    }
}

pub struct Harness {
    pub controller: FormController<FakeCepService>,
    pub store: Rc<MemorySnapshotStore>,
    pub notifier: Rc<RecordingNotifier>,
    pub clock: Rc<ManualClock>,
    pub reloader: Rc<CountingReloader>,
}

impl Harness {
    pub fn new(service: FakeCepService) -> Self {
        Self::with_store(service, MemorySnapshotStore::new())
    }

    pub fn with_store(service: FakeCepService, store: MemorySnapshotStore) -> Self {
        init_logging();
        let store = Rc::new(store);
        let notifier = Rc::new(RecordingNotifier::default());
        let clock = Rc::new(ManualClock::new());
        let reloader = Rc::new(CountingReloader::default());
        let controller = FormController::new(
            FormConfig::default(),
            service,
            Collaborators {
                store: store.clone(),
                notifier: notifier.clone(),
                scheduler: clock.clone(),
                reloader: reloader.clone(),
            },
        );
        Self {
            controller,
            store,
            notifier,
            clock,
            reloader,
        }
    }
}
