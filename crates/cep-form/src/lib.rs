pub mod cep;
pub mod config;
pub mod error;
pub mod events;
pub mod field;
pub mod form;
pub mod lookup;
pub mod phone;
pub mod platform;
pub mod render;
pub mod service;
pub mod snapshot;
pub mod submission;
pub mod validator;

pub use zoon;

pub use config::FormConfig;
pub use error::{ConfigError, LookupError, StorageError, SubmitError};
pub use events::{Collaborators, Dispatch, FormController, FormEvent};
pub use field::{FieldId, FieldKind, FieldState};
pub use form::FormContext;
pub use lookup::{Address, AddressLookup, CepService, CepStep, LookupOutcome, LookupPhase, PendingLookup};
pub use snapshot::{FormSnapshot, MemorySnapshotStore, SnapshotStore};
pub use submission::{Notification, NotificationKind, Notifier, PageReloader, Scheduler, SubmissionController, SubmitPhase};
