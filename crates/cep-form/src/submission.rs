//! Form submission: notify, persist, reset, reload.

use std::rc::Rc;

use zoon::Mutable;

use crate::config::FormConfig;
use crate::error::SubmitError;
use crate::form::FormContext;
use crate::snapshot::{FormSnapshot, SnapshotStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A toast that dismisses itself after `duration_ms`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub kind: NotificationKind,
    pub duration_ms: u32,
}

/// Fire-and-forget notification facility.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// One-shot delayed callbacks.
pub trait Scheduler {
    fn schedule_once(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

pub trait PageReloader {
    fn reload(&self);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Ready,
    Submitting,
    Reset,
}

#[derive(Clone)]
pub struct SubmissionController {
    form: FormContext,
    store: Rc<dyn SnapshotStore>,
    notifier: Rc<dyn Notifier>,
    scheduler: Rc<dyn Scheduler>,
    reloader: Rc<dyn PageReloader>,
    config: Rc<FormConfig>,
    phase: Mutable<SubmitPhase>,
}

impl SubmissionController {
    pub fn new(
        form: FormContext,
        store: Rc<dyn SnapshotStore>,
        notifier: Rc<dyn Notifier>,
        scheduler: Rc<dyn Scheduler>,
        reloader: Rc<dyn PageReloader>,
        config: Rc<FormConfig>,
    ) -> Self {
        Self {
            form,
            store,
            notifier,
            scheduler,
            reloader,
            config,
            phase: Mutable::new(SubmitPhase::Ready),
        }
    }

    pub fn phase(&self) -> &Mutable<SubmitPhase> {
        &self.phase
    }

    /// Submit the current form.
    ///
    /// Returns the persisted snapshot. A failed write is logged; the form is
    /// still reset and the reload still scheduled.
    pub fn submit(&self) -> Result<FormSnapshot, SubmitError> {
        if !self.form.is_submittable() {
            log::debug!("Submit ignored, form has empty or invalid fields");
            return Err(SubmitError::NotSubmittable);
        }
        self.phase.set(SubmitPhase::Submitting);

        let duration_ms = self.config.notification_duration_ms;
        self.notifier.notify(Notification {
            title: self.config.success_title.clone(),
            kind: NotificationKind::Success,
            duration_ms,
        });

        let snapshot = self.form.snapshot();
        if let Err(error) = self.store.save(&snapshot) {
            log::error!("Failed to store form data: {error}");
        }

        self.form.reset();
        self.phase.set(SubmitPhase::Reset);

        let reloader = Rc::clone(&self.reloader);
        self.scheduler
            .schedule_once(duration_ms, Box::new(move || reloader.reload()));
        log::info!("Form submitted, reloading in {duration_ms} ms");
        Ok(snapshot)
    }
}
