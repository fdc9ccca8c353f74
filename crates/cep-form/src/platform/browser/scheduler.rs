use zoon::{Task, Timer, window};

use crate::submission::{PageReloader, Scheduler};

/// Runs delayed callbacks on the zoon task runtime (`setTimeout`).
#[derive(Clone, Copy, Debug, Default)]
pub struct TimerScheduler;

impl Scheduler for TimerScheduler {
    fn schedule_once(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Task::start(async move {
            Timer::sleep(delay_ms).await;
            task();
        });
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserReloader;

impl PageReloader for BrowserReloader {
    fn reload(&self) {
        if let Err(error) = window().location().reload() {
            log::error!("Failed to reload the page: {error:?}");
        }
    }
}
