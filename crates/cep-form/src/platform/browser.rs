//! Browser bindings for the form collaborators.
//!
//! Everything here touches `window()`, `localStorage` or the zoon task
//! runtime, so it only does useful work when compiled to wasm32.

pub mod logger;
pub mod notify;
pub mod scheduler;
pub mod storage;
