//! icd-autocomplete: debounced ICD-11 code lookups for a diagnosis form
//!
//! Raw keystrokes go in through an [`AutocompleteHandle`]; matches come out
//! through a [`Presenter`], and a chosen match is copied into a [`Form`].
//! The console binary in `main.rs` wires these to stdin and trace output.

pub mod client;
pub mod config;
pub mod controller;
pub mod event_loop;
pub mod form;
pub mod lookup;
pub mod presenter;
pub mod telemetry;

pub use client::IcdClient;
pub use config::AutocompleteConfig;
pub use controller::{Controller, Query};
pub use event_loop::{AutocompleteHandle, spawn};
pub use form::{FieldIds, Form, MemoryForm};
pub use icd_core::{LookupError, Match};
pub use lookup::{LookupOutcome, SearchBackend, perform_lookup};
pub use presenter::{Dropdown, Presenter, Suggestion, TracePresenter};
pub use telemetry::init_tracing;
