//! Autocomplete query controller
//!
//! Turns raw keystrokes into a debounced sequence of lookups and routes
//! their results to a [`Presenter`]. The controller only holds state; the
//! event loop in [`crate::event_loop`] drives its timer and runs lookups.
//!
//! At most one debounce deadline exists at a time. Any number of lookups
//! may be in flight, but only the outcome of the most recently scheduled
//! query is ever applied.

use icd_core::{LookupError, Match};
use tokio::time::Instant;

use crate::config::AutocompleteConfig;
use crate::form::{self, Form};
use crate::presenter::Presenter;
use crate::telemetry;

/// A scheduled search.
///
/// Equality covers both the text and the sequence number, so typing the
/// same text twice still yields two distinct queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    seq: u64,
    text: String,
}

impl Query {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[derive(Debug)]
struct Pending {
    query: Query,
    due: Instant,
}

pub struct Controller<P, F> {
    config: AutocompleteConfig,
    presenter: P,
    form: F,
    latest: Option<Query>,
    pending: Option<Pending>,
    next_seq: u64,
}

impl<P: Presenter, F: Form> Controller<P, F> {
    pub fn new(config: AutocompleteConfig, presenter: P, form: F) -> Self {
        Self {
            config,
            presenter,
            form,
            latest: None,
            pending: None,
            next_seq: 0,
        }
    }

    /// Handle a raw input change.
    ///
    /// Cancels the pending timer, then either clears the suggestions (input
    /// shorter than `min_length`) or schedules a lookup one quiet period
    /// after `now`.
    pub fn on_input(&mut self, raw_text: &str, now: Instant) {
        if let Some(cancelled) = self.pending.take() {
            tracing::debug!(query = cancelled.query.text(), "Debounced lookup cancelled");
        }

        if raw_text.chars().count() < self.config.min_length {
            self.latest = None;
            self.presenter.show_matches(&[]);
            return;
        }

        self.next_seq += 1;
        let query = Query {
            seq: self.next_seq,
            text: raw_text.to_string(),
        };
        self.latest = Some(query.clone());
        self.pending = Some(Pending {
            query,
            due: now + self.config.quiet_period,
        });
    }

    /// When the pending lookup should fire, if one is scheduled
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due)
    }

    /// Fire the debounce timer: hand out the pending query once it is due
    pub fn take_due(&mut self, now: Instant) -> Option<Query> {
        match &self.pending {
            Some(p) if p.due <= now => self.pending.take().map(|p| p.query),
            _ => None,
        }
    }

    /// Whether `query` is the one whose result may still be applied
    pub fn is_latest(&self, query: &Query) -> bool {
        self.latest.as_ref() == Some(query)
    }

    /// Apply the outcome of a lookup for `query`.
    ///
    /// Outcomes for anything but the latest query are dropped. Failures
    /// close the list and show the fallback message.
    pub fn on_result(&mut self, query: &Query, result: Result<Vec<Match>, LookupError>) {
        if !self.is_latest(query) {
            telemetry::record_stale();
            tracing::debug!(query = query.text(), seq = query.seq(), "Dropping stale result");
            return;
        }

        match result {
            Ok(matches) => {
                tracing::debug!(query = query.text(), count = matches.len(), "Lookup succeeded");
                self.presenter.show_matches(&matches);
            }
            Err(e) => {
                telemetry::record_failure(e.kind());
                tracing::warn!(query = query.text(), error = %e, kind = e.kind(), "ICD-11 lookup failed");
                self.presenter.show_matches(&[]);
                self.presenter.show_fallback(&self.config.fallback_message);
            }
        }
    }

    /// Copy a chosen match into the destination fields and close the list.
    ///
    /// Retires the latest query so a lookup still in flight cannot reopen
    /// suggestions over the filled form.
    pub fn on_select(&mut self, selected: &Match) {
        tracing::info!(code = %selected.code, title = %selected.title, "Selected ICD-11 code");
        form::fill(&mut self.form, &self.config.fields, selected);
        self.pending = None;
        self.latest = None;
        self.presenter.show_matches(&[]);
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn into_parts(self) -> (P, F) {
        (self.presenter, self.form)
    }
}
