//! Event loop driving a [`Controller`]
//!
//! One task owns the controller and multiplexes input events, the
//! debounce deadline and in-flight lookups, so controller state is never
//! shared or locked.

use std::sync::Arc;

use icd_core::Match;
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinHandle, JoinSet};
use tokio::time::Instant;

use crate::config::AutocompleteConfig;
use crate::controller::Controller;
use crate::form::Form;
use crate::lookup::{LookupOutcome, SearchBackend, perform_lookup};
use crate::presenter::Presenter;

#[derive(Debug)]
enum Event {
    Input(String),
    Select(Match),
}

/// Sending side of a running autocomplete loop.
///
/// The loop stops once every handle has been dropped.
#[derive(Clone)]
pub struct AutocompleteHandle {
    tx: mpsc::UnboundedSender<Event>,
}

impl AutocompleteHandle {
    /// Report the input's new text. Returns `false` if the loop has stopped.
    pub fn input(&self, raw_text: impl Into<String>) -> bool {
        self.tx.send(Event::Input(raw_text.into())).is_ok()
    }

    /// Report that the user picked `selected` from the list
    pub fn select(&self, selected: Match) -> bool {
        self.tx.send(Event::Select(selected)).is_ok()
    }
}

/// Start the autocomplete loop on the current Tokio runtime.
///
/// The returned task yields the presenter and form back after shutdown.
/// On shutdown a pending lookup still fires when its quiet period ends,
/// and every lookup in flight is awaited and applied before the task
/// returns.
pub fn spawn<B, P, F>(
    config: AutocompleteConfig,
    backend: B,
    presenter: P,
    form: F,
) -> (AutocompleteHandle, JoinHandle<(P, F)>)
where
    B: SearchBackend,
    P: Presenter + Send + 'static,
    F: Form + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();
    let controller = Controller::new(config, presenter, form);
    let task = tokio::spawn(run(controller, Arc::new(backend), rx));
    (AutocompleteHandle { tx }, task)
}

async fn run<B, P, F>(
    mut controller: Controller<P, F>,
    backend: Arc<B>,
    mut rx: mpsc::UnboundedReceiver<Event>,
) -> (P, F)
where
    B: SearchBackend,
    P: Presenter,
    F: Form,
{
    let mut in_flight: JoinSet<LookupOutcome> = JoinSet::new();

    loop {
        let deadline = controller.deadline();

        tokio::select! {
            event = rx.recv() => match event {
                Some(Event::Input(text)) => controller.on_input(&text, Instant::now()),
                Some(Event::Select(selected)) => controller.on_select(&selected),
                None => break,
            },
            _ = wait_until(deadline) => {
                if let Some(query) = controller.take_due(Instant::now()) {
                    in_flight.spawn(perform_lookup(Arc::clone(&backend), query));
                }
            }
            Some(joined) = in_flight.join_next() => apply(&mut controller, joined),
        }
    }

    // The last keystroke still gets its lookup once its quiet period ends
    if let Some(deadline) = controller.deadline() {
        tokio::time::sleep_until(deadline).await;
        if let Some(query) = controller.take_due(deadline) {
            in_flight.spawn(perform_lookup(Arc::clone(&backend), query));
        }
    }

    while let Some(joined) = in_flight.join_next().await {
        apply(&mut controller, joined);
    }

    tracing::debug!("Autocomplete loop stopped");
    controller.into_parts()
}

fn apply<P: Presenter, F: Form>(
    controller: &mut Controller<P, F>,
    joined: Result<LookupOutcome, JoinError>,
) {
    match joined {
        Ok(outcome) => controller.on_result(&outcome.query, outcome.result),
        Err(e) => tracing::error!(error = %e, "Lookup task failed"),
    }
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
