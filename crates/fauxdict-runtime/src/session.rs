//! Event-driven browsing session.
//!
//! The session owns the [`Coordinator`] and a channel. Slow work (loading
//! the source, the delay before a batch lands) runs on short-lived threads
//! that post a [`SessionEvent`] back; the owner drains them with
//! [`Session::pump`] between input polls, so all state changes happen on
//! one thread. Dropping the session drops the receiver, and late events are
//! silently discarded.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use fauxdict_engine::{BatchTicket, Coordinator, PreferenceStore, SourceFetcher};
use fauxdict_types::{EntryId, Preference, SourceList};

use crate::config::Config;
use crate::fetch::fetcher_for;
use crate::preference::FilePreferenceStore;

#[derive(Debug)]
pub enum SessionEvent {
    SourceLoaded(SourceList),
    BatchReady(BatchTicket),
}

pub struct Session {
    coordinator: Coordinator,
    tx: Sender<SessionEvent>,
    rx: Receiver<SessionEvent>,
    batch_delay: Duration,
    loader_pending: bool,
}

impl Session {
    pub fn new(coordinator: Coordinator, batch_delay: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            coordinator,
            tx,
            rx,
            batch_delay,
            loader_pending: false,
        }
    }

    /// Session wired to the preference file in `data_dir` and the paging settings of `config`
    pub fn from_config(config: &Config, data_dir: &Path) -> Self {
        let store: Box<dyn PreferenceStore + Send> =
            Box::new(FilePreferenceStore::in_dir(data_dir));
        let coordinator =
            Coordinator::new(store).with_scroll_threshold(config.paging.scroll_threshold);
        Self::new(coordinator, config.batch_delay())
    }

    /// Load the configured source on a background thread.
    pub fn start_loading(&mut self, config: &Config, data_dir: &Path) {
        let location = config.source_location(data_dir);
        let fetcher = fetcher_for(&location, config.fetch_timeout());
        self.spawn_loader(fetcher, config.source.list_field.clone());
    }

    pub fn spawn_loader(&mut self, fetcher: Box<dyn SourceFetcher + Send>, list_field: String) {
        self.loader_pending = true;
        let tx = self.tx.clone();
        thread::spawn(move || {
            // The owner waits for this event, so it is sent even if the fetcher panics.
            let list = panic::catch_unwind(AssertUnwindSafe(|| {
                fauxdict_engine::load(fetcher.as_ref(), &list_field)
            }))
            .unwrap_or_else(|_| {
                tracing::warn!(
                    location = %fetcher.location(),
                    "source loader panicked; using fallback"
                );
                SourceList::fallback("source loader panicked")
            });
            let _ = tx.send(SessionEvent::SourceLoaded(list));
        });
    }

    /// Load the source on the calling thread and schedule the first batch.
    pub fn load_now(&mut self, fetcher: &dyn SourceFetcher, list_field: &str) {
        let list = fauxdict_engine::load(fetcher, list_field);
        self.apply(SessionEvent::SourceLoaded(list));
    }

    /// Returns true when a batch was scheduled.
    pub fn request_more(&mut self) -> bool {
        match self.coordinator.request_more() {
            Some(ticket) => {
                self.schedule(ticket);
                true
            }
            None => false,
        }
    }

    /// Visibility signal from the view: the end of the list is on screen.
    pub fn on_sentinel_visible(&mut self) -> bool {
        match self.coordinator.on_sentinel_visible() {
            Some(ticket) => {
                self.schedule(ticket);
                true
            }
            None => false,
        }
    }

    fn schedule(&self, ticket: BatchTicket) {
        let tx = self.tx.clone();
        let delay = self.batch_delay;
        thread::spawn(move || {
            if !delay.is_zero() {
                thread::sleep(delay);
            }
            let _ = tx.send(SessionEvent::BatchReady(ticket));
        });
    }

    fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::SourceLoaded(list) => {
                self.loader_pending = false;
                if let Some(ticket) = self.coordinator.attach_source(list) {
                    self.schedule(ticket);
                }
            }
            SessionEvent::BatchReady(ticket) => {
                let appended = self.coordinator.complete_batch(ticket);
                tracing::debug!(appended, "batch applied");
            }
        }
    }

    /// Apply every event that has already arrived. Returns how many were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.rx.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    /// Block until the source is loaded and no batch is in flight.
    pub fn wait_idle(&mut self) {
        while self.loader_pending || self.coordinator.is_loading() {
            match self.rx.recv() {
                Ok(event) => self.apply(event),
                Err(_) => break,
            }
        }
    }

    /// Load `pages` pages in total, waiting for each one. Stops early when exhausted.
    pub fn load_pages(&mut self, pages: usize) {
        self.wait_idle();
        let loaded = self.coordinator.pagination().page_count as usize;
        for _ in loaded..pages {
            if !self.request_more() {
                break;
            }
            self.wait_idle();
        }
    }

    pub fn is_source_pending(&self) -> bool {
        self.loader_pending
    }

    pub fn toggle_theme(&mut self) -> Preference {
        self.coordinator.toggle_theme()
    }

    pub fn pick_random_visible(&mut self) -> Option<EntryId> {
        self.coordinator.pick_random_visible(&mut rand::rng())
    }

    pub fn coordinator(&self) -> &Coordinator {
        &self.coordinator
    }

    pub fn coordinator_mut(&mut self) -> &mut Coordinator {
        &mut self.coordinator
    }
}
