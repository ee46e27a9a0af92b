//! Cyclic pagination over the source list.
//!
//! The engine hands out a [`BatchTicket`] when a batch starts and only
//! appends entries when that same ticket is completed. The delay between the
//! two is owned by the caller; while a ticket is outstanding every further
//! request is dropped.

use fauxdict_types::{BATCH_SIZE, CYCLE_CAP, Entry, EntryId, PaginationState, SourceList};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Exhausted,
}

/// Claim on the next batch of ids, issued by [`Paginator::request_more`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchTicket {
    first_id: EntryId,
    len: usize,
}

impl BatchTicket {
    pub fn first_id(&self) -> EntryId {
        self.first_id
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[derive(Debug)]
pub struct Paginator {
    source: Option<SourceList>,
    entries: Vec<Entry>,
    page_count: u64,
    continuation: bool,
    in_flight: Option<BatchTicket>,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new()
    }
}

impl Paginator {
    pub fn new() -> Self {
        Self {
            source: None,
            entries: Vec::new(),
            page_count: 0,
            continuation: true,
            in_flight: None,
        }
    }

    /// Attach the loaded source list. The list is immutable once attached,
    /// so a second call is ignored.
    ///
    /// Returns the automatic first ticket when the log is still empty.
    pub fn attach_source(&mut self, source: SourceList) -> Option<BatchTicket> {
        if self.source.is_some() {
            tracing::debug!("source already attached; ignoring new list");
            return None;
        }

        self.source = Some(source);
        if self.entries.is_empty() {
            self.request_more()
        } else {
            None
        }
    }

    /// Start loading the next batch, or do nothing if loading, exhausted or
    /// still waiting for a source.
    pub fn request_more(&mut self) -> Option<BatchTicket> {
        if self.in_flight.is_some() {
            tracing::debug!("request dropped: batch already loading");
            return None;
        }
        if !self.continuation {
            tracing::debug!("request dropped: pagination exhausted");
            return None;
        }
        if self.source.is_none() {
            tracing::debug!("request dropped: no source list yet");
            return None;
        }

        let ticket = BatchTicket {
            first_id: EntryId::new(self.entries.len() as u64),
            len: BATCH_SIZE,
        };
        self.in_flight = Some(ticket);
        tracing::debug!(first_id = %ticket.first_id, "batch loading");
        Some(ticket)
    }

    /// Append the batch named by `ticket` and return the new entries.
    ///
    /// A ticket that is not the one in flight appends nothing.
    pub fn complete_batch(&mut self, ticket: BatchTicket) -> &[Entry] {
        if self.in_flight != Some(ticket) {
            tracing::debug!(first_id = %ticket.first_id, "ignoring stale batch ticket");
            return &[];
        }
        self.in_flight = None;

        let Some(source) = &self.source else {
            return &[];
        };

        let start = self.entries.len();
        let mut id = ticket.first_id;
        for _ in 0..ticket.len {
            self.entries.push(Entry::new(id, source.cyclic(id.get())));
            id = id.next();
        }
        self.page_count += 1;

        if self.entries.len() >= CYCLE_CAP * source.len() {
            self.continuation = false;
            tracing::debug!(entries = self.entries.len(), "pagination exhausted");
        }

        &self.entries[start..]
    }

    pub fn phase(&self) -> Phase {
        if self.in_flight.is_some() {
            Phase::Loading
        } else if !self.continuation {
            Phase::Exhausted
        } else {
            Phase::Idle
        }
    }

    pub fn state(&self) -> PaginationState {
        PaginationState {
            page_count: self.page_count,
            continuation: self.continuation,
            loading: self.in_flight.is_some(),
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn source(&self) -> Option<&SourceList> {
        self.source.as_ref()
    }
}
