// SPDX-License-Identifier: MPL-2.0
//! Incremental list state management
//!
//! Keeps a continuously growing, ordered list of items fetched page by page
//! with `(limit, offset)` cursors. The list never performs I/O itself: every
//! operation that needs a page returns a [`PageRequest`], the caller runs it
//! and hands the outcome back through [`IncrementalList::apply_page`].
//!
//! Guarantees:
//! - at most one page request is outstanding at any time (single-flight)
//! - pages are appended in offset order, existing items are never reordered
//! - an item key appears at most once
//! - the cursor offset only increases
//! - once a short page arrives the list is exhausted for good
//! - a failed fetch keeps loaded items and stops automatic fetching until
//!   [`IncrementalList::retry`] is called

use std::collections::HashSet;
use std::hash::Hash;

/// Items with a stable identity.
pub trait Keyed {
    type Key: Clone + Eq + Hash + std::fmt::Debug;

    fn key(&self) -> Self::Key;
}

/// A page the caller must fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Incremented on every [`IncrementalList::initialize`]; results from an
    /// older generation are discarded.
    pub generation: u64,
    pub offset: u32,
    pub limit: u32,
}

/// What happened when a page result was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// Items were appended (`appended` may be lower than the page length
    /// when duplicates were dropped).
    Appended { appended: usize, exhausted: bool },
    /// The fetch failed; the error is now exposed by [`IncrementalList::error`].
    Failed,
    /// The result did not belong to the in-flight request and was ignored.
    Stale,
}

/// Paged list with a single-flight cursor.
#[derive(Debug, Clone)]
pub struct IncrementalList<T: Keyed> {
    items: Vec<T>,
    keys: HashSet<T::Key>,
    limit: u32,
    offset: u32,
    exhausted: bool,
    initial_loaded: bool,
    in_flight: Option<PageRequest>,
    error: Option<String>,
    failed_request: Option<PageRequest>,
    generation: u64,
}

impl<T: Keyed> Default for IncrementalList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            keys: HashSet::new(),
            limit: 0,
            offset: 0,
            exhausted: false,
            initial_loaded: false,
            in_flight: None,
            error: None,
            failed_request: None,
            generation: 0,
        }
    }
}

impl<T: Keyed> IncrementalList<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards everything and returns the request for the first page.
    pub fn initialize(&mut self, limit: u32) -> PageRequest {
        let generation = self.generation + 1;
        *self = Self {
            limit: limit.max(1),
            generation,
            ..Self::default()
        };

        let request = self.request_at(0);
        tracing::debug!(limit = self.limit, generation, "initializing paged list");
        request
    }

    /// Returns the next page request, or `None` when fetching must not
    /// happen: a request is already in flight, the list is exhausted, the
    /// first page has not arrived yet, or the last fetch failed.
    pub fn on_approaching_end(&mut self) -> Option<PageRequest> {
        if let Some(in_flight) = self.in_flight {
            tracing::trace!(offset = in_flight.offset, "page already in flight");
            return None;
        }
        if self.exhausted || !self.initial_loaded || self.error.is_some() {
            return None;
        }

        Some(self.request_at(self.offset))
    }

    /// Clears a fetch error and re-issues the page that failed.
    pub fn retry(&mut self) -> Option<PageRequest> {
        if self.in_flight.is_some() || self.error.is_none() {
            return None;
        }
        let failed = self.failed_request.take()?;
        self.error = None;
        tracing::info!(offset = failed.offset, "retrying failed page");
        Some(self.request_at(failed.offset))
    }

    /// Applies the outcome of `request`.
    pub fn apply_page(
        &mut self,
        request: PageRequest,
        result: Result<Vec<T>, String>,
    ) -> PageOutcome {
        if self.in_flight != Some(request) {
            tracing::debug!(?request, "ignoring stale page result");
            return PageOutcome::Stale;
        }
        self.in_flight = None;

        match result {
            Ok(page) => {
                let received = page.len();
                let mut appended = 0;
                for item in page {
                    let key = item.key();
                    if self.keys.insert(key.clone()) {
                        self.items.push(item);
                        appended += 1;
                    } else {
                        tracing::debug!(?key, "dropping duplicate item");
                    }
                }

                self.offset = self
                    .offset
                    .saturating_add(u32::try_from(received).unwrap_or(u32::MAX));
                self.initial_loaded = true;
                if received < request.limit as usize {
                    self.exhausted = true;
                }

                tracing::debug!(
                    offset = request.offset,
                    received,
                    appended,
                    exhausted = self.exhausted,
                    "page applied"
                );
                PageOutcome::Appended {
                    appended,
                    exhausted: self.exhausted,
                }
            }
            Err(message) => {
                tracing::warn!(offset = request.offset, error = %message, "page fetch failed");
                self.error = Some(message);
                self.failed_request = Some(request);
                PageOutcome::Failed
            }
        }
    }

    /// Mutates a loaded item in place. Returns `false` if the key is unknown.
    pub fn update_item(&mut self, key: &T::Key, f: impl FnOnce(&mut T)) -> bool {
        match self.items.iter_mut().find(|item| &item.key() == key) {
            Some(item) => {
                f(item);
                true
            }
            None => false,
        }
    }

    fn request_at(&mut self, offset: u32) -> PageRequest {
        let request = PageRequest {
            generation: self.generation,
            offset,
            limit: self.limit,
        };
        self.in_flight = Some(request);
        request
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Whether the first page has been received.
    #[must_use]
    pub fn has_loaded_initial(&self) -> bool {
        self.initial_loaded
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the first page itself failed.
    #[must_use]
    pub fn initial_load_failed(&self) -> bool {
        self.error.is_some() && !self.initial_loaded
    }

    #[must_use]
    pub fn offset(&self) -> u32 {
        self.offset
    }

    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit
    }
}
