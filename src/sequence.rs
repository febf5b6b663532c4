use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;
use tracing::debug;

/// Identifies one fetch for a view region. Later fetches get larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, PartialEq)]
pub enum Commit<T> {
    /// This response was the newest so far and is now the region's view.
    Fresh(T),
    /// A newer response had already been committed; this is that newer view.
    Superseded(T),
}

impl<T> Commit<T> {
    pub fn into_view(self) -> T {
        match self {
            Self::Fresh(view) | Self::Superseded(view) => view,
        }
    }

    pub fn is_fresh(&self) -> bool {
        matches!(self, Self::Fresh(_))
    }
}

struct Latest<T> {
    ticket: u64,
    view: Option<T>,
}

/// Orders responses for one region so a slow, older fetch can never replace
/// the view produced by a newer one.
pub struct Sequencer<T> {
    region: &'static str,
    issued: AtomicU64,
    latest: Mutex<Latest<T>>,
}

impl<T: Clone> Sequencer<T> {
    pub fn new(region: &'static str) -> Self {
        Self {
            region,
            issued: AtomicU64::new(0),
            latest: Mutex::new(Latest {
                ticket: 0,
                view: None,
            }),
        }
    }

    pub fn region(&self) -> &'static str {
        self.region
    }

    pub fn issue(&self) -> Ticket {
        Ticket(self.issued.fetch_add(1, Ordering::Relaxed) + 1)
    }

    pub async fn commit(&self, ticket: Ticket, view: T) -> Commit<T> {
        let mut latest = self.latest.lock().await;
        if ticket.0 > latest.ticket {
            latest.ticket = ticket.0;
            latest.view = Some(view.clone());
            return Commit::Fresh(view);
        }

        match latest.view.clone() {
            Some(newer) => {
                debug!(
                    region = self.region,
                    stale = ticket.0,
                    current = latest.ticket,
                    "discarding stale response"
                );
                Commit::Superseded(newer)
            }
            // Only reachable with a ticket from another sequencer.
            None => Commit::Fresh(view),
        }
    }

    pub async fn latest(&self) -> Option<T> {
        self.latest.lock().await.view.clone()
    }
}

/// One [`Sequencer`] per request variant of a region, so responses are only
/// ordered against requests that asked for the same thing.
pub struct KeyedSequencer<K, T> {
    region: &'static str,
    by_key: Mutex<HashMap<K, Arc<Sequencer<T>>>>,
}

impl<K: Eq + Hash, T: Clone> KeyedSequencer<K, T> {
    pub fn new(region: &'static str) -> Self {
        Self {
            region,
            by_key: Mutex::new(HashMap::new()),
        }
    }

    pub async fn for_key(&self, key: K) -> Arc<Sequencer<T>> {
        let mut by_key = self.by_key.lock().await;
        let region = self.region;
        Arc::clone(
            by_key
                .entry(key)
                .or_insert_with(|| Arc::new(Sequencer::new(region))),
        )
    }
}
