//! Cancellable duty location search.
//!
//! Every call supersedes the previous one: the older request is aborted and, should its result
//! still arrive, it is reported as [`SearchOutcome::Superseded`] instead of being applied.

use crate::error::{OrdersError, OrdersErrorExt};
use crate::ports::DutyLocationService;
use mymove_domain::config::SearchConfig;
use mymove_domain::location::DutyLocationRef;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::task::AbortHandle;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Results for the latest query.
    Fresh(Vec<DutyLocationRef>),
    /// A newer query was issued before this one finished.
    Superseded,
}

#[derive(Debug, Default)]
struct Pending {
    generation: u64,
    abort: Option<AbortHandle>,
}

#[derive(Debug)]
pub struct DutyLocationSearch<S> {
    service: Arc<S>,
    min_query_length: usize,
    pending: Mutex<Pending>,
}

impl<S> DutyLocationSearch<S>
where
    S: DutyLocationService + 'static,
{
    pub fn new(service: Arc<S>, config: &SearchConfig) -> Self {
        Self { service, min_query_length: config.min_query_length, pending: Mutex::new(Pending::default()) }
    }

    /// Runs `text` against the search service, aborting any query still in flight.
    ///
    /// Queries shorter than `min_query_length` return no results without a request.
    ///
    /// # Errors
    /// The service's error for the latest query, or [`OrdersError::Search`] if the request
    /// task panicked.
    pub async fn search(&self, text: &str) -> Result<SearchOutcome, OrdersError> {
        let query = text.trim().to_owned();
        let too_short = query.chars().count() < self.min_query_length;

        let (generation, handle) = {
            let mut pending = self.pending.lock();
            pending.generation += 1;
            if let Some(previous) = pending.abort.take() {
                previous.abort();
            }
            if too_short {
                return Ok(SearchOutcome::Fresh(Vec::new()));
            }

            let service = Arc::clone(&self.service);
            let handle = tokio::spawn(async move { service.query(&query).await });
            pending.abort = Some(handle.abort_handle());
            (pending.generation, handle)
        };

        let result = handle.await;

        {
            let mut pending = self.pending.lock();
            if pending.generation != generation {
                debug!(generation, latest = pending.generation, "Duty location search superseded");
                return Ok(SearchOutcome::Superseded);
            }
            pending.abort = None;
        }

        match result {
            Ok(Ok(locations)) => Ok(SearchOutcome::Fresh(locations)),
            Ok(Err(err)) => Err(err).context("Searching duty locations"),
            Err(join) if join.is_cancelled() => Ok(SearchOutcome::Superseded),
            Err(join) => Err(OrdersError::Search { message: join.to_string().into(), context: None }),
        }
    }

    /// Fetches a single duty location by id.
    ///
    /// # Errors
    /// Whatever the service reports, with lookup context attached.
    pub async fn lookup(&self, id: &str) -> Result<DutyLocationRef, OrdersError> {
        self.service.lookup(id).await.context(format!("Looking up duty location {id}"))
    }
}

impl<S> Drop for DutyLocationSearch<S> {
    fn drop(&mut self) {
        if let Some(abort) = self.pending.get_mut().abort.take() {
            abort.abort();
        }
    }
}
