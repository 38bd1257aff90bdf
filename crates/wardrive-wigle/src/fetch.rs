//! Paginated, best-effort area fetch for `WigleClient`.

use wardrive_core::{BoundingBox, NetworkRecord, NetworkTypeFilter, RetryPolicy};

use crate::client::WigleClient;
use crate::error::{is_transient, WigleError};
use crate::types::WigleNetwork;

/// Pagination state for one `search_area` call.
struct FetchSession {
    accumulated: Vec<NetworkRecord>,
    page_offset: usize,
}

impl WigleClient {
    /// Collects up to `target_count` records inside `area`.
    ///
    /// Pages through the search endpoint at a fixed page size, keeping rows
    /// whose signal is at or above `min_signal_dbm`. The page offset
    /// advances by the page size on every successful call, whether or not
    /// any row survived the filter.
    ///
    /// The loop stops when:
    /// 1. the accumulator reaches `target_count` (the result is truncated
    ///    to exactly that many records),
    /// 2. a page comes back with zero raw rows (search space exhausted), or
    /// 3. `retry` gives up on a single page after consecutive transient
    ///    failures.
    ///
    /// Retry exhaustion is **not** an error: whatever accumulated so far is
    /// returned, possibly nothing at all. Callers must treat a short or
    /// empty result as "best effort", not as failure. A transient failure
    /// re-requests the same offset after the policy's fixed delay, and any
    /// success starts the next page with a fresh attempt budget.
    ///
    /// # Errors
    ///
    /// Only non-retryable conditions surface as errors: rejected
    /// credentials, an API-level refusal, or a response body that does not
    /// parse.
    pub async fn search_area(
        &self,
        area: BoundingBox,
        filter: NetworkTypeFilter,
        target_count: usize,
        min_signal_dbm: i32,
        retry: &RetryPolicy,
    ) -> Result<Vec<NetworkRecord>, WigleError> {
        let mut session = FetchSession {
            accumulated: Vec::new(),
            page_offset: 0,
        };
        if target_count == 0 {
            return Ok(session.accumulated);
        }

        loop {
            let fetched = retry
                .run(is_transient, || {
                    self.search_page(area, filter, session.page_offset)
                })
                .await;
            let page = match fetched {
                Ok(page) => page,
                Err(err) if is_transient(&err) => {
                    tracing::warn!(
                        error = %err,
                        accumulated = session.accumulated.len(),
                        offset = session.page_offset,
                        "page retries exhausted — returning partial results"
                    );
                    return Ok(session.accumulated);
                }
                Err(err) => return Err(err),
            };

            if page.results.is_empty() {
                tracing::debug!(
                    accumulated = session.accumulated.len(),
                    total = page.total_results,
                    "search space exhausted"
                );
                return Ok(session.accumulated);
            }

            session.page_offset += self.page_size;
            session.accumulated.extend(
                page.results
                    .into_iter()
                    .filter(|row| row.signal_dbm() >= min_signal_dbm)
                    .map(WigleNetwork::into_record),
            );
            tracing::debug!(
                accumulated = session.accumulated.len(),
                next_offset = session.page_offset,
                "page fetched"
            );

            if session.accumulated.len() >= target_count {
                session.accumulated.truncate(target_count);
                return Ok(session.accumulated);
            }
        }
    }
}
