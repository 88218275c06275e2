/// Paginated aggregation.
///
/// Listing endpoints return bounded limit/offset pages; [`fetch_all`]
/// walks them sequentially through the request queue and concatenates the
/// items into one complete result set.
use log::debug;
use serde::de::DeserializeOwned;

use crate::errors::WorldError;
use crate::queue::RequestQueue;
use crate::request::ApiRequest;
use crate::transport::ParsedResponse;

/// One limit/offset slice of a larger result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: u32,
    pub offset: u64,
}

impl PageWindow {
    pub fn new(limit: u32, offset: u64) -> Self {
        Self { limit, offset }
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            limit: 100,
            offset: 0,
        }
    }
}

/// One decoded page of a paginated listing.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Server-declared size of the whole result set.
    pub total: u64,
    pub limit: u32,
    pub offset: u64,
}

/// Decode one paginated response.
///
/// The wire shape is an object with a `data` items array and a `metadata`
/// object carrying `total`. Each absent piece maps to its own error kind
/// so callers can tell which part of the contract the server broke.
pub fn parse_page<T: DeserializeOwned>(
    response: &ParsedResponse,
    window: PageWindow,
) -> Result<Page<T>, WorldError> {
    let body = response.body.as_ref().ok_or(WorldError::MissingPayload)?;

    let data = body.get("data").ok_or(WorldError::MissingData)?;
    let items: Vec<T> = serde_json::from_value(data.clone())?;

    let metadata = body.get("metadata").ok_or(WorldError::MissingMetadata)?;
    let total = metadata
        .get("total")
        .and_then(serde_json::Value::as_u64)
        .ok_or(WorldError::MissingTotal)?;

    Ok(Page {
        items,
        total,
        limit: window.limit,
        offset: window.offset,
    })
}

/// Fetch every page of a listing and concatenate the items.
///
/// `prototype` is the request without a page window; each iteration clones
/// it and applies the next `limit`/`offset`. Pages are requested strictly
/// sequentially — page N+1 is never issued before page N resolves. Any
/// page failure aborts the aggregation and discards partial results;
/// failures past the first page carry the offset they occurred at.
pub async fn fetch_all<T: DeserializeOwned>(
    queue: &RequestQueue,
    prototype: ApiRequest,
    window: PageWindow,
) -> Result<Vec<T>, WorldError> {
    let mut results: Vec<T> = Vec::new();
    let mut offset = window.offset;
    let mut total;

    loop {
        let page_window = PageWindow::new(window.limit, offset);
        let request = prototype.clone().page(window.limit, offset);

        let outcome = match queue.enqueue(request).await {
            Ok(response) => parse_page::<T>(&response, page_window),
            Err(err) => Err(err),
        };

        let page = match outcome {
            Ok(page) => page,
            Err(err) if offset > window.offset => {
                return Err(WorldError::AggregationAborted {
                    offset,
                    source: Box::new(err),
                });
            }
            Err(err) => return Err(err),
        };

        total = page.total;
        debug!(
            "pagination.fetch_all offset={} received={} total={}",
            offset,
            page.items.len(),
            total
        );
        results.extend(page.items);

        if offset + u64::from(window.limit) < total {
            offset += u64::from(window.limit);
        } else {
            break;
        }
    }

    // The declared total and the delivered items must agree; a short or
    // long result set is surfaced, never silently returned.
    let expected = total.saturating_sub(window.offset);
    if results.len() as u64 != expected {
        return Err(WorldError::TotalMismatch {
            expected,
            actual: results.len() as u64,
        });
    }

    Ok(results)
}
