/// Rate-limited request queue.
///
/// Callers enqueue request descriptors and get back a handle that resolves
/// with that request's individual outcome. A single background drain task
/// dispatches the queue in time-boxed FIFO batches through the transport
/// and terminates once the queue empties.
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use std::time::Duration;

use log::debug;
use tokio::sync::oneshot;

use crate::errors::WorldError;
use crate::request::ApiRequest;
use crate::transport::{ParsedResponse, Transport};

/// Batching configuration. The defaults drain every pending entry in one
/// batch on the next scheduling tick.
#[derive(Debug, Clone, Copy)]
pub struct QueueConfig {
    /// Wait between batches.
    pub interval: Duration,
    /// Maximum entries dispatched per batch.
    pub max_per_interval: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            interval: Duration::ZERO,
            max_per_interval: usize::MAX,
        }
    }
}

struct PendingRequest {
    request: ApiRequest,
    tx: oneshot::Sender<Result<ParsedResponse, WorldError>>,
}

struct QueueState {
    entries: VecDeque<PendingRequest>,
    draining: bool,
}

/// FIFO queue of outbound requests with a single owned drain task.
///
/// Cheap to clone; clones share the queue.
#[derive(Clone)]
pub struct RequestQueue {
    transport: Transport,
    config: QueueConfig,
    state: Arc<Mutex<QueueState>>,
}

impl RequestQueue {
    pub fn new(transport: Transport, config: QueueConfig) -> Self {
        Self {
            transport,
            config,
            state: Arc::new(Mutex::new(QueueState {
                entries: VecDeque::new(),
                draining: false,
            })),
        }
    }

    /// Append a request to the tail of the queue.
    ///
    /// Returns immediately; the caller suspends only when awaiting the
    /// returned handle. Requests are dispatched in strict enqueue order.
    pub fn enqueue(&self, request: ApiRequest) -> ResponseHandle {
        let (tx, rx) = oneshot::channel();

        let start_drain = {
            let mut state = self.state.lock().expect("queue mutex poisoned");
            state.entries.push_back(PendingRequest { request, tx });
            if state.draining {
                false
            } else {
                state.draining = true;
                true
            }
        };

        if start_drain {
            self.spawn_drain();
        }

        ResponseHandle { rx }
    }

    /// The drain task: wait the interval, pop up to `max_per_interval`
    /// entries from the head, dispatch each, repeat until the queue is
    /// empty. The `draining` flag is cleared in the same critical section
    /// that observes the empty queue, so exactly one task runs per queue.
    fn spawn_drain(&self) {
        let transport = self.transport.clone();
        let config = self.config;
        let state = Arc::clone(&self.state);

        tokio::spawn(async move {
            loop {
                tokio::time::sleep(config.interval).await;

                let batch: Vec<PendingRequest> = {
                    let mut state = state.lock().expect("queue mutex poisoned");
                    if state.entries.is_empty() {
                        state.draining = false;
                        debug!("queue.drain idle, terminating");
                        return;
                    }
                    let take = config.max_per_interval.min(state.entries.len());
                    state.entries.drain(..take).collect()
                };

                debug!("queue.drain batch_size={}", batch.len());

                for entry in batch {
                    // One entry's failure must not abort its siblings.
                    let outcome = transport.send(&entry.request).await;
                    // The caller may have dropped its handle; nothing to do.
                    let _ = entry.tx.send(outcome);
                }
            }
        });
    }
}

/// Pending outcome of an enqueued request.
pub struct ResponseHandle {
    rx: oneshot::Receiver<Result<ParsedResponse, WorldError>>,
}

impl Future for ResponseHandle {
    type Output = Result<ParsedResponse, WorldError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.rx).poll(cx) {
            Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
            Poll::Ready(Err(_)) => Poll::Ready(Err(WorldError::ChannelClosed)),
            Poll::Pending => Poll::Pending,
        }
    }
}
