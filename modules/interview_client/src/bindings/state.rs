//! Observable state cells
//!
//! A [`StateCell`] holds `data` plus the `loading` / `error` slots UI code
//! renders, and publishes every change over a `tokio::sync::watch` channel.
//! Hosts either poll [`StateCell::snapshot`] or subscribe.

use crate::contract::ApiError;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// Value published to observers
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<T> {
    pub data: T,
    /// True while at least one tracked operation is in flight
    pub loading: bool,
    /// Message of the last failed operation, cleared when a new one starts
    pub error: Option<String>,
}

impl<T> ResourceState<T> {
    fn idle(data: T) -> Self {
        Self {
            data,
            loading: false,
            error: None,
        }
    }
}

/// Observable holder for one piece of client-side state
pub struct StateCell<T> {
    tx: watch::Sender<ResourceState<T>>,
    in_flight: AtomicUsize,
}

impl<T> StateCell<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(ResourceState::idle(initial));
        Self {
            tx,
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Current state, cloned.
    pub fn snapshot(&self) -> ResourceState<T> {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ResourceState<T>> {
        self.tx.subscribe()
    }

    /// Stream of states, starting with the current one.
    pub fn updates(&self) -> WatchStream<ResourceState<T>> {
        WatchStream::new(self.tx.subscribe())
    }

    /// Modify `data` and notify observers.
    pub fn update(&self, modify: impl FnOnce(&mut T)) {
        self.tx.send_modify(|state| modify(&mut state.data));
    }

    /// Replace `data` with `value` and clear the error slot.
    pub fn reset(&self, value: T) {
        self.tx.send_modify(|state| {
            state.data = value;
            state.error = None;
        });
    }

    /// Run `operation`, keeping `loading` and `error` current. On success
    /// `apply` folds the result into `data`; on failure the message lands in
    /// `error` and the error is still returned to the caller.
    pub async fn track<R, Fut>(
        &self,
        operation: Fut,
        apply: impl FnOnce(&mut T, &R),
    ) -> Result<R, ApiError>
    where
        Fut: Future<Output = Result<R, ApiError>>,
    {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        self.tx.send_modify(|state| {
            state.loading = true;
            state.error = None;
        });

        let result = operation.await;

        let remaining = self.in_flight.fetch_sub(1, Ordering::SeqCst) - 1;
        self.tx.send_modify(|state| {
            state.loading = remaining > 0;
            match &result {
                Ok(value) => apply(&mut state.data, value),
                Err(err) => state.error = Some(err.message.clone()),
            }
        });

        result
    }
}

impl<T> std::fmt::Debug for StateCell<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCell")
            .field("state", &*self.tx.borrow())
            .finish()
    }
}
