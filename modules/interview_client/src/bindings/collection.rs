//! Observable paginated collections
//!
//! [`Collection`] keeps the current page of a resource list in sync with
//! the operations run through it: a refresh replaces the items, a create
//! prepends, an update replaces the item with the same id and a delete
//! removes it. The fetch and mutate futures come from the caller, so one
//! collection type serves every resource.

use super::state::{ResourceState, StateCell};
use crate::contract::{ApiError, HasId, Page, PageRequest};
use parking_lot::RwLock;
use std::future::Future;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// Items of the current page plus the envelope counters
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionData<T> {
    pub items: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
}

impl<T> Default for CollectionData<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_elements: 0,
            total_pages: 0,
        }
    }
}

pub struct Collection<T> {
    state: StateCell<CollectionData<T>>,
    page: RwLock<PageRequest>,
}

impl<T> Collection<T>
where
    T: HasId + Clone + Send + Sync + 'static,
{
    pub fn new(page: PageRequest) -> Self {
        Self {
            state: StateCell::new(CollectionData::default()),
            page: RwLock::new(page),
        }
    }

    pub fn page(&self) -> PageRequest {
        *self.page.read()
    }

    /// Change the page used by the next [`Collection::refresh`].
    pub fn set_page(&self, page: PageRequest) {
        *self.page.write() = page;
    }

    pub fn snapshot(&self) -> ResourceState<CollectionData<T>> {
        self.state.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<ResourceState<CollectionData<T>>> {
        self.state.subscribe()
    }

    pub fn updates(&self) -> WatchStream<ResourceState<CollectionData<T>>> {
        self.state.updates()
    }

    /// Load the current page. `fetch` receives the page request.
    pub async fn refresh<F, Fut>(&self, fetch: F) -> Result<Page<T>, ApiError>
    where
        F: FnOnce(PageRequest) -> Fut,
        Fut: Future<Output = Result<Page<T>, ApiError>>,
    {
        let page = self.page();
        self.state
            .track(fetch(page), |data, loaded| {
                data.items = loaded.content.clone();
                data.total_elements = loaded.total_elements;
                data.total_pages = loaded.total_pages;
            })
            .await
    }

    /// Await a create and prepend the new item.
    pub async fn insert<Fut>(&self, create: Fut) -> Result<T, ApiError>
    where
        Fut: Future<Output = Result<T, ApiError>>,
    {
        self.state
            .track(create, |data, item| {
                data.items.insert(0, item.clone());
                data.total_elements += 1;
            })
            .await
    }

    /// Await an update and swap in the returned item by id.
    pub async fn replace<Fut>(&self, update: Fut) -> Result<T, ApiError>
    where
        Fut: Future<Output = Result<T, ApiError>>,
    {
        self.state
            .track(update, |data, item| {
                let id = item.id();
                for slot in data.items.iter_mut().filter(|existing| existing.id() == id) {
                    *slot = item.clone();
                }
            })
            .await
    }

    /// Await a delete and drop the item with `id`.
    pub async fn remove<Fut>(&self, id: i64, delete: Fut) -> Result<(), ApiError>
    where
        Fut: Future<Output = Result<(), ApiError>>,
    {
        self.state
            .track(delete, |data, ()| {
                let before = data.items.len();
                data.items.retain(|existing| existing.id() != id);
                if data.items.len() < before {
                    data.total_elements = data.total_elements.saturating_sub(1);
                }
            })
            .await
    }
}

impl<T> Default for Collection<T>
where
    T: HasId + Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new(PageRequest::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collection")
            .field("page", &*self.page.read())
            .field("state", &self.state)
            .finish()
    }
}
