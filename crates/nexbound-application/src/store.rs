//! Single owner of the application state.
//!
//! Every mutation runs inside [`AppStore::update`], which holds the write
//! lock for the whole closure and publishes the resulting snapshot before
//! releasing it. Observers therefore never see half of a compound change.

use tokio::sync::{RwLock, watch};

use crate::state::{AppState, StoreInner};

/// Result of an operation whose outcome arrives after an await.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion<T> {
    /// The result was written into the state.
    Applied(T),
    /// A newer request for the same slot, or a state change such as leaving
    /// the dashboard, made this result obsolete. Nothing was written.
    Stale,
}

impl<T> Completion<T> {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    pub fn applied(self) -> Option<T> {
        match self {
            Self::Applied(value) => Some(value),
            Self::Stale => None,
        }
    }
}

pub struct AppStore {
    inner: RwLock<StoreInner>,
    snapshots: watch::Sender<AppState>,
}

impl AppStore {
    pub fn new() -> Self {
        let (snapshots, _) = watch::channel(AppState::default());
        Self {
            inner: RwLock::new(StoreInner::default()),
            snapshots,
        }
    }

    /// Latest published state.
    pub fn snapshot(&self) -> AppState {
        self.snapshots.borrow().clone()
    }

    /// Receives a new snapshot after every change.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.snapshots.subscribe()
    }

    pub(crate) async fn update<R>(&self, f: impl FnOnce(&mut StoreInner) -> R) -> R {
        let mut inner = self.inner.write().await;
        let result = f(&mut inner);
        self.snapshots.send_if_modified(|published| {
            if *published == inner.state {
                false
            } else {
                *published = inner.state.clone();
                true
            }
        });
        result
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}
