//! Studio session — the single user's current book and busy flags.
//!
//! Only one generation and one export may be in flight at a time. A second
//! request is turned away while the flag is held; the flag is released when
//! the guard drops, on success and failure alike.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;

use crate::models::book::{Book, GeneratedBook};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Generation,
    Export,
}

#[derive(Debug, Default)]
pub struct Studio {
    current: RwLock<Option<GeneratedBook>>,
    generating: AtomicBool,
    exporting: AtomicBool,
}

/// Holds an activity's busy flag until dropped.
#[derive(Debug)]
pub struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

impl Studio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the busy flag for `activity`, or `None` if it is already taken.
    pub fn try_begin(&self, activity: Activity) -> Option<BusyGuard<'_>> {
        let flag = match activity {
            Activity::Generation => &self.generating,
            Activity::Export => &self.exporting,
        };
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard { flag })
    }

    pub fn is_busy(&self, activity: Activity) -> bool {
        match activity {
            Activity::Generation => self.generating.load(Ordering::Acquire),
            Activity::Export => self.exporting.load(Ordering::Acquire),
        }
    }

    pub async fn current(&self) -> Option<GeneratedBook> {
        self.current.read().await.clone()
    }

    /// Replaces the current book with a freshly generated one.
    pub async fn store(&self, book: Book) -> GeneratedBook {
        let generated = GeneratedBook::new(book);
        *self.current.write().await = Some(generated.clone());
        generated
    }
}
