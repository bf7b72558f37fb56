use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    LoadItems,
    SaveItem,
    DeleteItem,
    GenerateRecipes,
}

const KIND_COUNT: usize = 4;

impl RequestKind {
    fn index(self) -> usize {
        match self {
            RequestKind::LoadItems => 0,
            RequestKind::SaveItem => 1,
            RequestKind::DeleteItem => 2,
            RequestKind::GenerateRecipes => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::LoadItems => "load-items",
            RequestKind::SaveItem => "save-item",
            RequestKind::DeleteItem => "delete-item",
            RequestKind::GenerateRecipes => "generate-recipes",
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One flag per request kind. A second request of a kind that is still
/// outstanding is refused instead of queued.
#[derive(Debug, Default)]
pub struct InFlightTracker {
    flags: [AtomicBool; KIND_COUNT],
}

impl InFlightTracker {
    pub fn try_begin(self: &Arc<Self>, kind: RequestKind) -> Result<InFlightGuard, CoreError> {
        let flag = &self.flags[kind.index()];
        if flag
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::warn!(kind = %kind, "request refused, previous one still in flight");
            return Err(CoreError::RequestInFlight(kind));
        }

        Ok(InFlightGuard {
            tracker: Arc::clone(self),
            kind,
        })
    }
}

/// Clears the in-flight flag when dropped, whatever the outcome of the request.
#[derive(Debug)]
pub struct InFlightGuard {
    tracker: Arc<InFlightTracker>,
    kind: RequestKind,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.tracker.flags[self.kind.index()].store(false, Ordering::Release);
    }
}
