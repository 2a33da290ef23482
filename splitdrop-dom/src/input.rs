//! Process-wide pointer input stream.
//!
//! The host feeds every pointer event it reads into an [`InputBus`]. Widgets
//! that need to observe input outside their own elements (dismissing a popup
//! when the user clicks elsewhere, for example) subscribe through the
//! [`PointerSource`] trait, so they can be driven by any other source in
//! tests or alternative hosts.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::event::{PointerEvent, PointerKind};

/// Callback invoked for each matching event.
pub type Listener = Arc<dyn Fn(&PointerEvent) + Send + Sync>;

/// Predicate deciding which events reach a listener.
pub type Filter = Arc<dyn Fn(&PointerEvent) -> bool + Send + Sync>;

/// Handle identifying one subscription on a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// A stream of pointer events that listeners can attach to.
pub trait PointerSource: Send + Sync {
    /// Register `listener` for every event accepted by `filter`.
    fn subscribe(&self, filter: Filter, listener: Listener) -> SubscriptionId;

    /// Remove a subscription. Returns false if it was not registered.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}

/// Filter accepting only events of one kind.
pub fn kind_filter(kind: PointerKind) -> Filter {
    Arc::new(move |event: &PointerEvent| event.kind() == kind)
}

struct Subscription {
    id: SubscriptionId,
    filter: Filter,
    listener: Listener,
}

/// In-process pointer event bus.
///
/// Cloning yields another handle to the same bus. Listeners run without the
/// bus lock held, so they may subscribe or unsubscribe (themselves included)
/// while an event is being dispatched. A subscription removed mid-dispatch
/// is not invoked for the rest of that dispatch.
#[derive(Clone, Default)]
pub struct InputBus {
    subscriptions: Arc<Mutex<Vec<Subscription>>>,
}

impl InputBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver an event to every matching listener, in subscription order.
    /// Returns how many listeners were invoked.
    pub fn dispatch(&self, event: &PointerEvent) -> usize {
        let snapshot: Vec<(SubscriptionId, Filter, Listener)> = match self.subscriptions.lock() {
            Ok(guard) => guard
                .iter()
                .map(|s| (s.id, s.filter.clone(), s.listener.clone()))
                .collect(),
            Err(_) => {
                log::warn!("InputBus::dispatch: subscription list poisoned, dropping event");
                return 0;
            }
        };

        let mut invoked = 0;
        for (id, filter, listener) in snapshot {
            if !self.is_subscribed(id) || !filter(event) {
                continue;
            }
            log::trace!("InputBus::dispatch {:?} -> {}", event.kind(), id);
            listener(event);
            invoked += 1;
        }
        invoked
    }

    /// Number of live subscriptions.
    pub fn subscription_count(&self) -> usize {
        self.subscriptions
            .lock()
            .map(|guard| guard.len())
            .unwrap_or(0)
    }

    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.subscriptions
            .lock()
            .map(|guard| guard.iter().any(|s| s.id == id))
            .unwrap_or(false)
    }
}

impl PointerSource for InputBus {
    fn subscribe(&self, filter: Filter, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId::new();
        if let Ok(mut guard) = self.subscriptions.lock() {
            guard.push(Subscription {
                id,
                filter,
                listener,
            });
            log::debug!("InputBus::subscribe {} (total {})", id, guard.len());
        }
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let Ok(mut guard) = self.subscriptions.lock() else {
            return false;
        };
        let before = guard.len();
        guard.retain(|s| s.id != id);
        let removed = guard.len() != before;
        if removed {
            log::debug!("InputBus::unsubscribe {} (total {})", id, guard.len());
        }
        removed
    }
}

impl fmt::Debug for InputBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputBus")
            .field("subscriptions", &self.subscription_count())
            .finish()
    }
}
