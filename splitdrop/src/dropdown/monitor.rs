//! Outside-dismissal monitor.
//!
//! Owns the widget's subscription to the process-wide pointer stream. The
//! subscription exists only between `attach` and `detach`, and the owner
//! calls those exactly on the closed/open edges, so a closed widget never
//! listens and an open one listens once.

use std::sync::Arc;

use splitdrop_dom::{kind_filter, PointerEvent, PointerKind, PointerSource, SubscriptionId};

/// Subscription state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonitorState {
    #[default]
    Unsubscribed,
    Subscribed(SubscriptionId),
}

#[derive(Debug, Default)]
pub struct DismissMonitor {
    state: MonitorState,
}

impl DismissMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MonitorState {
        self.state
    }

    pub fn is_subscribed(&self) -> bool {
        matches!(self.state, MonitorState::Subscribed(_))
    }

    /// Start watching pointer-down events.
    ///
    /// `is_inside` decides whether an element ID belongs to the widget;
    /// `dismiss` runs for every press whose target does not (including
    /// presses over empty space). Returns false without subscribing again
    /// if already subscribed.
    pub fn attach<I, D>(&mut self, source: &dyn PointerSource, is_inside: I, dismiss: D) -> bool
    where
        I: Fn(&str) -> bool + Send + Sync + 'static,
        D: Fn() + Send + Sync + 'static,
    {
        if self.is_subscribed() {
            log::trace!("DismissMonitor::attach: already subscribed");
            return false;
        }

        let listener = Arc::new(move |event: &PointerEvent| {
            let inside = event.target().is_some_and(&is_inside);
            log::trace!(
                "DismissMonitor: pointer-down target={:?} inside={}",
                event.target(),
                inside
            );
            if !inside {
                dismiss();
            }
        });

        let id = source.subscribe(kind_filter(PointerKind::Down), listener);
        self.state = MonitorState::Subscribed(id);
        log::debug!("DismissMonitor::attach {}", id);
        true
    }

    /// Stop watching. Returns false if there was nothing to release.
    pub fn detach(&mut self, source: &dyn PointerSource) -> bool {
        let MonitorState::Subscribed(id) = self.state else {
            return false;
        };

        self.state = MonitorState::Unsubscribed;
        if !source.unsubscribe(id) {
            log::warn!("DismissMonitor::detach: {} was already gone from the source", id);
        }
        log::debug!("DismissMonitor::detach {}", id);
        true
    }
}
