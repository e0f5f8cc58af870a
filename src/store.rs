//! Observable container for the dashboard state.

use tracing::{debug, trace};

use crate::{Alert, DashboardState, Modal, Role};

/// Called with the current state after every change.
pub type Listener = Box<dyn FnMut(&DashboardState) + Send>;

/// Token returned by [`Store::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Holds the [`DashboardState`] and notifies listeners whenever it changes.
///
/// Every mutator notifies synchronously, in subscription order. Listeners get
/// the whole state, so rendering from a listener always rebuilds the entire
/// screen.
///
/// ```rust
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
/// use safeflow::{Role, Store};
///
/// let mut store = Store::default();
/// let renders = Arc::new(AtomicUsize::new(0));
/// let counter = renders.clone();
/// store.subscribe(Box::new(move |_state: &safeflow::DashboardState| {
///     counter.fetch_add(1, Ordering::SeqCst);
/// }));
///
/// store.set_role(Some(Role::Public));
/// assert_eq!(renders.load(Ordering::SeqCst), 1);
/// ```
pub struct Store {
    state: DashboardState,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl Store {
    pub fn new(state: DashboardState) -> Self {
        Store {
            state,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn set_role(&mut self, role: Option<Role>) {
        debug!(?role, "setting role");
        self.commit(|state| state.with_role(role));
    }

    /// Prepend an alert so the newest is listed first.
    pub fn add_alert(&mut self, alert: Alert) {
        debug!(id = %alert.id, kind = alert.kind.label(), "adding alert");
        self.commit(|state| state.with_alert(alert));
    }

    /// Flip a gate between open and closed.
    ///
    /// Returns `false`, without notifying, when no gate has this id.
    pub fn toggle_gate_status(&mut self, gate_id: &str) -> bool {
        let Some(gate) = self.state.gate_mut(gate_id) else {
            debug!(gate_id, "toggle ignored, unknown gate");
            return false;
        };
        gate.toggle();
        debug!(gate_id, status = gate.status().label(), "gate toggled");
        self.notify();
        true
    }

    pub fn show_modal(&mut self, modal: Modal) {
        self.commit(|state| state.with_modal(Some(modal)));
    }

    pub fn dismiss_modal(&mut self) {
        self.commit(|state| state.with_modal(None));
    }

    /// Swap in a whole new state, as produced by an update function.
    pub fn replace(&mut self, state: DashboardState) {
        self.state = state;
        self.notify();
    }

    pub fn subscribe(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, listener));
        trace!(?id, listeners = self.listeners.len(), "listener subscribed");
        id
    }

    /// Returns whether the listener was still subscribed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        before != self.listeners.len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn notify(&mut self) {
        let state = &self.state;
        for (_, listener) in self.listeners.iter_mut() {
            listener(state);
        }
    }

    fn commit(&mut self, transition: impl FnOnce(DashboardState) -> DashboardState) {
        let current = core::mem::take(&mut self.state);
        self.state = transition(current);
        self.notify();
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(DashboardState::default())
    }
}
