//! Action emitter for binding callbacks in screen props.

use flume::Sender;
use tracing::trace;

use crate::Action;

/// Handle that queues [`Action`]s for the runtime.
///
/// Clone it into the callbacks of your props; when the host triggers a
/// callback (a click, a submitted form) the action is queued and processed on
/// the runtime's event loop.
///
/// # Example
///
/// ```rust
/// use safeflow::{Action, Emitter, Role};
///
/// fn on_public_click(emitter: &Emitter) -> Box<dyn Fn() + Send> {
///     let emitter = emitter.clone();
///     Box::new(move || emitter.emit(Action::RoleSelected(Some(Role::Public))))
/// }
/// ```
#[derive(Clone)]
pub struct Emitter(pub(crate) Sender<Action>);

impl Emitter {
    pub(crate) fn new(sender: Sender<Action>) -> Self {
        Self(sender)
    }

    /// Queue an action.
    ///
    /// Safe to call from any thread. Actions emitted after the runtime has
    /// stopped are dropped.
    pub fn emit(&self, action: Action) {
        if let Err(flume::SendError(action)) = self.0.send(action) {
            trace!(action = action.name(), "runtime stopped, dropping action");
        }
    }
}
