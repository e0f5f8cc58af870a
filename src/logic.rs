//! Application logic trait defining the MVU contract.

use crate::{Action, DashboardState, Effect, Emitter};

/// Application logic trait defining the MVU contract.
///
/// Implementations provide three functions:
/// - [`init`](Self::init): prepare the initial state and startup effects
/// - [`update`](Self::update): reduce (Action, State) → (State, Effect)
/// - [`view`](Self::view): derive renderable props from the state
///
/// [`SafeFlowLogic`](crate::SafeFlowLogic) is the dashboard's implementation.
pub trait MvuLogic<Props> {
    /// Called once when the runtime starts, before the first render.
    fn init(&self, state: DashboardState) -> (DashboardState, Effect);

    /// Reduce an action to the next state and any deferred work.
    ///
    /// All state changes made through the runtime go through this function;
    /// the returned state replaces the store's state and triggers a render.
    fn update(&self, action: Action, state: &DashboardState) -> (DashboardState, Effect);

    /// Build props for the current state.
    ///
    /// The [`Emitter`] lets props carry callbacks that queue new actions.
    fn view(&self, state: &DashboardState, emitter: &Emitter) -> Props;
}
