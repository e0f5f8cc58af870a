//! Declarative effects describing deferred work that produces actions.

use core::future::Future;
use core::pin::Pin;

use crate::{Action, Emitter};

pub(crate) type EffectFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Deferred work returned from [`MvuLogic::init`](crate::MvuLogic::init) and
/// [`MvuLogic::update`](crate::MvuLogic::update) alongside the new state.
///
/// The runtime hands the effect's future to its [`Spawner`](crate::Spawner);
/// any actions the future emits are processed like user input.
///
/// # Example
///
/// ```rust
/// use safeflow::{Action, Effect};
///
/// let effect = Effect::batch(vec![
///     Effect::just(Action::ModalDismissed),
///     Effect::just(Action::RoleSelected(None)),
/// ]);
///
/// let nothing = Effect::none();
/// ```
#[allow(clippy::type_complexity)]
pub struct Effect(Box<dyn FnOnce(Emitter) -> EffectFuture + Send + 'static>);

impl Effect {
    /// An effect with no work.
    pub fn none() -> Self {
        Self(Box::new(|_: Emitter| -> EffectFuture { Box::pin(async {}) }))
    }

    /// Queue a single follow-up action.
    pub fn just(action: Action) -> Self {
        Self(Box::new(move |emitter: Emitter| -> EffectFuture {
            Box::pin(async move {
                emitter.emit(action);
            })
        }))
    }

    /// Run an async task that emits actions as it completes.
    ///
    /// ```rust
    /// use safeflow::{Action, Effect};
    ///
    /// let effect = Effect::from_async(|emitter| async move {
    ///     emitter.emit(Action::ModalDismissed);
    /// });
    /// ```
    pub fn from_async<F, Fut>(task: F) -> Self
    where
        F: FnOnce(Emitter) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self(Box::new(move |emitter: Emitter| -> EffectFuture {
            Box::pin(task(emitter))
        }))
    }

    /// Run several effects in order.
    pub fn batch(effects: Vec<Effect>) -> Self {
        Self(Box::new(move |emitter: Emitter| -> EffectFuture {
            Box::pin(async move {
                for effect in effects {
                    effect.execute(emitter.clone()).await;
                }
            })
        }))
    }

    /// Turn the effect into the future the runtime spawns.
    pub fn execute(self, emitter: Emitter) -> Pin<Box<dyn Future<Output = ()> + Send>> {
        (self.0)(emitter)
    }
}

impl Default for Effect {
    fn default() -> Self {
        Self::none()
    }
}
