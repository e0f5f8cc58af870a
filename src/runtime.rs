//! The MVU runtime that orchestrates the dashboard's event loop.

use core::future::Future;
use core::marker::PhantomData;
use core::pin::Pin;

use flume::Receiver;
use portable_atomic_util::Arc;
use tracing::{debug, trace};

use crate::{Action, DashboardState, Effect, Emitter, ListenerId, MvuLogic, Renderer, Store};

/// Executes effect futures on the host's async runtime.
///
/// Function pointers and closures implement this trait through the blanket
/// implementation.
pub trait Spawner {
    fn spawn(&self, future: Pin<Box<dyn Future<Output = ()> + Send>>);
}

impl<F> Spawner for F
where
    F: Fn(Pin<Box<dyn Future<Output = ()> + Send>>),
{
    fn spawn(&self, future: Pin<Box<dyn Future<Output = ()> + Send>>) {
        self(future)
    }
}

/// The MVU runtime.
///
/// It:
/// 1. Prepares the initial state and effect via [`MvuLogic::init`]
/// 2. Subscribes the [`Renderer`] to the [`Store`], so every state change
///    rebuilds props with [`MvuLogic::view`] and renders them
/// 3. Reduces queued [`Action`]s with [`MvuLogic::update`] and commits the
///    result to the store
/// 4. Hands returned [`Effect`]s to the [`Spawner`]
///
/// Actions may be emitted from any thread but are processed one at a time on
/// the task that awaits [`MvuRuntime::run`].
///
/// For tests with manual control, see [`TestMvuRuntime`].
pub struct MvuRuntime<Props, Logic, Render, Spawn>
where
    Logic: MvuLogic<Props>,
    Render: Renderer<Props>,
    Spawn: Spawner,
{
    logic: Arc<Logic>,
    store: Store,
    renderer: Option<Render>,
    render_listener: Option<ListenerId>,
    action_receiver: Receiver<Action>,
    emitter: Emitter,
    spawner: Spawn,
    _props: PhantomData<fn() -> Props>,
}

impl<Props, Logic, Render, Spawn> MvuRuntime<Props, Logic, Render, Spawn>
where
    Props: 'static,
    Logic: MvuLogic<Props> + Send + Sync + 'static,
    Render: Renderer<Props> + Send + 'static,
    Spawn: Spawner,
{
    /// Create a runtime. Nothing renders until [`run`](Self::run) is awaited.
    ///
    /// Listeners already subscribed to `store` keep receiving every change.
    pub fn new(store: Store, logic: Logic, renderer: Render, spawner: Spawn) -> Self {
        let (action_sender, action_receiver) = flume::unbounded();

        MvuRuntime {
            logic: Arc::new(logic),
            store,
            renderer: Some(renderer),
            render_listener: None,
            action_receiver,
            emitter: Emitter::new(action_sender),
            spawner,
            _props: PhantomData,
        }
    }

    /// An emitter feeding this runtime, for hosts that inject actions directly.
    pub fn emitter(&self) -> Emitter {
        self.emitter.clone()
    }

    pub fn state(&self) -> &DashboardState {
        self.store.state()
    }

    /// Render the initial screen, then process actions for as long as the
    /// host keeps awaiting this future.
    ///
    /// The runtime holds an emitter of its own, so the loop does not end on
    /// its own; hosts stop it by dropping the future.
    pub async fn run(&mut self) {
        self.start();

        while let Ok(action) = self.action_receiver.recv_async().await {
            self.step(action);
        }
        debug!("action channel closed, runtime stopping");
    }

    fn start(&mut self) {
        let initial = self.store.state().clone();
        let (state, effect) = self.logic.init(initial);

        if let Some(mut renderer) = self.renderer.take() {
            let logic = self.logic.clone();
            let emitter = self.emitter.clone();
            let id = self.store.subscribe(Box::new(move |state: &DashboardState| {
                renderer.render(logic.view(state, &emitter));
            }));
            self.render_listener = Some(id);
        }

        self.store.replace(state);
        self.spawn(effect);
    }

    fn step(&mut self, action: Action) {
        trace!(action = action.name(), "processing action");

        let (state, effect) = self.logic.update(action, self.store.state());
        self.store.replace(state);
        self.spawn(effect);
    }

    fn spawn(&self, effect: Effect) {
        let future = effect.execute(self.emitter.clone());
        self.spawner.spawn(future);
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test spawner function that executes futures synchronously.
pub fn test_spawner_fn(fut: Pin<Box<dyn Future<Output = ()> + Send>>) {
    futures::executor::block_on(fut);
}

#[cfg(any(test, feature = "testing"))]
/// Creates a spawner that blocks on each effect immediately.
///
/// Actions emitted by an effect are queued before `spawn` returns, so a
/// following [`TestMvuDriver::process_events`] sees them deterministically.
pub fn create_test_spawner() -> fn(Pin<Box<dyn Future<Output = ()> + Send>>) {
    test_spawner_fn
}

#[cfg(any(test, feature = "testing"))]
/// Manual driver returned by [`TestMvuRuntime::run`].
pub struct TestMvuDriver<Props, Logic, Render, Spawn>
where
    Logic: MvuLogic<Props>,
    Render: Renderer<Props>,
    Spawn: Spawner,
{
    runtime: MvuRuntime<Props, Logic, Render, Spawn>,
}

#[cfg(any(test, feature = "testing"))]
impl<Props, Logic, Render, Spawn> TestMvuDriver<Props, Logic, Render, Spawn>
where
    Props: 'static,
    Logic: MvuLogic<Props> + Send + Sync + 'static,
    Render: Renderer<Props> + Send + 'static,
    Spawn: Spawner,
{
    /// Process queued actions until the queue is empty, including actions
    /// queued by effects along the way.
    pub fn process_events(&mut self) {
        while let Ok(action) = self.runtime.action_receiver.try_recv() {
            self.runtime.step(action);
        }
    }

    /// Queue an action as if a bound element had fired it.
    pub fn emit(&self, action: Action) {
        self.runtime.emitter.emit(action);
    }

    pub fn state(&self) -> &DashboardState {
        self.runtime.state()
    }

    /// The store, for exercising its operations directly.
    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.runtime.store
    }
}

#[cfg(any(test, feature = "testing"))]
/// Runtime for tests with manual action processing.
///
/// Unlike [`MvuRuntime`], nothing is processed until the test calls
/// [`process_events`](TestMvuDriver::process_events) on the returned driver.
///
/// ```rust
/// use safeflow::{create_test_spawner, Config, SafeFlowLogic, Store, TestMvuRuntime, TestRenderer};
///
/// let renderer = TestRenderer::new();
/// let runtime = TestMvuRuntime::new(
///     Store::default(),
///     SafeFlowLogic::new(Config::default()),
///     renderer.clone(),
///     create_test_spawner(),
/// );
/// let mut driver = runtime.run();
///
/// renderer.with_latest(|screen| screen.click("btn-public"));
/// driver.process_events();
///
/// assert_eq!(renderer.count(), 2);
/// ```
pub struct TestMvuRuntime<Props, Logic, Render, Spawn>
where
    Logic: MvuLogic<Props>,
    Render: Renderer<Props>,
    Spawn: Spawner,
{
    runtime: MvuRuntime<Props, Logic, Render, Spawn>,
}

#[cfg(any(test, feature = "testing"))]
impl<Props, Logic, Render, Spawn> TestMvuRuntime<Props, Logic, Render, Spawn>
where
    Props: 'static,
    Logic: MvuLogic<Props> + Send + Sync + 'static,
    Render: Renderer<Props> + Send + 'static,
    Spawn: Spawner,
{
    pub fn new(store: Store, logic: Logic, renderer: Render, spawner: Spawn) -> Self {
        TestMvuRuntime {
            runtime: MvuRuntime::new(store, logic, renderer, spawner),
        }
    }

    /// Render the initial screen, run the init effect, and hand back a driver.
    pub fn run(mut self) -> TestMvuDriver<Props, Logic, Render, Spawn> {
        self.runtime.start();
        TestMvuDriver {
            runtime: self.runtime,
        }
    }
}
