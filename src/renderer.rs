//! Renderer abstraction for presenting props.

#[cfg(any(test, feature = "testing"))]
use portable_atomic_util::Arc;
#[cfg(any(test, feature = "testing"))]
use spin::Mutex;

/// Presents the props produced by [`MvuLogic::view`](crate::MvuLogic::view).
///
/// The runtime subscribes the renderer to the store, so [`render`](Self::render)
/// runs after every state change with freshly built props. Renderers should
/// discard whatever they showed before; there is no diffing.
///
/// [`HtmlRenderer`](crate::HtmlRenderer) is the markup implementation.
///
/// # Example
///
/// ```rust
/// use safeflow::{Renderer, Screen};
///
/// struct TitleLogger;
///
/// impl Renderer<Screen> for TitleLogger {
///     fn render(&mut self, screen: Screen) {
///         println!("showing {}", screen.page.template_name());
///     }
/// }
/// ```
pub trait Renderer<Props> {
    /// Render the given props, replacing the previous output.
    fn render(&mut self, props: Props);
}

/// Renderer that records every set of props for assertions.
///
/// Clones share the same recording, so keep one clone in the test and hand
/// the other to the runtime.
///
/// ```rust
/// use safeflow::{create_test_spawner, Config, PageView, SafeFlowLogic, Store, TestMvuRuntime, TestRenderer};
///
/// let renderer = TestRenderer::new();
/// let runtime = TestMvuRuntime::new(
///     Store::default(),
///     SafeFlowLogic::new(Config::default()),
///     renderer.clone(),
///     create_test_spawner(),
/// );
/// let _driver = runtime.run();
///
/// renderer.with_renders(|renders| {
///     assert_eq!(renders[0].page, PageView::Landing);
/// });
/// ```
#[cfg(any(test, feature = "testing"))]
pub struct TestRenderer<Props> {
    renders: Arc<Mutex<Vec<Props>>>,
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Clone for TestRenderer<Props> {
    fn clone(&self) -> Self {
        Self {
            renders: self.renders.clone(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Renderer<Props> for TestRenderer<Props> {
    fn render(&mut self, props: Props) {
        self.renders.lock().push(props);
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Default for TestRenderer<Props> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props> TestRenderer<Props> {
    pub fn new() -> Self {
        Self {
            renders: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of renders so far.
    pub fn count(&self) -> usize {
        self.renders.lock().len()
    }

    /// Inspect the recorded props, oldest first.
    ///
    /// Props callbacks may be invoked from inside the closure; the actions
    /// they emit are processed on the next
    /// [`process_events`](crate::TestMvuDriver::process_events).
    pub fn with_renders<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Vec<Props>) -> R,
    {
        let renders = self.renders.lock();
        f(&renders)
    }

    /// Inspect the most recent props.
    ///
    /// # Panics
    ///
    /// Panics if nothing has been rendered yet.
    pub fn with_latest<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Props) -> R,
    {
        self.with_renders(|renders| f(renders.last().expect("nothing rendered yet")))
    }
}
