//! SafeFlow: an event-venue safety dashboard mockup built on a small
//! Model-View-Update (MVU) runtime.
//!
//! The dashboard shows one of three screens, chosen by the current [`Role`]:
//! a landing page with role selection, the authority command dashboard, and
//! the attendee portal. All data comes from an in-memory mock [`Dataset`].
//! The only live behavior is local state mutation (toggling gates, raising a
//! broadcast alert) followed by a full re-render.
//!
//! The pieces:
//! - [`Store`] holds the [`DashboardState`] and notifies listeners on change
//! - [`SafeFlowLogic`] reduces [`Action`]s and builds [`Screen`] props
//! - [`HtmlRenderer`] turns screens into markup and routes clicks back
//! - [`MvuRuntime`] wires them into a loop
//!
//! ## Example
//!
//! ```rust
//! use safeflow::{create_test_spawner, Config, HtmlRenderer, SafeFlowLogic, Store, TestMvuRuntime};
//!
//! let config = Config::default();
//! let html = HtmlRenderer::new().unwrap();
//! let runtime = TestMvuRuntime::new(
//!     Store::new(config.initial_state()),
//!     SafeFlowLogic::new(config),
//!     html.clone(),
//!     create_test_spawner(),
//! );
//! let mut driver = runtime.run();
//! assert!(html.html().contains("Authority Login"));
//!
//! html.click("btn-public").unwrap();
//! driver.process_events();
//! assert!(html.html().contains("Attendee Portal"));
//! ```
//!
//! Outside tests, await [`MvuRuntime::run`] on the host's executor with a
//! [`Spawner`] that spawns effect futures on the same executor.

mod action;
mod app;
mod clock;
mod config;
mod effect;
mod emitter;
mod error;
mod html;
mod logic;
mod modal;
mod renderer;
mod runtime;
mod state;
mod store;
pub mod view;

pub use action::Action;
pub use app::{SafeFlowLogic, EVACUATION_MESSAGE};
pub use clock::{display_time, Clock, SystemClock};
pub use config::{Config, DEFAULT_ACCESS_CODE};
pub use effect::Effect;
pub use emitter::Emitter;
pub use error::{Error, Result};
pub use html::HtmlRenderer;
pub use logic::MvuLogic;
pub use modal::{Modal, ModalKind, ModalTheme};
pub use renderer::Renderer;
pub use runtime::{MvuRuntime, Spawner};
pub use state::{
    Alert, AlertKind, AlertStatus, CrowdLevel, DashboardState, Dataset, DensityLevel,
    EventStatus, Gate, GateStatus, Role, VenueEvent, Zone,
};
pub use store::{Listener, ListenerId, Store};
pub use view::{PageView, Screen};

// Test utilities (only available with 'testing' feature or during tests)
#[cfg(any(test, feature = "testing"))]
pub use renderer::TestRenderer;
#[cfg(any(test, feature = "testing"))]
pub use runtime::{create_test_spawner, TestMvuDriver, TestMvuRuntime};
