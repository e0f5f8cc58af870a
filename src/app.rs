//! The SafeFlow dashboard logic.

use portable_atomic_util::Arc;
use tracing::{debug, info, warn};

use crate::clock::display_time;
use crate::view::build_screen;
use crate::{
    Action, Alert, AlertKind, AlertStatus, Clock, Config, DashboardState, Effect, Emitter, Modal,
    MvuLogic, Role, Screen, SystemClock,
};

pub const EVACUATION_MESSAGE: &str =
    "EMERGENCY EVACUATION ORDER - Please proceed to nearest exits.";

/// Reduces dashboard [`Action`]s and builds [`Screen`] props.
///
/// The clock is only read by the broadcast effect, so tests can drive the
/// whole flow with a fixed time.
pub struct SafeFlowLogic<C = SystemClock> {
    config: Config,
    clock: Arc<C>,
}

impl SafeFlowLogic<SystemClock> {
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C> SafeFlowLogic<C>
where
    C: Clock + Send + Sync + 'static,
{
    pub fn with_clock(config: Config, clock: C) -> Self {
        SafeFlowLogic {
            config,
            clock: Arc::new(clock),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn broadcast_effect(&self) -> Effect {
        let clock = self.clock.clone();
        Effect::from_async(move |emitter: Emitter| async move {
            let now = clock.now();
            emitter.emit(Action::AlertRaised(Alert {
                id: format!("a-{}", now.timestamp_millis()),
                kind: AlertKind::Emergency,
                message: EVACUATION_MESSAGE.to_string(),
                time: display_time(&now),
                status: AlertStatus::Active,
                location: "ALL ZONES".to_string(),
            }));
        })
    }
}

impl<C> MvuLogic<Screen> for SafeFlowLogic<C>
where
    C: Clock + Send + Sync + 'static,
{
    fn init(&self, state: DashboardState) -> (DashboardState, Effect) {
        (state, Effect::none())
    }

    fn update(&self, action: Action, state: &DashboardState) -> (DashboardState, Effect) {
        let state = state.clone();
        match action {
            Action::AuthorityRequested => {
                (state.with_modal(Some(Modal::AccessPrompt)), Effect::none())
            }
            Action::AccessCodeSubmitted(code) => {
                if code == self.config.access_code {
                    info!("authority access granted");
                    (state.with_role(Some(Role::Authority)), Effect::none())
                } else {
                    warn!("authority access denied");
                    (state.with_modal(Some(Modal::AccessDenied)), Effect::none())
                }
            }
            Action::RoleSelected(role) => (state.with_role(role), Effect::none()),
            Action::GateToggled(id) => {
                if state.gate(&id).is_none() {
                    debug!(gate_id = %id, "toggle ignored, unknown gate");
                }
                (state.with_gate_toggled(&id), Effect::none())
            }
            Action::BroadcastRequested => {
                (state.with_modal(Some(Modal::ConfirmBroadcast)), Effect::none())
            }
            Action::BroadcastConfirmed => {
                info!("broadcasting emergency alert");
                (
                    state.with_modal(Some(Modal::BroadcastSent)),
                    self.broadcast_effect(),
                )
            }
            Action::AlertRaised(alert) => (state.with_alert(alert), Effect::none()),
            Action::SosRequested => (state.with_modal(Some(Modal::ConfirmSos)), Effect::none()),
            Action::SosConfirmed => {
                info!("sos confirmed by attendee");
                (state.with_modal(Some(Modal::SosSent)), Effect::none())
            }
            Action::ModalDismissed => (state.with_modal(None), Effect::none()),
        }
    }

    fn view(&self, state: &DashboardState, emitter: &Emitter) -> Screen {
        build_screen(state, &self.config, emitter)
    }
}
