//! User and system actions processed by the dashboard.

use crate::{Alert, Role};

/// Everything that can change the dashboard.
///
/// Actions are queued through an [`Emitter`](crate::Emitter) and reduced one at
/// a time by [`MvuLogic::update`](crate::MvuLogic::update).
#[derive(Clone, PartialEq)]
pub enum Action {
    /// The authority button on the landing page was pressed.
    AuthorityRequested,
    /// A code was entered in the access prompt.
    AccessCodeSubmitted(String),
    /// Pick a role directly, or `None` to log out.
    RoleSelected(Option<Role>),
    GateToggled(String),
    BroadcastRequested,
    BroadcastConfirmed,
    AlertRaised(Alert),
    SosRequested,
    SosConfirmed,
    ModalDismissed,
}

impl Action {
    /// Short name used in logs. Never includes the submitted access code.
    pub fn name(&self) -> &'static str {
        match self {
            Action::AuthorityRequested => "authority_requested",
            Action::AccessCodeSubmitted(_) => "access_code_submitted",
            Action::RoleSelected(_) => "role_selected",
            Action::GateToggled(_) => "gate_toggled",
            Action::BroadcastRequested => "broadcast_requested",
            Action::BroadcastConfirmed => "broadcast_confirmed",
            Action::AlertRaised(_) => "alert_raised",
            Action::SosRequested => "sos_requested",
            Action::SosConfirmed => "sos_confirmed",
            Action::ModalDismissed => "modal_dismissed",
        }
    }
}

impl core::fmt::Debug for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Action::AccessCodeSubmitted(_) => f.write_str("AccessCodeSubmitted(<redacted>)"),
            Action::RoleSelected(role) => f.debug_tuple("RoleSelected").field(role).finish(),
            Action::GateToggled(id) => f.debug_tuple("GateToggled").field(id).finish(),
            Action::AlertRaised(alert) => f.debug_tuple("AlertRaised").field(&alert.id).finish(),
            other => f.write_str(other.name()),
        }
    }
}
