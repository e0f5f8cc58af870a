//! Dialog overlays shown on top of the current page.

use serde::{Deserialize, Serialize};

/// Which dialog is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modal {
    /// Asks for the authority access code.
    AccessPrompt,
    AccessDenied,
    ConfirmBroadcast,
    BroadcastSent,
    ConfirmSos,
    SosSent,
}

/// How a dialog is answered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalKind {
    /// A single OK button.
    Info,
    /// Cancel and Confirm.
    Confirm,
    /// A password field with Cancel and Confirm.
    Prompt,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalTheme {
    Light,
    Dark,
}

impl Modal {
    pub fn title(self) -> &'static str {
        match self {
            Modal::AccessPrompt => "Authority Access",
            Modal::AccessDenied => "Access Denied",
            Modal::ConfirmBroadcast => "CONFIRM EMERGENCY BROADCAST",
            Modal::BroadcastSent => "Alert Broadcasted",
            Modal::ConfirmSos => "TRIGGER SOS ALERT?",
            Modal::SosSent => "SOS Signal Sent",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Modal::AccessPrompt => "Please enter the secure access code to continue.",
            Modal::AccessDenied => "The code you entered is incorrect.",
            Modal::ConfirmBroadcast => {
                "Are you sure you want to broadcast an emergency alert to ALL attendees and staff? This action cannot be undone."
            }
            Modal::BroadcastSent => "The emergency alert has been sent to all active devices.",
            Modal::ConfirmSos => {
                "Are you sure you want to trigger an SOS? This will share your precise location with emergency response teams."
            }
            Modal::SosSent => {
                "Help is on the way. Please stay where you are if it is safe to do so."
            }
        }
    }

    pub fn kind(self) -> ModalKind {
        match self {
            Modal::AccessPrompt => ModalKind::Prompt,
            Modal::ConfirmBroadcast | Modal::ConfirmSos => ModalKind::Confirm,
            Modal::AccessDenied | Modal::BroadcastSent | Modal::SosSent => ModalKind::Info,
        }
    }

    /// Dialogs raised from the attendee portal keep the light theme.
    pub fn theme(self) -> ModalTheme {
        match self {
            Modal::ConfirmSos | Modal::SosSent => ModalTheme::Light,
            _ => ModalTheme::Dark,
        }
    }
}
