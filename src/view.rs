//! Screen props: what each page shows and which elements react to input.
//!
//! A [`Screen`] is rebuilt from scratch for every state change. Its
//! serializable half ([`PageView`], [`ModalView`]) feeds the HTML templates;
//! its [`Binding`]s map element ids to callbacks that emit [`Action`]s.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::{
    Action, AlertKind, Config, CrowdLevel, DashboardState, Emitter, Gate, GateStatus, Modal,
    ModalKind, ModalTheme, Role, Zone,
};

pub type Callback = Box<dyn Fn() + Send>;
pub type InputCallback = Box<dyn Fn(String) + Send>;

pub enum Handler {
    Click(Callback),
    /// Receives the value of the dialog's input field.
    Submit(InputCallback),
}

pub struct Binding {
    pub element_id: String,
    pub handler: Handler,
}

/// Props for one full render.
pub struct Screen {
    pub page: PageView,
    pub modal: Option<ModalView>,
    pub bindings: Vec<Binding>,
}

impl Screen {
    /// Fire the handler bound to `element_id`. Clicking a submit binding
    /// submits an empty value. Returns whether anything was bound.
    pub fn click(&self, element_id: &str) -> bool {
        match self.handler(element_id) {
            Some(Handler::Click(callback)) => callback(),
            Some(Handler::Submit(callback)) => callback(String::new()),
            None => return false,
        }
        true
    }

    /// Submit `value` through the binding on `element_id`.
    pub fn submit(&self, element_id: &str, value: &str) -> bool {
        match self.handler(element_id) {
            Some(Handler::Submit(callback)) => callback(value.to_string()),
            Some(Handler::Click(callback)) => callback(),
            None => return false,
        }
        true
    }

    pub fn is_bound(&self, element_id: &str) -> bool {
        self.handler(element_id).is_some()
    }

    fn handler(&self, element_id: &str) -> Option<&Handler> {
        self.bindings
            .iter()
            .find(|binding| binding.element_id == element_id)
            .map(|binding| &binding.handler)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageView {
    Landing,
    Authority(AuthorityView),
    Public(PublicView),
}

impl PageView {
    pub fn template_name(&self) -> &'static str {
        match self {
            PageView::Landing => "landing.html",
            PageView::Authority(_) => "authority.html",
            PageView::Public(_) => "public.html",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ModalView {
    pub title: &'static str,
    pub message: &'static str,
    pub kind: ModalKind,
    pub theme: ModalTheme,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AuthorityView {
    pub event_name: String,
    pub stats: Vec<StatCard>,
    pub gates: Vec<GateCard>,
    pub alerts: Vec<AlertCard>,
    pub alert_total: usize,
    pub zones: Vec<ZoneBar>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    pub icon: &'static str,
    pub color: &'static str,
    pub trend: &'static str,
    pub trend_class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GateCard {
    pub element_id: String,
    pub name: String,
    pub status: &'static str,
    pub count: u32,
    pub crowd_level: &'static str,
    pub border_class: &'static str,
    pub badge_class: &'static str,
    pub level_class: &'static str,
    pub bar_class: &'static str,
    pub fill_percent: String,
    pub closed: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AlertCard {
    pub kind: &'static str,
    pub message: String,
    pub time: String,
    pub location: String,
    pub border_class: &'static str,
    pub icon_class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ZoneBar {
    pub name: String,
    pub density: u8,
    pub status: &'static str,
    pub staff: u32,
    pub value_class: &'static str,
    pub bar_class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PublicView {
    /// Message of the newest active emergency alert.
    pub emergency: Option<String>,
    pub event_name: String,
    pub event_location: String,
    pub map_shapes: Vec<MapShape>,
    pub hotspots: Vec<Hotspot>,
    pub your_zone: &'static str,
    pub facilities: Vec<Facility>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapShape {
    pub color: &'static str,
    pub rounded: &'static str,
    pub top: String,
    pub left: String,
    pub size: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Hotspot {
    pub color: &'static str,
    pub top: String,
    pub left: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Facility {
    pub name: &'static str,
    pub status: &'static str,
    pub detail: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub bg: &'static str,
}

const FACILITIES: [Facility; 4] = [
    Facility {
        name: "Toilets",
        status: "High Wait",
        detail: "15 min",
        icon: "fa-restroom",
        color: "text-amber-500",
        bg: "bg-amber-50",
    },
    Facility {
        name: "Parking",
        status: "Available",
        detail: "Slot A",
        icon: "fa-square-parking",
        color: "text-green-500",
        bg: "bg-green-50",
    },
    Facility {
        name: "Med Tent",
        status: "Open",
        detail: "Zone 1",
        icon: "fa-user-nurse",
        color: "text-red-500",
        bg: "bg-red-50",
    },
    Facility {
        name: "Exits",
        status: "Clear",
        detail: "Gate A, B",
        icon: "fa-door-open",
        color: "text-blue-500",
        bg: "bg-blue-50",
    },
];

pub(crate) fn build_screen(state: &DashboardState, config: &Config, emitter: &Emitter) -> Screen {
    let mut bindings = Vec::new();

    let page = match state.user_role {
        None => {
            bind(&mut bindings, emitter, "btn-authority", Action::AuthorityRequested);
            bind(
                &mut bindings,
                emitter,
                "btn-public",
                Action::RoleSelected(Some(Role::Public)),
            );
            PageView::Landing
        }
        Some(Role::Authority) => {
            bind(&mut bindings, emitter, "btn-logout", Action::RoleSelected(None));
            bind(&mut bindings, emitter, "btn-emergency", Action::BroadcastRequested);
            let view = authority_view(state, config);
            for gate in &state.gates {
                bind(
                    &mut bindings,
                    emitter,
                    &gate_element_id(gate),
                    Action::GateToggled(gate.id.clone()),
                );
            }
            PageView::Authority(view)
        }
        Some(Role::Public) => {
            bind(&mut bindings, emitter, "btn-logout", Action::RoleSelected(None));
            bind(&mut bindings, emitter, "btn-sos", Action::SosRequested);
            PageView::Public(public_view(state, config))
        }
    };

    let modal = state.modal.map(|modal| {
        bind_modal(&mut bindings, emitter, modal);
        ModalView {
            title: modal.title(),
            message: modal.message(),
            kind: modal.kind(),
            theme: modal.theme(),
        }
    });

    Screen {
        page,
        modal,
        bindings,
    }
}

fn bind(bindings: &mut Vec<Binding>, emitter: &Emitter, element_id: &str, action: Action) {
    let emitter = emitter.clone();
    bindings.push(Binding {
        element_id: element_id.to_string(),
        handler: Handler::Click(Box::new(move || emitter.emit(action.clone()))),
    });
}

fn bind_modal(bindings: &mut Vec<Binding>, emitter: &Emitter, modal: Modal) {
    match modal {
        Modal::AccessPrompt => {
            let submit = emitter.clone();
            bindings.push(Binding {
                element_id: "modal-confirm".to_string(),
                handler: Handler::Submit(Box::new(move |code: String| {
                    submit.emit(Action::AccessCodeSubmitted(code))
                })),
            });
            bind(bindings, emitter, "modal-cancel", Action::ModalDismissed);
        }
        Modal::ConfirmBroadcast => {
            bind(bindings, emitter, "modal-confirm", Action::BroadcastConfirmed);
            bind(bindings, emitter, "modal-cancel", Action::ModalDismissed);
        }
        Modal::ConfirmSos => {
            bind(bindings, emitter, "modal-confirm", Action::SosConfirmed);
            bind(bindings, emitter, "modal-cancel", Action::ModalDismissed);
        }
        Modal::AccessDenied | Modal::BroadcastSent | Modal::SosSent => {
            bind(bindings, emitter, "modal-confirm", Action::ModalDismissed);
        }
    }
}

pub fn gate_element_id(gate: &Gate) -> String {
    format!("gate-{}", gate.id)
}

fn authority_view(state: &DashboardState, config: &Config) -> AuthorityView {
    let event = &state.current_event;
    let stats = vec![
        StatCard {
            label: "Total Attendance",
            value: group_thousands(event.current_attendance),
            icon: "fa-users",
            color: "text-blue-500",
            trend: "+12% / hr",
            trend_class: "text-slate-500",
        },
        StatCard {
            label: "Venue Capacity",
            value: format!("{}%", event.attendance_percent()),
            icon: "fa-chart-pie",
            color: "text-green-500",
            trend: "Stable",
            trend_class: "text-slate-500",
        },
        StatCard {
            label: "Active Alerts",
            value: state.active_alert_count().to_string(),
            icon: "fa-triangle-exclamation",
            color: "text-red-500",
            trend: "Needs Action",
            trend_class: "text-red-400",
        },
        StatCard {
            label: "Security Staff",
            value: config.security_staff.clone(),
            icon: "fa-user-shield",
            color: "text-amber-500",
            trend: "On Patrol",
            trend_class: "text-slate-500",
        },
    ];

    AuthorityView {
        event_name: event.name.to_uppercase(),
        stats,
        gates: state.gates.iter().map(gate_card).collect(),
        alerts: state
            .alerts
            .iter()
            .map(|alert| {
                let medical = alert.kind == AlertKind::Medical;
                AlertCard {
                    kind: alert.kind.label(),
                    message: alert.message.clone(),
                    time: alert.time.clone(),
                    location: alert.location.clone(),
                    border_class: if medical {
                        "border-l-red-500"
                    } else {
                        "border-l-amber-500"
                    },
                    icon_class: if medical {
                        "fa-user-nurse text-red-500"
                    } else {
                        "fa-triangle-exclamation text-amber-500"
                    },
                }
            })
            .collect(),
        alert_total: state.alerts.len(),
        zones: state.zones.iter().map(zone_bar).collect(),
    }
}

fn gate_card(gate: &Gate) -> GateCard {
    let status = gate.status();
    let (border_class, badge_class) = match status {
        GateStatus::Open => ("border-navy-700", "badge-success"),
        GateStatus::Closed => ("border-navy-600 opacity-50", "bg-slate-600 text-slate-300"),
        GateStatus::Congested => ("border-red-500/50 bg-red-900/10", "badge-danger"),
    };
    GateCard {
        element_id: gate_element_id(gate),
        name: gate.name.clone(),
        status: status.label(),
        count: gate.count,
        crowd_level: gate.crowd_level.label(),
        border_class,
        badge_class,
        level_class: if gate.crowd_level == CrowdLevel::Critical {
            "text-red-500 font-bold"
        } else {
            "text-green-500"
        },
        bar_class: if status == GateStatus::Congested {
            "bg-red-500"
        } else {
            "bg-blue-500"
        },
        fill_percent: gate.fill_percent().to_string(),
        closed: status == GateStatus::Closed,
    }
}

fn zone_bar(zone: &Zone) -> ZoneBar {
    ZoneBar {
        name: zone.name.clone(),
        density: zone.density,
        status: zone.status.label(),
        staff: zone.staff,
        value_class: if zone.density > 80 {
            "text-red-400"
        } else {
            "text-slate-400"
        },
        bar_class: match zone.density {
            81..=u8::MAX => "bg-red-500",
            51..=80 => "bg-amber-500",
            _ => "bg-green-500",
        },
    }
}

fn public_view(state: &DashboardState, config: &Config) -> PublicView {
    let mut rng = StdRng::seed_from_u64(config.map_seed);

    let map_shapes = (0..5)
        .map(|_| MapShape {
            top: format!("{:.1}", rng.gen_range(10.0_f64..90.0)),
            left: format!("{:.1}", rng.gen_range(10.0_f64..90.0)),
            size: format!("{:.2}", rng.gen_range(2.0_f64..6.0)),
            color: if rng.gen_bool(0.5) {
                "bg-slate-300"
            } else {
                "bg-slate-200"
            },
            rounded: if rng.gen_bool(0.5) {
                "rounded-full"
            } else {
                "rounded-sm"
            },
        })
        .collect();

    let hotspots = (0..3)
        .map(|_| Hotspot {
            top: format!("{:.1}", rng.gen_range(15.0_f64..85.0)),
            left: format!("{:.1}", rng.gen_range(15.0_f64..85.0)),
            color: if rng.gen_bool(0.5) {
                "bg-red-500"
            } else {
                "bg-amber-500"
            },
        })
        .collect();

    PublicView {
        emergency: state.active_emergency().map(|alert| alert.message.clone()),
        event_name: state.current_event.name.clone(),
        event_location: state.current_event.location.clone(),
        map_shapes,
        hotspots,
        your_zone: "Food Court",
        facilities: FACILITIES.to_vec(),
    }
}

/// `12450` → `12,450`.
pub fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
