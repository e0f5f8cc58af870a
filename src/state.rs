//! Dashboard data model and the seeded mock dataset.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Modal;

/// Who is looking at the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Authority,
    Public,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventStatus {
    Scheduled,
    Active,
    Ended,
}

/// The event currently running at the venue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VenueEvent {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
    pub location: String,
    pub total_capacity: u32,
    pub current_attendance: u32,
    pub status: EventStatus,
}

impl VenueEvent {
    /// Attendance as a whole percentage of capacity, rounded half away from zero.
    pub fn attendance_percent(&self) -> u32 {
        if self.total_capacity == 0 {
            return 0;
        }
        (f64::from(self.current_attendance) * 100.0 / f64::from(self.total_capacity)).round()
            as u32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateStatus {
    Open,
    Closed,
    Congested,
}

impl GateStatus {
    pub fn label(self) -> &'static str {
        match self {
            GateStatus::Open => "Open",
            GateStatus::Closed => "Closed",
            GateStatus::Congested => "Congested",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrowdLevel {
    Low,
    Moderate,
    Critical,
}

impl CrowdLevel {
    pub fn label(self) -> &'static str {
        match self {
            CrowdLevel::Low => "Low",
            CrowdLevel::Moderate => "Moderate",
            CrowdLevel::Critical => "Critical",
        }
    }
}

fn default_open() -> bool {
    true
}

/// An entry checkpoint.
///
/// The displayed [`GateStatus`] is derived from two flags. Operators only ever
/// flip `open`; `congested` is a property of the crowd at the gate, so a
/// congested gate that is closed and reopened comes back congested.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    pub id: String,
    pub name: String,
    #[serde(default = "default_open")]
    pub open: bool,
    #[serde(default)]
    pub congested: bool,
    pub crowd_level: CrowdLevel,
    pub count: u32,
    pub capacity: u32,
}

impl Gate {
    pub fn status(&self) -> GateStatus {
        match (self.open, self.congested) {
            (false, _) => GateStatus::Closed,
            (true, true) => GateStatus::Congested,
            (true, false) => GateStatus::Open,
        }
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Occupancy as a percentage of capacity. Zero-capacity gates report 0.
    pub fn fill_percent(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        f64::from(self.count) * 100.0 / f64::from(self.capacity)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DensityLevel {
    Low,
    Moderate,
    High,
}

impl DensityLevel {
    pub fn label(self) -> &'static str {
        match self {
            DensityLevel::Low => "Low",
            DensityLevel::Moderate => "Moderate",
            DensityLevel::High => "High",
        }
    }
}

/// A venue area with a density reading in percent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub density: u8,
    pub status: DensityLevel,
    pub staff: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertKind {
    Medical,
    Security,
    Emergency,
}

impl AlertKind {
    pub fn label(self) -> &'static str {
        match self {
            AlertKind::Medical => "Medical",
            AlertKind::Security => "Security",
            AlertKind::Emergency => "Emergency",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertStatus {
    Active,
    Resolved,
}

/// A timestamped incident record. `time` is already formatted for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub kind: AlertKind,
    pub message: String,
    pub time: String,
    pub status: AlertStatus,
    pub location: String,
}

impl Alert {
    pub fn is_active(&self) -> bool {
        self.status == AlertStatus::Active
    }
}

/// The records a dashboard is seeded with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub event: VenueEvent,
    pub gates: Vec<Gate>,
    pub zones: Vec<Zone>,
    pub alerts: Vec<Alert>,
}

impl Dataset {
    /// The built-in mock dataset: one festival, four gates, four zones, two alerts.
    pub fn seed() -> Self {
        Dataset {
            event: VenueEvent {
                id: "evt-001".into(),
                name: "Grand City Music Festival".into(),
                date: NaiveDate::from_ymd_opt(2025, 12, 25).unwrap_or(NaiveDate::MIN),
                location: "Central Park Arena".into(),
                total_capacity: 50_000,
                current_attendance: 12_450,
                status: EventStatus::Active,
            },
            gates: vec![
                gate("g1", "Gate A (North)", false, CrowdLevel::Low, 1200, 5000),
                gate("g2", "Gate B (East)", false, CrowdLevel::Moderate, 3500, 5000),
                gate("g3", "Gate C (South)", true, CrowdLevel::Critical, 4800, 5000),
                gate("g4", "Gate D (VIP)", false, CrowdLevel::Low, 450, 1000),
            ],
            zones: vec![
                zone("z1", "Main Stage", 85, DensityLevel::High, 12),
                zone("z2", "Food Court", 45, DensityLevel::Moderate, 5),
                zone("z3", "Camping Area", 20, DensityLevel::Low, 3),
                zone("z4", "Parking Lot A", 60, DensityLevel::Moderate, 4),
            ],
            alerts: vec![
                Alert {
                    id: "a1".into(),
                    kind: AlertKind::Medical,
                    message: "Medical emergency at Zone 2".into(),
                    time: "10:45 AM".into(),
                    status: AlertStatus::Active,
                    location: "Food Court".into(),
                },
                Alert {
                    id: "a2".into(),
                    kind: AlertKind::Security,
                    message: "Unauthorized entry attempt at Gate C".into(),
                    time: "11:02 AM".into(),
                    status: AlertStatus::Resolved,
                    location: "Gate C".into(),
                },
            ],
        }
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::seed()
    }
}

fn gate(
    id: &str,
    name: &str,
    congested: bool,
    crowd_level: CrowdLevel,
    count: u32,
    capacity: u32,
) -> Gate {
    Gate {
        id: id.into(),
        name: name.into(),
        open: true,
        congested,
        crowd_level,
        count,
        capacity,
    }
}

fn zone(id: &str, name: &str, density: u8, status: DensityLevel, staff: u32) -> Zone {
    Zone {
        id: id.into(),
        name: name.into(),
        density,
        status,
        staff,
    }
}

/// Everything the screens are rendered from.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    pub user_role: Option<Role>,
    pub current_event: VenueEvent,
    pub gates: Vec<Gate>,
    pub zones: Vec<Zone>,
    pub alerts: Vec<Alert>,
    pub modal: Option<Modal>,
}

impl DashboardState {
    pub fn from_dataset(dataset: Dataset) -> Self {
        DashboardState {
            user_role: None,
            current_event: dataset.event,
            gates: dataset.gates,
            zones: dataset.zones,
            alerts: dataset.alerts,
            modal: None,
        }
    }

    pub fn gate(&self, id: &str) -> Option<&Gate> {
        self.gates.iter().find(|gate| gate.id == id)
    }

    pub fn gate_mut(&mut self, id: &str) -> Option<&mut Gate> {
        self.gates.iter_mut().find(|gate| gate.id == id)
    }

    pub fn active_alert_count(&self) -> usize {
        self.alerts.iter().filter(|alert| alert.is_active()).count()
    }

    /// The newest emergency alert that has not been resolved.
    pub fn active_emergency(&self) -> Option<&Alert> {
        self.alerts
            .iter()
            .find(|alert| alert.kind == AlertKind::Emergency && alert.is_active())
    }

    // Transitions shared by the store and the update function.

    pub(crate) fn with_role(mut self, role: Option<Role>) -> Self {
        self.user_role = role;
        self.modal = None;
        self
    }

    pub(crate) fn with_alert(mut self, alert: Alert) -> Self {
        self.alerts.insert(0, alert);
        self
    }

    pub(crate) fn with_modal(mut self, modal: Option<Modal>) -> Self {
        self.modal = modal;
        self
    }

    pub(crate) fn with_gate_toggled(mut self, id: &str) -> Self {
        if let Some(gate) = self.gate_mut(id) {
            gate.toggle();
        }
        self
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::from_dataset(Dataset::seed())
    }
}
