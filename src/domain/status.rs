use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// Display metadata for one status value: what the presentation layer needs to
/// render a legend entry, nothing more. Icons are opaque tags resolved to
/// visual assets outside this crate.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct StatusMeta {
    pub label: &'static str,
    pub color: &'static str,
    pub icon: Icon,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Icon {
    CheckCircle,
    ExclamationCircle,
    ExclamationTriangle,
    QuestionCircle,
    PowerOff,
    Disconnected,
    Pause,
    Redo,
    Sync,
    InProgress,
    History,
}

/// A closed status enumeration with a total metadata mapping.
///
/// `all()` fixes the declaration order used everywhere a dimension is iterated,
/// so aggregated output is stable regardless of input order. `meta()` is an
/// exhaustive match, so adding a variant without metadata does not compile.
pub trait StatusDimension: Copy + Eq + Hash {
    fn all() -> &'static [Self];
    fn meta(&self) -> StatusMeta;
}

#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceStatus {
    Online,
    Offline,
    Error,
    Degraded,
    Unknown,
    Rebooting,
    PoweredOff,
    Suspended,
    PendingSync,
}

impl StatusDimension for DeviceStatus {
    fn all() -> &'static [Self] {
        &[
            DeviceStatus::Online,
            DeviceStatus::Offline,
            DeviceStatus::Error,
            DeviceStatus::Degraded,
            DeviceStatus::Unknown,
            DeviceStatus::Rebooting,
            DeviceStatus::PoweredOff,
            DeviceStatus::Suspended,
            DeviceStatus::PendingSync,
        ]
    }

    fn meta(&self) -> StatusMeta {
        match self {
            DeviceStatus::Online => StatusMeta {
                label: "Online",
                color: "#3E8635",
                icon: Icon::CheckCircle,
            },
            DeviceStatus::Offline => StatusMeta {
                label: "Offline",
                color: "#8A8D90",
                icon: Icon::Disconnected,
            },
            DeviceStatus::Error => StatusMeta {
                label: "Error",
                color: "#C9190B",
                icon: Icon::ExclamationCircle,
            },
            DeviceStatus::Degraded => StatusMeta {
                label: "Degraded",
                color: "#F0AB00",
                icon: Icon::ExclamationTriangle,
            },
            DeviceStatus::Unknown => StatusMeta {
                label: "Unknown",
                color: "#8A8D90",
                icon: Icon::QuestionCircle,
            },
            DeviceStatus::Rebooting => StatusMeta {
                label: "Rebooting",
                color: "#2B9AF3",
                icon: Icon::Redo,
            },
            DeviceStatus::PoweredOff => StatusMeta {
                label: "Powered off",
                color: "#151515",
                icon: Icon::PowerOff,
            },
            DeviceStatus::Suspended => StatusMeta {
                label: "Suspended",
                color: "#F0AB00",
                icon: Icon::Pause,
            },
            DeviceStatus::PendingSync => StatusMeta {
                label: "Pending sync",
                color: "#2B9AF3",
                icon: Icon::Sync,
            },
        }
    }
}

#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Healthy,
    Degraded,
    Error,
    Unknown,
}

impl StatusDimension for ApplicationStatus {
    fn all() -> &'static [Self] {
        &[
            ApplicationStatus::Healthy,
            ApplicationStatus::Degraded,
            ApplicationStatus::Error,
            ApplicationStatus::Unknown,
        ]
    }

    fn meta(&self) -> StatusMeta {
        match self {
            ApplicationStatus::Healthy => StatusMeta {
                label: "Healthy",
                color: "#3E8635",
                icon: Icon::CheckCircle,
            },
            ApplicationStatus::Degraded => StatusMeta {
                label: "Degraded",
                color: "#F0AB00",
                icon: Icon::ExclamationTriangle,
            },
            ApplicationStatus::Error => StatusMeta {
                label: "Error",
                color: "#C9190B",
                icon: Icon::ExclamationCircle,
            },
            ApplicationStatus::Unknown => StatusMeta {
                label: "Unknown",
                color: "#8A8D90",
                icon: Icon::QuestionCircle,
            },
        }
    }
}

#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SystemUpdateStatus {
    UpToDate,
    OutOfDate,
    Updating,
    Failed,
    RollingBack,
    Unknown,
}

impl StatusDimension for SystemUpdateStatus {
    fn all() -> &'static [Self] {
        &[
            SystemUpdateStatus::UpToDate,
            SystemUpdateStatus::OutOfDate,
            SystemUpdateStatus::Updating,
            SystemUpdateStatus::Failed,
            SystemUpdateStatus::RollingBack,
            SystemUpdateStatus::Unknown,
        ]
    }

    fn meta(&self) -> StatusMeta {
        match self {
            SystemUpdateStatus::UpToDate => StatusMeta {
                label: "Up to date",
                color: "#3E8635",
                icon: Icon::CheckCircle,
            },
            SystemUpdateStatus::OutOfDate => StatusMeta {
                label: "Out of date",
                color: "#F0AB00",
                icon: Icon::History,
            },
            SystemUpdateStatus::Updating => StatusMeta {
                label: "Updating",
                color: "#2B9AF3",
                icon: Icon::InProgress,
            },
            SystemUpdateStatus::Failed => StatusMeta {
                label: "Failed",
                color: "#C9190B",
                icon: Icon::ExclamationCircle,
            },
            SystemUpdateStatus::RollingBack => StatusMeta {
                label: "Rolling back",
                color: "#F0AB00",
                icon: Icon::Redo,
            },
            SystemUpdateStatus::Unknown => StatusMeta {
                label: "Unknown",
                color: "#8A8D90",
                icon: Icon::QuestionCircle,
            },
        }
    }
}
