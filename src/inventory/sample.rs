use crate::domain::device::{Device, DeviceType};
use crate::domain::status::{ApplicationStatus, DeviceStatus, SystemUpdateStatus};
use chrono::Duration;

/// Built-in fleet used when no inventory directory is available. Deterministic,
/// and covers every value of every status dimension at least once.
pub fn sample_fleet() -> Vec<Device> {
    vec![
        Device {
            fleet: Some("eu-retail".to_string()),
            config_version: Some(12),
            ..device("gw-ams-01", "gateway-ams-01", DeviceType::Gateway, "Amsterdam", "10.1.0.1")
        },
        Device {
            fleet: Some("eu-retail".to_string()),
            device_status: DeviceStatus::Offline,
            application_status: ApplicationStatus::Unknown,
            system_update_status: SystemUpdateStatus::Unknown,
            last_seen: seen(Duration::hours(2)),
            ..device("gw-rtm-01", "gateway-rtm-01", DeviceType::Gateway, "Rotterdam", "10.1.0.2")
        },
        Device {
            fleet: Some("eu-retail".to_string()),
            device_status: DeviceStatus::Error,
            application_status: ApplicationStatus::Error,
            system_update_status: SystemUpdateStatus::Failed,
            last_seen: seen(Duration::minutes(14)),
            ..device("cam-ams-11", "camera-ams-11", DeviceType::Camera, "Amsterdam", "10.1.2.11")
        },
        Device {
            device_status: DeviceStatus::Degraded,
            application_status: ApplicationStatus::Degraded,
            system_update_status: SystemUpdateStatus::OutOfDate,
            last_seen: seen(Duration::minutes(1)),
            ..device("cam-ams-12", "camera-ams-12", DeviceType::Camera, "Amsterdam", "10.1.2.12")
        },
        Device {
            alias: Some("Lane 4".to_string()),
            fleet: Some("eu-retail".to_string()),
            system_update_status: SystemUpdateStatus::Updating,
            config_version: Some(31),
            ..device("till-utr-04", "checkout-till-04", DeviceType::Controller, "Utrecht", "10.2.0.4")
        },
        Device {
            device_status: DeviceStatus::Unknown,
            application_status: ApplicationStatus::Unknown,
            system_update_status: SystemUpdateStatus::Unknown,
            last_seen: seen(Duration::days(3)),
            ..device("sen-utr-09", "sensor-utr-09", DeviceType::Sensor, "Utrecht", "10.2.1.9")
        },
        Device {
            device_status: DeviceStatus::Rebooting,
            last_seen: seen(Duration::minutes(0)),
            ..device("kio-ein-01", "kiosk-ein-01", DeviceType::Display, "Eindhoven", "10.3.0.1")
        },
        Device {
            device_status: DeviceStatus::PoweredOff,
            application_status: ApplicationStatus::Unknown,
            system_update_status: SystemUpdateStatus::Unknown,
            last_seen: seen(Duration::days(1)),
            ..device("dis-ein-02", "display-ein-02", DeviceType::Display, "Eindhoven", "10.3.0.2")
        },
        Device {
            device_status: DeviceStatus::Suspended,
            last_seen: seen(Duration::hours(8)),
            ..device("sen-gro-03", "sensor-gro-03", DeviceType::Sensor, "Groningen", "10.4.1.3")
        },
        Device {
            fleet: Some("nl-warehouse".to_string()),
            device_status: DeviceStatus::PendingSync,
            system_update_status: SystemUpdateStatus::RollingBack,
            last_seen: seen(Duration::minutes(45)),
            ..device("gw-ein-02", "gateway-ein-02", DeviceType::Gateway, "Eindhoven", "10.3.0.3")
        },
        Device {
            fleet: Some("nl-warehouse".to_string()),
            application_status: ApplicationStatus::Degraded,
            system_update_status: SystemUpdateStatus::OutOfDate,
            last_seen: seen(Duration::minutes(7)),
            ..device("sen-ams-21", "sensor-ams-21", DeviceType::Sensor, "Amsterdam", "10.1.1.21")
        },
        Device {
            alias: Some("Dock A".to_string()),
            fleet: Some("nl-warehouse".to_string()),
            config_version: Some(12),
            ..device("ctl-rtm-07", "controller-rtm-07", DeviceType::Controller, "Rotterdam", "10.1.3.7")
        },
    ]
}

fn device(id: &str, name: &str, r#type: DeviceType, location: &str, ip_address: &str) -> Device {
    Device {
        id: id.to_string(),
        name: name.to_string(),
        alias: None,
        r#type,
        device_status: DeviceStatus::Online,
        application_status: ApplicationStatus::Healthy,
        system_update_status: SystemUpdateStatus::UpToDate,
        location: location.to_string(),
        ip_address: ip_address.to_string(),
        firmware_version: "4.2.1".to_string(),
        fleet: None,
        last_seen: seen(Duration::minutes(2)),
        config_version: None,
    }
}

fn seen(ago: Duration) -> String {
    if ago < Duration::minutes(1) {
        "Just now".to_string()
    } else if ago < Duration::hours(1) {
        pluralize(ago.num_minutes(), "minute")
    } else if ago < Duration::days(1) {
        pluralize(ago.num_hours(), "hour")
    } else {
        pluralize(ago.num_days(), "day")
    }
}

fn pluralize(amount: i64, unit: &str) -> String {
    if amount == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{amount} {unit}s ago")
    }
}
