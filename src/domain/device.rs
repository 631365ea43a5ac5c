use crate::domain::status::{ApplicationStatus, DeviceStatus, SystemUpdateStatus};
use serde::{Deserialize, Serialize};

/// An immutable snapshot of one managed endpoint. Records are produced by the
/// inventory loader or the sample fleet and are never mutated in place.
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub alias: Option<String>,
    pub r#type: DeviceType,
    pub device_status: DeviceStatus,
    pub application_status: ApplicationStatus,
    pub system_update_status: SystemUpdateStatus,
    pub location: String,
    pub ip_address: String,
    pub firmware_version: String,
    // Fleet membership is a name reference only; referential integrity is not enforced
    #[serde(default)]
    pub fleet: Option<String>,
    pub last_seen: String,
    #[serde(default)]
    pub config_version: Option<u32>,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceType {
    Gateway,
    Sensor,
    Camera,
    Display,
    Controller,
}

#[cfg(test)]
pub struct DeviceBuilder {
    device: Device,
}

#[cfg(test)]
impl DeviceBuilder {
    pub fn new(id: &str) -> Self {
        DeviceBuilder {
            device: Device {
                id: id.to_string(),
                name: format!("device-{id}"),
                alias: None,
                r#type: DeviceType::Sensor,
                device_status: DeviceStatus::Online,
                application_status: ApplicationStatus::Healthy,
                system_update_status: SystemUpdateStatus::UpToDate,
                location: "Rotterdam".to_string(),
                ip_address: format!("10.0.0.{id}"),
                firmware_version: "1.0.0".to_string(),
                fleet: None,
                last_seen: "Just now".to_string(),
                config_version: None,
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.device.name = name.to_string();
        self
    }

    pub fn alias(mut self, alias: &str) -> Self {
        self.device.alias = Some(alias.to_string());
        self
    }

    pub fn location(mut self, location: &str) -> Self {
        self.device.location = location.to_string();
        self
    }

    pub fn device_status(mut self, status: DeviceStatus) -> Self {
        self.device.device_status = status;
        self
    }

    pub fn application_status(mut self, status: ApplicationStatus) -> Self {
        self.device.application_status = status;
        self
    }

    pub fn system_update_status(mut self, status: SystemUpdateStatus) -> Self {
        self.device.system_update_status = status;
        self
    }

    pub fn build(self) -> Device {
        self.device
    }
}
