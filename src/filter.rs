use crate::domain::device::Device;
use crate::domain::status::{ApplicationStatus, DeviceStatus, StatusDimension, SystemUpdateStatus};
use std::collections::HashSet;

/// What a list view constrains a fleet by: a free-text search plus one
/// selection set per status dimension. An empty search or an empty set means
/// no constraint on that part.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct FilterCriteria {
    pub search: String,
    pub device_statuses: HashSet<DeviceStatus>,
    pub application_statuses: HashSet<ApplicationStatus>,
    pub system_update_statuses: HashSet<SystemUpdateStatus>,
}

/// All conditions are ANDed; the search matches case-insensitively against
/// name, location, and alias (when present).
pub fn matches_filter(device: &Device, criteria: &FilterCriteria) -> bool {
    matches_search(device, &criteria.search)
        && matches_selection(&criteria.device_statuses, &device.device_status)
        && matches_selection(&criteria.application_statuses, &device.application_status)
        && matches_selection(&criteria.system_update_statuses, &device.system_update_status)
}

/// Keeps the devices satisfying the criteria, preserving their relative order.
pub fn filter_devices(devices: &[Device], criteria: &FilterCriteria) -> Vec<Device> {
    devices.iter().filter(|device| matches_filter(device, criteria)).cloned().collect()
}

fn matches_search(device: &Device, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }

    let needle = search.to_lowercase();
    device.name.to_lowercase().contains(&needle)
        || device.location.to_lowercase().contains(&needle)
        || device.alias.as_ref().is_some_and(|alias| alias.to_lowercase().contains(&needle))
}

fn matches_selection<D: StatusDimension>(selected: &HashSet<D>, status: &D) -> bool {
    selected.is_empty() || selected.contains(status)
}
