use crate::aggregate::{StatusCount, aggregate};
use crate::chart::{ChartSegment, ChartValue, build_chart_segments};
use crate::domain::device::Device;
use crate::domain::status::{DeviceStatus, StatusDimension};
use crate::filter::{FilterCriteria, filter_devices};
use std::collections::HashSet;
use tracing::info;

/// Logs a status breakdown per dimension plus the devices needing attention.
pub fn log_fleet_report(devices: &[Device]) {
    info!("📊 Fleet report, {} device(s)", devices.len());
    log_dimension("Device status", devices, |d| d.device_status);
    log_dimension("Application status", devices, |d| d.application_status);
    log_dimension("System update status", devices, |d| d.system_update_status);
    log_attention_list(devices);
}

/// Counts and donut segments for one dimension. Segments follow the counts in
/// declaration order; an all-zero breakdown yields the placeholder segment.
pub fn dimension_segments<D, F>(devices: &[Device], status_of: F) -> (Vec<StatusCount<D>>, Vec<ChartSegment>)
where
    D: StatusDimension + 'static,
    F: Fn(&Device) -> D,
{
    let counts = aggregate(devices, status_of);
    let values: Vec<ChartValue> = counts.iter().map(ChartValue::from).collect();
    let segments = build_chart_segments(&values);
    (counts, segments)
}

fn log_dimension<D, F>(title: &str, devices: &[Device], status_of: F)
where
    D: StatusDimension + 'static,
    F: Fn(&Device) -> D,
{
    let (counts, segments) = dimension_segments(devices, status_of);
    info!("📊 {}", title);

    if counts.is_empty() {
        info!("   no devices");
        return;
    }

    for (count, segment) in counts.iter().zip(&segments) {
        #[rustfmt::skip]
        info!("   {:>3} × {:<14} {:>3}%  {:>6.1}° to {:<6.1}°", count.count, count.label, segment.percentage, segment.start_angle, segment.end_angle);
    }
}

fn log_attention_list(devices: &[Device]) {
    let criteria = FilterCriteria {
        device_statuses: HashSet::from([DeviceStatus::Error, DeviceStatus::Degraded]),
        ..Default::default()
    };
    let attention = filter_devices(devices, &criteria);

    if attention.is_empty() {
        info!("🟢 No devices need attention");
        return;
    }

    info!("🔴 {} device(s) need attention", attention.len());
    for device in &attention {
        #[rustfmt::skip]
        info!("   {} in {} is {}, last seen {}", device.name, device.location, device.device_status.meta().label, device.last_seen);
    }
}
