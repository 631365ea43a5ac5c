use crate::domain::device::Device;
use crate::domain::status::StatusDimension;
use std::collections::HashMap;

/// One non-zero slice of a status breakdown, carrying the metadata a legend
/// entry needs.
#[derive(PartialEq, Debug, Clone)]
pub struct StatusCount<D: StatusDimension> {
    pub status: D,
    pub label: &'static str,
    pub color: &'static str,
    pub count: usize,
}

/// Counts devices per status value of one dimension. The result follows the
/// dimension's declaration order, not count magnitude, so repeated snapshots
/// render in a stable order. Zero-count values are omitted.
pub fn aggregate<D, F>(devices: &[Device], status_of: F) -> Vec<StatusCount<D>>
where
    D: StatusDimension + 'static,
    F: Fn(&Device) -> D,
{
    let mut counts: HashMap<D, usize> = HashMap::new();
    for device in devices {
        *counts.entry(status_of(device)).or_insert(0) += 1;
    }

    D::all()
        .iter()
        .filter_map(|status| {
            let count = counts.get(status).copied().unwrap_or(0);
            if count == 0 {
                return None;
            }

            let meta = status.meta();
            Some(StatusCount {
                status: *status,
                label: meta.label,
                color: meta.color,
                count,
            })
        })
        .collect()
}
