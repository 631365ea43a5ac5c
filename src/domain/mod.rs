pub mod device;
pub mod status;

pub use device::{Device, DeviceType};
pub use status::{ApplicationStatus, DeviceStatus, Icon, StatusDimension, StatusMeta, SystemUpdateStatus};
