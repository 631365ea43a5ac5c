mod loader;
mod sample;

pub use loader::{LoaderError, load_devices_from};
pub use sample::sample_fleet;
