mod classify_oven_state;
mod device_type_deserializer;
pub mod domain;
mod loader;
mod map_device;
mod platform_type_deserializer;

pub use classify_oven_state::classify_oven_state;
pub use loader::{LoaderError, load_devices_from};
pub use map_device::{MapDeviceError, map_device};
