mod device_get;

pub use device_get::{DeviceGet, DeviceReport, Snapshot};
