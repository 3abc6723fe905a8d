use crate::domain::{Category, Device, DeviceType};

/// Returns the accessory category the bridge shows for `device`.
pub fn category(device: &Device) -> Category {
    match device.device_type {
        DeviceType::AirPurifier => Category::AirPurifier,
        DeviceType::Dehumidifier => Category::AirDehumidifier,
        DeviceType::AirConditioner => Category::AirConditioner,
        // Code 1, not the sprinkler category
        DeviceType::Dishwasher => Category::Other,
        DeviceType::Oven | DeviceType::Microwave => Category::Thermostat,
        _ => Category::Other,
    }
}
