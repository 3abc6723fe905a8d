use crate::domain::{Device, DeviceType, Handler, LegacyHandler};
use crate::resolver::Resolve;

/// Resolves devices reported through the legacy ThinQ1 API.
#[derive(Debug, Default)]
pub struct ThinQ1Resolver;

impl Resolve for ThinQ1Resolver {
    fn resolve(&self, device: &Device) -> Option<Handler> {
        let handler = match device.device_type {
            DeviceType::AirConditioner => LegacyHandler::AirConditioner,
            DeviceType::Washer | DeviceType::Dryer => LegacyHandler::WasherDryer,
            DeviceType::Refrigerator => LegacyHandler::Refrigerator,
            DeviceType::AirPurifier => LegacyHandler::AirPurifier,
            _ => return None,
        };
        Some(Handler::Legacy(handler))
    }
}
