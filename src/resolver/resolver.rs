use crate::domain::{Device, DeviceType, Handler, OvenSnapshot, PlatformType};
use crate::resolver::legacy::ThinQ1Resolver;
use std::fmt::Debug;
use tracing::{debug, info, instrument};

/// Microwave model that reports itself as `OVEN` before its first snapshot arrives.
const MICROWAVE_AS_OVEN_DEVICE_CODE: &str = "KI04";

pub trait Resolve: Debug + Send + Sync {
    /// Returns the handler for `device`, or `None` when no handler supports it.
    fn resolve(&self, device: &Device) -> Option<Handler>;
}

/// Resolves devices of both API generations, delegating legacy devices to a sub-resolver.
#[derive(Debug)]
pub struct Resolver {
    legacy: Box<dyn Resolve>,
}

impl Resolver {
    pub fn new() -> Self {
        Self::with_legacy(Box::new(ThinQ1Resolver))
    }

    pub fn with_legacy(legacy: Box<dyn Resolve>) -> Self {
        Resolver { legacy }
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolve for Resolver {
    #[instrument(skip_all, fields(device_id = %device.id))]
    fn resolve(&self, device: &Device) -> Option<Handler> {
        let handler = match device.platform {
            PlatformType::ThinQ1 => self.legacy.resolve(device),
            PlatformType::ThinQ2 => resolve_thinq2(device),
        };

        match handler {
            Some(handler) => debug!("🔍 Resolved '{}' ({}) to {}", device.name, device.device_type, handler),
            None => info!("⏭️ No handler for '{}' of type '{}'", device.name, device.device_type),
        }
        handler
    }
}

fn resolve_thinq2(device: &Device) -> Option<Handler> {
    match &device.device_type {
        DeviceType::AeroTower => Some(Handler::AeroTower),
        DeviceType::AirPurifier => Some(Handler::AirPurifier),
        DeviceType::Refrigerator => Some(Handler::Refrigerator),
        DeviceType::Washer | DeviceType::WasherNew | DeviceType::WashTower | DeviceType::Dryer => Some(Handler::WasherDryer),
        DeviceType::WashTower2 => Some(Handler::WasherDryer2),
        DeviceType::Dishwasher => Some(Handler::Dishwasher),
        DeviceType::Dehumidifier => Some(Handler::Dehumidifier),
        DeviceType::AirConditioner => Some(Handler::AirConditioner),
        DeviceType::Styler => Some(Handler::Styler),
        DeviceType::Hood => Some(Handler::RangeHood),
        DeviceType::Microwave => Some(Handler::Microwave),
        DeviceType::Oven => Some(resolve_oven(device)),
        DeviceType::Unknown(_) => None,
    }
}

fn resolve_oven(device: &Device) -> Handler {
    match (device.oven_snapshot, device.device_code.as_deref()) {
        (Some(OvenSnapshot::MicrowaveStyle), _) => Handler::Microwave,
        (_, Some(MICROWAVE_AS_OVEN_DEVICE_CODE)) => Handler::Microwave,
        _ => Handler::Oven,
    }
}
