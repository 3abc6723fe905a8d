use serde::Serialize;
use std::fmt::{Display, Formatter};

/// The handler family that exposes an appliance to the bridge.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Serialize)]
pub enum Handler {
    AeroTower,
    AirPurifier,
    Refrigerator,
    WasherDryer,
    WasherDryer2,
    Dishwasher,
    Dehumidifier,
    AirConditioner,
    Styler,
    RangeHood,
    Microwave,
    Oven,
    Legacy(LegacyHandler),
}

/// Handlers for appliances reported through the legacy API.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Serialize)]
pub enum LegacyHandler {
    AirConditioner,
    AirPurifier,
    Refrigerator,
    WasherDryer,
}

impl Display for Handler {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Handler::Legacy(handler) => write!(f, "{:?} (legacy)", handler),
            handler => write!(f, "{:?}", handler),
        }
    }
}
