use serde::{Serialize, Serializer};

/// Accessory categories understood by the bridge, see the HomeKit Accessory Protocol.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Category {
    Other,
    Fan,
    Switch,
    Thermostat,
    Sensor,
    AirPurifier,
    AirHeater,
    AirConditioner,
    AirHumidifier,
    AirDehumidifier,
    Sprinkler,
    Faucet,
}

impl Category {
    pub fn code(&self) -> u8 {
        match self {
            Category::Other => 1,
            Category::Fan => 3,
            Category::Switch => 8,
            Category::Thermostat => 9,
            Category::Sensor => 10,
            Category::AirPurifier => 19,
            Category::AirHeater => 20,
            Category::AirConditioner => 21,
            Category::AirHumidifier => 22,
            Category::AirDehumidifier => 23,
            Category::Sprinkler => 28,
            Category::Faucet => 29,
        }
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.code())
    }
}
