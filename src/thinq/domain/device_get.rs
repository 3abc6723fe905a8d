use crate::domain::{DeviceType, PlatformType};
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

// One entry of the device list returned by the cloud platform
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceGet {
    pub device_id: String,
    pub alias: Option<String>,
    pub model_name: String,
    pub platform_type: PlatformType,
    pub device_type: DeviceType,
    pub device_code: Option<String>,
    pub snapshot: Option<Snapshot>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub oven_state: Option<Value>,
}

/// A report file holds either a single device or a list of them.
#[derive(Debug)]
pub enum DeviceReport {
    Many(Vec<DeviceGet>),
    One(DeviceGet),
}

impl DeviceReport {
    pub fn into_devices(self) -> Vec<DeviceGet> {
        match self {
            DeviceReport::Many(devices) => devices,
            DeviceReport::One(device) => vec![device],
        }
    }
}

impl<'de> Deserialize<'de> for DeviceReport {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if value.is_array() {
            serde_json::from_value(value).map(DeviceReport::Many).map_err(D::Error::custom)
        } else {
            serde_json::from_value(value).map(DeviceReport::One).map_err(D::Error::custom)
        }
    }
}
