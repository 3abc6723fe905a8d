use crate::domain::DeviceType;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for DeviceType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(DeviceType::from_tag(&tag))
    }
}
