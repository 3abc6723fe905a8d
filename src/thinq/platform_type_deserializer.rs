use crate::domain::PlatformType;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for PlatformType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let platform = String::deserialize(deserializer)?;
        match platform.as_str() {
            "thinq1" => Ok(PlatformType::ThinQ1),
            "thinq2" => Ok(PlatformType::ThinQ2),
            _ => Err(Error::custom(format!("unknown platform type '{}'", platform))),
        }
    }
}
