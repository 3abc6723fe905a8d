use std::fmt::{Display, Formatter};

#[derive(PartialEq, Debug, Clone)]
pub struct Device {
    pub id: String,
    pub name: String,
    pub model_name: String,
    pub platform: PlatformType,
    pub device_type: DeviceType,
    pub device_code: Option<String>,
    pub oven_snapshot: Option<OvenSnapshot>,
}

/// The generation of the cloud API that reported a device.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum PlatformType {
    ThinQ1,
    ThinQ2,
}

/// The appliance category as tagged by the cloud platform.
///
/// Tags are matched exactly and case-sensitively; anything else is kept verbatim in `Unknown`.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum DeviceType {
    AeroTower,
    AirPurifier,
    Refrigerator,
    Washer,
    WasherNew,
    WashTower,
    Dryer,
    WashTower2,
    Dishwasher,
    Dehumidifier,
    AirConditioner,
    Styler,
    Hood,
    Microwave,
    Oven,
    Unknown(String),
}

impl DeviceType {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "AERO_TOWER" => DeviceType::AeroTower,
            "AIR_PURIFIER" => DeviceType::AirPurifier,
            "REFRIGERATOR" => DeviceType::Refrigerator,
            "WASHER" => DeviceType::Washer,
            "WASHER_NEW" => DeviceType::WasherNew,
            "WASH_TOWER" => DeviceType::WashTower,
            "DRYER" => DeviceType::Dryer,
            "WASH_TOWER_2" => DeviceType::WashTower2,
            "DISHWASHER" => DeviceType::Dishwasher,
            "DEHUMIDIFIER" => DeviceType::Dehumidifier,
            "AC" => DeviceType::AirConditioner,
            "STYLER" => DeviceType::Styler,
            "HOOD" => DeviceType::Hood,
            "MICROWAVE" => DeviceType::Microwave,
            "OVEN" => DeviceType::Oven,
            other => DeviceType::Unknown(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            DeviceType::AeroTower => "AERO_TOWER",
            DeviceType::AirPurifier => "AIR_PURIFIER",
            DeviceType::Refrigerator => "REFRIGERATOR",
            DeviceType::Washer => "WASHER",
            DeviceType::WasherNew => "WASHER_NEW",
            DeviceType::WashTower => "WASH_TOWER",
            DeviceType::Dryer => "DRYER",
            DeviceType::WashTower2 => "WASH_TOWER_2",
            DeviceType::Dishwasher => "DISHWASHER",
            DeviceType::Dehumidifier => "DEHUMIDIFIER",
            DeviceType::AirConditioner => "AC",
            DeviceType::Styler => "STYLER",
            DeviceType::Hood => "HOOD",
            DeviceType::Microwave => "MICROWAVE",
            DeviceType::Oven => "OVEN",
            DeviceType::Unknown(tag) => tag,
        }
    }
}

impl Display for DeviceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// The field-naming convention found under `snapshot.ovenState`.
///
/// The platform reports some microwaves as `OVEN`, their state fields are prefixed with `LWO`
/// where a real oven uses `upper*` / `lower*` fields.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum OvenSnapshot {
    Oven,
    MicrowaveStyle,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("AERO_TOWER")]
    #[case("AIR_PURIFIER")]
    #[case("WASH_TOWER_2")]
    #[case("AC")]
    #[case("OVEN")]
    #[case("FOO_BAR")]
    fn tag_returns_the_tag_it_was_parsed_from(#[case] tag: &str) {
        assert_eq!(DeviceType::from_tag(tag).tag(), tag);
    }

    #[rstest]
    #[case("oven")]
    #[case("Oven")]
    #[case(" OVEN")]
    #[case("")]
    fn from_tag_is_case_sensitive_and_exact(#[case] tag: &str) {
        assert_eq!(DeviceType::from_tag(tag), DeviceType::Unknown(tag.to_string()));
    }
}
