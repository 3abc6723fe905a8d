use crate::domain::Device;
use crate::thinq::classify_oven_state::classify_oven_state;
use crate::thinq::domain::DeviceGet;
use thiserror::Error;

pub fn map_device(device_get: DeviceGet) -> Result<Device, MapDeviceError> {
    if device_get.device_id.trim().is_empty() {
        return Err(MapDeviceError::MissingDeviceId {
            model_name: device_get.model_name,
        });
    }

    let oven_snapshot = device_get
        .snapshot
        .as_ref()
        .and_then(|snapshot| snapshot.oven_state.as_ref())
        .and_then(classify_oven_state);

    Ok(Device {
        id: device_get.device_id,
        name: device_get.alias.unwrap_or_else(|| device_get.model_name.clone()),
        model_name: device_get.model_name,
        platform: device_get.platform_type,
        device_type: device_get.device_type,
        device_code: device_get.device_code,
        oven_snapshot,
    })
}

#[derive(Error, Debug)]
pub enum MapDeviceError {
    #[error("device of model '{model_name}' has no device id")]
    MissingDeviceId { model_name: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DeviceType, OvenSnapshot, PlatformType};
    use crate::thinq::domain::DeviceReport;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn device_get(json: serde_json::Value) -> DeviceGet {
        match serde_json::from_value::<DeviceReport>(json) {
            Ok(DeviceReport::One(device_get)) => device_get,
            other => panic!("expected a single device, found {:?}", other),
        }
    }

    #[test]
    fn map_device_classifies_the_oven_snapshot() -> Result<(), MapDeviceError> {
        let device = map_device(device_get(json!({
            "deviceId": "b1d4a7c2-5e93-4f0a-8c61-2d7e9f3a0b58",
            "alias": "Kitchen oven",
            "modelName": "MWEC62X",
            "platformType": "thinq2",
            "deviceType": "OVEN",
            "snapshot": { "ovenState": { "LWOState": "INITIAL" } }
        })))?;

        assert_eq!(
            device,
            Device {
                id: "b1d4a7c2-5e93-4f0a-8c61-2d7e9f3a0b58".to_string(),
                name: "Kitchen oven".to_string(),
                model_name: "MWEC62X".to_string(),
                platform: PlatformType::ThinQ2,
                device_type: DeviceType::Oven,
                device_code: None,
                oven_snapshot: Some(OvenSnapshot::MicrowaveStyle),
            }
        );
        Ok(())
    }

    #[test]
    fn map_device_without_snapshot_has_no_oven_snapshot() -> Result<(), MapDeviceError> {
        let device = map_device(device_get(json!({
            "deviceId": "b1d4a7c2",
            "modelName": "MWEC62X",
            "platformType": "thinq2",
            "deviceType": "OVEN",
            "deviceCode": "KI04",
            "snapshot": { "online": true }
        })))?;

        assert_eq!(device.oven_snapshot, None);
        assert_eq!(device.device_code.as_deref(), Some("KI04"));
        assert_eq!(device.name, "MWEC62X");
        Ok(())
    }

    #[test]
    fn map_device_rejects_a_blank_device_id() {
        let result = map_device(device_get(json!({
            "deviceId": " ",
            "modelName": "MWEC62X",
            "platformType": "thinq2",
            "deviceType": "OVEN"
        })));

        assert!(matches!(result, Err(MapDeviceError::MissingDeviceId { model_name }) if model_name == "MWEC62X"));
    }
}
